// ============================================================================
// Ordering Policy
// ============================================================================
//
// Maps an ordering key to a comparator over records. Comparisons follow a
// locale-style collation: base letters first, then accents, then case
// (lowercase before uppercase), then raw code points break any tie.
//
// ============================================================================

use super::options::OrderBy;
use crate::core::Record;
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

pub type Comparator<R> = fn(&R, &R) -> Ordering;

/// Select the comparator for an ordering key.
///
/// `Id` and `Updated` share the identifier comparator: records have no update
/// timestamp to sort on.
pub fn comparator<R: Record>(order_by: OrderBy) -> Comparator<R> {
    match order_by {
        OrderBy::Title => title_comparator::<R>,
        OrderBy::Id | OrderBy::Updated => id_comparator::<R>,
    }
}

fn title_comparator<R: Record>(a: &R, b: &R) -> Ordering {
    locale_compare(a.title(), b.title())
}

fn id_comparator<R: Record>(a: &R, b: &R) -> Ordering {
    locale_compare(a.identifier(), b.identifier())
}

/// Collation-style string comparison.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    CollationKey::new(a)
        .cmp(&CollationKey::new(b))
        .then_with(|| a.cmp(b))
}

/// Sort key in the shape of a root-locale collation element sequence.
///
/// Fields compare in declaration order:
/// - primary: base letters without accents or case; punctuation and symbols
///   sort before digits, digits before letters
/// - secondary: accents attached to each base character, unaccented first
/// - tertiary: case of each base character, lowercase first
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey {
    primary: Vec<(CharClass, char)>,
    secondary: Vec<Vec<char>>,
    tertiary: Vec<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Symbol,
    Digit,
    Letter,
}

impl CollationKey {
    fn new(text: &str) -> Self {
        let mut key = Self {
            primary: Vec::new(),
            secondary: Vec::new(),
            tertiary: Vec::new(),
        };

        for ch in text.nfd() {
            if is_combining_mark(ch) {
                if let Some(marks) = key.secondary.last_mut() {
                    marks.push(ch);
                }
                continue;
            }

            for folded in ch.to_lowercase() {
                key.primary.push((CharClass::of(folded), folded));
            }
            key.secondary.push(Vec::new());
            key.tertiary.push(ch.is_uppercase());
        }

        key
    }
}

impl CharClass {
    fn of(ch: char) -> Self {
        if ch.is_numeric() {
            Self::Digit
        } else if ch.is_alphabetic() {
            Self::Letter
        } else {
            Self::Symbol
        }
    }
}
