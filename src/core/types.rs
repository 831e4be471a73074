use serde::{Deserialize, Serialize};
use std::fmt;

/// A domain object the store can hold.
///
/// The store never looks inside a record beyond its identifier and title; every
/// other attribute is opaque and travels through untouched.
pub trait Record: Clone + Send + Sync + 'static {
    /// Caller-supplied payload of a record that has not been assigned an identifier yet.
    type Definition: Send + 'static;

    fn identifier(&self) -> &str;

    /// Display title, used by title ordering
    fn title(&self) -> &str;

    /// Builds a stored record from a definition and a freshly generated identifier.
    fn from_definition(identifier: String, definition: Self::Definition) -> Self;
}

/// Storage slot holding the current value of one record.
///
/// Serialized as `{"obj": ...}`, the shape used by recording files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordWrapper<R> {
    pub obj: R,
}

impl<R> RecordWrapper<R> {
    pub fn new(obj: R) -> Self {
        Self { obj }
    }

    pub fn into_inner(self) -> R {
        self.obj
    }
}

/// Request-side pointer to a record.
///
/// Both variants resolve into the same key space; a locator is treated as if it
/// were an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ObjRef {
    /// Stable symbolic identifier
    Identifier(String),
    /// Opaque locator string (a URI on a real backend)
    Locator(String),
}

impl ObjRef {
    pub fn identifier(value: impl Into<String>) -> Self {
        Self::Identifier(value.into())
    }

    pub fn locator(value: impl Into<String>) -> Self {
        Self::Locator(value.into())
    }

    /// Raw string carried by either variant.
    pub fn value(&self) -> &str {
        match self {
            Self::Identifier(value) | Self::Locator(value) => value,
        }
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self, Self::Identifier(_))
    }
}

impl fmt::Display for ObjRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(value) => write!(f, "identifier:{}", value),
            Self::Locator(value) => write!(f, "locator:{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_obj_ref_serde_shape() {
        let by_id = ObjRef::identifier("rev");
        assert_eq!(
            serde_json::to_value(&by_id).unwrap(),
            json!({"kind": "identifier", "value": "rev"})
        );

        let by_locator: ObjRef =
            serde_json::from_value(json!({"kind": "locator", "value": "/gdc/md/obj/1"})).unwrap();
        assert_eq!(by_locator, ObjRef::locator("/gdc/md/obj/1"));
        assert_eq!(by_locator.value(), "/gdc/md/obj/1");
        assert!(!by_locator.is_identifier());
    }

    #[test]
    fn test_obj_ref_display() {
        assert_eq!(ObjRef::identifier("a").to_string(), "identifier:a");
        assert_eq!(ObjRef::locator("b").to_string(), "locator:b");
    }
}
