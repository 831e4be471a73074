// ============================================================================
// Identifier Resolution
// ============================================================================
//
// Turns a reference into a storage key. Reads and mutations derive keys
// differently:
// - Recording: recording-file naming (`i_` + identifier with `.` -> `_`)
// - Raw: the identifier as-is
//
// Reads look records up under their recording name, while update and delete use
// the raw identifier. Records created at runtime are stored under their raw
// identifier, so they are reachable by update/delete but not by get.
//
// ============================================================================

use crate::core::ObjRef;

/// Namespace tag of recording keys
pub const RECORDING_KEY_PREFIX: &str = "i_";

/// Recording-file form of an identifier: dots become underscores.
pub fn identifier_to_recording(identifier: &str) -> String {
    identifier.replace('.', "_")
}

/// Strategy for deriving a storage key from a reference or identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyDerivation {
    /// Prefixed and normalized recording key, used for reads
    Recording { prefix: String },
    /// Identifier used verbatim, used for update and delete
    Raw,
}

impl KeyDerivation {
    pub fn recording() -> Self {
        Self::recording_with_prefix(RECORDING_KEY_PREFIX)
    }

    pub fn recording_with_prefix(prefix: impl Into<String>) -> Self {
        Self::Recording {
            prefix: prefix.into(),
        }
    }

    /// Derive the key for a raw identifier candidate.
    pub fn derive(&self, candidate: &str) -> String {
        match self {
            Self::Recording { prefix } => {
                format!("{}{}", prefix, identifier_to_recording(candidate))
            }
            Self::Raw => candidate.to_string(),
        }
    }

    /// Derive the key for a reference. Identifiers and locators are interchangeable.
    pub fn resolve(&self, reference: &ObjRef) -> String {
        self.derive(reference.value())
    }
}
