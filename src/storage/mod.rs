pub mod config;
pub mod keys;
pub mod memory;
pub mod sequence;

pub use config::StoreConfig;
pub use keys::{KeyDerivation, RECORDING_KEY_PREFIX, identifier_to_recording};
pub use memory::RecordStore;
pub use sequence::IdSequence;
