//! Business logic use cases
//!
//! One struct per user-visible operation; each holds the ports it needs and
//! exposes a single `execute`.

pub mod dictionary;
pub mod settings;

pub use dictionary::{DictionaryOp, LoadDictionary, MutateDictionary};
pub use settings::{ChangeOutcome, ChangeSetting, LoadSettings, OpenCapabilitySettings};
