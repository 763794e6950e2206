pub mod codec;
pub mod entry;
pub mod reorder;

pub use codec::{DictionaryCodecError, WireDictionary, WireEntry, WireMethod};
pub use entry::{ConversionMethod, DictionaryEntry, MethodKind, DEFAULT_CONVERTER_ID};
pub use reorder::{move_entry, MoveDirection};
