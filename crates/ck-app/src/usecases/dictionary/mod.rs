pub mod load_dictionary;
pub mod mutate_dictionary;

pub use load_dictionary::LoadDictionary;
pub use mutate_dictionary::{DictionaryOp, MutateDictionary};
