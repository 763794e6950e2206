//! Dictionary entry model.
//!
//! Entries are displayed and matched in descending priority order, higher
//! number first, ties broken by list position. List order is the source of
//! truth; [`super::reorder::move_entry`] keeps the two consistent.

/// Converter id assigned when switching into [`ConversionMethod::Converter`]
/// without one set.
pub const DEFAULT_CONVERTER_ID: &str = "r";

/// How a matched input is transformed.
///
/// The replacement output and the converter id live inside their variants, so
/// "output is present iff the method is Replace" holds by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionMethod {
    /// Replace the match with a literal output string.
    Replace(String),
    /// Keep the match untouched.
    None,
    /// Produce the output through a named backend converter.
    Converter(String),
}

/// Variant selector without payload, used when the editor switches methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Replace,
    None,
    Converter,
}

impl ConversionMethod {
    pub fn kind(&self) -> MethodKind {
        match self {
            ConversionMethod::Replace(_) => MethodKind::Replace,
            ConversionMethod::None => MethodKind::None,
            ConversionMethod::Converter(_) => MethodKind::Converter,
        }
    }
}

/// One ordered rule of the conversion dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Literal pattern, or a regular expression when `use_regex` is set.
    pub input: String,
    pub method: ConversionMethod,
    pub use_regex: bool,
    /// Match/display precedence, higher wins.
    pub priority: i64,
}

impl Default for DictionaryEntry {
    fn default() -> Self {
        Self {
            input: String::new(),
            method: ConversionMethod::Replace(String::new()),
            use_regex: false,
            priority: 0,
        }
    }
}

impl DictionaryEntry {
    /// Switch the conversion method, keeping an existing payload when the
    /// kind does not change.
    pub fn switch_method(&mut self, kind: MethodKind) {
        if self.method.kind() == kind {
            return;
        }
        self.method = match kind {
            MethodKind::Replace => ConversionMethod::Replace(String::new()),
            MethodKind::None => ConversionMethod::None,
            MethodKind::Converter => ConversionMethod::Converter(DEFAULT_CONVERTER_ID.to_string()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_into_converter_assigns_the_default_id() {
        let mut entry = DictionaryEntry::default();
        entry.switch_method(MethodKind::Converter);
        assert_eq!(
            entry.method,
            ConversionMethod::Converter(DEFAULT_CONVERTER_ID.to_string())
        );
    }

    #[test]
    fn switching_to_the_same_kind_keeps_the_payload() {
        let mut entry = DictionaryEntry {
            method: ConversionMethod::Converter("k".into()),
            ..DictionaryEntry::default()
        };
        entry.switch_method(MethodKind::Converter);
        assert_eq!(entry.method, ConversionMethod::Converter("k".into()));
    }

    #[test]
    fn switching_away_and_back_resets_the_output() {
        let mut entry = DictionaryEntry {
            method: ConversionMethod::Replace("out".into()),
            ..DictionaryEntry::default()
        };
        entry.switch_method(MethodKind::None);
        assert_eq!(entry.method, ConversionMethod::None);
        entry.switch_method(MethodKind::Replace);
        assert_eq!(entry.method, ConversionMethod::Replace(String::new()));
    }
}
