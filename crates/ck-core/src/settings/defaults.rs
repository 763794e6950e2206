use super::model::*;

impl Default for Settings {
    fn default() -> Self {
        Self {
            prefix: semicolon(),
            split: slash(),
            command: semicolon(),
            ignore_prefix: true,
            on_copy_action: OnCopyAction::default(),
            skip_url: true,
            skip_outside_target: true,
            use_legacy_reconvert: false,
            use_advanced_conversion: false,
            announce_legacy_reconvert: false,
        }
    }
}

#[inline]
pub fn semicolon() -> String {
    String::from(";")
}

#[inline]
pub fn slash() -> String {
    String::from("/")
}

#[inline]
pub fn bool_true() -> bool {
    true
}

#[inline]
pub fn bool_false() -> bool {
    false
}
