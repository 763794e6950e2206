use serde::{Deserialize, Serialize};

use super::defaults;

/// Backend-persisted settings object.
///
/// Every field carries a serde default so a partially-written document from an
/// older release still loads. The two `use_*` conversion flags are mutually
/// exclusive; that invariant is enforced by [`super::ConstraintEngine`], not
/// by storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Character that starts a conversion. Inert while `ignore_prefix` is set.
    #[serde(default = "defaults::semicolon")]
    pub prefix: String,
    /// Delimiter between multiple conversion modes.
    #[serde(default = "defaults::slash")]
    pub split: String,
    /// Token that switches the conversion mode.
    #[serde(default = "defaults::semicolon")]
    pub command: String,
    /// Convert unconditionally, without requiring the prefix. On by default.
    #[serde(default = "defaults::bool_true")]
    pub ignore_prefix: bool,
    #[serde(default)]
    pub on_copy_action: OnCopyAction,
    /// Skip texts that contain a URL.
    #[serde(default = "defaults::bool_true")]
    pub skip_url: bool,
    /// Skip copies originating outside the target application.
    #[serde(default = "defaults::bool_true")]
    pub skip_outside_target: bool,
    /// Legacy reconversion strategy. Requires an external system capability.
    #[serde(default = "defaults::bool_false")]
    pub use_legacy_reconvert: bool,
    /// Advanced conversion strategy.
    #[serde(default = "defaults::bool_false")]
    pub use_advanced_conversion: bool,
    /// One-time marker that the legacy-reconvert notice has been shown.
    #[serde(default = "defaults::bool_false")]
    pub announce_legacy_reconvert: bool,
}

/// What to do with the converted text after a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnCopyAction {
    ReturnToClipboard,
    ReturnToChatbox,
    SendDirectly,
}

impl Default for OnCopyAction {
    fn default() -> Self {
        Self::ReturnToChatbox
    }
}
