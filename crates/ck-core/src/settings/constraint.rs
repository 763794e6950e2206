//! Mutual-exclusion constraint engine.
//!
//! Single mutation entry point for the settings object. Every field change
//! goes through [`ConstraintEngine::apply`], which returns a complete,
//! internally consistent [`Settings`] value; callers persist the returned
//! value, never the pre-image.

use tracing::debug;

use super::model::{OnCopyAction, Settings};

/// A single field change requested by the user or by the availability poller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingChange {
    Prefix(String),
    Split(String),
    Command(String),
    IgnorePrefix(bool),
    OnCopyAction(OnCopyAction),
    SkipUrl(bool),
    SkipOutsideTarget(bool),
    AnnounceLegacyReconvert(bool),
    /// Enabling requires the external capability to be present.
    LegacyReconvert(bool),
    AdvancedConversion(bool),
}

/// Result of applying a change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The change was accepted; persist this value.
    Applied(Settings),
    /// Legacy reconversion was requested while the capability is absent.
    /// The settings are unchanged; the caller should open the capability gate.
    CapabilityRequired,
}

/// Derived field availability for the presentation layer. Not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAccess {
    /// Prefix, split, command and ignore-prefix are inert while either
    /// conversion strategy is active.
    pub primary_fields_disabled: bool,
    /// The prefix field is additionally inert while ignore-prefix is set.
    pub prefix_disabled: bool,
}

pub struct ConstraintEngine;

impl ConstraintEngine {
    /// Apply `change` to `current`.
    ///
    /// `capability_present` is only consulted when the change enables legacy
    /// reconversion; the caller is responsible for having checked it at that
    /// moment.
    pub fn apply(
        current: &Settings,
        change: SettingChange,
        capability_present: bool,
    ) -> ApplyOutcome {
        let mut next = current.clone();
        match change {
            SettingChange::AdvancedConversion(true) => {
                next.use_advanced_conversion = true;
                next.use_legacy_reconvert = false;
            }
            SettingChange::LegacyReconvert(true) => {
                if !capability_present {
                    debug!("legacy reconversion requested while capability is absent");
                    return ApplyOutcome::CapabilityRequired;
                }
                next.use_legacy_reconvert = true;
                next.use_advanced_conversion = false;
            }
            SettingChange::AdvancedConversion(false) => next.use_advanced_conversion = false,
            SettingChange::LegacyReconvert(false) => next.use_legacy_reconvert = false,
            SettingChange::Prefix(value) => next.prefix = value,
            SettingChange::Split(value) => next.split = value,
            SettingChange::Command(value) => next.command = value,
            SettingChange::IgnorePrefix(value) => next.ignore_prefix = value,
            SettingChange::OnCopyAction(value) => next.on_copy_action = value,
            SettingChange::SkipUrl(value) => next.skip_url = value,
            SettingChange::SkipOutsideTarget(value) => next.skip_outside_target = value,
            SettingChange::AnnounceLegacyReconvert(value) => {
                next.announce_legacy_reconvert = value
            }
        }
        ApplyOutcome::Applied(next)
    }

    /// Derived availability of the primary text fields.
    pub fn field_access(settings: &Settings) -> FieldAccess {
        let primary_fields_disabled =
            settings.use_legacy_reconvert || settings.use_advanced_conversion;
        FieldAccess {
            primary_fields_disabled,
            prefix_disabled: settings.ignore_prefix || primary_fields_disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applied(outcome: ApplyOutcome) -> Settings {
        match outcome {
            ApplyOutcome::Applied(settings) => settings,
            ApplyOutcome::CapabilityRequired => panic!("expected Applied, got CapabilityRequired"),
        }
    }

    #[test]
    fn enabling_advanced_conversion_forces_legacy_off() {
        let current = Settings {
            use_legacy_reconvert: true,
            ..Settings::default()
        };
        let next = applied(ConstraintEngine::apply(
            &current,
            SettingChange::AdvancedConversion(true),
            false,
        ));
        assert!(next.use_advanced_conversion);
        assert!(!next.use_legacy_reconvert);
        assert!(ConstraintEngine::field_access(&next).primary_fields_disabled);
    }

    #[test]
    fn enabling_legacy_without_capability_leaves_settings_unchanged() {
        let current = Settings::default();
        let outcome = ConstraintEngine::apply(&current, SettingChange::LegacyReconvert(true), false);
        assert_eq!(outcome, ApplyOutcome::CapabilityRequired);
    }

    #[test]
    fn enabling_legacy_with_capability_forces_advanced_off() {
        let current = Settings {
            use_advanced_conversion: true,
            ..Settings::default()
        };
        let next = applied(ConstraintEngine::apply(
            &current,
            SettingChange::LegacyReconvert(true),
            true,
        ));
        assert!(next.use_legacy_reconvert);
        assert!(!next.use_advanced_conversion);
    }

    #[test]
    fn at_most_one_conversion_flag_after_any_change_sequence() {
        let changes = [
            SettingChange::AdvancedConversion(true),
            SettingChange::LegacyReconvert(true),
            SettingChange::AdvancedConversion(true),
            SettingChange::LegacyReconvert(false),
            SettingChange::AdvancedConversion(false),
            SettingChange::LegacyReconvert(true),
        ];
        let mut settings = Settings::default();
        for change in changes {
            if let ApplyOutcome::Applied(next) =
                ConstraintEngine::apply(&settings, change, true)
            {
                settings = next;
            }
            assert!(
                !(settings.use_legacy_reconvert && settings.use_advanced_conversion),
                "both conversion flags ended up set"
            );
        }
    }

    #[test]
    fn other_field_changes_apply_without_side_effects() {
        let current = Settings {
            use_advanced_conversion: true,
            ..Settings::default()
        };
        let next = applied(ConstraintEngine::apply(
            &current,
            SettingChange::Split("|".into()),
            false,
        ));
        assert_eq!(next.split, "|");
        assert!(next.use_advanced_conversion);
        assert_eq!(
            Settings {
                split: current.split.clone(),
                ..next
            },
            current
        );
    }

    #[test]
    fn prefix_is_inert_while_ignore_prefix_is_set() {
        let settings = applied(ConstraintEngine::apply(
            &Settings::default(),
            SettingChange::IgnorePrefix(true),
            false,
        ));
        let access = ConstraintEngine::field_access(&settings);
        assert!(access.prefix_disabled);
        assert!(!access.primary_fields_disabled);
    }
}
