pub mod change_setting;
pub mod load_settings;
pub mod open_capability_settings;

pub use change_setting::{ChangeOutcome, ChangeSetting};
pub use load_settings::LoadSettings;
pub use open_capability_settings::OpenCapabilitySettings;
