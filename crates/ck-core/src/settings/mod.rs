pub mod constraint;
pub mod defaults;
pub mod model;

pub use constraint::{ApplyOutcome, ConstraintEngine, FieldAccess, SettingChange};
pub use model::{OnCopyAction, Settings};
