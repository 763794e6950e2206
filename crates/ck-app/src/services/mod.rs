pub mod availability;
pub mod update;
