pub mod actions;
pub mod listeners;

pub use listeners::install;
