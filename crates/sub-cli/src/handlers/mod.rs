pub mod commands;
pub mod completions;
pub mod help;
pub mod invoke;
pub mod usage;
pub mod validate;
