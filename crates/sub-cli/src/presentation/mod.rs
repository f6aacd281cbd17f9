pub mod help;
pub mod listing;
pub mod validation;
