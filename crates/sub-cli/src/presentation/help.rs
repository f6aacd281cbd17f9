use owo_colors::OwoColorize;

pub use sub_runtime::{HelpStyle, Plain};

const USAGE_PREFIX: &str = "Usage:";

/// Terminal styling for help pages
pub struct Colored;

impl HelpStyle for Colored {
    fn usage(&self, text: &str) -> String {
        match text.strip_prefix(USAGE_PREFIX) {
            Some(rest) => format!("{}{}", USAGE_PREFIX.bold().underline(), rest),
            None => text.to_string(),
        }
    }

    fn heading(&self, text: &str) -> String {
        text.bold().underline().to_string()
    }

    fn command(&self, name: &str) -> String {
        name.cyan().bold().to_string()
    }
}
