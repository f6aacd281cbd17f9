use std::fmt;

/// A rendered-on-demand help page.
///
/// Kept structured so the binary can apply its own styling; `Display` renders it plain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpPage {
    pub usage: String,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub subcommands: Vec<SubcommandSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcommandSummary {
    pub name: String,
    pub summary: Option<String>,
}

/// Styling hooks for help rendering. Every hook defaults to the identity.
pub trait HelpStyle {
    fn usage(&self, text: &str) -> String {
        text.to_string()
    }

    fn heading(&self, text: &str) -> String {
        text.to_string()
    }

    fn command(&self, name: &str) -> String {
        name.to_string()
    }
}

/// No styling
pub struct Plain;

impl HelpStyle for Plain {}

const SUBCOMMANDS_HEADING: &str = "Available subcommands:";
const TABLE_INDENT: &str = "    ";
const TABLE_GAP: usize = 4;

impl HelpPage {
    pub fn render(&self, style: &dyn HelpStyle) -> String {
        let mut sections = vec![style.usage(&self.usage)];
        sections.extend(self.summary.clone());
        sections.extend(self.body.clone());

        if !self.subcommands.is_empty() {
            let width = self
                .subcommands
                .iter()
                .map(|sub| sub.name.chars().count())
                .max()
                .unwrap_or(0)
                + TABLE_GAP;

            let mut table = style.heading(SUBCOMMANDS_HEADING);
            for sub in &self.subcommands {
                table.push('\n');
                table.push_str(TABLE_INDENT);
                table.push_str(&style.command(&sub.name));
                if let Some(summary) = &sub.summary {
                    let pad = width - sub.name.chars().count();
                    table.push_str(&" ".repeat(pad));
                    table.push_str(summary);
                }
            }
            sections.push(table);
        }

        sections.join("\n\n")
    }
}

impl fmt::Display for HelpPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Plain))
    }
}
