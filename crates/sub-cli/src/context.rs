use crate::presentation::help::{Colored, HelpStyle, Plain};
use crate::types::{ColorChoice, OutputFormat};
use is_terminal::IsTerminal;
use once_cell::sync::OnceCell;
use sub_runtime::{Config, SystemLauncher};

pub struct ExecutionContext {
    config: Config,
    color: ColorChoice,
    use_color: OnceCell<bool>,
    launcher: SystemLauncher,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn new(config: Config, color: ColorChoice, format: OutputFormat) -> Self {
        Self {
            config,
            color,
            use_color: OnceCell::new(),
            launcher: SystemLauncher,
            format,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tool_name(&self) -> &str {
        &self.config.name
    }

    pub fn launcher(&self) -> &SystemLauncher {
        &self.launcher
    }

    /// Whether help output should be colored. `auto` honours `NO_COLOR` and needs a terminal.
    pub fn use_color(&self) -> bool {
        *self.use_color.get_or_init(|| match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty())
                    && std::io::stdout().is_terminal()
            }
        })
    }

    pub fn help_style(&self) -> &'static dyn HelpStyle {
        if self.use_color() { &Colored } else { &Plain }
    }
}
