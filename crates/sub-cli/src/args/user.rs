use crate::types::{ColorChoice, OutputFormat};
use clap::{CommandFactory, FromArgMatches, Parser};

/// Flags understood by every tool built on sub.
///
/// Mode flags are only recognized before the first command token; from there on every
/// token, `--help` included, belongs to the command being dispatched.
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
pub struct UserCli {
    #[arg(long, group = "mode", help = "Print usage")]
    pub usage: bool,

    #[arg(short = 'h', long, group = "mode", help = "Print help")]
    pub help: bool,

    #[arg(long, group = "mode", help = "Print subcommands")]
    pub commands: bool,

    #[arg(long, group = "mode", help = "Print completions")]
    pub completions: bool,

    #[arg(long, group = "mode", help = "Validate subcommands")]
    pub validate: bool,

    #[arg(
        long,
        value_name = "EXT",
        requires = "commands",
        help = "Only list subcommands with this extension"
    )]
    pub extension: Option<String>,

    #[arg(long, default_value = "plain", help = "Output format for --commands and --validate")]
    pub format: OutputFormat,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub commands_with_args: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Invoke,
    Usage,
    Help,
    Commands,
    Completions,
    Validate,
}

impl UserCli {
    /// Parse user tokens as the tool `name` would.
    pub fn parse_for<I, T>(
        name: &str,
        infer_long_args: bool,
        color: ColorChoice,
        args: I,
    ) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut command = Self::command()
            .name(name.to_string())
            .bin_name(name.to_string())
            .infer_long_args(infer_long_args)
            .color(color.into());

        let matches = command.try_get_matches_from_mut(args)?;
        Self::from_arg_matches(&matches).map_err(|err| err.format(&mut command))
    }

    pub fn mode(&self) -> Mode {
        if self.usage {
            Mode::Usage
        } else if self.help {
            Mode::Help
        } else if self.commands {
            Mode::Commands
        } else if self.completions {
            Mode::Completions
        } else if self.validate {
            Mode::Validate
        } else {
            Mode::Invoke
        }
    }

    /// Extension filter without its leading dot
    pub fn extension(&self) -> Option<&str> {
        self.extension
            .as_deref()
            .map(|ext| ext.strip_prefix('.').unwrap_or(ext))
    }
}
