use clap::{Parser, Subcommand, ValueEnum};
use sg_core::archive::ArchiveService;
use std::fmt::{Display, Formatter};

pub const LOG_FILTER_ENV: &str = "SNAPGATE_LOG";

#[derive(Debug, Parser)]
#[command(name = "snapgate", version, about = "Look up archived copies of web pages")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve an archived copy of a page and open it
    Archive {
        /// URL of the page to archive
        url: String,

        /// Page title to record in the lookup history
        #[arg(long, default_value = "")]
        title: String,

        /// Print nothing; stash failures for the next interactive command
        /// (for hotkey bindings)
        #[arg(long)]
        silent: bool,
    },

    /// Ask a provider whether it has a snapshot, without opening anything
    Precheck {
        /// URL to check
        url: String,

        /// Provider to ask; defaults to the configured one
        #[arg(long, value_enum)]
        service: Option<ServiceArg>,
    },

    /// Show or edit the lookup history
    History {
        #[command(subcommand)]
        command: Option<HistoryCommand>,
    },

    /// Show or change preferences
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommand>,
    },
}

#[derive(Debug, Subcommand)]
pub enum HistoryCommand {
    /// List recent lookups (the default)
    List,
    /// Delete the entry at a position, as listed (1-based)
    Delete { position: usize },
    /// Undo the last deletion, within its 5-second window
    Undo,
    /// Delete every entry
    Clear,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the current preferences (the default)
    Show,
    /// Choose the archive provider
    SetService {
        #[arg(value_enum)]
        service: ServiceArg,
    },
    /// Open snapshots in a new tab (true) or in place (false)
    SetNewTab { enabled: bool },
    /// Dark mode preference, persisted for the UI layer
    SetDarkMode { enabled: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServiceArg {
    #[value(name = "archive-today")]
    ArchiveToday,
    #[value(name = "wayback")]
    Wayback,
}

impl From<ServiceArg> for ArchiveService {
    fn from(arg: ServiceArg) -> Self {
        match arg {
            ServiceArg::ArchiveToday => ArchiveService::ArchiveToday,
            ServiceArg::Wayback => ArchiveService::Wayback,
        }
    }
}

impl Display for ServiceArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceArg::ArchiveToday => write!(f, "archive-today"),
            ServiceArg::Wayback => write!(f, "wayback"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_an_archive_invocation() {
        let cli = Cli::try_parse_from([
            "snapgate",
            "archive",
            "https://news.example/story",
            "--title",
            "A story",
        ])
        .unwrap();
        match cli.command {
            Command::Archive { url, title, silent } => {
                assert_eq!(url, "https://news.example/story");
                assert_eq!(title, "A story");
                assert!(!silent);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn history_defaults_to_list() {
        let cli = Cli::try_parse_from(["snapgate", "history"]).unwrap();
        match cli.command {
            Command::History { command } => assert!(command.is_none()),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn service_names_use_kebab_case() {
        let cli = Cli::try_parse_from([
            "snapgate",
            "precheck",
            "https://news.example/story",
            "--service",
            "archive-today",
        ])
        .unwrap();
        match cli.command {
            Command::Precheck { service, .. } => {
                assert_eq!(service, Some(ServiceArg::ArchiveToday));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
