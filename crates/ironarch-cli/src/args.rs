//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ironarch_contact::DEFAULT_ENDPOINT;
use ironarch_content::Page;

/// Iron Architect site tooling
#[derive(Parser, Debug)]
#[command(name = "ironarch")]
#[command(about = "Owner mode, content rendering and contact relay for the Iron Architect site")]
#[command(version)]
pub struct Cli {
    /// Directory holding the persistent and session scopes
    #[arg(long, global = true, default_value = ".ironarch")]
    pub state_dir: PathBuf,

    /// Override the reference fingerprint (lowercase hex SHA-256)
    #[arg(long, global = true)]
    pub reference_fingerprint: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the fingerprint of a passphrase, for rotating the reference
    Fingerprint {
        /// Passphrase to fingerprint
        passphrase: String,
    },

    /// Show the current mode and any failed attempts
    Status,

    /// Enter owner mode
    Login {
        /// Passphrase; read from stdin when omitted
        passphrase: Option<String>,
    },

    /// Leave owner mode
    Logout,

    /// Press the mode toggle: log out, or prompt for a passphrase on stdin
    Toggle,

    /// Print a page fragment as the current mode sees it
    Render {
        /// Page to render (curriculum, labs, dashboard)
        page: Page,

        /// Filter button value, `all` for everything
        #[arg(long, default_value = "all")]
        filter: String,

        /// Directory holding the JSON manifests
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },

    /// Send a message through the contact relay
    Contact {
        /// Sender name
        #[arg(long)]
        name: String,

        /// Reply address
        #[arg(long)]
        email: String,

        /// Message body
        #[arg(long)]
        message: String,

        /// Honeypot value; anything non-empty drops the message
        #[arg(long, default_value = "")]
        gotcha: String,

        /// Relay endpoint
        #[arg(long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
    },

    /// Browsing-session management
    Session {
        /// Session action
        #[command(subcommand)]
        action: SessionAction,
    },
}

/// Session subcommands.
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum SessionAction {
    /// End the browsing session, discarding failed attempts and the contact
    /// cooldown
    End,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["ironarch", "status", "--state-dir", "/tmp/x"]).unwrap();
        assert_eq!(cli.state_dir, PathBuf::from("/tmp/x"));
        assert!(matches!(cli.command, Command::Status));
    }

    #[test]
    fn render_parses_page() {
        let cli = Cli::try_parse_from(["ironarch", "render", "labs", "--filter", "AAI"]).unwrap();
        match cli.command {
            Command::Render { page, filter, data_dir } => {
                assert_eq!(page, Page::Labs);
                assert_eq!(filter, "AAI");
                assert_eq!(data_dir, PathBuf::from("data"));
            },
            other => panic!("expected Render, got {other:?}"),
        }
    }

    #[test]
    fn unknown_page_is_rejected() {
        assert!(Cli::try_parse_from(["ironarch", "render", "home"]).is_err());
    }
}
