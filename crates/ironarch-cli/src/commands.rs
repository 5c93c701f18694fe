//! Command execution.
//!
//! Each invocation rebuilds the gate from the state directory, the way a page
//! load rebuilds it from browser storage: the persistent scope lives in
//! `local.json`, the session scope in `session.json`.

use std::{
    io::{BufRead, Write},
    path::Path,
};

use ironarch_contact::{
    ContactClient, ContactConfig, ContactForm, Delivery, HttpRelay, SENT_MESSAGE,
};
use ironarch_content::{Catalog, Filter, Page, PageContent};
use ironarch_core::{
    AccessGate, Affordances, AuthError, Environment, FileStorage, Fingerprint, GateAction,
    GateConfig, Mode, SessionState,
};

use crate::{
    args::{Cli, Command, SessionAction},
    error::CliError,
};

/// File holding the persistent scope.
pub const PERSISTENT_FILE: &str = "local.json";

/// File holding the session scope.
pub const SESSION_FILE: &str = "session.json";

/// Persistent scope under `state_dir`.
pub fn persistent_scope(state_dir: &Path) -> FileStorage {
    FileStorage::new(state_dir.join(PERSISTENT_FILE))
}

/// Session scope under `state_dir`.
pub fn session_scope(state_dir: &Path) -> FileStorage {
    FileStorage::new(state_dir.join(SESSION_FILE))
}

/// Gate configuration with the CLI's reference override applied.
pub fn gate_config(cli: &Cli) -> Result<GateConfig, CliError> {
    match &cli.reference_fingerprint {
        Some(hex) => Ok(GateConfig::with_reference(Fingerprint::from_hex(hex)?)),
        None => Ok(GateConfig::default()),
    }
}

fn open_gate<E: Environment>(
    cli: &Cli,
    env: E,
) -> Result<AccessGate<E, FileStorage>, CliError> {
    let session =
        SessionState::new(persistent_scope(&cli.state_dir), session_scope(&cli.state_dir));
    let mut gate = AccessGate::new(env, gate_config(cli)?, session);
    gate.initialize();
    Ok(gate)
}

fn read_passphrase(input: &mut dyn BufRead) -> Result<String, CliError> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

fn submit<E: Environment>(
    gate: &mut AccessGate<E, FileStorage>,
    passphrase: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let actions = gate.submit(passphrase)?;

    if actions.is_empty() {
        writeln!(out, "No passphrase entered.")?;
    } else if gate.is_owner() {
        writeln!(out, "{}", Affordances::for_mode(Mode::Owner).footer)?;
    } else {
        writeln!(out, "Passphrase accepted, but owner mode could not be saved.")?;
    }
    Ok(())
}

fn page_content(page: Page, catalog: Catalog) -> PageContent {
    match page {
        Page::Curriculum => PageContent::Curriculum(catalog.papers.value),
        Page::Labs => PageContent::Labs(catalog.labs.value),
        Page::Dashboard => PageContent::Dashboard(Box::new(catalog.dashboard.value)),
    }
}

/// Run one command.
///
/// `input` supplies passphrases that are not given on the command line;
/// `out` receives everything meant for the user.
pub async fn run<E: Environment>(
    cli: &Cli,
    env: E,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match &cli.command {
        Command::Fingerprint { passphrase } => {
            writeln!(out, "{}", Fingerprint::of(passphrase.trim()).to_hex())?;
        },

        Command::Status => {
            let gate = open_gate(cli, env)?;
            writeln!(out, "{}", Affordances::for_mode(gate.mode()).footer)?;
            if let Some(record) = gate.attempts() {
                writeln!(
                    out,
                    "Failed attempts: {} of {}",
                    record.count,
                    gate.config().max_attempts
                )?;
            }
            if let Some(remaining) = gate.lockout_remaining() {
                writeln!(out, "{}", AuthError::RateLimited { remaining })?;
            }
        },

        Command::Login { passphrase } => {
            let mut gate = open_gate(cli, env)?;
            let passphrase = match passphrase {
                Some(p) => p.clone(),
                None => read_passphrase(input)?,
            };
            submit(&mut gate, &passphrase, out)?;
        },

        Command::Logout => {
            let mut gate = open_gate(cli, env)?;
            gate.logout();
            writeln!(out, "{}", Affordances::for_mode(gate.mode()).footer)?;
        },

        Command::Toggle => {
            let mut gate = open_gate(cli, env)?;
            if gate.toggle().contains(&GateAction::PromptPassphrase) {
                let passphrase = read_passphrase(input)?;
                submit(&mut gate, &passphrase, out)?;
            } else {
                writeln!(out, "{}", Affordances::for_mode(gate.mode()).footer)?;
            }
        },

        Command::Render { page, filter, data_dir } => {
            let gate = open_gate(cli, env)?;
            let content = page_content(*page, Catalog::load(data_dir));
            tracing::debug!(%page, mode = gate.mode().label(), "rendering");
            writeln!(out, "{}", content.render(&Filter::from(filter.as_str()), gate.visibility()))?;
        },

        Command::Contact { name, email, message, gotcha, endpoint } => {
            let config = ContactConfig { endpoint: endpoint.clone(), ..ContactConfig::default() };
            let relay = HttpRelay::new(&config)?;
            let client = ContactClient::new(env, session_scope(&cli.state_dir), relay, &config);

            let mut form = ContactForm::new(name.as_str(), email.as_str(), message.as_str());
            form.gotcha.clone_from(gotcha);

            match client.submit(&form).await? {
                Delivery::Sent => writeln!(out, "{SENT_MESSAGE}")?,
                Delivery::Discarded => {},
            }
        },

        Command::Session { action: SessionAction::End } => {
            session_scope(&cli.state_dir).destroy()?;
            writeln!(out, "Session ended.")?;
        },
    }

    Ok(())
}
