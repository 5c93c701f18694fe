//! Gate events and actions.
//!
//! Events are what the host feeds the gate (page load, a submitted
//! passphrase, the toggle button). Actions are what the gate asks the host to
//! do in return. The gate performs no UI work itself.

use std::fmt;

use crate::session::Mode;

/// Events fed into the gate.
#[derive(Clone, PartialEq, Eq)]
pub enum GateEvent {
    /// Page loaded: restore the persisted mode.
    Initialize,
    /// Visitor submitted a passphrase.
    Submit {
        /// Raw input, trimmed by the gate.
        passphrase: String,
    },
    /// Visitor asked to leave owner mode.
    Logout,
    /// Visitor pressed the mode toggle.
    Toggle,
}

impl fmt::Debug for GateEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initialize => f.write_str("Initialize"),
            Self::Submit { passphrase } => f
                .debug_struct("Submit")
                .field("passphrase", &format!("<redacted {} bytes>", passphrase.len()))
                .finish(),
            Self::Logout => f.write_str("Logout"),
            Self::Toggle => f.write_str("Toggle"),
        }
    }
}

/// Actions produced by the gate for the host to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateAction {
    /// Mode changed: update affordances and re-render content.
    ModeChanged {
        /// New mode.
        mode: Mode,
        /// What the page chrome should show.
        affordances: Affordances,
    },
    /// Ask the visitor for a passphrase.
    PromptPassphrase,
    /// Close the passphrase prompt.
    Dismiss,
}

impl GateAction {
    /// `ModeChanged` for `mode` with its affordances.
    pub const fn mode_changed(mode: Mode) -> Self {
        Self::ModeChanged { mode, affordances: Affordances::for_mode(mode) }
    }
}

/// Page chrome reflecting the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    /// Mode badge text.
    pub badge: &'static str,
    /// Mode badge CSS classes.
    pub badge_class: &'static str,
    /// Footer mode line.
    pub footer: &'static str,
    /// Glyph on the toggle button.
    pub toggle_glyph: &'static str,
}

impl Affordances {
    /// Affordances for `mode`.
    pub const fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Owner => Self {
                badge: "OWNER",
                badge_class: "mode-badge owner",
                footer: "Mode: Owner",
                toggle_glyph: "\u{1f513}",
            },
            Mode::Public => Self {
                badge: "PUBLIC",
                badge_class: "mode-badge public",
                footer: "Mode: Public",
                toggle_glyph: "\u{26bf}",
            },
        }
    }
}
