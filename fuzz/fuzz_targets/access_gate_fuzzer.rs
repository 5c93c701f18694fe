//! Fuzz target for the [`AccessGate`] state machine
//!
//! Prevent owner mode being reached without the passphrase.
//!
//! # Strategy
//!
//! - Event sequences: arbitrary passphrases, toggles, logouts, reloads and
//!   clock jumps
//! - Hand-edited storage: arbitrary owner-flag values and attempt records,
//!   the way a visitor could edit browser storage
//! - Lockout probing: bursts of wrong guesses around window boundaries
//!
//! # Invariants
//!
//! - `Owner` ONLY reachable via an accepted submit or a reload over the
//!   literal `"1"` flag
//! - Accepted submits ONLY for input that trims to the passphrase
//! - A refused (rate-limited) submit MUST NOT touch the stored record
//! - Blank input MUST NOT touch the stored record
//! - Logout ALWAYS lands in `Public`
//! - NEVER panic on malformed stored state

#![no_main]

use arbitrary::Arbitrary;
use ironarch_core::{
    AuthError, GateAction, Mode, Storage,
    session::{AUTH_ATTEMPTS_KEY, OWNER_MODE_KEY, OWNER_MODE_MARKER},
};
use ironarch_harness::{Operation, SIM_PASSPHRASE, SimEnv, SimPage};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
enum GateInput {
    /// Scripted operation shared with the model tests.
    Op(Operation),
    /// Raw passphrase text.
    Passphrase(String),
    /// Passphrase with arbitrary surrounding whitespace.
    Padded { leading: u8, trailing: u8 },
    Toggle,
    /// Overwrite the owner flag by hand.
    TamperFlag(String),
    /// Overwrite the attempt record by hand.
    TamperRecord(String),
    /// Start a new browsing session in a new tab.
    NewSession,
}

#[derive(Debug, Clone, Arbitrary)]
struct FuzzInput {
    events: Vec<GateInput>,
}

fuzz_target!(|input: FuzzInput| {
    let mut page = SimPage::new(SimEnv::new());

    for event in input.events {
        let before = page.mode();
        let stored_record = page.session().get(AUTH_ATTEMPTS_KEY).ok().flatten();

        match event {
            GateInput::Op(op) => match op {
                Operation::Submit { correct, blank } => {
                    let passphrase = match (blank, correct) {
                        (true, _) => " ",
                        (false, true) => SIM_PASSPHRASE,
                        (false, false) => "not it",
                    };
                    check_submit(&mut page, passphrase, before, stored_record.as_deref());
                },
                Operation::Logout => {
                    assert_eq!(page.logout(), vec![GateAction::mode_changed(Mode::Public)]);
                    assert_eq!(page.mode(), Mode::Public);
                },
                Operation::Reload => {
                    page.reload();
                    check_restored(&page);
                },
                Operation::AdvanceTime { .. } => page.env().advance(op.elapsed()),
            },

            GateInput::Passphrase(text) => {
                check_submit(&mut page, &text, before, stored_record.as_deref());
            },

            GateInput::Padded { leading, trailing } => {
                let text = format!(
                    "{}{SIM_PASSPHRASE}{}",
                    " ".repeat(usize::from(leading % 8)),
                    "\t".repeat(usize::from(trailing % 8)),
                );
                check_submit(&mut page, &text, before, stored_record.as_deref());
            },

            GateInput::Toggle => {
                let actions = page.toggle();
                match before {
                    Mode::Owner => assert_eq!(page.mode(), Mode::Public),
                    Mode::Public => {
                        assert_eq!(actions, vec![GateAction::PromptPassphrase]);
                        assert_eq!(page.mode(), Mode::Public);
                    },
                }
            },

            GateInput::TamperFlag(value) => {
                let _ = page.persistent().set(OWNER_MODE_KEY, &value);
                assert_eq!(page.mode(), before, "storage edits apply on reload only");
            },

            GateInput::TamperRecord(value) => {
                let _ = page.session().set(AUTH_ATTEMPTS_KEY, &value);
                let _ = page.gate().attempts();
                let _ = page.gate().lockout_remaining();
            },

            GateInput::NewSession => {
                page = page.new_session();
                check_restored(&page);
                assert!(page.gate().attempts().is_none());
            },
        }
    }
});

fn check_submit(page: &mut SimPage, passphrase: &str, before: Mode, stored: Option<&str>) {
    let result = page.submit(passphrase);
    let after_record = page.session().get(AUTH_ATTEMPTS_KEY).ok().flatten();

    match result {
        Ok(actions) if actions.is_empty() => {
            assert!(passphrase.trim().is_empty(), "only blank input is ignored");
            assert_eq!(after_record.as_deref(), stored, "blank input touched the record");
            assert_eq!(page.mode(), before);
        },
        Ok(actions) => {
            assert_eq!(passphrase.trim(), SIM_PASSPHRASE, "accepted a wrong passphrase");
            assert_eq!(actions.last(), Some(&GateAction::Dismiss));
            assert_eq!(page.mode(), Mode::Owner);
            assert!(after_record.is_none(), "success must clear the record");
        },
        Err(AuthError::RateLimited { remaining }) => {
            assert!(!remaining.is_zero());
            assert!(remaining <= page.gate().config().lockout_duration);
            assert_eq!(after_record.as_deref(), stored, "refused submit touched the record");
            assert_eq!(page.mode(), before);
        },
        Err(AuthError::InvalidCredential) => {
            assert_ne!(passphrase.trim(), SIM_PASSPHRASE, "rejected the right passphrase");
            assert_eq!(page.mode(), before);
        },
    }
}

/// After a rebuild the mode reflects exactly the stored flag.
fn check_restored(page: &SimPage) {
    let flag = page.persistent().get(OWNER_MODE_KEY).ok().flatten();
    let expected =
        if flag.as_deref() == Some(OWNER_MODE_MARKER) { Mode::Owner } else { Mode::Public };
    assert_eq!(page.mode(), expected);
}
