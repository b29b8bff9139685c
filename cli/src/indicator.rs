//! Operator signalling, the console stand-in for the tester's LEDs.
//!
//! Selected once at startup by a fallible probe: either a real terminal is
//! attached and we flash glyphs at it, or nothing is and every signal is a
//! silent no-op. The diagnostic core never learns which variant is active.

use colored::*;
use console::Term;
use netsonde_common::report::Status;

pub trait Indicator {
    fn busy(&self);
    fn verdict(&self, status: Status);
}

/// Picks the terminal-backed indicator when one can be probed, otherwise
/// the absent variant.
pub fn detect() -> Box<dyn Indicator> {
    match TermIndicator::probe() {
        Some(term) => Box::new(term),
        None => Box::new(NullIndicator),
    }
}

pub struct TermIndicator {
    term: Term,
}

impl TermIndicator {
    /// Succeeds only when stderr is an interactive terminal.
    pub fn probe() -> Option<Self> {
        let term = Term::stderr();
        term.is_term().then_some(Self { term })
    }
}

impl Indicator for TermIndicator {
    fn busy(&self) {
        let _ = self.term.write_line(&format!("{}", "● probing".yellow()));
    }

    fn verdict(&self, status: Status) {
        let glyph: ColoredString = match status {
            Status::Ok => "● pass".green().bold(),
            Status::Fail => "● fail".red().bold(),
        };
        let _ = self.term.write_line(&format!("{glyph}"));
    }
}

/// No usable output device; signals vanish.
pub struct NullIndicator;

impl Indicator for NullIndicator {
    fn busy(&self) {}

    fn verdict(&self, _status: Status) {}
}
