//! User-facing status messages.
//! Everything goes to stderr so stdout stays reserved for exported data.

use ansi_term::Colour::{Blue, Green, Red, Yellow};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Blue.bold().paint(ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Green.bold().paint(ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Yellow.bold().paint(ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Red.bold().paint(ICON_ERR), msg);
}
