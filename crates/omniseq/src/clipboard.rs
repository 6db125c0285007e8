//! Best-effort clipboard capability.

use std::io::{self, Write};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Copy capability. Returns whether the text was handed over; failure is
/// silent and callers fall back to doing nothing.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> bool;
}

/// OSC 52 clipboard: emits the escape sequence terminals translate into a
/// system clipboard write. Terminals without support ignore the sequence.
#[derive(Debug, Default)]
pub struct Osc52Clipboard;

impl Clipboard for Osc52Clipboard {
    fn copy(&mut self, text: &str) -> bool {
        let mut out = io::stdout();
        out.write_all(osc52_sequence(text).as_bytes())
            .and_then(|_| out.flush())
            .is_ok()
    }
}

fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}
