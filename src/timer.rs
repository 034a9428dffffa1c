//! Wall-clock timing for one measured operation.
//!
//! ```
//! let mut out = Vec::new();
//! let token = collbench::timer::start("Vec", &mut out).unwrap();
//! let elapsed = collbench::timer::end(token, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("Start (Vec)"));
//! # let _ = elapsed;
//! ```

use std::io::Write;
use std::time::{Duration, Instant};

use chrono::{SecondsFormat, Utc};

use crate::error::Result;

pub const SEPARATOR: &str = "-------END-------";

/// Opaque start mark returned by [`start`] and consumed by [`end`].
#[derive(Debug)]
#[must_use = "a timer token reports nothing until passed to `end`"]
pub struct Token {
    label: String,
    started: Instant,
}

impl Token {
    pub fn label(&self) -> &str {
        &self.label
    }
}

pub fn start(label: &str, out: &mut impl Write) -> Result<Token> {
    writeln!(out, "Start ({label}): {}", now())?;
    Ok(Token {
        label: label.to_owned(),
        started: Instant::now(),
    })
}

pub fn end(token: Token, out: &mut impl Write) -> Result<Duration> {
    let elapsed = token.started.elapsed();
    let millis = elapsed.as_secs_f64() * 1_000.0;

    tracing::info!(label = %token.label, elapsed_ms = millis, "timed operation finished");

    writeln!(out, "End: {}", now())?;
    writeln!(out, "Elapsed time in milliseconds: {millis:.3}")?;
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out)?;
    Ok(elapsed)
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_label_and_elapsed() {
        let mut out = Vec::new();
        let token = start("LinkedList", &mut out).unwrap();
        assert_eq!(token.label(), "LinkedList");
        std::thread::sleep(Duration::from_millis(2));
        let elapsed = end(token, &mut out).unwrap();
        assert!(elapsed >= Duration::from_millis(2));

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Start (LinkedList): "));
        assert!(lines[1].starts_with("End: "));
        assert!(lines[2].starts_with("Elapsed time in milliseconds: "));
        assert_eq!(lines[3], SEPARATOR);
    }
}
