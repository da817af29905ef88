//! # Input Handler Module
//!
//! Menu line parsing and command mapping.
//!
//! ## Plain English
//!
//! The player types a number and presses Enter. We read the number the
//! same forgiving way C's `strtol` does: spaces in front are fine, junk
//! after the digits is ignored. Anything that doesn't start with a number
//! counts as "no valid choice".

use std::io::BufRead;

use crate::error::TetrisResult;

/// Code returned for lines that don't start with a number.
pub const INVALID_CHOICE: i64 = -1;

// ============================================
// MENU COMMANDS
// ============================================

/// What the player asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    /// `1`: dequeue the front piece
    Play,
    /// `2`: generate a piece and enqueue it
    Insert,
    /// `0`: leave the menu
    Quit,
    /// Any other code
    Invalid(i64),
}

impl MenuCommand {
    /// Maps a numeric menu code to a command.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Quit,
            1 => Self::Play,
            2 => Self::Insert,
            other => Self::Invalid(other),
        }
    }

    /// Parses a whole input line.
    pub fn from_line(line: &str) -> Self {
        Self::from_code(parse_choice(line))
    }
}

// ============================================
// PARSING
// ============================================

/// Parses a menu selection.
///
/// Accepts optional leading whitespace, an optional `+` or `-`, then at
/// least one ASCII digit. Parsing stops at the first non-digit. Values
/// that overflow saturate at `i64::MIN`/`i64::MAX`.
///
/// Returns [`INVALID_CHOICE`] for anything else.
///
/// ## Example
/// ```
/// # use tetris_queue::input::parse_choice;
/// assert_eq!(parse_choice("  2\n"), 2);
/// assert_eq!(parse_choice("1abc"), 1);
/// assert_eq!(parse_choice("play"), -1);
/// ```
pub fn parse_choice(line: &str) -> i64 {
    parse_choice_bytes(line.as_bytes())
}

/// Same as [`parse_choice`], on raw bytes.
///
/// Input lines don't have to be valid UTF-8; bytes outside ASCII are
/// never digits, so they just end (or prevent) the number.
pub fn parse_choice_bytes(line: &[u8]) -> i64 {
    let start = line
        .iter()
        .position(|byte| !byte.is_ascii_whitespace())
        .unwrap_or(line.len());
    let trimmed = &line[start..];

    let (negative, rest) = match trimmed.first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.iter().take_while(|byte| byte.is_ascii_digit());

    let mut seen_digit = false;
    let mut value: i64 = 0;
    for &digit in digits {
        seen_digit = true;
        let digit = i64::from(digit - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    if seen_digit {
        value
    } else {
        INVALID_CHOICE
    }
}

/// Reads one line and turns it into a command.
///
/// The line is read as raw bytes, so text in any encoding is just an
/// invalid choice. Returns `Ok(None)` when the input is closed.
pub fn read_command<R: BufRead>(input: &mut R) -> TetrisResult<Option<MenuCommand>> {
    let mut line = Vec::new();
    let read = input.read_until(b'\n', &mut line)?;

    if read == 0 {
        log::debug!("Input closed");
        return Ok(None);
    }

    let command = MenuCommand::from_code(parse_choice_bytes(&line));
    log::debug!(
        "Read {:?} from {:?}",
        command,
        String::from_utf8_lossy(&line).trim_end()
    );
    Ok(Some(command))
}

// ============================================
// TESTS
// ============================================
