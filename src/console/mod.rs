//! # Console Module
//!
//! The one place where text leaves the program.
//!
//! ## Plain English
//!
//! The menu prints accented Portuguese text ("Opções", "peça"). Every byte
//! that reaches the terminal must be valid UTF-8, whatever the platform.
//!
//! Rust's `std::io::Stdout` already takes care of this: on a Windows
//! console it converts UTF-8 to UTF-16 and uses the wide console API, and
//! everywhere else (including pipes and files on Windows) it writes the
//! UTF-8 bytes as they are. So the menu code just talks to a [`Console`]
//! and never checks which platform it runs on.

use std::io::{self, Write};

// ============================================
// CONSOLE TRAIT
// ============================================

/// A text sink for menu output.
pub trait Console {
    /// Writes `text` exactly as given.
    fn write_str(&mut self, text: &str) -> io::Result<()>;

    /// Writes `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write_str(text)?;
        self.write_str("\n")
    }

    /// Pushes buffered text out (used before waiting for input).
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ============================================
// STANDARD OUTPUT
// ============================================

/// Writes to the process's standard output.
#[derive(Debug)]
pub struct StdConsole {
    stdout: io::Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        // A single write_all per call keeps multi-byte characters together
        self.stdout.lock().write_all(text.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.lock().flush()
    }
}

// ============================================
// IN-MEMORY BUFFER
// ============================================

/// Collects everything written into a `String`.
///
/// Handy for tests and scripted demos.
#[derive(Debug, Default, Clone)]
pub struct BufferConsole {
    output: String,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> &str {
        &self.output
    }

    /// Takes the collected text, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

impl Console for BufferConsole {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        (**self).write_str(text)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

// ============================================
// TESTS
// ============================================
