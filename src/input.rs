//! Entry-text input sources.
//!
//! When no `--data` is supplied, the store asks its [`InputSource`] for
//! the entry text. Tests inject a fixed-string source instead of stdin.

use std::io::{self, BufRead, Write};

/// Supplies entry text when none was given up front.
pub trait InputSource {
    fn read_data(&mut self) -> io::Result<String>;
}

/// Prompts on stdout and reads one line from stdin.
#[derive(Debug, Default)]
pub struct StdinSource;

impl InputSource for StdinSource {
    fn read_data(&mut self) -> io::Result<String> {
        print!("Entry: ");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
