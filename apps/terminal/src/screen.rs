//! Console screen helpers.
//!
//! ANSI-based so the app behaves the same on every platform.

use std::io::{self, BufRead, Write};

/// Clears the screen and moves the cursor home.
pub fn clear() {
    print!("\x1B[2J\x1B[H");
    let _ = io::stdout().flush();
}

/// Blocks until the operator presses Enter.
pub fn pause(input: &mut impl BufRead) -> io::Result<()> {
    print!("\nPress Enter to continue...");
    io::stdout().flush()?;
    let mut discard = String::new();
    input.read_line(&mut discard)?;
    Ok(())
}
