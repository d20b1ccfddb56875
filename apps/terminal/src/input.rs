//! # Input Readers
//!
//! Retry-until-valid readers over any `BufRead`.
//!
//! ## Retry Loop
//! ```text
//! read_u32("Enter quantity: ")
//!      │
//!      ▼
//! ┌──► prompt ──► read line ──► parse
//! │                               │
//! │        invalid ◄──────────────┤
//! │           │                   │ valid
//! └───────────┘                   ▼
//!   "Invalid input..."        return value
//! ```
//!
//! Invalid numeric input never escapes this module: the reader reports
//! and re-prompts in place. Only a closed input stream (EOF) surfaces as
//! an `io::Error`, which ends the session.

use std::io::{self, BufRead, Write};

use aisle_core::validation::{validate_price_cents, validate_product_name};
use aisle_core::Money;

/// Reads one line, trimmed. Errors on EOF.
fn read_line(input: &mut impl BufRead, prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }
    Ok(line.trim().to_string())
}

/// Reads an unsigned integer, re-prompting until valid.
pub fn read_u32(input: &mut impl BufRead, prompt: &str) -> io::Result<u32> {
    loop {
        let line = read_line(input, prompt)?;
        match line.parse::<u32>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid input. Please enter a non-negative number."),
        }
    }
}

/// Reads a non-empty product name, re-prompting until valid.
pub fn read_name(input: &mut impl BufRead, prompt: &str) -> io::Result<String> {
    loop {
        let line = read_line(input, prompt)?;
        match validate_product_name(&line) {
            Ok(()) => return Ok(line),
            Err(err) => println!("Invalid input: {err}."),
        }
    }
}

/// Reads a non-negative price (e.g. `2.50`, `2.5`, or `2`),
/// re-prompting until valid.
pub fn read_money(input: &mut impl BufRead, prompt: &str) -> io::Result<Money> {
    loop {
        let line = read_line(input, prompt)?;
        match parse_money(&line) {
            Some(value) => return Ok(value),
            None => println!("Invalid input. Please enter a price like 2.50."),
        }
    }
}

/// Parses a decimal price string into `Money`.
///
/// Accepts `D`, `D.C`, and `D.CC` forms; anything else (including
/// negative prices and more than two decimal places) is rejected.
fn parse_money(text: &str) -> Option<Money> {
    // Prices are non-negative; a leading '-' is rejected up front so
    // values like "-0.50" cannot slip through as positive
    if text.starts_with('-') {
        return None;
    }

    let money = match text.split_once('.') {
        Some((major_text, minor_text)) => {
            let major: i64 = major_text.parse().ok()?;
            // Digits only: i64::parse would also take "-5", turning
            // "2.-5" into $1.95
            if !minor_text.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let minor: i64 = match minor_text.len() {
                // "2.5" means 50 cents, "2.50" means 50 cents
                1 => minor_text.parse::<i64>().ok()? * 10,
                2 => minor_text.parse().ok()?,
                _ => return None,
            };
            Money::from_major_minor(major, minor)
        }
        None => Money::from_cents(text.parse::<i64>().ok()? * 100),
    };

    validate_price_cents(money.cents()).ok()?;
    Some(money)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_money_forms() {
        assert_eq!(parse_money("2.50"), Some(Money::from_cents(250)));
        assert_eq!(parse_money("2.5"), Some(Money::from_cents(250)));
        assert_eq!(parse_money("2"), Some(Money::from_cents(200)));
        assert_eq!(parse_money("0"), Some(Money::zero()));
        assert_eq!(parse_money("0.05"), Some(Money::from_cents(5)));
    }

    #[test]
    fn test_parse_money_rejects_garbage() {
        assert_eq!(parse_money(""), None);
        assert_eq!(parse_money("abc"), None);
        assert_eq!(parse_money("2.505"), None);
        assert_eq!(parse_money("-2.50"), None); // negative prices rejected
        assert_eq!(parse_money("-0.50"), None); // sign must not get lost
        assert_eq!(parse_money("2.-5"), None); // minor part must be digits
        assert_eq!(parse_money("2."), None);
    }

    #[test]
    fn test_read_u32_retries_until_valid() {
        let mut input = Cursor::new("abc\n-4\n42\n");
        let value = read_u32(&mut input, "").unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_read_name_skips_blank_lines() {
        let mut input = Cursor::new("   \nMilk 1L\n");
        let name = read_name(&mut input, "").unwrap();
        assert_eq!(name, "Milk 1L");
    }

    #[test]
    fn test_read_money_retries_until_valid() {
        let mut input = Cursor::new("-1\noops\n2.50\n");
        let value = read_money(&mut input, "").unwrap();
        assert_eq!(value, Money::from_cents(250));
    }

    #[test]
    fn test_eof_is_an_error() {
        let mut input = Cursor::new("");
        assert!(read_u32(&mut input, "").is_err());
    }
}
