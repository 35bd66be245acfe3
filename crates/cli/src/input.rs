//! Stdin prompting and parsing.
//!
//! All numeric validation happens here: the core only ever receives typed
//! values. Every helper returns `None` on EOF so menus can unwind cleanly.

use rust_decimal::Decimal;
use std::io::{self, Write};
use std::str::FromStr;

/// Print a prompt and read one trimmed line. `None` on EOF.
pub fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt until the input parses as `T`, re-prompting on bad input.
fn prompt_parsed<T: FromStr>(label: &str, complaint: &str) -> io::Result<Option<T>> {
    loop {
        let Some(line) = prompt(label)? else {
            return Ok(None);
        };
        match line.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("{complaint}"),
        }
    }
}

/// Prompt for a currency amount.
pub fn prompt_decimal(label: &str) -> io::Result<Option<Decimal>> {
    prompt_parsed(label, "Invalid amount. Please enter a number like 100.50.")
}

/// Prompt for an account number.
pub fn prompt_account_number(label: &str) -> io::Result<Option<u32>> {
    prompt_parsed(label, "Invalid account number. Please enter digits only.")
}
