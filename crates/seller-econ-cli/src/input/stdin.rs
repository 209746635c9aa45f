use serde_json::Value;
use std::io::{self, Read};

/// Attempt to read JSON from stdin if data is being piped.
/// Returns None if stdin is a TTY (interactive).
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    match read_raw()? {
        Some(buffer) => {
            let value: Value = serde_json::from_str(&buffer)?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Attempt to read raw text from stdin if data is being piped (import
/// payloads may be delimited text rather than JSON).
pub fn read_raw() -> Result<Option<String>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    Ok(Some(trimmed.to_string()))
}
