//! Comma-separated history parsing

use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while reading a multiplier history
#[derive(Debug, Error)]
pub enum InputError {
    /// Token is not a number
    #[error("Invalid multiplier '{token}' at position {position}: {reason}")]
    InvalidNumber {
        token: String,
        position: usize,
        reason: String,
    },
    /// Multipliers are always positive
    #[error("Multiplier must be positive, got {value} at position {position}")]
    NonPositive { value: Decimal, position: usize },
    /// History file could not be read or written
    #[error("History I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse a comma-separated list of multipliers
///
/// Tokens are trimmed and empty tokens skipped, so `"1.2, ,3.4,"` yields two
/// values. Positions in errors are 1-based over the non-empty tokens.
pub fn parse_multipliers(input: &str) -> Result<Vec<Decimal>, InputError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| parse_token(token, i + 1))
        .collect()
}

fn parse_token(token: &str, position: usize) -> Result<Decimal, InputError> {
    let value = Decimal::from_str(token)
        .or_else(|_| Decimal::from_scientific(token))
        .map_err(|e| InputError::InvalidNumber {
            token: token.to_string(),
            position,
            reason: e.to_string(),
        })?;

    if value <= Decimal::ZERO {
        return Err(InputError::NonPositive { value, position });
    }

    Ok(value)
}
