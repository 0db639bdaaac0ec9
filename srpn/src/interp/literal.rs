//! Numeric literal parsing
//!
//! A digit run starting with `0` or `-0` is read as octal. Past the range the
//! legacy SRPN calculator was observed to handle, long octal literals collapse
//! to fixed values: more than 20 characters with a leading `0` reads as `-1`,
//! more than 21 characters with a leading `-0` reads as `0`.

use super::value::Number;
use std::num::IntErrorKind;

const POSITIVE_OCTAL_CUTOFF: usize = 20;
const NEGATIVE_OCTAL_CUTOFF: usize = 21;

/// How a digit run is to be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Decimal,
    Octal,
    /// Looks octal but holds an 8 or 9 and is not a single digit: dropped
    Discarded,
}

/// Classify a digit run (`-?[0-9]+`)
pub fn classify(text: &str) -> LiteralKind {
    if !(text.starts_with('0') || text.starts_with("-0")) {
        return LiteralKind::Decimal;
    }
    if text.contains(['8', '9']) {
        let value = parse_saturating(text, 10);
        if value <= -8 || value >= 8 {
            return LiteralKind::Discarded;
        }
        return LiteralKind::Decimal;
    }
    LiteralKind::Octal
}

/// Parse a digit run; `None` means the literal is silently dropped
pub fn parse_literal(text: &str) -> Option<Number> {
    let value = match classify(text) {
        LiteralKind::Discarded => return None,
        LiteralKind::Decimal => parse_saturating(text, 10),
        LiteralKind::Octal => {
            if text.len() > POSITIVE_OCTAL_CUTOFF && text.starts_with('0') {
                -1
            } else if text.len() > NEGATIVE_OCTAL_CUTOFF && text.starts_with('-') {
                0
            } else {
                parse_saturating(text, 8)
            }
        }
    };
    Some(Number::Int(value))
}

/// Parse digits, clamping to the `i64` range on overflow
fn parse_saturating(text: &str, radix: u32) -> i64 {
    match i64::from_str_radix(text, radix) {
        Ok(value) => value,
        Err(err) => match err.kind() {
            IntErrorKind::NegOverflow => i64::MIN,
            IntErrorKind::PosOverflow => i64::MAX,
            _ => {
                log::warn!("malformed digit run {text:?}");
                0
            }
        },
    }
}
