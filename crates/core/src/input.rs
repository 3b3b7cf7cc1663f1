use std::num::IntErrorKind;

/// Why a raw `number` parameter was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    Missing,
    Empty,
    NotAnInteger,
    OutOfRange,
}

/// A `number` parameter that could not be turned into an integer.
///
/// Keeps the raw input so it can be echoed back to the client.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid number {raw:?}: {reason:?}")]
pub struct InvalidNumber {
    pub raw: Option<String>,
    pub reason: InvalidReason,
}

/// Error body returned for a rejected `number` parameter
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ClassificationError {
    pub number: Option<String>,
    pub error: bool,
}

impl From<InvalidNumber> for ClassificationError {
    fn from(err: InvalidNumber) -> Self {
        ClassificationError {
            number: err.raw,
            error: true,
        }
    }
}

/// Parse the raw `number` query parameter.
///
/// Surrounding whitespace is ignored and a single leading `+` or `-` is
/// accepted. Anything else that is not a base-10 integer within `i64` fails.
pub fn parse_number(raw: Option<&str>) -> Result<i64, InvalidNumber> {
    let Some(raw) = raw else {
        return Err(InvalidNumber {
            raw: None,
            reason: InvalidReason::Missing,
        });
    };

    let reject = |reason| InvalidNumber {
        raw: Some(raw.to_string()),
        reason,
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(reject(InvalidReason::Empty));
    }

    trimmed.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => reject(InvalidReason::OutOfRange),
        _ => reject(InvalidReason::NotAnInteger),
    })
}
