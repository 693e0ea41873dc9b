use thiserror::Error;

use crate::decoder::Format;

/// Причина, по которой строку не удалось прочитать как число.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeErrorKind {
    #[error("empty value")]
    Empty,
    #[error("invalid digit in {0:?}")]
    InvalidDigit(String),
    #[error("value does not fit into 128 bits")]
    Overflow,
}

/// Ошибка декодирования в конкретном формате. Формат всегда известен.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Conversion failed for {format}: {kind}")]
pub struct DecodeError {
    pub format: Format,
    pub kind: DecodeErrorKind,
}

/// Ошибки одиночной конвертации. Любая из них прерывает конвертацию целиком.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Please enter a timestamp value.")]
    MissingInput,
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("Date out of bounds: {0} s")]
    OutOfBounds(f64),
}

/// Ошибки целевой зоны. Влияют только на строку целевого времени:
/// UTC и локальное время при этом всё равно отображаются.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimezoneError {
    #[error("Invalid Timezone")]
    Invalid(String),
    #[error("Timezone Error")]
    Lookup { name: String, reason: String },
}
