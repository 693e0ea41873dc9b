use crate::error::DecodeErrorKind;

/// Пользовательский ввод в двух представлениях:
/// - `trimmed` - только обрезанные пробелы по краям (для десятичных форматов, сохраняет `-`)
/// - `clean_hex` - без `0x`, пробелов и двоеточий, чётной длины (для hex-форматов)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized<'a> {
    trimmed: &'a str,
    clean_hex: String,
}

impl<'a> Normalized<'a> {
    pub fn new(raw: &'a str) -> Self {
        let trimmed = raw.trim();
        let mut clean_hex = trimmed.replace("0x", "").replace(' ', "").replace(':', "");
        if clean_hex.chars().count() % 2 != 0 {
            clean_hex.insert(0, '0');
        }
        Self { trimmed, clean_hex }
    }

    pub fn trimmed(&self) -> &'a str {
        self.trimmed
    }

    pub fn clean_hex(&self) -> &str {
        &self.clean_hex
    }

    /// Десятичное целое со знаком из обрезанной строки.
    pub fn decimal(&self) -> Result<i128, DecodeErrorKind> {
        use std::num::IntErrorKind;

        self.trimmed.parse::<i128>().map_err(|e| match e.kind() {
            IntErrorKind::Empty => DecodeErrorKind::Empty,
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => DecodeErrorKind::Overflow,
            _ => DecodeErrorKind::InvalidDigit(self.trimmed.to_string()),
        })
    }

    /// Байты hex-токена слева направо, по паре цифр на байт.
    pub fn hex_bytes(&self) -> Result<Vec<u8>, DecodeErrorKind> {
        if self.clean_hex.is_empty() {
            return Err(DecodeErrorKind::Empty);
        }

        let nibbles = self
            .clean_hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| DecodeErrorKind::InvalidDigit(self.clean_hex.clone()))?;

        Ok(nibbles.chunks_exact(2).map(|pair| (pair[0] << 4) | pair[1]).collect())
    }
}
