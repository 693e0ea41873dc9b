//! Ядро декодера: нормализация ввода, разбор байт и перевод в секунды Unix.

pub mod bytes;
pub mod epoch;
pub mod format;
pub mod normalize;

pub use epoch::EpochSeconds;
pub use format::Format;
pub use normalize::Normalized;

use crate::error::DecodeError;

/// Чистая функция: (строка, формат) -> секунды Unix или ошибка с именем формата.
pub fn decode(raw: &str, format: Format) -> Result<EpochSeconds, DecodeError> {
    format.decode_normalized(&Normalized::new(raw))
}

/// Каталог форматов в фиксированном порядке.
pub fn list_formats() -> &'static [Format] {
    &Format::ALL
}
