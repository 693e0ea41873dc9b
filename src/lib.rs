//! Декодер временных меток: Unix (секунды/миллисекунды, decimal/hex, BE/LE)
//! и Windows FILETIME, с режимом угадывания формата.
//!
//! Бинарник `TimeDecoder` - тонкая обёртка командной строки над этой библиотекой.

pub mod convert;
pub mod decoder;
pub mod error;
pub mod guess;
pub mod models;
pub mod output;
pub mod render;
pub mod zones;

pub use convert::convert_single;
pub use decoder::{decode, list_formats, EpochSeconds, Format};
pub use error::{ConversionError, DecodeError, DecodeErrorKind, TimezoneError};
pub use guess::guess_all;
pub use models::{ConversionResult, GuessEntry, GuessReport, TargetTime};
pub use zones::{list_timezones, ZoneCatalog};
