use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

use super::bytes::{read_be, read_le};
use super::epoch::{filetime_to_unix, EpochSeconds};
use super::normalize::Normalized;
use crate::error::{DecodeError, DecodeErrorKind};

/// Известные кодировки временной метки. Порядок вариантов = порядок каталога.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
pub enum Format {
    #[value(name = "unix-seconds")]
    UnixSecondsDecimal,
    #[value(name = "unix-hex-be32")]
    UnixHexBE32,
    #[value(name = "unix-hex-le32")]
    UnixHexLE32,
    #[value(name = "unix-millis-hex")]
    UnixMillisHex,
    #[value(name = "unix-millis")]
    UnixMillisDecimal,
    #[value(name = "filetime-be")]
    FiletimeHexBE,
    #[value(name = "filetime-le")]
    FiletimeHexLE,
}

type DecodeFn = fn(&Normalized<'_>) -> Result<EpochSeconds, DecodeErrorKind>;

struct FormatSpec {
    format: Format,
    id: &'static str,
    name: &'static str,
    decode: DecodeFn,
}

/// Таблица стратегий: индекс строки совпадает с дискриминантом `Format`.
static CATALOG: [FormatSpec; 7] = [
    FormatSpec {
        format: Format::UnixSecondsDecimal,
        id: "unix-seconds",
        name: "Unix Seconds (Decimal)",
        decode: unix_seconds_decimal,
    },
    FormatSpec {
        format: Format::UnixHexBE32,
        id: "unix-hex-be32",
        name: "Unix Hex 32-bit Big Endian",
        decode: unix_hex_be,
    },
    FormatSpec {
        format: Format::UnixHexLE32,
        id: "unix-hex-le32",
        name: "Unix Hex 32-bit Little Endian",
        decode: unix_hex_le,
    },
    FormatSpec {
        format: Format::UnixMillisHex,
        id: "unix-millis-hex",
        name: "Unix Milliseconds Hex",
        decode: unix_millis_hex,
    },
    FormatSpec {
        format: Format::UnixMillisDecimal,
        id: "unix-millis",
        name: "Unix Milliseconds (Decimal)",
        decode: unix_millis_decimal,
    },
    FormatSpec {
        format: Format::FiletimeHexBE,
        id: "filetime-be",
        name: "Windows FILETIME Big Endian",
        decode: filetime_be,
    },
    FormatSpec {
        format: Format::FiletimeHexLE,
        id: "filetime-le",
        name: "Windows FILETIME Little Endian",
        decode: filetime_le,
    },
];

impl Format {
    pub const ALL: [Format; 7] = [
        Format::UnixSecondsDecimal,
        Format::UnixHexBE32,
        Format::UnixHexLE32,
        Format::UnixMillisHex,
        Format::UnixMillisDecimal,
        Format::FiletimeHexBE,
        Format::FiletimeHexLE,
    ];

    fn spec(self) -> &'static FormatSpec {
        &CATALOG[self as usize]
    }

    /// Имя для человека, как в выпадающем списке.
    pub fn display_name(self) -> &'static str {
        self.spec().name
    }

    /// Имя для командной строки.
    pub fn id(self) -> &'static str {
        self.spec().id
    }

    /// Декодирование уже нормализованного ввода (угадывание нормализует один раз на все форматы).
    pub fn decode_normalized(self, input: &Normalized<'_>) -> Result<EpochSeconds, DecodeError> {
        (self.spec().decode)(input).map_err(|kind| DecodeError { format: self, kind })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

fn unix_seconds_decimal(input: &Normalized<'_>) -> Result<EpochSeconds, DecodeErrorKind> {
    Ok(EpochSeconds(input.decimal()? as f64))
}

/// Только hex-цифры нормализованного токена. Префикс `0X` в верхнем регистре,
/// знак и разделители `_` не принимаются: это ошибка разбора, а не число.
/// То же правило действует для всех hex-форматов.
fn unix_hex_be(input: &Normalized<'_>) -> Result<EpochSeconds, DecodeErrorKind> {
    Ok(EpochSeconds(read_be(&input.hex_bytes()?)? as f64))
}

fn unix_hex_le(input: &Normalized<'_>) -> Result<EpochSeconds, DecodeErrorKind> {
    Ok(EpochSeconds(read_le(&input.hex_bytes()?)? as f64))
}

fn unix_millis_hex(input: &Normalized<'_>) -> Result<EpochSeconds, DecodeErrorKind> {
    Ok(EpochSeconds(read_be(&input.hex_bytes()?)? as f64 / 1000.0))
}

fn unix_millis_decimal(input: &Normalized<'_>) -> Result<EpochSeconds, DecodeErrorKind> {
    Ok(EpochSeconds(input.decimal()? as f64 / 1000.0))
}

fn filetime_be(input: &Normalized<'_>) -> Result<EpochSeconds, DecodeErrorKind> {
    filetime_to_unix(read_be(&input.hex_bytes()?)?)
}

fn filetime_le(input: &Normalized<'_>) -> Result<EpochSeconds, DecodeErrorKind> {
    filetime_to_unix(read_le(&input.hex_bytes()?)?)
}
