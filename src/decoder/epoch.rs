use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::DecodeErrorKind;

/// 116444736000000000 = количество 100-нс интервалов между 1601-01-01 и 1970-01-01 (Unix Epoch)
pub const FILETIME_UNIX_EPOCH_TICKS: i128 = 116_444_736_000_000_000;
pub const FILETIME_TICKS_PER_SECOND: i128 = 10_000_000;

/// Границы "вменяемой" даты для одиночной конвертации: 1000-01-01 .. 3000-01-01 UTC.
pub const MIN_SANE_SECONDS: f64 = -30_610_224_000.0;
pub const MAX_SANE_SECONDS: f64 = 32_503_680_000.0;

/// Окно правдоподобия для угадывания: 1970-01-01 .. 2040-01-01 UTC.
pub const PLAUSIBLE_MIN_SECONDS: f64 = 0.0;
pub const PLAUSIBLE_MAX_SECONDS: f64 = 2_208_988_800.0;

/// Секунды от Unix Epoch, могут быть дробными и отрицательными.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct EpochSeconds(pub f64);

impl EpochSeconds {
    pub fn seconds(self) -> f64 {
        self.0
    }

    pub fn is_within_bounds(self) -> bool {
        (MIN_SANE_SECONDS..=MAX_SANE_SECONDS).contains(&self.0)
    }

    pub fn is_plausible(self) -> bool {
        (PLAUSIBLE_MIN_SECONDS..=PLAUSIBLE_MAX_SECONDS).contains(&self.0)
    }

    /// Момент времени в UTC с округлением до микросекунды (половины - к чётному).
    pub fn to_utc(self) -> Option<DateTime<Utc>> {
        if !self.0.is_finite() {
            return None;
        }
        // `as` насыщает, за пределами i64 chrono вернёт None
        let micros = (self.0 * 1_000_000.0).round_ties_even() as i64;
        DateTime::from_timestamp_micros(micros)
    }
}

impl From<f64> for EpochSeconds {
    fn from(seconds: f64) -> Self {
        Self(seconds)
    }
}

/// Windows FILETIME (100-нс интервалы с 1601-01-01) -> секунды Unix.
/// Целая часть считается точно, в f64 переводится только итог.
pub fn filetime_to_unix(ticks: u128) -> Result<EpochSeconds, DecodeErrorKind> {
    let ticks = i128::try_from(ticks).map_err(|_| DecodeErrorKind::Overflow)?;
    let delta = ticks - FILETIME_UNIX_EPOCH_TICKS;
    let whole = delta.div_euclid(FILETIME_TICKS_PER_SECOND);
    let fraction = delta.rem_euclid(FILETIME_TICKS_PER_SECOND);
    Ok(EpochSeconds(
        whole as f64 + fraction as f64 / FILETIME_TICKS_PER_SECOND as f64,
    ))
}
