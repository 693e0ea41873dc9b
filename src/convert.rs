use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::decoder::{decode, Format};
use crate::error::{ConversionError, DecodeError, DecodeErrorKind};
use crate::models::{ConversionResult, TargetTime};
use crate::render;
use crate::zones::ZoneCatalog;

/// Одиночная конвертация: декодирование, проверка границ, три представления времени.
/// Ошибка целевой зоны не прерывает конвертацию, а попадает в `target`.
pub fn convert_single(
    raw: &str,
    format: Format,
    target_zone: Option<&str>,
    zones: &ZoneCatalog,
) -> Result<ConversionResult, ConversionError> {
    if raw.is_empty() {
        return Err(ConversionError::MissingInput);
    }

    let epoch = match decode(raw, format) {
        Ok(epoch) => epoch,
        // число корректное, но шире 128 бит: дата заведомо вне границ
        Err(DecodeError { kind: DecodeErrorKind::Overflow, .. }) => {
            return Err(ConversionError::OutOfBounds(overflow_direction(raw)));
        }
        Err(e) => return Err(e.into()),
    };
    if !epoch.is_within_bounds() {
        return Err(ConversionError::OutOfBounds(epoch.seconds()));
    }
    let utc = epoch
        .to_utc()
        .ok_or(ConversionError::OutOfBounds(epoch.seconds()))?;
    debug!(%format, seconds = epoch.seconds(), "Метка декодирована");

    Ok(ConversionResult {
        input: raw.to_string(),
        format,
        epoch_seconds: epoch,
        utc: render::utc_precise(&utc),
        local: render::local_precise(&utc),
        target: target_zone.map(|name| render_target(&utc, name, zones)),
    })
}

fn overflow_direction(raw: &str) -> f64 {
    if raw.trim_start().starts_with('-') {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    }
}

fn render_target(utc: &DateTime<Utc>, name: &str, zones: &ZoneCatalog) -> TargetTime {
    match zones.resolve(name) {
        Ok(tz) => {
            let (timestamp, abbreviation) = render::zoned(utc, tz);
            TargetTime::Rendered {
                zone: name.to_string(),
                timestamp,
                abbreviation,
            }
        }
        Err(e) => {
            warn!(zone = name, error = ?e, "Целевая зона недоступна");
            TargetTime::Unavailable {
                zone: name.to_string(),
                reason: e.to_string(),
            }
        }
    }
}
