use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;

/// UTC и локальное время: микросекундная точность, без зоны.
pub const PRECISE_PATTERN: &str = "%Y-%m-%d %H:%M:%S%.6f";
/// Режим угадывания: секунды, всегда UTC.
pub const GUESS_PATTERN: &str = "%Y-%m-%d %H:%M:%S UTC";

pub fn utc_precise(dt: &DateTime<Utc>) -> String {
    dt.format(PRECISE_PATTERN).to_string()
}

/// Локальная зона хоста на этот момент (с учётом летнего времени).
pub fn local_precise(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format(PRECISE_PATTERN).to_string()
}

/// Время в зоне `tz`: (метка без зоны, аббревиатура зоны, например "PST").
pub fn zoned(dt: &DateTime<Utc>, tz: Tz) -> (String, String) {
    let local = dt.with_timezone(&tz);
    (
        local.format(PRECISE_PATTERN).to_string(),
        local.format("%Z").to_string(),
    )
}

pub fn guess(dt: &DateTime<Utc>) -> String {
    dt.format(GUESS_PATTERN).to_string()
}
