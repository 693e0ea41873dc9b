use tracing::debug;

use crate::decoder::{Format, Normalized};
use crate::models::{GuessEntry, GuessReport};
use crate::render;

/// Пробует все форматы каталога. Ошибки декодирования (включая переполнение)
/// и даты вне 1970-2040 молча пропускаются: это эвристика, а не валидация.
pub fn guess_all(raw: &str) -> GuessReport {
    let input = Normalized::new(raw);
    let mut entries = Vec::new();

    for format in Format::ALL {
        let epoch = match format.decode_normalized(&input) {
            Ok(epoch) => epoch,
            Err(e) => {
                debug!(%format, error = %e, "Формат пропущен");
                continue;
            }
        };

        if !epoch.is_plausible() {
            debug!(%format, seconds = epoch.seconds(), "Вне окна 1970-2040");
            continue;
        }

        let Some(utc) = epoch.to_utc() else {
            continue;
        };

        entries.push(GuessEntry {
            format,
            format_name: format.display_name(),
            epoch_seconds: epoch,
            utc: render::guess(&utc),
        });
    }

    GuessReport {
        input: raw.to_string(),
        entries,
    }
}
