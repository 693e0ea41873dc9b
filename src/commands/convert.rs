use std::io;

use anyhow::{Context, Result};
use time_decoder::output::{format_conversion, JsonlWriter};
use time_decoder::{convert_single, Format, ZoneCatalog};
use tracing::info;

pub fn run(
    input: &str,
    format: Format,
    tz: Option<&str>,
    no_target: bool,
    json: bool,
    zones: &ZoneCatalog,
) -> Result<()> {
    // без явного --tz берём зону по умолчанию, как в выпадающем списке
    let target = if no_target {
        None
    } else {
        Some(tz.unwrap_or_else(|| zones.default_zone()))
    };
    info!(%format, zone = ?target, "Запуск Convert");

    let result = convert_single(input, format, target, zones)
        .with_context(|| format!("Failed to decode '{}'", input))?;

    if json {
        let mut writer = JsonlWriter::new(io::stdout().lock());
        writer.write(&result).context("Не удалось записать JSONL")?;
        writer.flush()?;
    } else {
        print!("{}", format_conversion(&result));
    }
    Ok(())
}
