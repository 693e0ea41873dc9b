use std::io;

use anyhow::{bail, Context, Result};
use time_decoder::error::ConversionError;
use time_decoder::guess_all;
use time_decoder::output::{format_guess_report, JsonlWriter};
use tracing::info;

pub fn run(input: &str, json: bool) -> Result<()> {
    if input.is_empty() {
        bail!(ConversionError::MissingInput);
    }

    let report = guess_all(input);
    info!(matches = report.count(), "Угадывание завершено");

    if json {
        let mut writer = JsonlWriter::new(io::stdout().lock());
        for entry in &report.entries {
            writer.write(entry).context("Не удалось записать JSONL")?;
        }
        writer.flush()?;
    } else {
        print!("{}", format_guess_report(&report));
    }
    Ok(())
}
