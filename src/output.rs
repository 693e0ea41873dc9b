use serde::Serialize;
use std::io::{self, Write};

use crate::models::{ConversionResult, GuessReport};

const GUESS_HEADER_RULE: usize = 50;
const GUESS_ENTRY_RULE: usize = 30;

/// Потоковая запись в формате JSONL (JSON Lines).
/// - Одна запись - один JSON-объект
/// - Каждый объект заканчивается '\n'
pub struct JsonlWriter<W: Write> {
    inner: W,
}

impl<W: Write> JsonlWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.inner, value)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.inner.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Текстовый отчёт одиночной конвертации.
pub fn format_conversion(result: &ConversionResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("Format:      {}\n", result.format));
    out.push_str(&format!("UTC Time:    {}\n", result.utc));
    out.push_str(&format!("Local Time:  {}\n", result.local));
    match &result.target {
        Some(target) => out.push_str(&format!("Target Time: {} ({})\n", target, target.zone())),
        None => out.push_str("Target Time: --\n"),
    }
    out
}

/// Текстовый отчёт угадывания: блок на каждое совпадение или строка "нет совпадений".
pub fn format_guess_report(report: &GuessReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Scanning input: '{}'\n", report.input));
    out.push_str(&"=".repeat(GUESS_HEADER_RULE));
    out.push('\n');

    for entry in &report.entries {
        out.push_str(&format!("Format: {}\n", entry.format_name));
        out.push_str(&format!("Result: {}\n", entry.utc));
        out.push_str(&"-".repeat(GUESS_ENTRY_RULE));
        out.push('\n');
    }

    if report.is_empty() {
        out.push_str("No valid timestamps found within years 1970-2040.\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::{EpochSeconds, Format};
    use crate::guess::guess_all;
    use crate::models::TargetTime;

    #[test]
    fn jsonl_one_object_per_line() {
        let report = guess_all("0");
        let mut writer = JsonlWriter::new(Vec::new());
        for entry in &report.entries {
            writer.write(entry).unwrap();
        }
        writer.flush().unwrap();

        let text = String::from_utf8(writer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        for line in lines {
            let v: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(v["UTC"], "1970-01-01 00:00:00 UTC");
        }
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn guess_transcript() {
        let text = format_guess_report(&guess_all("6553F100"));
        let expected = format!(
            "Scanning input: '6553F100'\n{}\n\
             Format: Unix Hex 32-bit Big Endian\nResult: 2023-11-14 22:13:20 UTC\n{}\n\
             Format: Unix Hex 32-bit Little Endian\nResult: 1970-07-03 01:12:05 UTC\n{}\n\
             Format: Unix Milliseconds Hex\nResult: 1970-01-20 16:13:20 UTC\n{}\n",
            "=".repeat(50),
            "-".repeat(30),
            "-".repeat(30),
            "-".repeat(30),
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn guess_transcript_without_matches() {
        let text = format_guess_report(&guess_all("xyz"));
        assert!(text.starts_with("Scanning input: 'xyz'\n"));
        assert!(text.ends_with("No valid timestamps found within years 1970-2040.\n"));
        assert!(!text.contains("Format:"));
    }

    #[test]
    fn conversion_text() {
        let result = ConversionResult {
            input: "0".to_string(),
            format: Format::UnixSecondsDecimal,
            epoch_seconds: EpochSeconds(0.0),
            utc: "1970-01-01 00:00:00.000000".to_string(),
            local: "1970-01-01 03:00:00.000000".to_string(),
            target: Some(TargetTime::Unavailable {
                zone: "Nowhere".to_string(),
                reason: "Invalid Timezone".to_string(),
            }),
        };
        let text = format_conversion(&result);
        assert!(text.contains("UTC Time:    1970-01-01 00:00:00.000000\n"));
        assert!(text.contains("Target Time: Invalid Timezone (Nowhere)\n"));

        let no_target = ConversionResult { target: None, ..result };
        assert!(format_conversion(&no_target).ends_with("Target Time: --\n"));
    }
}
