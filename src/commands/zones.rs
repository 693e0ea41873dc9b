use anyhow::{Context, Result};
use time_decoder::zones::filter::ZoneFilter;
use time_decoder::{list_timezones, ZoneCatalog};

pub fn run(filter: Option<&str>, zones: &ZoneCatalog) -> Result<()> {
    let names = list_timezones(zones);

    let shown: Vec<&str> = match filter {
        Some(pattern) => ZoneFilter::new(pattern)
            .with_context(|| format!("Некорректный фильтр '{}'", pattern))?
            .apply(&names),
        None => names.iter().map(String::as_str).collect(),
    };

    for name in &shown {
        println!("{}", name);
    }
    eprintln!("[+] Зон: {} из {}", shown.len(), names.len());
    Ok(())
}
