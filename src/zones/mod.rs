//! Каталог часовых поясов хоста (имена зон из zoneinfo) и разрешение имени в правила.

pub mod filter;

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use tracing::{debug, warn};

use crate::error::TimezoneError;

pub const DEFAULT_ZONEINFO_DIR: &str = "/usr/share/zoneinfo";
/// Единственная зона, если база хоста пуста или недоступна (типично для Windows без tzdata).
pub const FALLBACK_ZONE: &str = "UTC";
/// Зона по умолчанию для целевого времени, если она есть в каталоге.
pub const PREFERRED_DEFAULT_ZONE: &str = "America/Los_Angeles";

const TZIF_MAGIC: &[u8; 4] = b"TZif";
const SKIPPED_DIRS: [&str; 2] = ["posix", "right"];
const SKIPPED_FILES: [&str; 2] = ["posixrules", "localtime"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneCatalog {
    // отсортировано, без дублей, никогда не пусто
    names: Vec<String>,
}

impl ZoneCatalog {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort();
        names.dedup();
        if names.is_empty() {
            warn!("База часовых поясов пуста, используется только {}", FALLBACK_ZONE);
            names.push(FALLBACK_ZONE.to_string());
        }
        Self { names }
    }

    /// Сканирует каталог zoneinfo хоста. Ошибка чтения = пустая база = fallback на UTC.
    pub fn from_dir(root: &Path) -> Self {
        let names = match scan_zoneinfo(root) {
            Ok(names) => names,
            Err(e) => {
                warn!(path = %root.display(), error = %e, "Не удалось прочитать базу часовых поясов");
                Vec::new()
            }
        };
        debug!(path = %root.display(), zones = names.len(), "База часовых поясов загружена");
        Self::from_names(names)
    }

    /// Зоны, встроенные в бинарник (chrono-tz), без обращения к хосту.
    pub fn bundled() -> Self {
        Self::from_names(chrono_tz::TZ_VARIANTS.iter().map(|tz| tz.name()))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names
            .binary_search_by(|probe| probe.as_str().cmp(name))
            .is_ok()
    }

    pub fn default_zone(&self) -> &str {
        if self.contains(PREFERRED_DEFAULT_ZONE) {
            PREFERRED_DEFAULT_ZONE
        } else {
            self.names.first().map(String::as_str).unwrap_or(FALLBACK_ZONE)
        }
    }

    /// Имя вне каталога -> Invalid; имя в каталоге, но без правил -> Lookup.
    pub fn resolve(&self, name: &str) -> Result<Tz, TimezoneError> {
        if !self.contains(name) {
            return Err(TimezoneError::Invalid(name.to_string()));
        }
        name.parse::<Tz>().map_err(|e| TimezoneError::Lookup {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Все известные хосту идентификаторы зон (минимум `["UTC"]`).
pub fn list_timezones(catalog: &ZoneCatalog) -> Vec<String> {
    catalog.names().to_vec()
}

/// Обход дерева zoneinfo. Ошибка чтения корня возвращается, ошибки во вложенных
/// каталогах и отдельных записях пропускаются.
fn scan_zoneinfo(root: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    let mut pending = Vec::new();

    scan_dir(root, "", &mut names, &mut pending)?;
    while let Some((dir, prefix)) = pending.pop() {
        if let Err(e) = scan_dir(&dir, &prefix, &mut names, &mut pending) {
            debug!(path = %dir.display(), error = %e, "Каталог зон пропущен");
        }
    }
    Ok(names)
}

fn scan_dir(
    dir: &Path,
    prefix: &str,
    names: &mut Vec<String>,
    pending: &mut Vec<(PathBuf, String)>,
) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!(path = %dir.display(), error = %e, "Запись каталога зон пропущена");
                continue;
            }
        };
        let file_name = entry.file_name().to_string_lossy().into_owned();
        let name = if prefix.is_empty() {
            file_name.clone()
        } else {
            format!("{}/{}", prefix, file_name)
        };

        // file_type() не идёт по симлинкам: симлинк на каталог не обходим (защита от петель)
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                debug!(zone = %name, error = %e, "Запись каталога зон пропущена");
                continue;
            }
        };
        if file_type.is_dir() {
            if prefix.is_empty() && SKIPPED_DIRS.contains(&file_name.as_str()) {
                continue;
            }
            pending.push((entry.path(), name));
            continue;
        }

        if SKIPPED_FILES.contains(&file_name.as_str()) {
            continue;
        }
        if is_tzif(&entry.path()) {
            names.push(name);
        }
    }
    Ok(())
}

fn is_tzif(path: &Path) -> bool {
    let mut magic = [0u8; 4];
    File::open(path)
        .and_then(|mut f| f.read_exact(&mut magic))
        .map(|_| &magic == TZIF_MAGIC)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_zone(root: &Path, rel: &str, content: &[u8]) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn empty_catalog_falls_back_to_utc() {
        let catalog = ZoneCatalog::from_names(Vec::<String>::new());
        assert_eq!(list_timezones(&catalog), vec!["UTC".to_string()]);
        assert_eq!(catalog.default_zone(), "UTC");
    }

    #[test]
    fn names_are_sorted_and_deduplicated() {
        let catalog = ZoneCatalog::from_names(["UTC", "Europe/Berlin", "UTC", "Asia/Tokyo"]);
        assert_eq!(catalog.names(), &["Asia/Tokyo", "Europe/Berlin", "UTC"]);
        assert!(catalog.contains("Europe/Berlin"));
        assert!(!catalog.contains("Europe/Paris"));
    }

    #[test]
    fn default_prefers_los_angeles() {
        let catalog = ZoneCatalog::from_names(["Asia/Tokyo", "America/Los_Angeles"]);
        assert_eq!(catalog.default_zone(), "America/Los_Angeles");

        let catalog = ZoneCatalog::from_names(["Europe/Berlin", "Asia/Tokyo"]);
        assert_eq!(catalog.default_zone(), "Asia/Tokyo");
    }

    #[test]
    fn resolve_known_zone() {
        let catalog = ZoneCatalog::from_names(["Europe/Berlin"]);
        assert_eq!(catalog.resolve("Europe/Berlin"), Ok(chrono_tz::Europe::Berlin));
    }

    #[test]
    fn resolve_unlisted_zone_is_invalid() {
        let catalog = ZoneCatalog::from_names(["UTC"]);
        let err = catalog.resolve("Europe/Berlin").unwrap_err();
        assert_eq!(err, TimezoneError::Invalid("Europe/Berlin".to_string()));
        assert_eq!(err.to_string(), "Invalid Timezone");
    }

    #[test]
    fn resolve_listed_zone_without_rules_is_lookup_error() {
        let catalog = ZoneCatalog::from_names(["Mars/Olympus_Mons"]);
        let err = catalog.resolve("Mars/Olympus_Mons").unwrap_err();
        assert!(matches!(err, TimezoneError::Lookup { .. }));
        assert_eq!(err.to_string(), "Timezone Error");
    }

    #[test]
    fn bundled_catalog_is_complete() {
        let catalog = ZoneCatalog::bundled();
        assert!(catalog.contains("UTC"));
        assert!(catalog.contains("America/Los_Angeles"));
        assert!(catalog.names().len() > 300);
    }

    #[test]
    fn scans_zoneinfo_tree() {
        let dir = tempfile::tempdir().unwrap();
        write_zone(dir.path(), "UTC", b"TZif2...");
        write_zone(dir.path(), "Europe/Berlin", b"TZif2...");
        write_zone(dir.path(), "America/Argentina/Salta", b"TZif3...");
        write_zone(dir.path(), "posix/Europe/Berlin", b"TZif2...");
        write_zone(dir.path(), "right/UTC", b"TZif2...");
        write_zone(dir.path(), "posixrules", b"TZif2...");
        write_zone(dir.path(), "localtime", b"TZif2...");
        write_zone(dir.path(), "zone.tab", b"# comment");
        write_zone(dir.path(), "iso3166.tab", b"");

        let catalog = ZoneCatalog::from_dir(dir.path());
        assert_eq!(
            catalog.names(),
            &["America/Argentina/Salta", "Europe/Berlin", "UTC"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_subdirectory_does_not_drop_other_zones() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        write_zone(dir.path(), "UTC", b"TZif2...");
        write_zone(dir.path(), "Europe/Berlin", b"TZif2...");
        write_zone(dir.path(), "Locked/Zone", b"TZif2...");
        let locked = dir.path().join("Locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let catalog = ZoneCatalog::from_dir(dir.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        // под root каталог всё равно читается, поэтому Locked/Zone не проверяем
        assert!(catalog.contains("UTC"));
        assert!(catalog.contains("Europe/Berlin"));
    }

    #[test]
    fn missing_directory_falls_back_to_utc() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = ZoneCatalog::from_dir(&dir.path().join("nope"));
        assert_eq!(catalog.names(), &["UTC"]);
    }
}
