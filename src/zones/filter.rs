use regex::{Regex, RegexBuilder};

/// Glob-фильтр имён зон: `*` - любая последовательность, `?` - один символ.
/// Регистр не учитывается, шаблон покрывает имя целиком.
#[derive(Debug, Clone)]
pub struct ZoneFilter {
    regex: Regex,
}

impl ZoneFilter {
    pub fn new(pattern: impl AsRef<str>) -> Result<Self, regex::Error> {
        let escaped = regex::escape(pattern.as_ref());
        let regex_str = escaped.replace("\\*", ".*").replace("\\?", ".");
        let regex = RegexBuilder::new(&format!("^{}$", regex_str))
            .case_insensitive(true)
            .build()?;
        Ok(Self { regex })
    }

    pub fn matches(&self, zone: &str) -> bool {
        self.regex.is_match(zone)
    }

    pub fn apply<'a>(&self, zones: &'a [String]) -> Vec<&'a str> {
        zones
            .iter()
            .map(String::as_str)
            .filter(|z| self.matches(z))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_matches_region() {
        let f = ZoneFilter::new("america/*").unwrap();
        assert!(f.matches("America/Los_Angeles"));
        assert!(f.matches("America/Argentina/Salta"));
        assert!(!f.matches("Europe/Berlin"));
    }

    #[test]
    fn question_mark_is_single_char() {
        let f = ZoneFilter::new("Etc/GMT+?").unwrap();
        assert!(f.matches("Etc/GMT+5"));
        assert!(!f.matches("Etc/GMT+10"));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let f = ZoneFilter::new("Etc/GMT+1").unwrap();
        assert!(f.matches("Etc/GMT+1"));
        assert!(!f.matches("Etc/GMTT1"));
    }

    #[test]
    fn apply_keeps_order() {
        let zones = vec![
            "Asia/Tokyo".to_string(),
            "Europe/Berlin".to_string(),
            "Europe/Paris".to_string(),
        ];
        let f = ZoneFilter::new("*/*r*").unwrap();
        assert_eq!(f.apply(&zones), vec!["Europe/Berlin", "Europe/Paris"]);
    }
}
