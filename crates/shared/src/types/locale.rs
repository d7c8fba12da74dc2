//! Locale identifiers.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use tracing::warn;

use crate::config::{DisplayConfig, TenderConfig};
use crate::error::{MoneyError, MoneyResult};

/// Region placeholder meaning "no region".
pub const ANY_REGION: &str = "*";

static CURRENT: Lazy<Locale> = Lazy::new(resolve_current);

/// A language with an optional region, e.g. `nl_NL` or `fr`.
///
/// Languages are stored lower-case, regions upper-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// Builds a locale from a language code and an optional region code.
    ///
    /// A region of `"*"` is treated as no region.
    pub fn new(language: &str, region: Option<&str>) -> MoneyResult<Self> {
        let invalid = || MoneyError::InvalidLocale(format!("{language}_{}", region.unwrap_or("")));

        let language = normalize_language(language).ok_or_else(invalid)?;
        let region = match region.map(str::trim) {
            None | Some("" | ANY_REGION) => None,
            Some(region) => Some(normalize_region(region).ok_or_else(invalid)?),
        };

        Ok(Self { language, region })
    }

    /// Returns the lower-case language code.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the upper-case region code, if any.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Returns the process-wide default locale.
    ///
    /// Resolved once from [`TenderConfig`]; falls back to `en_US`.
    #[must_use]
    pub fn current() -> Self {
        CURRENT.clone()
    }

    fn en_us() -> Self {
        Self {
            language: "en".to_string(),
            region: Some("US".to_string()),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}_{region}", self.language),
            None => f.write_str(&self.language),
        }
    }
}

impl FromStr for Locale {
    type Err = MoneyError;

    /// Parses `nl_NL`, `nl-NL`, `fr`, `zh_Hans_CN` or POSIX-style `en_US.UTF-8`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MoneyError::InvalidLocale(s.to_string());

        // Drop POSIX codeset and modifier suffixes.
        let base = s.split(['.', '@']).next().unwrap_or_default().trim();
        let mut parts = base.split(['_', '-']);

        let language = normalize_language(parts.next().unwrap_or_default()).ok_or_else(invalid)?;
        let mut region = None;

        for part in parts {
            if region.is_some() {
                return Err(invalid());
            }
            if part.len() == 4 && part.bytes().all(|b| b.is_ascii_alphabetic()) {
                continue;
            }
            if part == ANY_REGION {
                continue;
            }
            region = Some(normalize_region(part).ok_or_else(invalid)?);
        }

        Ok(Self { language, region })
    }
}

fn normalize_language(language: &str) -> Option<String> {
    let language = language.trim();
    let valid = (2..=3).contains(&language.len()) && language.bytes().all(|b| b.is_ascii_alphabetic());
    valid.then(|| language.to_ascii_lowercase())
}

fn normalize_region(region: &str) -> Option<String> {
    let alpha = region.len() == 2 && region.bytes().all(|b| b.is_ascii_alphabetic());
    let numeric = region.len() == 3 && region.bytes().all(|b| b.is_ascii_digit());
    (alpha || numeric).then(|| region.to_ascii_uppercase())
}

fn resolve_current() -> Locale {
    let settings = match TenderConfig::load() {
        Ok(config) => config.display,
        Err(e) => {
            warn!(error = %e, "Failed to load configuration, using default locale");
            DisplayConfig::default()
        }
    };

    let configured = settings.locale;
    configured.parse().unwrap_or_else(|e: MoneyError| {
        warn!(locale = %configured, error = %e, "Invalid configured locale, using en_US");
        Locale::en_us()
    })
}
