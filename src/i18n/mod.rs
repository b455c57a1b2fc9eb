//! Localized strings for the built-in widgets.
//!
//! The table ships inside the binary as TOML, is parsed on first access and is
//! never mutated afterwards. Lookups fall back to English and then to the key
//! itself, so a missing translation degrades to readable text instead of an
//! error.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const BUILTIN_STRINGS: &str = include_str!("strings.toml");

static STRINGS: OnceLock<Strings> = OnceLock::new();

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    /// Accepts bare codes as well as region-qualified tags like `zh-CN` or `en_US`
    fn from_str(s: &str) -> Result<Self> {
        let lang = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match lang.as_str() {
            "en" => Ok(Locale::En),
            "zh" => Ok(Locale::Zh),
            _ => anyhow::bail!("Unsupported locale: {s}"),
        }
    }
}

/// Immutable locale → key → message table
#[derive(Debug, Default)]
pub struct Strings {
    table: HashMap<Locale, HashMap<String, String>>,
}

impl Strings {
    /// Parses a table from TOML with one section per locale code.
    ///
    /// # Errors
    /// Returns an error if the document is not valid TOML, a section is not a
    /// flat string map, or a section names an unsupported locale.
    pub fn parse(source: &str) -> Result<Self> {
        let raw: HashMap<String, HashMap<String, String>> =
            toml::from_str(source).context("Failed to parse string table")?;

        let mut table = HashMap::with_capacity(raw.len());
        for (code, messages) in raw {
            let locale: Locale = code
                .parse()
                .with_context(|| format!("Invalid locale section: [{code}]"))?;
            table.insert(locale, messages);
        }

        Ok(Self { table })
    }

    /// The built-in table, parsed once on first use
    pub fn global() -> &'static Strings {
        STRINGS.get_or_init(|| match Strings::parse(BUILTIN_STRINGS) {
            Ok(strings) => strings,
            Err(err) => {
                log::error!("Built-in string table is unusable: {err:#}");
                Strings::default()
            }
        })
    }

    /// Looks up `key` for `locale`, falling back to English, then to `key`
    pub fn get<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        self.lookup(locale, key)
            .or_else(|| self.lookup(Locale::En, key))
            .unwrap_or_else(|| {
                log::debug!("Missing string {key:?} for locale {locale}");
                key
            })
    }

    /// Looks up `key` and substitutes positional placeholders `{0}`, `{1}`, ...
    pub fn format(&self, locale: Locale, key: &str, args: &[&dyn fmt::Display]) -> String {
        args.iter()
            .enumerate()
            .fold(self.get(locale, key).to_string(), |text, (i, arg)| {
                text.replace(&format!("{{{i}}}"), &arg.to_string())
            })
    }

    pub fn has(&self, locale: Locale, key: &str) -> bool {
        self.lookup(locale, key).is_some()
    }

    fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.table
            .get(&locale)
            .and_then(|messages| messages.get(key))
            .map(String::as_str)
    }
}

/// A handle on the global table bound to one locale
#[derive(Debug, Clone, Copy, Default)]
pub struct I18n {
    pub locale: Locale,
}

impl I18n {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn get(&self, key: &'static str) -> &'static str {
        Strings::global().get(self.locale, key)
    }

    pub fn format(&self, key: &str, args: &[&dyn fmt::Display]) -> String {
        Strings::global().format(self.locale, key, args)
    }
}
