//! Locale support for number formatting
//!
//! This module maps locale codes to the decimal, grouping and sign characters used when
//! formatting and parsing numbers. Codes are grouped: every code of a group shares one
//! set of symbols. The built-in groups are constants; hosts can load their own groups from TOML.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::types::LocaleSymbols;

/// Error type for locale operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocaleError {
    /// The specified locale was not found
    #[error("Locale not found: {0}")]
    NotFound(String),
    /// An error occurred while parsing locale data
    #[error("Error parsing locale data: {0}")]
    ParseError(String),
}

type Result<T> = std::result::Result<T, LocaleError>;

/// The built-in locale groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocaleGroup {
    /// `.` decimal, `,` grouping
    UsLike,
    /// `,` decimal, `.` grouping
    DeLike,
    /// `,` decimal, space grouping
    FrLike,
    /// `.` decimal, `'` grouping
    ChLike,
}

impl LocaleGroup {
    pub const ALL: [LocaleGroup; 4] = [
        LocaleGroup::UsLike,
        LocaleGroup::DeLike,
        LocaleGroup::FrLike,
        LocaleGroup::ChLike,
    ];

    pub const fn symbols(self) -> LocaleSymbols {
        match self {
            LocaleGroup::UsLike => LocaleSymbols::new('.', ',', '-'),
            LocaleGroup::DeLike => LocaleSymbols::new(',', '.', '-'),
            LocaleGroup::FrLike => LocaleSymbols::new(',', ' ', '-'),
            LocaleGroup::ChLike => LocaleSymbols::new('.', '\'', '-'),
        }
    }

    /// Name of the group, also used as its table name in TOML locale data
    pub const fn name(self) -> &'static str {
        match self {
            LocaleGroup::UsLike => "us_like",
            LocaleGroup::DeLike => "de_like",
            LocaleGroup::FrLike => "fr_like",
            LocaleGroup::ChLike => "ch_like",
        }
    }

    /// Locale codes that belong to the group
    pub const fn codes(self) -> &'static [&'static str] {
        match self {
            LocaleGroup::UsLike => &[
                "ae", "au", "ca", "cn", "eg", "gb", "hk", "il", "in", "jp", "sk", "th", "tw", "us",
            ],
            LocaleGroup::DeLike => &[
                "at", "br", "de", "dk", "es", "gr", "it", "nl", "pt", "tr", "vn",
            ],
            LocaleGroup::FrLike => &["cz", "fi", "fr", "ru", "se", "pl"],
            LocaleGroup::ChLike => &["ch"],
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.name() == name)
    }
}

/// Lookup table from lower-case locale code to symbols
#[derive(Debug, Clone, Default)]
pub struct LocaleTable {
    symbols: HashMap<String, LocaleSymbols>,
    groups: HashMap<String, String>,
}

// Global table, read-only once set
static LOCALE_TABLE: OnceLock<LocaleTable> = OnceLock::new();

impl LocaleTable {
    /// Build the table from the built-in locale groups
    fn builtin() -> Self {
        Self::from_groups(&LocaleGroup::ALL)
    }

    /// Build a table holding every code of `groups`
    pub fn from_groups(groups: &[LocaleGroup]) -> Self {
        let mut table = Self::default();
        for group in groups {
            for code in group.codes() {
                table.insert(code, group.name(), group.symbols());
            }
        }
        table
    }

    /// Parse locale groups from TOML.
    ///
    /// Every top-level table is a group with a `decimal` and `group` character, an optional
    /// `negative` character and a `codes` array.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("Root is not a table".to_string()))?;

        let mut locale_table = Self::default();
        for (group_name, value) in table {
            let group_table = value
                .as_table()
                .ok_or_else(|| LocaleError::ParseError(format!("{group_name} is not a table")))?;

            let defaults = LocaleSymbols::default();
            let symbols = LocaleSymbols::new(
                Self::symbol_char(group_table, "decimal", group_name)?
                    .unwrap_or(defaults.decimal_separator),
                Self::symbol_char(group_table, "group", group_name)?
                    .unwrap_or(defaults.group_separator),
                Self::symbol_char(group_table, "negative", group_name)?
                    .unwrap_or(defaults.negative_sign),
            );

            let codes = group_table
                .get("codes")
                .and_then(|v| v.as_array())
                .ok_or_else(|| {
                    LocaleError::ParseError(format!("Missing or invalid codes in {group_name}"))
                })?;

            for code in codes {
                let code = code.as_str().ok_or_else(|| {
                    LocaleError::ParseError(format!("Non-string locale code in {group_name}"))
                })?;
                locale_table.insert(code, group_name, symbols);
            }
        }

        Ok(locale_table)
    }

    fn symbol_char(
        table: &toml::map::Map<String, toml::Value>,
        key: &str,
        group_name: &str,
    ) -> Result<Option<char>> {
        let Some(value) = table.get(key) else {
            return Ok(None);
        };
        let mut chars = value.as_str().map(str::chars).ok_or_else(|| {
            LocaleError::ParseError(format!("{key} in {group_name} is not a string"))
        })?;
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Some(c)),
            _ => Err(LocaleError::ParseError(format!(
                "{key} in {group_name} must be a single character"
            ))),
        }
    }

    fn insert(&mut self, code: &str, group_name: &str, symbols: LocaleSymbols) {
        let code = code.to_lowercase();
        self.groups.insert(code.clone(), group_name.to_string());
        self.symbols.insert(code, symbols);
    }

    /// Get the global locale table instance
    pub fn global() -> &'static Self {
        LOCALE_TABLE.get_or_init(Self::builtin)
    }

    /// Symbols for a locale code, if the code is known
    pub fn get(&self, locale_code: &str) -> Option<LocaleSymbols> {
        self.symbols.get(&locale_code.to_lowercase()).copied()
    }

    /// Symbols for a locale code, falling back to the US-like defaults
    pub fn resolve(&self, locale_code: &str) -> LocaleSymbols {
        self.get(locale_code).unwrap_or_else(|| {
            log::debug!("Unknown locale '{locale_code}', using default number symbols");
            LocaleSymbols::default()
        })
    }

    /// Like [`LocaleTable::get`] but reports unknown codes as an error
    pub fn lookup(&self, locale_code: &str) -> Result<LocaleSymbols> {
        self.get(locale_code)
            .ok_or_else(|| LocaleError::NotFound(locale_code.to_string()))
    }

    /// Name of the group a locale code belongs to
    pub fn group_of(&self, locale_code: &str) -> Option<&str> {
        self.groups
            .get(&locale_code.to_lowercase())
            .map(String::as_str)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.symbols.keys().map(String::as_str)
    }
}

/// Load the global locale table now instead of on first lookup
pub fn init() {
    LocaleTable::global();
}

/// Resolve a locale code (case-insensitive) against the built-in table.
///
/// Unknown codes never fail: they resolve to `.` decimal, `,` grouping and `-` sign.
pub fn resolve(locale_code: &str) -> LocaleSymbols {
    LocaleTable::global().resolve(locale_code)
}

/// List all available locale codes, sorted
pub fn list_available_locales() -> Vec<String> {
    let mut codes: Vec<String> = LocaleTable::global().codes().map(str::to_string).collect();
    codes.sort();
    codes
}
