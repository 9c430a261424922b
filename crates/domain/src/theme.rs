//! Theme mode — the two-valued dark/light display preference.

use serde::{Deserialize, Serialize};

use crate::error::ParseThemeError;

/// A UI display preference: dark mode on or off.
///
/// The in-memory reactive form of the preference is a boolean (`true` =
/// dark); the persisted form is the string `"dark"` or `"light"`. This
/// type is the lossless carrier between the two conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Convert from the boolean convention (`true` = dark).
    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// Whether this is the dark variant.
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The persisted string form, `"dark"` or `"light"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ParseThemeError {
                value: other.to_string(),
            }),
        }
    }
}
