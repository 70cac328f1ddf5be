//! Core data types for menu dates, catalogs, and menu documents.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Canonical date format, used both on the wire and as the remote file key.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date for which a menu may be published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MenuDate(NaiveDate);

impl MenuDate {
    /// Build a date from its components. Returns `None` for impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse the canonical `YYYY-MM-DD` form.
    ///
    /// Only the exact canonical text is accepted, so `parse(s)?.to_string() == s`
    /// holds for every successfully parsed `s`.
    pub fn parse(text: &str) -> Result<Self, InvalidDate> {
        let invalid = || InvalidDate(text.to_string());

        if text.len() != 10 || !text.is_ascii() {
            return Err(invalid());
        }
        let date = NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| invalid())?;
        let date = Self(date);
        if date.to_string() != text {
            return Err(invalid());
        }
        Ok(date)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl fmt::Display for MenuDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for MenuDate {
    type Err = InvalidDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for MenuDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MenuDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// Dates with a published menu, in the order the directory listing links them.
pub type DateCatalog = Vec<MenuDate>;

/// One day's menu, exactly as the publisher wrote it.
pub type MenuDocument = serde_json::Value;

/// Externally supplied date text that is not in canonical form.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid date {0:?}, expected YYYY-MM-DD")]
pub struct InvalidDate(pub String);

/// The request could not be completed or did not succeed.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("error fetching URL {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("error fetching URL {url}: unexpected status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("error reading response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// A response body could not be interpreted.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("error parsing date from link {href:?}: {source}")]
    LinkDate {
        href: String,
        #[source]
        source: InvalidDate,
    },

    #[error("error parsing JSON from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum MenuError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl MenuError {
    pub fn is_transport(&self) -> bool {
        matches!(self, MenuError::Transport(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, MenuError::Parse(_))
    }
}

pub type MenuResult<T> = Result<T, MenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for text in ["2024-05-01", "2020-07-10", "1999-12-31", "2024-02-29"] {
            let date = MenuDate::parse(text).unwrap();
            assert_eq!(date.to_string(), text);
        }
    }

    #[test]
    fn test_components() {
        let date: MenuDate = "2020-07-10".parse().unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2020, 7, 10));
        assert_eq!(Some(date), MenuDate::from_ymd(2020, 7, 10));
    }

    #[test]
    fn test_rejects_non_canonical() {
        for text in [
            "",
            "not-a-date",
            "bad-name",
            "2024-5-1",
            "2024-05-1",
            "24-05-01",
            "+2024-05-01",
            "2024-02-30",
            "2023-02-29",
            "2024-13-01",
            "2024/05/01",
            "2024-05-01 ",
            "2024-05-01T00:00",
        ] {
            assert_eq!(
                MenuDate::parse(text),
                Err(InvalidDate(text.to_string())),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_ordering() {
        let a = MenuDate::parse("2024-05-01").unwrap();
        let b = MenuDate::parse("2024-05-02").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_serde_as_text() {
        let date = MenuDate::parse("2024-05-01").unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-05-01\"");
        let back: MenuDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
        assert!(serde_json::from_str::<MenuDate>("\"2024-5-1\"").is_err());
    }
}
