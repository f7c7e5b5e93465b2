use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::error::FeedError;

const ISO_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");
const LONG_DATE: &[BorrowedFormatItem<'_>] =
    format_description!("[day padding:none] [month repr:long] [year]");

/// Calendar date a rate sheet is valid for.
///
/// The feeds write dates two ways: ISO `2024-03-15` in the XML and the
/// historical sheet, and `15 March 2024` in older daily sheets. Both parse
/// to the same value; the ISO form is canonical on output. No time-of-day
/// or timezone is modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RateDate(Date);

impl RateDate {
    /// Parses either accepted encoding, trying the ISO form first.
    pub fn parse(input: &str) -> Result<Self, FeedError> {
        let trimmed = input.trim();

        Date::parse(trimmed, ISO_DATE)
            .or_else(|_| Date::parse(trimmed, LONG_DATE))
            .map(Self)
            .map_err(|_| FeedError::DateFormat {
                value: trimmed.to_owned(),
            })
    }

    pub fn from_date(date: Date) -> Self {
        Self(date)
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    /// Canonical `YYYY-MM-DD` rendering.
    pub fn format_iso(self) -> String {
        self.0
            .format(ISO_DATE)
            .expect("calendar date must be ISO formattable")
    }
}

impl Display for RateDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

impl Serialize for RateDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for RateDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
