use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A calendar month, validated to 1..=12 at construction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct Month(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("month {0} out of range 1..=12")]
pub struct InvalidMonth(pub u32);

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
        Month(1),
        Month(2),
        Month(3),
        Month(4),
        Month(5),
        Month(6),
        Month(7),
        Month(8),
        Month(9),
        Month(10),
        Month(11),
        Month(12),
    ];

    pub fn new(number: u32) -> Result<Self, InvalidMonth> {
        if (1..=12).contains(&number) {
            Ok(Month(number))
        } else {
            Err(InvalidMonth(number))
        }
    }

    /// The month component of a date. Always valid by construction.
    pub fn of_date(date: NaiveDate) -> Self {
        Month(date.month())
    }

    pub fn number(self) -> u32 {
        self.0
    }

    pub fn name(self) -> &'static str {
        const NAMES: [&str; 12] = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        NAMES[(self.0 - 1) as usize]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl TryFrom<u32> for Month {
    type Error = InvalidMonth;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        Month::new(number)
    }
}

impl From<Month> for u32 {
    fn from(month: Month) -> u32 {
        month.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_enforced() {
        assert!(Month::new(1).is_ok());
        assert!(Month::new(12).is_ok());
        assert_eq!(Month::new(0).unwrap_err(), InvalidMonth(0));
        assert_eq!(Month::new(13).unwrap_err(), InvalidMonth(13));
    }

    #[test]
    fn names_follow_calendar_order() {
        assert_eq!(Month::new(1).unwrap().name(), "January");
        assert_eq!(Month::new(12).unwrap().name(), "December");
        assert_eq!(Month::ALL.len(), 12);
    }

    #[test]
    fn of_date_extracts_month() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(Month::of_date(date), Month::new(3).unwrap());
    }
}
