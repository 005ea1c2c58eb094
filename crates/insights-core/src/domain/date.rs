use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::Iso8601;
use time::{Date, Duration, OffsetDateTime};

use crate::InsightsError;

/// Calendar day of a generated price point, rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeriesDate(Date);

impl SeriesDate {
    /// Current UTC calendar day.
    pub fn today() -> Self {
        Self(OffsetDateTime::now_utc().date())
    }

    pub fn parse(input: &str) -> Result<Self, InsightsError> {
        Date::parse(input.trim(), &Iso8601::DATE)
            .map(Self)
            .map_err(|_| InsightsError::invalid("date", format!("expected YYYY-MM-DD: '{input}'")))
    }

    pub fn from_date(value: Date) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    /// The day `days` before this one, if it is still a representable date.
    pub fn checked_sub_days(self, days: i64) -> Option<Self> {
        self.0.checked_sub(Duration::days(days)).map(Self)
    }

    pub fn next_day(self) -> Option<Self> {
        self.0.next_day().map(Self)
    }

    /// Short axis label such as `Oct 18`.
    pub fn label(self) -> String {
        let month = self.0.month().to_string();
        format!("{} {}", &month[..3], self.0.day())
    }
}

impl Display for SeriesDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl Serialize for SeriesDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SeriesDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_iso_date() {
        let parsed = SeriesDate::parse("2024-03-05").expect("must parse");
        assert_eq!(parsed.to_string(), "2024-03-05");
        assert_eq!(parsed.label(), "Mar 5");
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(SeriesDate::parse("2024-13-40").is_err());
        assert!(SeriesDate::parse("yesterday").is_err());
    }

    #[test]
    fn steps_across_month_and_leap_boundaries() {
        let feb = SeriesDate::parse("2024-02-28").expect("date");
        let leap = feb.next_day().expect("next");
        assert_eq!(leap.to_string(), "2024-02-29");
        assert_eq!(leap.next_day().expect("next").to_string(), "2024-03-01");
        assert_eq!(
            SeriesDate::parse("2024-03-01")
                .expect("date")
                .checked_sub_days(30)
                .expect("in range")
                .to_string(),
            "2024-01-31"
        );
    }

    #[test]
    fn round_trips_through_json() {
        let date = SeriesDate::parse("2025-10-18").expect("date");
        let json = serde_json::to_string(&date).expect("serializes");
        assert_eq!(json, "\"2025-10-18\"");
        let back: SeriesDate = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, date);
    }
}
