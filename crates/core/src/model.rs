//! Normalized record types and the categorical labels used by the
//! dashboard's grouped summaries.
//!
//! The source files encode season, month, and year as small integer codes;
//! everything downstream of the loader works with these enums instead.

use chrono::NaiveDate;

/// Season of the year, decoded from codes 1-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// All seasons in code order. Also the "natural" display order.
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Decode a season code (1-4). Returns `None` for anything else.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Season::Spring),
            2 => Some(Season::Summer),
            3 => Some(Season::Fall),
            4 => Some(Season::Winter),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }

    /// Position in [`Season::ALL`].
    pub fn index(self) -> usize {
        match self {
            Season::Spring => 0,
            Season::Summer => 1,
            Season::Fall => 2,
            Season::Winter => 3,
        }
    }
}

/// Calendar month, decoded from codes 1-12.
///
/// The variant order is the fixed display order for monthly charts;
/// aggregates sorted by this enum are never in lexical or by-value order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    Jan,
    Feb,
    March,
    April,
    May,
    June,
    July,
    August,
    Sept,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All months in calendar order (Jan..Dec).
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::Sept,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Decode a month code (1-12). Returns `None` for anything else.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1..=12 => Some(Month::ALL[(code - 1) as usize]),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::Sept => "Sept",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// Position in calendar order (Jan = 0).
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Dataset year, decoded from codes 0 ("2011") and 1 ("2012").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Year {
    Y2011,
    Y2012,
}

impl Year {
    pub const ALL: [Year; 2] = [Year::Y2011, Year::Y2012];

    /// Decode a year code (0 or 1). Returns `None` for anything else.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Year::Y2011),
            1 => Some(Year::Y2012),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Year::Y2011 => "2011",
            Year::Y2012 => "2012",
        }
    }
}

/// One row of the daily table: total rides for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub count: u32,
    pub season: Season,
    pub year: Year,
}

/// One row of the hourly table: rides for one (date, hour) pair.
///
/// The date here is an opaque label — the hourly table is only ever
/// grouped by month and year, never filtered or resampled by date, so no
/// calendar arithmetic applies to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyRecord {
    pub date_label: String,
    pub hour: u8,
    pub count: u32,
    /// Derived at load time: `hour * count`.
    pub weighted_hours: u64,
    pub month: Month,
    pub year: Year,
}

/// An inclusive date range `[start, end]`.
///
/// `start > end` is a legal, empty range: filtering with it yields no
/// rows rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Both endpoints are included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// True when the range selects nothing (`start > end`).
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn season_codes_round_trip() {
        for (code, label) in [(1, "spring"), (2, "summer"), (3, "fall"), (4, "winter")] {
            assert_eq!(Season::from_code(code).unwrap().label(), label);
        }
        assert!(Season::from_code(0).is_none());
        assert!(Season::from_code(5).is_none());
    }

    #[test]
    fn month_codes_follow_calendar_order() {
        assert_eq!(Month::from_code(1), Some(Month::Jan));
        assert_eq!(Month::from_code(12), Some(Month::Dec));
        assert!(Month::from_code(0).is_none());
        assert!(Month::from_code(13).is_none());

        let labels: Vec<&str> = Month::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Jan", "Feb", "March", "April", "May", "June", "July", "August", "Sept", "Oct",
                "Nov", "Dec"
            ]
        );
    }

    #[test]
    fn month_ordering_is_calendar_not_lexical() {
        // Lexically "April" < "Jan", but calendar order says otherwise.
        assert!(Month::Jan < Month::April);
        assert!(Month::Sept < Month::Oct);
    }

    #[test]
    fn year_codes() {
        assert_eq!(Year::from_code(0).unwrap().label(), "2011");
        assert_eq!(Year::from_code(1).unwrap().label(), "2012");
        assert!(Year::from_code(2).is_none());
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let range = DateRange::new(date(2011, 1, 5), date(2011, 1, 10));
        assert!(range.contains(date(2011, 1, 5)));
        assert!(range.contains(date(2011, 1, 10)));
        assert!(!range.contains(date(2011, 1, 4)));
        assert!(!range.contains(date(2011, 1, 11)));
    }

    #[test]
    fn single_day_range() {
        let d = date(2011, 6, 1);
        let range = DateRange::new(d, d);
        assert!(!range.is_empty());
        assert!(range.contains(d));
    }

    #[test]
    fn inverted_range_is_empty_not_an_error() {
        let range = DateRange::new(date(2011, 2, 1), date(2011, 1, 1));
        assert!(range.is_empty());
        assert!(!range.contains(date(2011, 1, 15)));
    }
}
