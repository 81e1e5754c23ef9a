//! The four grouped summaries behind the dashboard's charts.
//!
//! All reducers are pure functions over in-memory rows and are recomputed
//! on every render cycle. Note the deliberate asymmetry inherited from the
//! source dashboard: only [`daily_totals`] consumes the date-filtered
//! table; the season and month breakdowns always see the full dataset
//! (see `Dashboard::snapshot`).

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::{DailyRecord, HourlyRecord, Month, Season, Year};

/// Total rides for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: u64,
}

/// Total rides for one season over the whole dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonTotal {
    pub season: Season,
    pub total: u64,
}

/// Total weighted ride-hours for one month of a given year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotal {
    pub month: Month,
    pub total_hours: u64,
}

/// Resample daily rows at one-calendar-day granularity, summing counts.
///
/// The source data carries one row per day, so this is effectively an
/// identity pass; duplicate dates, should they appear, are summed into
/// one bucket. Output is ordered by date.
pub fn daily_totals(records: &[DailyRecord]) -> Vec<DailyTotal> {
    let mut buckets: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for r in records {
        *buckets.entry(r.date).or_insert(0) += u64::from(r.count);
    }
    buckets
        .into_iter()
        .map(|(date, total)| DailyTotal { date, total })
        .collect()
}

/// Group daily rows by season and sum counts.
///
/// Emits at most four entries, in season code order (spring, summer,
/// fall, winter), omitting seasons absent from the input. Display
/// ordering (best-first or reversed) is the renderer's concern.
pub fn seasonal_totals(records: &[DailyRecord]) -> Vec<SeasonTotal> {
    let mut sums = [0u64; 4];
    let mut seen = [false; 4];
    for r in records {
        sums[r.season.index()] += u64::from(r.count);
        seen[r.season.index()] = true;
    }
    Season::ALL
        .into_iter()
        .filter(|s| seen[s.index()])
        .map(|season| SeasonTotal {
            season,
            total: sums[season.index()],
        })
        .collect()
}

/// Group hourly rows of one year by month, summing the derived
/// `hour * count` column.
///
/// Output follows the fixed calendar month order (Jan..Dec), never the
/// aggregate values or the input order, and omits months with no rows
/// for that year.
pub fn monthly_totals(records: &[HourlyRecord], year: Year) -> Vec<MonthlyTotal> {
    let mut sums = [0u64; 12];
    let mut seen = [false; 12];
    for r in records.iter().filter(|r| r.year == year) {
        sums[r.month.index()] += r.weighted_hours;
        seen[r.month.index()] = true;
    }
    Month::ALL
        .into_iter()
        .filter(|m| seen[m.index()])
        .map(|month| MonthlyTotal {
            month,
            total_hours: sums[month.index()],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn daily(y: i32, m: u32, d: u32, count: u32, season: Season) -> DailyRecord {
        DailyRecord {
            date: date(y, m, d),
            count,
            season,
            year: Year::Y2011,
        }
    }

    fn hourly(year: Year, month: Month, hour: u8, count: u32) -> HourlyRecord {
        HourlyRecord {
            date_label: "2011-01-01".into(),
            hour,
            count,
            weighted_hours: u64::from(hour) * u64::from(count),
            month,
            year,
        }
    }

    #[test]
    fn daily_totals_ordered_by_date() {
        let rows = vec![
            daily(2011, 1, 3, 30, Season::Spring),
            daily(2011, 1, 1, 10, Season::Spring),
            daily(2011, 1, 2, 20, Season::Spring),
        ];
        let totals = daily_totals(&rows);
        let dates: Vec<NaiveDate> = totals.iter().map(|t| t.date).collect();
        assert_eq!(
            dates,
            vec![date(2011, 1, 1), date(2011, 1, 2), date(2011, 1, 3)]
        );
        assert_eq!(totals[1].total, 20);
    }

    #[test]
    fn daily_totals_sums_duplicate_dates() {
        let rows = vec![
            daily(2011, 1, 1, 10, Season::Spring),
            daily(2011, 1, 1, 5, Season::Spring),
        ];
        let totals = daily_totals(&rows);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].total, 15);
    }

    #[test]
    fn daily_totals_of_empty_input_is_empty() {
        assert!(daily_totals(&[]).is_empty());
    }

    #[test]
    fn seasonal_totals_at_most_four_entries() {
        let rows = vec![
            daily(2011, 1, 1, 10, Season::Spring),
            daily(2011, 4, 1, 20, Season::Summer),
            daily(2011, 7, 1, 30, Season::Fall),
            daily(2011, 10, 1, 40, Season::Winter),
            daily(2011, 10, 2, 1, Season::Winter),
        ];
        let totals = seasonal_totals(&rows);
        assert_eq!(totals.len(), 4);
        assert_eq!(totals[3].season, Season::Winter);
        assert_eq!(totals[3].total, 41);
    }

    #[test]
    fn seasonal_totals_omits_absent_seasons() {
        let rows = vec![
            daily(2011, 1, 1, 10, Season::Spring),
            daily(2011, 7, 1, 30, Season::Fall),
        ];
        let totals = seasonal_totals(&rows);
        let seasons: Vec<Season> = totals.iter().map(|t| t.season).collect();
        assert_eq!(seasons, vec![Season::Spring, Season::Fall]);
    }

    #[test]
    fn uniform_year_splits_evenly_across_seasons() {
        // 364 days at 100/day over 4 equally sized seasons.
        let mut rows = Vec::new();
        let start = date(2011, 1, 1);
        for i in 0..364u32 {
            let season = Season::ALL[(i / 91) as usize];
            rows.push(DailyRecord {
                date: start + chrono::Days::new(u64::from(i)),
                count: 100,
                season,
                year: Year::Y2011,
            });
        }
        let totals = seasonal_totals(&rows);
        assert_eq!(totals.len(), 4);
        for t in totals {
            assert_eq!(t.total, 91 * 100);
        }
    }

    #[test]
    fn monthly_totals_fixed_calendar_order() {
        // Insert out of calendar order; output must come back Jan..Dec.
        let rows = vec![
            hourly(Year::Y2011, Month::Dec, 10, 5),
            hourly(Year::Y2011, Month::Jan, 8, 3),
            hourly(Year::Y2011, Month::April, 12, 2),
            hourly(Year::Y2011, Month::Jan, 9, 1),
        ];
        let totals = monthly_totals(&rows, Year::Y2011);
        let months: Vec<Month> = totals.iter().map(|t| t.month).collect();
        assert_eq!(months, vec![Month::Jan, Month::April, Month::Dec]);
        assert_eq!(totals[0].total_hours, 8 * 3 + 9);
    }

    #[test]
    fn monthly_totals_filters_by_year() {
        let rows = vec![
            hourly(Year::Y2011, Month::Jan, 8, 3),
            hourly(Year::Y2012, Month::Jan, 8, 100),
        ];
        let totals_2011 = monthly_totals(&rows, Year::Y2011);
        let totals_2012 = monthly_totals(&rows, Year::Y2012);
        assert_eq!(totals_2011[0].total_hours, 24);
        assert_eq!(totals_2012[0].total_hours, 800);
    }

    #[test]
    fn monthly_totals_dense_year_has_twelve_entries() {
        let rows: Vec<HourlyRecord> = Month::ALL
            .into_iter()
            .map(|m| hourly(Year::Y2012, m, 1, 1))
            .collect();
        assert_eq!(monthly_totals(&rows, Year::Y2012).len(), 12);
    }
}
