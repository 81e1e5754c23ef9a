//! CSV loading and normalization.
//!
//! Reads the two source tables (daily and hourly ride counts), parses the
//! date column of the daily table, decodes the season/month/year codes,
//! and derives the hourly table's `hour * count` column. The raw files
//! carry more columns than we use; the readers pick fields by header name
//! and ignore the rest.
//!
//! Malformed dates and out-of-range codes reject the load with a
//! row-numbered error rather than propagating undefined labels.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{PipelineError, Result};
use crate::model::{DailyRecord, HourlyRecord, Month, Season, Year};

/// Raw row of `day.csv`, one entry per calendar day.
#[derive(Debug, Deserialize)]
struct RawDailyRow {
    dteday: String,
    season: u32,
    yr: u32,
    cnt: u32,
}

/// Raw row of `hour.csv`, one entry per (date, hour) pair.
#[derive(Debug, Deserialize)]
struct RawHourlyRow {
    dteday: String,
    yr: u32,
    mnth: u32,
    hr: u32,
    cnt: u32,
}

/// Load and normalize the daily table.
pub fn load_daily(path: &Path) -> Result<Vec<DailyRecord>> {
    let mut reader = open_csv(path)?;
    let mut records = Vec::new();

    for (i, row) in reader.deserialize::<RawDailyRow>().enumerate() {
        // Header occupies line 1; the first record is line 2.
        let line = i + 2;
        let row = row.map_err(|source| PipelineError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        records.push(DailyRecord {
            date: parse_date(&row.dteday, line)?,
            count: row.cnt,
            season: Season::from_code(row.season).ok_or(PipelineError::BadCode {
                row: line,
                column: "season",
                value: row.season,
            })?,
            year: Year::from_code(row.yr).ok_or(PipelineError::BadCode {
                row: line,
                column: "yr",
                value: row.yr,
            })?,
        });
    }

    if records.is_empty() {
        return Err(PipelineError::EmptyTable {
            path: path.to_path_buf(),
        });
    }
    Ok(records)
}

/// Load and normalize the hourly table.
///
/// The date column stays an opaque label here; only the month and year
/// codes are decoded, and the `hour * count` column is derived per row.
pub fn load_hourly(path: &Path) -> Result<Vec<HourlyRecord>> {
    let mut reader = open_csv(path)?;
    let mut records = Vec::new();

    for (i, row) in reader.deserialize::<RawHourlyRow>().enumerate() {
        let line = i + 2;
        let row = row.map_err(|source| PipelineError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        if row.hr > 23 {
            return Err(PipelineError::BadCode {
                row: line,
                column: "hr",
                value: row.hr,
            });
        }

        records.push(HourlyRecord {
            date_label: row.dteday,
            hour: row.hr as u8,
            count: row.cnt,
            weighted_hours: u64::from(row.hr) * u64::from(row.cnt),
            month: Month::from_code(row.mnth).ok_or(PipelineError::BadCode {
                row: line,
                column: "mnth",
                value: row.mnth,
            })?,
            year: Year::from_code(row.yr).ok_or(PipelineError::BadCode {
                row: line,
                column: "yr",
                value: row.yr,
            })?,
        });
    }

    if records.is_empty() {
        return Err(PipelineError::EmptyTable {
            path: path.to_path_buf(),
        });
    }
    Ok(records)
}

fn open_csv(path: &Path) -> Result<csv::Reader<BufReader<File>>> {
    let file = File::open(path).map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(csv::Reader::from_reader(BufReader::new(file)))
}

fn parse_date(value: &str, line: usize) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| PipelineError::BadDate {
        row: line,
        value: value.to_string(),
    })
}
