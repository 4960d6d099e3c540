//! Per-day income/expense buckets for the statistics chart

use chrono::{Duration, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::models::{Transaction, TransactionType};

/// Window selectable for the time series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StatisticsRange {
    #[default]
    #[serde(rename = "last-7-days")]
    Last7Days,
    LastMonth,
    SixMonths,
    OneYear,
}

impl StatisticsRange {
    pub const ALL: [StatisticsRange; 4] = [
        Self::Last7Days,
        Self::LastMonth,
        Self::SixMonths,
        Self::OneYear,
    ];

    /// Short label shown in the range selector
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Last7Days => "7 días",
            Self::LastMonth => "Mes",
            Self::SixMonths => "6 meses",
            Self::OneYear => "1 año",
        }
    }

    /// First day included in the window ending at `reference`
    pub fn start_date(&self, reference: NaiveDate) -> NaiveDate {
        let months = match self {
            Self::Last7Days => return reference - Duration::days(6),
            Self::LastMonth => 1,
            Self::SixMonths => 6,
            Self::OneYear => 12,
        };

        reference
            .checked_sub_months(Months::new(months))
            .unwrap_or(NaiveDate::MIN)
    }
}

impl fmt::Display for StatisticsRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for StatisticsRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "7d" | "week" | "last-7-days" => Ok(Self::Last7Days),
            "1m" | "month" | "last-month" => Ok(Self::LastMonth),
            "6m" | "six-months" => Ok(Self::SixMonths),
            "1y" | "year" | "one-year" => Ok(Self::OneYear),
            other => Err(format!(
                "Invalid range: '{}'. Use 7d, 1m, 6m or 1y",
                other
            )),
        }
    }
}

/// Income and expense totals for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub income: f64,
    pub expense: f64,
}

impl TimeSeriesPoint {
    pub fn net(&self) -> f64 {
        self.income - self.expense
    }
}

/// One point per day from the range start through `reference`, inclusive
pub fn calculate_time_series(
    transactions: &[Transaction],
    range: StatisticsRange,
    reference: NaiveDate,
) -> Vec<TimeSeriesPoint> {
    calculate_time_series_between(transactions, range.start_date(reference), reference)
}

/// Same as [`calculate_time_series`] with today's local date as reference
pub fn calculate_time_series_today(
    transactions: &[Transaction],
    range: StatisticsRange,
) -> Vec<TimeSeriesPoint> {
    calculate_time_series(transactions, range, Local::now().date_naive())
}

/// Daily buckets for `start..=end`; empty when `end` precedes `start`
pub fn calculate_time_series_between(
    transactions: &[Transaction],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<TimeSeriesPoint> {
    let days = (end - start).num_days();
    if days < 0 {
        return Vec::new();
    }

    // Transactions with unparseable dates never land in a bucket
    let mut totals: HashMap<NaiveDate, (f64, f64)> = HashMap::new();
    for txn in transactions {
        let Some(date) = txn.parsed_date() else {
            continue;
        };
        if date < start || date > end {
            continue;
        }

        let entry = totals.entry(date).or_insert((0.0, 0.0));
        match txn.transaction_type {
            TransactionType::Income => entry.0 += txn.amount,
            TransactionType::Expense => entry.1 += txn.amount,
        }
    }

    start
        .iter_days()
        .take(days as usize + 1)
        .map(|date| {
            let (income, expense) = totals.get(&date).copied().unwrap_or((0.0, 0.0));
            TimeSeriesPoint {
                date,
                income,
                expense,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_start_dates() {
        let reference = date(2024, 10, 9);
        assert_eq!(StatisticsRange::Last7Days.start_date(reference), date(2024, 10, 3));
        assert_eq!(StatisticsRange::LastMonth.start_date(reference), date(2024, 9, 9));
        assert_eq!(StatisticsRange::SixMonths.start_date(reference), date(2024, 4, 9));
        assert_eq!(StatisticsRange::OneYear.start_date(reference), date(2023, 10, 9));
    }

    #[test]
    fn test_month_subtraction_clamps_to_month_end() {
        assert_eq!(
            StatisticsRange::LastMonth.start_date(date(2024, 3, 31)),
            date(2024, 2, 29)
        );
    }

    #[test]
    fn test_last_seven_days_has_seven_points() {
        let txns = vec![
            Transaction::new("Sueldo", 100.0, TransactionType::Income, "Salario", "2024-10-09"),
            Transaction::new("Pan", 5.0, TransactionType::Expense, "Alimentos", "2024-10-09"),
            Transaction::new("Café", 2.5, TransactionType::Expense, "Alimentos", "2024-10-09"),
            Transaction::new("Viejo", 99.0, TransactionType::Expense, "Otros", "2024-10-01"),
            Transaction::new("Roto", 42.0, TransactionType::Expense, "Otros", "ayer"),
        ];

        let series = calculate_time_series(&txns, StatisticsRange::Last7Days, date(2024, 10, 9));
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, date(2024, 10, 3));

        let last = series.last().unwrap();
        assert_eq!(last.date, date(2024, 10, 9));
        assert_eq!(last.income, 100.0);
        assert_eq!(last.expense, 7.5);
        assert_eq!(last.net(), 92.5);

        let total_expense: f64 = series.iter().map(|p| p.expense).sum();
        assert_eq!(total_expense, 7.5);
    }

    #[test]
    fn test_series_dates_are_consecutive() {
        let series = calculate_time_series(&[], StatisticsRange::LastMonth, date(2024, 10, 9));
        assert_eq!(series.len(), 31);
        for pair in series.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
        assert!(series.iter().all(|p| p.income == 0.0 && p.expense == 0.0));
    }

    #[test]
    fn test_point_count_covers_every_range() {
        for reference in [date(2024, 10, 9), date(2024, 2, 29), date(2025, 3, 31)] {
            for range in StatisticsRange::ALL {
                let series = calculate_time_series(&[], range, reference);
                let expected = (reference - range.start_date(reference)).num_days() + 1;
                assert_eq!(series.len() as i64, expected, "{} ending {}", range, reference);
                assert_eq!(series.last().map(|p| p.date), Some(reference));
            }
        }

        let leap_year = calculate_time_series(&[], StatisticsRange::OneYear, date(2024, 2, 29));
        assert_eq!(leap_year[0].date, date(2023, 2, 28));
        assert_eq!(leap_year.len(), 367);
    }

    #[test]
    fn test_reversed_window_is_empty() {
        let series = calculate_time_series_between(&[], date(2024, 10, 9), date(2024, 10, 8));
        assert!(series.is_empty());

        let single = calculate_time_series_between(&[], date(2024, 10, 9), date(2024, 10, 9));
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn test_range_parsing_and_serde() {
        assert_eq!("6m".parse::<StatisticsRange>(), Ok(StatisticsRange::SixMonths));
        assert_eq!("Year".parse::<StatisticsRange>(), Ok(StatisticsRange::OneYear));
        assert!("decade".parse::<StatisticsRange>().is_err());

        let json = serde_json::to_string(&StatisticsRange::Last7Days).unwrap();
        assert_eq!(json, "\"last-7-days\"");
        let parsed: StatisticsRange = serde_json::from_str("\"one-year\"").unwrap();
        assert_eq!(parsed, StatisticsRange::OneYear);
    }
}
