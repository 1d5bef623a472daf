//! Attendance aggregation for the report chart, the dashboard chart and the
//! CSV export.

pub mod csv;

use chrono::{Datelike, NaiveDate};

use crate::models::{AttendanceRecord, Event};

/// Anything with a label, a date and a countable attendee collection.
pub trait AttendanceSource {
    fn label(&self) -> &str;
    fn date(&self) -> NaiveDate;
    fn attendee_count(&self) -> usize;
}

impl AttendanceSource for Event {
    fn label(&self) -> &str {
        &self.name
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn attendee_count(&self) -> usize {
        self.attendees.len()
    }
}

impl AttendanceSource for AttendanceRecord {
    fn label(&self) -> &str {
        &self.event_name
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn attendee_count(&self) -> usize {
        self.attendees.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceCount {
    pub label: String,
    pub count: usize,
}

/// One bar of a chart, `percent` relative to the tallest bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartBar {
    pub label: String,
    pub count: usize,
    pub percent: u32,
}

/// Attendee count per record, in input order.
pub fn aggregate<S: AttendanceSource>(records: &[S]) -> Vec<AttendanceCount> {
    records
        .iter()
        .map(|r| AttendanceCount {
            label: r.label().to_string(),
            count: r.attendee_count(),
        })
        .collect()
}

pub fn chart_bars(counts: &[AttendanceCount]) -> Vec<ChartBar> {
    let max = counts.iter().map(|c| c.count).max().unwrap_or(0);
    counts
        .iter()
        .map(|c| ChartBar {
            label: c.label.clone(),
            count: c.count,
            percent: if max == 0 {
                0
            } else {
                (c.count * 100 / max) as u32
            },
        })
        .collect()
}

/// Attendee totals per calendar month, oldest month first.
/// Labels look like "Mar 2024".
pub fn monthly_overview<S: AttendanceSource>(records: &[S]) -> Vec<AttendanceCount> {
    let mut months: Vec<((i32, u32), usize)> = Vec::new();
    for r in records {
        let key = (r.date().year(), r.date().month());
        match months.iter_mut().find(|(k, _)| *k == key) {
            Some((_, total)) => *total += r.attendee_count(),
            None => months.push((key, r.attendee_count())),
        }
    }
    months.sort_by_key(|(k, _)| *k);

    months
        .into_iter()
        .filter_map(|((year, month), count)| {
            let first = NaiveDate::from_ymd_opt(year, month, 1)?;
            Some(AttendanceCount {
                label: first.format("%b %Y").to_string(),
                count,
            })
        })
        .collect()
}
