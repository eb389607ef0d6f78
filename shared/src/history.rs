//! Navigation over settled weeks: year → month → week.
//!
//! Weeks are grouped by the calendar year and month of their Monday, so
//! `2025-W01` (Monday 2024-12-30) is listed under December 2024.

use std::collections::BTreeMap;

use chrono::Datelike;
use log::warn;

use crate::week::WeekId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryMonth {
    pub month: u32,
    pub weeks: Vec<WeekId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryYear {
    pub year: i32,
    pub months: Vec<HistoryMonth>,
}

/// Group week identifiers by their Monday's year and month, newest first.
/// Weeks keep their order within a month; identifiers that do not parse are
/// skipped.
pub fn group_history_weeks(labels: &[String]) -> Vec<HistoryYear> {
    let mut grouped: BTreeMap<i32, BTreeMap<u32, Vec<WeekId>>> = BTreeMap::new();
    for label in labels {
        match label.parse::<WeekId>() {
            Ok(week) => {
                let monday = week.monday();
                grouped
                    .entry(monday.year())
                    .or_default()
                    .entry(monday.month())
                    .or_default()
                    .push(week);
            }
            Err(e) => warn!("⚠️ HISTORY: skipping week label: {}", e),
        }
    }

    grouped
        .into_iter()
        .rev()
        .map(|(year, months)| HistoryYear {
            year,
            months: months
                .into_iter()
                .rev()
                .map(|(month, weeks)| HistoryMonth { month, weeks })
                .collect(),
        })
        .collect()
}

/// Weeks of one month in a grouping, empty if absent
pub fn weeks_in_month(groups: &[HistoryYear], year: i32, month: u32) -> Vec<WeekId> {
    groups
        .iter()
        .find(|y| y.year == year)
        .and_then(|y| y.months.iter().find(|m| m.month == month))
        .map(|m| m.weeks.clone())
        .unwrap_or_default()
}
