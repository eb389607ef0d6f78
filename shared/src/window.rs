//! Week window settings.
//!
//! The number of future weeks offered in the week selector grows when an
//! exclusion reaches past the end of the window, and that number is
//! remembered between sessions. The settings object owns the count and hands
//! every change to a [`FutureWeeksStore`] supplied at construction.

use std::cell::Cell;

use chrono::NaiveDate;
use log::{info, warn};

use crate::week::{generate_week_window, monday_of, weeks_between, WeekLocale, WeekOption};
use crate::ClientConfig;

/// Persistence for the future-week count
pub trait FutureWeeksStore {
    fn load(&self) -> Option<u32>;
    fn save(&self, future_weeks: u32);
}

/// Store that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryFutureWeeksStore {
    value: Cell<Option<u32>>,
    saves: Cell<u32>,
}

impl MemoryFutureWeeksStore {
    pub fn with_value(future_weeks: u32) -> Self {
        Self {
            value: Cell::new(Some(future_weeks)),
            saves: Cell::new(0),
        }
    }

    /// How many times `save` has been called
    pub fn save_count(&self) -> u32 {
        self.saves.get()
    }
}

impl FutureWeeksStore for MemoryFutureWeeksStore {
    fn load(&self) -> Option<u32> {
        self.value.get()
    }

    fn save(&self, future_weeks: u32) {
        self.value.set(Some(future_weeks));
        self.saves.set(self.saves.get() + 1);
    }
}

impl<S: FutureWeeksStore + ?Sized> FutureWeeksStore for &S {
    fn load(&self) -> Option<u32> {
        (**self).load()
    }

    fn save(&self, future_weeks: u32) {
        (**self).save(future_weeks)
    }
}

#[derive(Debug)]
pub struct WeekWindowSettings<S> {
    past_weeks: u32,
    min_future_weeks: u32,
    max_future_weeks: u32,
    future_weeks: u32,
    locale: WeekLocale,
    store: S,
}

impl<S: FutureWeeksStore> WeekWindowSettings<S> {
    /// Read the persisted future-week count, kept between the floor and the
    /// ceiling.
    ///
    /// The ceiling is the floor plus the longest exclusion span, the furthest
    /// an exclusion started inside the default window can reach.
    pub fn new(config: &ClientConfig, store: S) -> Self {
        let min_future_weeks = config.min_future_weeks;
        let max_future_weeks = min_future_weeks.saturating_add(config.max_exclude_weeks.max(1));
        let future_weeks = store
            .load()
            .map_or(min_future_weeks, |stored| stored.clamp(min_future_weeks, max_future_weeks));
        Self {
            past_weeks: config.past_weeks.max(1),
            min_future_weeks,
            max_future_weeks,
            future_weeks,
            locale: config.locale,
            store,
        }
    }

    pub fn past_weeks(&self) -> u32 {
        self.past_weeks
    }

    pub fn future_weeks(&self) -> u32 {
        self.future_weeks
    }

    pub fn max_future_weeks(&self) -> u32 {
        self.max_future_weeks
    }

    pub fn locale(&self) -> WeekLocale {
        self.locale
    }

    /// The selectable weeks around `today`
    pub fn window(&self, today: NaiveDate) -> Vec<WeekOption> {
        generate_week_window(today, self.past_weeks, self.future_weeks, self.locale)
    }

    /// Grow the window so that the week of `target` is offered, up to the
    /// ceiling.
    ///
    /// Returns `true` when the count changed (and was saved).
    pub fn ensure_covers(&mut self, today: NaiveDate, target: NaiveDate) -> bool {
        let needed = weeks_between(monday_of(today), target);
        if needed <= i64::from(self.future_weeks) {
            return false;
        }
        let needed = match u32::try_from(needed) {
            Ok(needed) if needed <= self.max_future_weeks => needed,
            _ => {
                warn!(
                    "📅 WINDOW: {} is beyond the {}-week ceiling, capping",
                    target, self.max_future_weeks
                );
                self.max_future_weeks
            }
        };
        if needed <= self.future_weeks {
            return false;
        }
        info!(
            "📅 WINDOW: extending future weeks {} -> {} to reach {}",
            self.future_weeks, needed, target
        );
        self.set_future_weeks(needed)
    }

    /// Set the future-week count (clamped), saving it when it changes
    pub fn set_future_weeks(&mut self, future_weeks: u32) -> bool {
        let future_weeks = future_weeks.clamp(self.min_future_weeks, self.max_future_weeks);
        if future_weeks == self.future_weeks {
            return false;
        }
        self.future_weeks = future_weeks;
        self.store.save(future_weeks);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_applies_floor_to_stored_value() {
        let config = ClientConfig::default();

        let empty = MemoryFutureWeeksStore::default();
        assert_eq!(WeekWindowSettings::new(&config, &empty).future_weeks(), 4);

        let small = MemoryFutureWeeksStore::with_value(1);
        assert_eq!(WeekWindowSettings::new(&config, &small).future_weeks(), 4);

        let large = MemoryFutureWeeksStore::with_value(9);
        let settings = WeekWindowSettings::new(&config, &large);
        assert_eq!(settings.future_weeks(), 9);
        assert_eq!(settings.window(date(2026, 2, 5)).len(), 25);
        assert_eq!(large.save_count(), 0);
    }

    #[test]
    fn test_ensure_covers_extends_and_persists() {
        let config = ClientConfig::default();
        let store = MemoryFutureWeeksStore::default();
        let mut settings = WeekWindowSettings::new(&config, &store);
        let today = date(2026, 2, 5);

        // Inside the current window: nothing to do
        assert!(!settings.ensure_covers(today, date(2026, 3, 2)));
        assert_eq!(store.save_count(), 0);

        // 2026-W12 starts 2026-03-16, six weeks after 2026-02-02
        assert!(settings.ensure_covers(today, date(2026, 3, 18)));
        assert_eq!(settings.future_weeks(), 6);
        assert_eq!(store.load(), Some(6));

        let window = settings.window(today);
        assert_eq!(window[0].monday, date(2026, 3, 16));

        // A second session starts with the wider window
        let reopened = WeekWindowSettings::new(&config, &store);
        assert_eq!(reopened.future_weeks(), 6);
    }

    #[test]
    fn test_past_targets_never_shrink_window() {
        let config = ClientConfig::default();
        let store = MemoryFutureWeeksStore::with_value(8);
        let mut settings = WeekWindowSettings::new(&config, &store);
        assert!(!settings.ensure_covers(date(2026, 2, 5), date(2025, 12, 1)));
        assert!(!settings.set_future_weeks(8));
        assert!(settings.set_future_weeks(0));
        assert_eq!(settings.future_weeks(), 4);
        assert_eq!(store.load(), Some(4));
    }

    #[test]
    fn test_far_future_end_week_is_capped() {
        let config = ClientConfig::default();
        let store = MemoryFutureWeeksStore::default();
        let mut settings = WeekWindowSettings::new(&config, &store);
        assert_eq!(settings.max_future_weeks(), 16);

        assert!(settings.ensure_covers(date(2026, 2, 5), date(2099, 1, 5)));
        assert_eq!(settings.future_weeks(), 16);
        assert_eq!(store.load(), Some(16));
        assert!(!settings.ensure_covers(date(2026, 2, 5), date(2099, 1, 5)));
        assert_eq!(store.save_count(), 1);

        let oversized = MemoryFutureWeeksStore::with_value(5000);
        assert_eq!(WeekWindowSettings::new(&config, &oversized).future_weeks(), 16);
    }

}
