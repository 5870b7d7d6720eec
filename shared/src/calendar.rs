//! Month-grid model behind the date selector.
//!
//! Weeks start on Monday. The grid is always rectangular: blank cells pad
//! the first week up to the weekday of day 1 and fill out the last week.

use chrono::{Datelike, NaiveDate};

use crate::dates::{format_display, month_name, seed_date};

/// The month currently rendered by a calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleMonth {
    year: i32,
    /// Zero-based, always in `0..=11`
    month_index: u32,
}

impl VisibleMonth {
    pub fn new(year: i32, month_index: u32) -> Option<Self> {
        (month_index <= 11).then_some(Self { year, month_index })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month_index: date.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month_index(&self) -> u32 {
        self.month_index
    }

    /// One-based month number, as printed
    pub fn month_number(&self) -> u32 {
        self.month_index + 1
    }

    pub fn next(self) -> Self {
        if self.month_index == 11 {
            Self { year: self.year + 1, month_index: 0 }
        } else {
            Self { year: self.year, month_index: self.month_index + 1 }
        }
    }

    pub fn previous(self) -> Self {
        if self.month_index == 0 {
            Self { year: self.year - 1, month_index: 11 }
        } else {
            Self { year: self.year, month_index: self.month_index - 1 }
        }
    }

    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month_number(), day)
    }

    /// Day 0 of the following month is the last day of this one.
    pub fn days_in_month(&self) -> u32 {
        let following = self.next();
        following
            .date(1)
            .and_then(|first| first.pred_opt())
            .map(|last| last.day())
            .unwrap_or(31)
    }

    /// Weekday of day 1, 0 = Sunday
    pub fn first_weekday(&self) -> u32 {
        self.date(1)
            .map(|first| first.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    /// Blank cells before day 1 when weeks start on Monday
    pub fn leading_blanks(&self) -> usize {
        ((self.first_weekday() + 6) % 7) as usize
    }

    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month_number()), self.year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    Blank,
    Day { day: u32, selected: bool, today: bool },
}

impl CalendarCell {
    pub fn day(&self) -> Option<u32> {
        match self {
            CalendarCell::Blank => None,
            CalendarCell::Day { day, .. } => Some(*day),
        }
    }
}

/// Rendered month: rows of exactly seven cells
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarGrid {
    pub month: VisibleMonth,
    pub weeks: Vec<[CalendarCell; 7]>,
}

impl CalendarGrid {
    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.weeks.iter().flat_map(|week| week.iter())
    }
}

pub const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Selection state of one date selector instance
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarState {
    visible: VisibleMonth,
    selected: Option<NaiveDate>,
}

impl CalendarState {
    /// Open on the month of `seed` with that day selected. A missing or
    /// unreadable seed opens on `today` instead; this never fails.
    pub fn seeded(seed: Option<&str>, today: NaiveDate) -> Self {
        let date = seed_date(seed, today);
        Self {
            visible: VisibleMonth::of(date),
            selected: Some(date),
        }
    }

    /// A calendar showing `visible` with nothing picked yet
    pub fn showing(visible: VisibleMonth) -> Self {
        Self { visible, selected: None }
    }

    pub fn visible(&self) -> VisibleMonth {
        self.visible
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn previous_month(&mut self) {
        self.visible = self.visible.previous();
    }

    pub fn next_month(&mut self) {
        self.visible = self.visible.next();
    }

    /// Select `day` of the visible month and return it as `DD/MM/YY`.
    ///
    /// Days outside the visible month leave the state untouched.
    pub fn pick(&mut self, day: u32) -> Option<String> {
        self.pick_date(day).map(format_display)
    }

    /// Same as [`pick`](Self::pick) but hands back the full date, which keeps
    /// the century that `DD/MM/YY` drops.
    pub fn pick_date(&mut self, day: u32) -> Option<NaiveDate> {
        if day == 0 || day > self.visible.days_in_month() {
            log::warn!("ignoring pick of day {} in {}", day, self.visible.title());
            return None;
        }
        let date = self.visible.date(day)?;
        self.selected = Some(date);
        Some(date)
    }

    pub fn is_selected(&self, day: u32) -> bool {
        self.selected
            .map(|selected| {
                selected.day() == day
                    && selected.month0() == self.visible.month_index()
                    && selected.year() == self.visible.year()
            })
            .unwrap_or(false)
    }

    pub fn grid(&self, today: NaiveDate) -> CalendarGrid {
        let month = self.visible;
        let mut cells = vec![CalendarCell::Blank; month.leading_blanks()];

        for day in 1..=month.days_in_month() {
            cells.push(CalendarCell::Day {
                day,
                selected: self.is_selected(day),
                today: month.date(day) == Some(today),
            });
        }

        while cells.len() % 7 != 0 {
            cells.push(CalendarCell::Blank);
        }

        let weeks = cells
            .chunks(7)
            .map(|chunk| {
                let mut week = [CalendarCell::Blank; 7];
                week.copy_from_slice(chunk);
                week
            })
            .collect();

        CalendarGrid { month, weeks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(VisibleMonth::new(2025, 0).unwrap().days_in_month(), 31);
        assert_eq!(VisibleMonth::new(2025, 3).unwrap().days_in_month(), 30);
        assert_eq!(VisibleMonth::new(2025, 1).unwrap().days_in_month(), 28);
        assert_eq!(VisibleMonth::new(2024, 1).unwrap().days_in_month(), 29);
        assert_eq!(VisibleMonth::new(1900, 1).unwrap().days_in_month(), 28);
        assert_eq!(VisibleMonth::new(2000, 1).unwrap().days_in_month(), 29);
        assert_eq!(VisibleMonth::new(2025, 11).unwrap().days_in_month(), 31);
    }

    #[test]
    fn test_month_index_is_bounded() {
        assert!(VisibleMonth::new(2025, 11).is_some());
        assert!(VisibleMonth::new(2025, 12).is_none());
    }

    #[test]
    fn test_navigation_wraps_years() {
        let january = VisibleMonth::new(2025, 0).unwrap();
        assert_eq!(january.previous(), VisibleMonth::new(2024, 11).unwrap());

        let december = VisibleMonth::new(2025, 11).unwrap();
        assert_eq!(december.next(), VisibleMonth::new(2026, 0).unwrap());
    }

    #[test]
    fn test_twelve_steps_forward_advance_one_year() {
        for month_index in 0..12 {
            let start = VisibleMonth::new(2025, month_index).unwrap();
            let mut state = CalendarState::showing(start);
            for _ in 0..12 {
                state.next_month();
            }
            assert_eq!(state.visible().month_index(), month_index);
            assert_eq!(state.visible().year(), 2026);
        }
    }

    #[test]
    fn test_navigation_keeps_selection() {
        let mut state = CalendarState::seeded(Some("12/01/25"), ymd(2026, 10, 19));
        state.next_month();
        state.previous_month();
        state.previous_month();
        assert_eq!(state.selected(), Some(ymd(2025, 1, 12)));
        assert_eq!(state.visible(), VisibleMonth::new(2024, 11).unwrap());
    }

    #[test]
    fn test_grid_shape_for_every_month() {
        for year in 1990..=2040 {
            for month_index in 0..12 {
                let month = VisibleMonth::new(year, month_index).unwrap();
                let grid = CalendarState::showing(month).grid(ymd(2026, 10, 19));
                let cells: Vec<_> = grid.cells().copied().collect();

                assert_eq!(cells.len() % 7, 0, "{}", month.title());

                let days: Vec<u32> = cells.iter().filter_map(CalendarCell::day).collect();
                let expected: Vec<u32> = (1..=month.days_in_month()).collect();
                assert_eq!(days, expected, "{}", month.title());

                let first_day_column = cells
                    .iter()
                    .position(|cell| cell.day().is_some())
                    .unwrap();
                assert_eq!(
                    first_day_column,
                    ((month.first_weekday() + 6) % 7) as usize,
                    "{}",
                    month.title()
                );
            }
        }
    }

    #[test]
    fn test_grid_starts_on_monday() {
        // 1 March 2025 is a Saturday
        let march = VisibleMonth::new(2025, 2).unwrap();
        assert_eq!(march.first_weekday(), 6);
        assert_eq!(march.leading_blanks(), 5);

        // 1 June 2025 is a Sunday, so it sits in the last column
        let june = VisibleMonth::new(2025, 5).unwrap();
        assert_eq!(june.leading_blanks(), 6);

        // 1 September 2025 is a Monday
        let september = VisibleMonth::new(2025, 8).unwrap();
        assert_eq!(september.leading_blanks(), 0);
    }

    #[test]
    fn test_seed_in_display_format() {
        let state = CalendarState::seeded(Some("12/01/25"), ymd(2026, 10, 19));
        assert_eq!(state.selected(), Some(ymd(2025, 1, 12)));
        assert_eq!(state.visible(), VisibleMonth::new(2025, 0).unwrap());
    }

    #[test]
    fn test_unparseable_seed_opens_today() {
        let today = ymd(2026, 10, 19);
        for seed in [None, Some(""), Some("not-a-date"), Some("32/01/25")] {
            let state = CalendarState::seeded(seed, today);
            assert_eq!(state.selected(), Some(today));
            assert_eq!(state.visible(), VisibleMonth::of(today));
        }
    }

    #[test]
    fn test_pick_formats_display_date() {
        let mut state = CalendarState::showing(VisibleMonth::new(2025, 2).unwrap());
        assert_eq!(state.pick(15).as_deref(), Some("15/03/25"));
        assert_eq!(state.selected(), Some(ymd(2025, 3, 15)));
    }

    #[test]
    fn test_pick_date_keeps_century() {
        let mut state = CalendarState::showing(VisibleMonth::new(2000, 0).unwrap());
        state.previous_month();
        assert_eq!(state.pick_date(15), Some(ymd(1999, 12, 15)));
        assert_eq!(state.pick(15).as_deref(), Some("15/12/99"));
        assert_eq!(state.selected(), Some(ymd(1999, 12, 15)));
    }

    #[test]
    fn test_pick_out_of_range_is_ignored() {
        let mut state = CalendarState::showing(VisibleMonth::new(2025, 1).unwrap());
        assert_eq!(state.pick(0), None);
        assert_eq!(state.pick(29), None);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_selection_highlight_needs_same_month_and_year() {
        let mut state = CalendarState::seeded(Some("15/03/25"), ymd(2026, 10, 19));
        assert!(state.is_selected(15));
        assert!(!state.is_selected(14));

        state.next_month();
        assert!(!state.is_selected(15));

        for _ in 0..12 {
            state.previous_month();
        }
        // April 2024: same day and month number, different year
        assert!(!state.is_selected(15));
    }

    #[test]
    fn test_grid_marks_selected_and_today() {
        let today = ymd(2025, 3, 20);
        let state = CalendarState::seeded(Some("2025-03-15"), today);
        let grid = state.grid(today);

        let selected: Vec<u32> = grid
            .cells()
            .filter_map(|cell| match cell {
                CalendarCell::Day { day, selected: true, .. } => Some(*day),
                _ => None,
            })
            .collect();
        assert_eq!(selected, vec![15]);

        let marked_today: Vec<u32> = grid
            .cells()
            .filter_map(|cell| match cell {
                CalendarCell::Day { day, today: true, .. } => Some(*day),
                _ => None,
            })
            .collect();
        assert_eq!(marked_today, vec![20]);
    }

    #[test]
    fn test_title() {
        assert_eq!(VisibleMonth::new(2025, 2).unwrap().title(), "March 2025");
    }
}
