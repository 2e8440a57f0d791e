use anyhow::Result;
use chrono::{Datelike, Duration, Local, NaiveDate};
use daygraph_core::{format_key, HighlightEvent, SelectionController, ViewState};

/// Which input set is live: calendar browsing, or the open modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Modal,
}

pub struct App {
    pub controller: SelectionController,
    pub view: ViewState,
    pub highlights: Vec<HighlightEvent>,
    /// Day the calendar cursor sits on; also decides the shown month.
    pub cursor: NaiveDate,
    pub today: NaiveDate,
}

impl App {
    pub fn new(controller: SelectionController) -> Result<App> {
        let highlights = controller.store().highlight_events()?;
        let today = Local::now().date_naive();
        Ok(App {
            controller,
            view: ViewState::new(),
            highlights,
            cursor: today,
            today,
        })
    }

    /// The input mode follows the modal: while it is open, all keys
    /// belong to it.
    pub fn mode(&self) -> Mode {
        if self.view.modal.is_open {
            Mode::Modal
        } else {
            Mode::Browse
        }
    }

    pub fn move_days(&mut self, delta: i64) {
        self.cursor = self.cursor + Duration::days(delta);
    }

    pub fn previous_month(&mut self) {
        self.cursor = shift_month(self.cursor, -1);
    }

    pub fn next_month(&mut self) {
        self.cursor = shift_month(self.cursor, 1);
    }

    pub fn goto_today(&mut self) {
        self.cursor = self.today;
    }

    /// Fire the "date selected" event for the cursor day.
    pub fn select_cursor(&mut self) {
        self.controller.select_date(&mut self.view, self.cursor);
    }

    pub fn close_modal(&mut self) {
        self.controller.close_modal(&mut self.view);
    }

    pub fn has_data_on(&self, date: NaiveDate) -> bool {
        self.controller.store().has_data(&format_key(date))
    }
}

/// Move `date` by whole months, clamping the day to the target month's
/// length (Jan 31 - 1 month -> Dec 31, Mar 31 - 1 month -> Feb 28/29).
fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let total = date.year() * 12 + date.month0() as i32 + delta;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next_first.unwrap().pred_opt().unwrap().day()
}

/// Lay the month out as Sunday-first weeks; cells outside the month
/// are `None` and render blank.
pub fn month_grid(year: i32, month: u32) -> Vec<[Option<NaiveDate>; 7]> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let lead = first.weekday().num_days_from_sunday() as usize;

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = lead;
    for day in 1..=days_in_month(year, month) {
        week[slot] = NaiveDate::from_ymd_opt(year, month, day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}
