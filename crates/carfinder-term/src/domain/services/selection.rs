#[cfg(test)]
#[path = "selection_test.rs"]
mod tests;

use super::catalog::model_years;
use crate::domain::models::Make;
use crate::domain::models::Route;
use crate::domain::models::VpicError;
use crate::domain::models::INERT_HREF;

pub const MAKES_FETCH_FAILED_MESSAGE: &str = "Failed to fetch vehicle makes.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionFocus {
    #[default]
    Make,
    Year,
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MakesStatus {
    Loading,
    Loaded,
    Failed(String),
}

/// State of the make/year picker.
pub struct SelectionPage {
    pub makes: Vec<Make>,
    pub makes_status: MakesStatus,
    pub years: Vec<i32>,
    pub selected_make_id: Option<String>,
    pub selected_year: Option<String>,
    pub focus: SelectionFocus,
    pub make_cursor: usize,
    pub year_cursor: usize,
}

impl SelectionPage {
    pub fn new(current_year: i32) -> SelectionPage {
        return SelectionPage {
            makes: vec![],
            makes_status: MakesStatus::Loading,
            years: model_years(current_year),
            selected_make_id: None,
            selected_year: None,
            focus: SelectionFocus::default(),
            make_cursor: 0,
            year_cursor: 0,
        };
    }

    pub fn set_current_year(&mut self, current_year: i32) {
        self.years = model_years(current_year);
        self.year_cursor = self.year_cursor.min(self.years.len().saturating_sub(1));
    }

    pub fn handle_makes(&mut self, result: Result<Vec<Make>, VpicError>) {
        match result {
            Ok(makes) => {
                self.makes = makes;
                self.makes_status = MakesStatus::Loaded;
            }
            Err(_) => {
                self.makes = vec![];
                self.makes_status = MakesStatus::Failed(MAKES_FETCH_FAILED_MESSAGE.to_string());
            }
        }
        self.make_cursor = 0;
    }

    pub fn select_make(&mut self, make_id: &str) {
        self.selected_make_id = Some(make_id.to_string());
    }

    pub fn select_year(&mut self, year: &str) {
        self.selected_year = Some(year.to_string());
    }

    pub fn selected_make(&self) -> Option<&Make> {
        let id = self.selected_make_id.as_deref()?;
        return self.makes.iter().find(|make| make.id == id);
    }

    pub fn navigation_enabled(&self) -> bool {
        let has_make = self
            .selected_make_id
            .as_deref()
            .is_some_and(|id| !id.is_empty());
        let has_year = self
            .selected_year
            .as_deref()
            .is_some_and(|year| !year.is_empty());

        return has_make && has_year;
    }

    /// Where the `Next` action points; the inert placeholder while disabled.
    pub fn href(&self) -> String {
        if let Some(route) = self.next_route() {
            return route.path();
        }

        return INERT_HREF.to_string();
    }

    pub fn next_route(&self) -> Option<Route> {
        if !self.navigation_enabled() {
            return None;
        }

        return Some(Route::results(
            self.selected_make_id.as_deref()?,
            self.selected_year.as_deref()?,
        ));
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            SelectionFocus::Make => SelectionFocus::Year,
            SelectionFocus::Year => SelectionFocus::Next,
            SelectionFocus::Next => SelectionFocus::Make,
        };
    }

    pub fn focus_previous(&mut self) {
        self.focus = match self.focus {
            SelectionFocus::Make => SelectionFocus::Next,
            SelectionFocus::Year => SelectionFocus::Make,
            SelectionFocus::Next => SelectionFocus::Year,
        };
    }

    pub fn move_up(&mut self) {
        match self.focus {
            SelectionFocus::Make => self.make_cursor = self.make_cursor.saturating_sub(1),
            SelectionFocus::Year => self.year_cursor = self.year_cursor.saturating_sub(1),
            SelectionFocus::Next => {}
        }
    }

    pub fn move_down(&mut self) {
        match self.focus {
            SelectionFocus::Make => {
                if self.make_cursor + 1 < self.makes.len() {
                    self.make_cursor += 1;
                }
            }
            SelectionFocus::Year => {
                if self.year_cursor + 1 < self.years.len() {
                    self.year_cursor += 1;
                }
            }
            SelectionFocus::Next => {}
        }
    }

    /// Enter on the focused widget. Returns the route to navigate to when the
    /// enabled `Next` button is activated.
    pub fn activate(&mut self) -> Option<Route> {
        match self.focus {
            SelectionFocus::Make => {
                if let Some(make) = self.makes.get(self.make_cursor) {
                    let id = make.id.to_string();
                    self.select_make(&id);
                    self.focus = SelectionFocus::Year;
                }
                return None;
            }
            SelectionFocus::Year => {
                if let Some(year) = self.years.get(self.year_cursor) {
                    self.select_year(&year.to_string());
                    self.focus = SelectionFocus::Next;
                }
                return None;
            }
            SelectionFocus::Next => return self.next_route(),
        }
    }
}
