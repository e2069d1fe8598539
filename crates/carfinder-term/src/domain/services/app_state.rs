use anyhow::Result;
use tokio::sync::mpsc;

use super::History;
use super::ResultsPage;
use super::SelectionPage;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Route;
use crate::domain::models::RouteParams;

#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

pub struct AppStateProps {
    pub vehicle_type: String,
    pub initial_route: Route,
    pub current_year: i32,
}

pub struct AppState {
    pub current_year: i32,
    pub history: History,
    pub results: Option<ResultsPage>,
    pub selection: SelectionPage,
    pub should_quit: bool,
    last_generation: u64,
}

impl AppState {
    /// Mounts the Selection screen, which fetches makes once, and then the
    /// initial route on top of it.
    pub fn new(props: AppStateProps, tx: &mpsc::UnboundedSender<Action>) -> Result<AppState> {
        let mut app_state = AppState {
            current_year: props.current_year,
            history: History::starting_at(props.initial_route),
            results: None,
            selection: SelectionPage::new(props.current_year),
            should_quit: false,
            last_generation: 0,
        };

        tx.send(Action::FetchMakes(props.vehicle_type))?;
        app_state.mount_current(tx)?;

        Ok(app_state)
    }

    pub fn current_route(&self) -> &Route {
        return self.history.current();
    }

    pub fn set_current_year(&mut self, current_year: i32) {
        if self.current_year != current_year {
            self.current_year = current_year;
            self.selection.set_current_year(current_year);
        }
    }

    pub fn navigate(&mut self, route: Route, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        self.history.push(route);
        return self.mount_current(tx);
    }

    pub fn back(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if self.history.back() {
            return self.mount_current(tx);
        }
        return Ok(());
    }

    /// Swaps the params of the mounted Results screen in place, the way a
    /// route parameter change reaches an already mounted page.
    pub fn replace_params(
        &mut self,
        params: RouteParams,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        self.history.replace(Route::Results(params.clone()));

        if let Some(page) = self.results.as_mut() {
            if let Some(request) = page.set_params(params) {
                self.last_generation = request.generation;
                tx.send(Action::FetchModels(request))?;
            }
        }

        return Ok(());
    }

    fn unmount_results(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if let Some(page) = self.results.take() {
            self.last_generation = self.last_generation.max(page.generation());
            tx.send(Action::CancelModels)?;
        }
        return Ok(());
    }

    fn mount_current(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        self.unmount_results(tx)?;

        if let Route::Results(params) = self.history.current().clone() {
            let (page, request) = ResultsPage::mount_after(params, self.last_generation);
            self.results = Some(page);

            if let Some(request) = request {
                self.last_generation = request.generation;
                tx.send(Action::FetchModels(request))?;
            }
        }

        return Ok(());
    }

    pub fn handle_event(&mut self, event: Event, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        match event {
            Event::MakesLoaded(result) => self.selection.handle_makes(result),
            Event::ModelsLoaded {
                generation,
                outcome,
            } => match self.results.as_mut() {
                Some(page) => {
                    page.resolve(generation, outcome);
                }
                None => {
                    tracing::debug!(generation, "models response arrived after unmount");
                }
            },
            Event::KeyboardCTRLC | Event::KeyboardQuit => self.should_quit = true,
            Event::UITick => {}
            input => {
                if matches!(self.current_route(), Route::Results(_)) {
                    self.handle_results_input(input, tx)?;
                } else {
                    self.handle_selection_input(input, tx)?;
                }
            }
        }

        return Ok(());
    }

    fn handle_selection_input(
        &mut self,
        event: Event,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        match event {
            Event::KeyboardTab => self.selection.focus_next(),
            Event::KeyboardBackTab => self.selection.focus_previous(),
            Event::KeyboardUp => self.selection.move_up(),
            Event::KeyboardDown => self.selection.move_down(),
            Event::KeyboardEnter => {
                if let Some(route) = self.selection.activate() {
                    self.navigate(route, tx)?;
                }
            }
            _ => {}
        }

        return Ok(());
    }

    fn handle_results_input(
        &mut self,
        event: Event,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        let Some(page) = self.results.as_mut() else {
            return Ok(());
        };

        match event {
            Event::KeyboardBack | Event::KeyboardEnter => self.back(tx)?,
            Event::KeyboardUp => page.scroll_up(),
            Event::KeyboardDown => page.scroll_down(),
            Event::KeyboardLeft | Event::KeyboardRight => {
                let delta = if matches!(event, Event::KeyboardLeft) { -1 } else { 1 };
                if let Some(params) = page.step_year(delta, self.current_year) {
                    self.replace_params(params, tx)?;
                }
            }
            _ => {}
        }

        return Ok(());
    }
}
