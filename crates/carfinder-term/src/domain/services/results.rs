#[cfg(test)]
#[path = "results_test.rs"]
mod tests;

use super::catalog::is_selectable_year;
use crate::domain::models::ModelsRequest;
use crate::domain::models::RouteParams;
use crate::domain::models::VehicleModel;
use crate::domain::models::VpicError;

pub const NO_MODELS_FOUND_MESSAGE: &str = "No models found for the selected make and year.";
pub const MODELS_FETCH_FAILED_MESSAGE: &str = "Failed to fetch vehicle models. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelsError {
    /// The request succeeded with zero results.
    NotFound,
    /// Transport, status or decode failure.
    FetchFailed,
}

impl ModelsError {
    pub fn message(&self) -> &'static str {
        match self {
            ModelsError::NotFound => NO_MODELS_FOUND_MESSAGE,
            ModelsError::FetchFailed => MODELS_FETCH_FAILED_MESSAGE,
        }
    }
}

/// What the Results screen currently shows. `Loaded` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultState {
    AwaitingParams,
    Loading,
    Failed(ModelsError),
    Loaded(Vec<VehicleModel>),
}

/// One mount of the Results screen.
pub struct ResultsPage {
    params: RouteParams,
    requested: Option<(String, String)>,
    generation: u64,
    state: ResultState,
    pub scroll: usize,
}

impl Default for ResultsPage {
    fn default() -> ResultsPage {
        return ResultsPage {
            params: RouteParams::default(),
            requested: None,
            generation: 0,
            state: ResultState::AwaitingParams,
            scroll: 0,
        };
    }
}

impl ResultsPage {
    pub fn mount(params: RouteParams) -> (ResultsPage, Option<ModelsRequest>) {
        return ResultsPage::mount_after(params, 0);
    }

    /// Mounts with generations continuing after `last_generation`, so that
    /// responses addressed to an earlier mount can never match this one.
    pub fn mount_after(
        params: RouteParams,
        last_generation: u64,
    ) -> (ResultsPage, Option<ModelsRequest>) {
        let mut page = ResultsPage {
            generation: last_generation,
            ..Default::default()
        };
        let request = page.set_params(params);
        return (page, request);
    }

    /// Applies new route params. Yields a request exactly when both params
    /// are resolved and the pair differs from the last one requested.
    pub fn set_params(&mut self, params: RouteParams) -> Option<ModelsRequest> {
        self.params = params;

        let Some((make_id, year)) = self.params.resolved() else {
            if self.requested.take().is_some() {
                // Whatever is in flight belongs to the old pair.
                self.generation += 1;
            }
            self.state = ResultState::AwaitingParams;
            return None;
        };

        let pair = (make_id.to_string(), year.to_string());
        if self.requested.as_ref() == Some(&pair) {
            return None;
        }

        self.generation += 1;
        self.state = ResultState::Loading;
        self.scroll = 0;
        self.requested = Some(pair.clone());

        tracing::debug!(
            make_id = %pair.0,
            year = %pair.1,
            generation = self.generation,
            "requesting vehicle models"
        );

        return Some(ModelsRequest {
            generation: self.generation,
            make_id: pair.0,
            year: pair.1,
        });
    }

    /// Applies a fetch outcome. Returns false when the response was stale and
    /// discarded.
    pub fn resolve(
        &mut self,
        generation: u64,
        outcome: Result<Vec<VehicleModel>, VpicError>,
    ) -> bool {
        if generation != self.generation || self.requested.is_none() {
            tracing::debug!(
                generation,
                current = self.generation,
                "discarding stale models response"
            );
            return false;
        }

        self.state = match outcome {
            Ok(models) if models.is_empty() => ResultState::Failed(ModelsError::NotFound),
            Ok(models) => ResultState::Loaded(models),
            Err(err) => {
                tracing::error!(error = %err, "Error fetching vehicle models");
                ResultState::Failed(ModelsError::FetchFailed)
            }
        };

        return true;
    }

    pub fn state(&self) -> &ResultState {
        return &self.state;
    }

    pub fn params(&self) -> &RouteParams {
        return &self.params;
    }

    pub fn generation(&self) -> u64 {
        return self.generation;
    }

    pub fn is_loading(&self) -> bool {
        return self.state == ResultState::Loading;
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match &self.state {
            ResultState::Failed(err) => return Some(err.message()),
            _ => return None,
        }
    }

    pub fn models(&self) -> &[VehicleModel] {
        match &self.state {
            ResultState::Loaded(models) => return models,
            _ => return &[],
        }
    }

    /// Echoes the raw route values, resolved or not.
    pub fn title(&self) -> String {
        return format!(
            "Vehicle Models for {} ({})",
            self.params.make_id.as_deref().unwrap_or_default(),
            self.params.year.as_deref().unwrap_or_default()
        );
    }

    /// Params with the year moved by `delta`, if the result stays selectable.
    pub fn step_year(&self, delta: i32, current_year: i32) -> Option<RouteParams> {
        let (make_id, year) = self.params.resolved()?;
        let year = year.parse::<i32>().ok()?.checked_add(delta)?;
        if !is_selectable_year(year, current_year) {
            return None;
        }

        return Some(RouteParams::new(make_id, &year.to_string()));
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.models().len() {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}
