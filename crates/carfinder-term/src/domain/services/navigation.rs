use crate::domain::models::Route;

static ROOT: Route = Route::Selection;

/// Browser-style navigation history. The root is always the Selection
/// screen and is never popped.
#[derive(Debug, Clone)]
pub struct History {
    stack: Vec<Route>,
}

impl Default for History {
    fn default() -> History {
        return History {
            stack: vec![Route::Selection],
        };
    }
}

impl History {
    /// History as it looks after opening `route` directly.
    pub fn starting_at(route: Route) -> History {
        let mut history = History::default();
        if route != Route::Selection {
            history.push(route);
        }
        return history;
    }

    pub fn current(&self) -> &Route {
        // Never empty: seeded with the root and `back` keeps it.
        return self.stack.last().unwrap_or(&ROOT);
    }

    pub fn push(&mut self, route: Route) {
        tracing::debug!(route = %route, "navigate");
        self.stack.push(route);
    }

    /// Swap the current entry without growing the history.
    pub fn replace(&mut self, route: Route) {
        tracing::debug!(route = %route, "replace");
        if let Some(top) = self.stack.last_mut() {
            *top = route;
        }
    }

    /// Returns false when already at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            tracing::debug!(route = %self.current(), "back");
            return true;
        }
        return false;
    }

    pub fn depth(&self) -> usize {
        return self.stack.len();
    }
}
