//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Free-text filter for list endpoints (`?q=`).
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    pub fn term(&self) -> Option<&str> {
        self.q.as_deref()
    }
}
