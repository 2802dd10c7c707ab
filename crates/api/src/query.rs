//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Free-text catalog search (`?q=`). Missing and empty both match everything.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

impl SearchParams {
    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }
}
