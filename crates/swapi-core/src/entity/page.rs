//! Page envelope type.

use serde::{Deserialize, Serialize};

/// One page of a listing, as returned by `/api/{kind}/?page={n}`.
///
/// `next` is present exactly when more pages remain. `count` is the total
/// across all pages and is informational only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResults<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> PagedResults<T> {
    /// Returns true if the server reports a further page.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}
