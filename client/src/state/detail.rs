//! Asset detail view state: loading flag, error line and the response slot.
//!
//! DESIGN
//! ======
//! There is a single response slot shared by all six categories. Fetches are
//! not fenced or cancelled, so whichever reply is applied last owns the slot,
//! even if it belongs to an older request.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use crate::net::error::FetchError;
use crate::net::types::{DetailResponse, Endpoint};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailState {
    pub loading: bool,
    /// Category of the most recently started fetch.
    pub requested: Option<Endpoint>,
    pub response: Option<DetailResponse>,
    pub error: Option<String>,
}

impl DetailState {
    /// A fetch for `endpoint` is starting.
    pub fn begin(&mut self, endpoint: Endpoint) {
        self.loading = true;
        self.requested = Some(endpoint);
        self.error = None;
    }

    /// A fetch finished. Loading is cleared on every path.
    pub fn finish(&mut self, result: Result<DetailResponse, FetchError>) {
        self.loading = false;
        match result {
            Ok(response) => {
                self.response = Some(response);
                self.error = None;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
