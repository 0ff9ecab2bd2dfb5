//! Request tokens tying asynchronous responses to their requests.
//!
//! Every analysis and every history fetch is tagged with a fresh
//! [`RequestToken`]. An analysis result is only applied while its token is
//! still tracked, so a cancelled analysis cannot overwrite state. A history
//! listing is applied unless a listing from a newer fetch has already been
//! applied; failed fetches never block older successful ones.

use std::fmt;

/// Identifier of one in-flight backend request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Returns the raw token value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues tokens and remembers which ones are still wanted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTracker {
    last_issued: u64,
    analysis: Option<RequestToken>,
    applied_history: Option<RequestToken>,
}

impl RequestTracker {
    /// Creates a tracker with nothing in flight.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_issued: 0,
            analysis: None,
            applied_history: None,
        }
    }

    const fn issue(&mut self) -> RequestToken {
        self.last_issued = self.last_issued.saturating_add(1);
        RequestToken(self.last_issued)
    }

    /// Starts tracking a new analysis, replacing any previous one.
    pub const fn begin_analysis(&mut self) -> RequestToken {
        let token = self.issue();
        self.analysis = Some(token);
        token
    }

    /// Returns the in-flight analysis token, if any.
    #[must_use]
    pub const fn analysis_in_flight(&self) -> Option<RequestToken> {
        self.analysis
    }

    /// Completes an analysis.
    ///
    /// Returns `true` when `token` is the tracked analysis, which stops being
    /// tracked. Returns `false` for stale or cancelled tokens.
    pub fn finish_analysis(&mut self, token: RequestToken) -> bool {
        if self.analysis == Some(token) {
            self.analysis = None;
            true
        } else {
            false
        }
    }

    /// Forgets the in-flight analysis and returns its token.
    pub const fn cancel_analysis(&mut self) -> Option<RequestToken> {
        self.analysis.take()
    }

    /// Issues a token for a new history fetch.
    pub const fn begin_history_fetch(&mut self) -> RequestToken {
        self.issue()
    }

    /// Decides whether the listing returned for `token` should be applied.
    ///
    /// Returns `true`, and records `token` as applied, unless a listing from
    /// a newer fetch has already been applied.
    pub fn accept_history(&mut self, token: RequestToken) -> bool {
        if self.applied_history.is_some_and(|applied| applied >= token) {
            return false;
        }
        self.applied_history = Some(token);
        true
    }
}
