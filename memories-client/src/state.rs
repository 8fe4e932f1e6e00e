//! UI-facing fetch-state machinery.
//!
//! Reads resolve to a tagged [`FetchState`] so loading, success, and
//! failure are all renderable; nothing fails silently. [`RequestGeneration`]
//! guards against out-of-order completions: only the response matching the
//! latest issued token may be applied, so a slow superseded request can
//! never overwrite newer data.

use crate::error::ApiError;

/// Outcome of an asynchronous read, as seen by a view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState<T> {
    /// The request is in flight (or has been reset by an input change).
    #[default]
    Loading,
    /// The request resolved with data.
    Loaded(T),
    /// The request failed; the message is already user-presentable.
    Failed(String),
}

impl<T> FetchState<T> {
    /// Fold an API result into a renderable state.
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => FetchState::Loaded(value),
            Err(err) => FetchState::Failed(err.to_string()),
        }
    }

    /// Whether the state still shows a loading indicator.
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// Token identifying one issued request within a [`RequestGeneration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Monotonic request counter owned by a single data-hook instance.
///
/// Issuing a new token invalidates every earlier one; a response holding a
/// stale token is discarded instead of applied.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    latest: u64,
}

impl RequestGeneration {
    /// Create a guard with no requests issued yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new request, superseding all earlier ones.
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    /// Whether `token` still identifies the latest issued request.
    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_token_is_current() {
        let mut generation = RequestGeneration::new();
        let token = generation.begin();
        assert!(generation.is_current(token));
    }

    #[test]
    fn superseded_tokens_are_rejected() {
        let mut generation = RequestGeneration::new();
        let first = generation.begin();
        let second = generation.begin();

        // The slow first response arrives after the second was issued: it
        // must not be applied, while the second still may be.
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn out_of_order_completion_keeps_the_newest_result() {
        let mut generation = RequestGeneration::new();
        let mut state: FetchState<&str> = FetchState::Loading;

        let for_alice = generation.begin();
        let for_bob = generation.begin();

        // Bob's (newest) response lands first.
        if generation.is_current(for_bob) {
            state = FetchState::Loaded("memories of Bob");
        }
        // Alice's stale response lands second and is discarded.
        if generation.is_current(for_alice) {
            state = FetchState::Loaded("memories of Alice");
        }

        assert_eq!(state, FetchState::Loaded("memories of Bob"));
    }

    #[test]
    fn results_fold_into_renderable_states() {
        assert_eq!(
            FetchState::from_result(Ok(vec![1, 2])),
            FetchState::Loaded(vec![1, 2])
        );

        let failed: FetchState<Vec<i32>> = FetchState::from_result(Err(ApiError::Rejected {
            status: 500,
            body: "boom".into(),
        }));
        match failed {
            FetchState::Failed(message) => assert!(message.contains("500")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }
}
