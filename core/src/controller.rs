use tracing::{debug, info, warn};

use crate::client::QueryBackend;
use crate::errors::BackendError;
use crate::types::QueryRequest;

/// The single source of truth for the view.
///
/// Invariant: `response_text` and `error_message` are never both
/// non-empty, and `busy` is true exactly while one exchange is
/// outstanding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    /// The trimmed text of the last submitted query
    pub query_text: String,
    /// The backend's answer to the last successful query
    pub response_text: String,
    /// Human-readable description of the last failure
    pub error_message: String,
    /// True while an exchange is in flight; gates both entry points
    pub busy: bool,
}

/// Drives the idle / in-flight / success / error state machine.
///
/// The controller is the only component that mutates
/// [`InteractionState`]; the view renders from [`state`](Self::state)
/// after each operation returns.
pub struct InteractionController<B> {
    backend: B,
    user_id: String,
    state: InteractionState,
}

impl<B: QueryBackend> InteractionController<B> {
    /// Create a controller in the initial idle state.
    ///
    /// `user_id` is the constant identifier sent with every query.
    pub fn new(backend: B, user_id: impl Into<String>) -> Self {
        Self {
            backend,
            user_id: user_id.into(),
            state: InteractionState::default(),
        }
    }

    /// Current interaction state, rendered by the view
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Validates and submits a query to the backend.
    ///
    /// A no-op while an exchange is already in flight. Whitespace-only
    /// input fails validation locally and never reaches the gateway.
    pub async fn submit_query(&mut self, raw_text: &str) {
        if self.state.busy {
            warn!("Ignoring query submission while an exchange is in flight");
            return;
        }

        let query = raw_text.trim();
        if query.is_empty() {
            debug!("Rejecting empty query before contacting the backend");
            self.state.response_text.clear();
            self.state.error_message = BackendError::Validation.to_string();
            return;
        }

        self.state.busy = true;
        self.state.query_text = query.to_string();
        self.state.response_text.clear();
        self.state.error_message.clear();

        let request = QueryRequest {
            user_id: self.user_id.clone(),
            query: query.to_string(),
        };

        match self.backend.send_query(request).await {
            Ok(reply) => {
                self.state.response_text = reply.response;
                self.state.error_message.clear();
            }
            Err(err) => {
                self.state.error_message = query_failure_message(&err);
                self.state.response_text.clear();
            }
        }

        self.state.busy = false;
    }

    /// Asks the backend to rebuild its document index.
    ///
    /// A no-op while an exchange is already in flight. On success the
    /// confirmation message is returned as a transient notification and
    /// is not stored in the interaction state. `busy` is reset on every
    /// completion path.
    pub async fn trigger_indexing(&mut self) -> Option<String> {
        if self.state.busy {
            warn!("Ignoring index trigger while an exchange is in flight");
            return None;
        }

        self.state.busy = true;
        self.state.response_text.clear();
        self.state.error_message.clear();

        let notice = match self.backend.trigger_index().await {
            Ok(result) => {
                info!("Index rebuild confirmed: {}", result.message);
                Some(result.message)
            }
            Err(err) => {
                self.state.error_message = index_failure_message(&err);
                None
            }
        };

        self.state.busy = false;
        notice
    }
}

/// Failure text shown after a query exchange fails: the backend's detail
/// (or HTTP status when absent) plus a reachability hint.
fn query_failure_message(err: &BackendError) -> String {
    format!(
        "Could not get an answer: {}. Check that the backend is running and the data has been indexed.",
        err.user_message()
    )
}

/// Failure text shown after an index exchange fails
fn index_failure_message(err: &BackendError) -> String {
    format!("Could not index data: {}.", err.user_message())
}
