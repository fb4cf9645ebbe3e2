use serde::{Deserialize, Serialize};

/// Body of the `POST /query` exchange
///
/// Constructed fresh for every submission; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryRequest {
    pub user_id: String,
    pub query: String,
}

/// Success body of the `POST /query` exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub response: String,
}

/// Success body of the `POST /index` exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexResult {
    pub message: String,
}

/// Failure body the backend sends with non-2xx statuses. The `detail`
/// field is optional on the wire; a body without it is treated as
/// unparseable and the status alone is surfaced.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}
