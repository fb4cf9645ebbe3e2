// Core product query client functionality:
// - HTTP gateway for the query backend
// - Interaction state machine driving the view
// - Request/response data structures
// - Configuration loading
// - Shared error types

// Export client module - HTTP gateway for the query backend
pub mod client;
pub use client::*;

// Export controller module - Interaction state machine
pub mod controller;
pub use controller::*;

// Export types module - Request/response data structures
pub mod types;
pub use types::*;

// Export config module - Configuration loading
pub mod config;
pub use config::*;

// Export errors module - Shared error types
pub mod errors;
pub use errors::*;
