/// HTTP API Layer
///
/// This module provides the REST API endpoints for the worker registry:
/// - Worker CRUD and search operations
/// - Uniform JSON error responses

// Worker management endpoints (GET/POST/PUT/DELETE)
pub mod workers;

// Error mapping into `{ "error": ... }` responses
pub mod error;

// Re-export router builder and wire types
pub use error::{ApiError, ErrorResponse};
pub use workers::{create_worker_routes, AppState, DeleteResponse};
