/// Workforce: personnel registry
///
/// This library provides the worker record store (SQLite-backed, dense ids with
/// renumber-on-delete), its REST API, and a typed client for driving it.

// Core configuration and setup
pub mod config;

// Record store layer - worker types, SQLite persistence, error taxonomy
pub mod registry;

// HTTP API layer - REST endpoints for worker CRUD and search
pub mod api;

// Client layer - HTTP client, view-model, and session actions
pub mod client;

// Server setup and initialization
pub mod server;

// Re-export commonly used types for external consumers
pub use client::{RegistryClient, RegistryView, WorkerApi};
pub use registry::{RegistryError, Worker, WorkerFields, WorkerStorage};
pub use server::{build_router, start_server};
