//! Shared service plumbing for Passgate services.
//!
//! Health handlers, tracing init, and request-id middleware — the pieces
//! every service wires into its router and main.

pub mod health;
pub mod middleware;
pub mod tracing;
