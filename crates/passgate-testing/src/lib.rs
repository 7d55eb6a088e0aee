//! Test utilities for Passgate services.
//!
//! Provides the `contracts/http/` golden-file loader. Import from
//! dev-dependencies only — never in production code.

pub mod fixture;
