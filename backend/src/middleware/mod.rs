//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every route, currently
//! correlation-id tracing.

pub mod trace;

pub use trace::Trace;
