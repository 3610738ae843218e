//! Diagnostic channel for raw request failures.

use std::error::Error as _;

use crate::error::ApiError;

/// Receives every error `HeroService` swallows, before the fallback value is
/// returned to the caller.
pub trait Diagnostics: Send + Sync {
    fn report(&self, error: &ApiError);
}

/// Default channel: one `tracing` error event per failure, with the full
/// `source()` chain attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, error: &ApiError) {
        tracing::error!(error = ?error, causes = %cause_chain(error), "{error}");
    }
}

/// Every `source()` below `error`, joined with `": "`. Empty when there is none.
pub fn cause_chain(error: &ApiError) -> String {
    let mut causes = Vec::new();
    let mut source = error.source();
    while let Some(cause) = source {
        causes.push(cause.to_string());
        source = cause.source();
    }
    causes.join(": ")
}
