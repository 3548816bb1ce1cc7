//! Reconciliation sweep between the registry and the live window list.

pub mod errors;
pub mod handler;
mod operations;
pub mod types;

pub use errors::ReconcileError;
pub use handler::sweep;
pub use operations::reconcile;
pub use types::ReconcileSummary;
