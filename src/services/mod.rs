//! Service layer modules for external integrations.
//!
//! Contains the hosted backend client (tables, storage, functions) and the
//! notification helpers built on it.

pub mod functions;
pub mod notifications;
pub mod query;
pub mod storage;
pub mod supabase;

pub use query::Query;
pub use supabase::{BackendError, SupabaseClient};
