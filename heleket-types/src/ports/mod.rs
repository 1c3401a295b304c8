//! Port traits that adapters implement.

mod executor;

pub use executor::{HttpMethod, RequestExecutor};
