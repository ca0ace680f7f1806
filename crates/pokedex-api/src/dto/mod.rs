//! Response bodies that are not plain records.

pub mod response;

pub use response::{DeleteResponse, HealthResponse};
