//! Live EVSE and parking status

mod get;
mod update;

pub use get::{GetStatusRequest, GetStatusResponse};
pub use update::{UpdateStatusRequest, UpdateStatusResponse};
