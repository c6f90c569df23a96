//! Exchange of OCHPdirect service endpoints through the clearing house

mod add;
mod get;

pub use add::{AddServiceEndpointsRequest, AddServiceEndpointsResponse};
pub use get::{GetServiceEndpointsRequest, GetServiceEndpointsResponse};
