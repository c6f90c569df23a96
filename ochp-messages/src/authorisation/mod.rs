//! Roaming authorisation lists
//!
//! Providers publish the tokens of their customers; operators download the
//! list to authorise charging sessions locally.

mod get_list;
mod get_list_updates;
mod get_single;
mod set_list;
mod update_list;

pub use get_list::{GetRoamingAuthorisationListRequest, GetRoamingAuthorisationListResponse};
pub use get_list_updates::{
    GetRoamingAuthorisationListUpdatesRequest, GetRoamingAuthorisationListUpdatesResponse,
};
pub use get_single::{GetSingleRoamingAuthorisationRequest, GetSingleRoamingAuthorisationResponse};
pub use set_list::{SetRoamingAuthorisationListRequest, SetRoamingAuthorisationListResponse};
pub use update_list::{UpdateRoamingAuthorisationListRequest, UpdateRoamingAuthorisationListResponse};
