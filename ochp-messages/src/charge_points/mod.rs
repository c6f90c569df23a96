//! Charge point list download and upload
//!
//! Operators upload their static charge point data with `Set` (full list) or
//! `Update` (changed entries); providers download it with `Get` or
//! `GetUpdates`.

mod get_list;
mod get_list_updates;
mod set_list;
mod update_list;

pub use get_list::{GetChargePointListRequest, GetChargePointListResponse};
pub use get_list_updates::{GetChargePointListUpdatesRequest, GetChargePointListUpdatesResponse};
pub use set_list::{SetChargePointListRequest, SetChargePointListResponse};
pub use update_list::{UpdateChargePointListRequest, UpdateChargePointListResponse};
