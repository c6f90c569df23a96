//! Tariff publication

mod get_updates;
mod update;

pub use get_updates::{GetTariffUpdatesRequest, GetTariffUpdatesResponse};
pub use update::{UpdateTariffsRequest, UpdateTariffsResponse};
