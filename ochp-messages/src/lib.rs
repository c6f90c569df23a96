//! OCHP v1.4 messages
//!
//! One type per protocol message, grouped by functional area:
//!
//! - [`charge_points`]: charge point list download and upload
//! - [`cdrs`]: charge detail record exchange and confirmation
//! - [`authorisation`]: roaming authorisation lists
//! - [`status`]: live EVSE and parking status
//! - [`tariffs`]: tariff publication
//! - [`endpoints`]: OCHPdirect service endpoint exchange
//! - [`direct`]: OCHPdirect remote charging sessions
//!
//! Every message implements [`OchpMessage`] (and responses [`OchpResponse`]),
//! giving `to_xml`, `try_parse` and the non-failing `parse`.

#[macro_use]
mod macros;

pub mod authorisation;
pub mod cdrs;
pub mod charge_points;
pub mod direct;
pub mod endpoints;
pub mod message;
pub mod status;
pub mod tariffs;
pub mod types;

pub use authorisation::*;
pub use cdrs::*;
pub use charge_points::*;
pub use direct::*;
pub use endpoints::*;
pub use message::{OchpMessage, OchpResponse};
pub use status::*;
pub use tariffs::*;
pub use types::*;
