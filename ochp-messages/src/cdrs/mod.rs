//! Charge detail record exchange
//!
//! Operators upload CDRs with `AddCDRs`; providers fetch them with `GetCDRs`
//! and answer with `ConfirmCDRs`. `CheckCDRs` lets operators see the state of
//! their own records.

mod add;
mod check;
mod confirm;
mod get;

pub use add::{AddCdrsRequest, AddCdrsResponse};
pub use check::{CheckCdrsRequest, CheckCdrsResponse};
pub use confirm::{ConfirmCdrsRequest, ConfirmCdrsResponse};
pub use get::{GetCdrsRequest, GetCdrsResponse};
