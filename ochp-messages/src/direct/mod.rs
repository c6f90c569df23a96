//! OCHPdirect remote charging sessions
//!
//! A provider selects an EVSE of a foreign operator (`SelectEVSE`), controls
//! the session (`ControlEVSE`) and finally releases it (`ReleaseEVSE`). The
//! operator keeps the provider informed with `InformProvider`.

mod control_evse;
mod get_evse_status;
mod inform_provider;
mod limits;
mod release_evse;
mod report_discrepancy;
mod select_evse;

pub use control_evse::{ControlEvseRequest, ControlEvseResponse};
pub use get_evse_status::{GetEvseStatusRequest, GetEvseStatusResponse};
pub use inform_provider::{InformProviderRequest, InformProviderResponse};
pub use limits::ChargeLimits;
pub use release_evse::{ReleaseEvseRequest, ReleaseEvseResponse};
pub use report_discrepancy::{ReportDiscrepancyRequest, ReportDiscrepancyResponse};
pub use select_evse::{SelectEvseRequest, SelectEvseResponse};
