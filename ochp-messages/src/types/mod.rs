//! Data types shared between OCHP messages

pub mod cdr_info;
pub mod charge_point_info;
pub mod emt_id;
pub mod endpoints;
pub mod enums;
pub mod hours;
pub mod location;
pub mod result;
pub mod roaming_authorisation_info;
pub mod status;
pub mod tariff_info;

pub use cdr_info::{CdrInfo, CdrPeriod, EvseCdrPair};
pub use charge_point_info::{
    ChargePointInfo, ChargePointSchedule, Connector, EvseImageUrl, Ratings, RelatedResource,
};
pub use emt_id::EmtId;
pub use endpoints::{EndpointInfo, IdPattern, OperatorEndpoint, ProviderEndpoint};
pub use enums::*;
pub use hours::{ExceptionalPeriod, Hours, RegularHours};
pub use location::{AdditionalGeoPoint, Address, GeoPoint};
pub use result::{ResultCode, ResultStatus};
pub use roaming_authorisation_info::RoamingAuthorisationInfo;
pub use status::{EvseStatus, ParkingStatus};
pub use tariff_info::{IndividualTariff, PriceComponent, TariffElement, TariffInfo, TariffRestriction};
