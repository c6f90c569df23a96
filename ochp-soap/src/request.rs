//! Request dispatch by body element name

use chrono::{DateTime, Utc};
use ochp_core::{OchpError, OchpResult};
use ochp_messages::*;
use std::time::Duration;
use xmltree::Element;

macro_rules! requests {
    ($($variant:ident($message:ty)),* $(,)?) => {
        /// Every request message a clearing house or its partners may receive
        #[derive(Debug, Clone, PartialEq)]
        pub enum Request {
            $($variant($message),)*
        }

        impl Request {
            /// Local name of the request element
            pub fn element_name(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => <$message as OchpMessage>::ELEMENT,)*
                }
            }

            pub fn to_element(&self) -> Element {
                match self {
                    $(Self::$variant(message) => message.to_xml(),)*
                }
            }

            /// Read whichever request the element names
            pub fn from_element(element: &Element) -> OchpResult<Self> {
                if element.namespace.as_deref() != Some(ochp_core::xml::OCHP_NS) {
                    return Err(OchpError::UnexpectedElement {
                        expected: "OCHP request".to_string(),
                        actual: element.name.clone(),
                    });
                }
                $(
                    if element.name == <$message as OchpMessage>::ELEMENT {
                        return <$message as OchpMessage>::try_parse(element).map(Self::$variant);
                    }
                )*
                Err(OchpError::UnexpectedElement {
                    expected: "OCHP request".to_string(),
                    actual: element.name.clone(),
                })
            }

            pub fn is_known(name: &str) -> bool {
                [$(<$message as OchpMessage>::ELEMENT),*]
                    .iter()
                    .any(|element| *element == name)
            }
        }

        $(
            impl From<$message> for Request {
                fn from(message: $message) -> Self {
                    Self::$variant(message)
                }
            }
        )*
    };
}

requests! {
    GetChargePointList(GetChargePointListRequest),
    GetChargePointListUpdates(GetChargePointListUpdatesRequest),
    SetChargePointList(SetChargePointListRequest),
    UpdateChargePointList(UpdateChargePointListRequest),
    AddCdrs(AddCdrsRequest),
    CheckCdrs(CheckCdrsRequest),
    GetCdrs(GetCdrsRequest),
    ConfirmCdrs(ConfirmCdrsRequest),
    GetRoamingAuthorisationList(GetRoamingAuthorisationListRequest),
    GetRoamingAuthorisationListUpdates(GetRoamingAuthorisationListUpdatesRequest),
    SetRoamingAuthorisationList(SetRoamingAuthorisationListRequest),
    UpdateRoamingAuthorisationList(UpdateRoamingAuthorisationListRequest),
    GetSingleRoamingAuthorisation(GetSingleRoamingAuthorisationRequest),
    UpdateStatus(UpdateStatusRequest),
    GetStatus(GetStatusRequest),
    UpdateTariffs(UpdateTariffsRequest),
    GetTariffUpdates(GetTariffUpdatesRequest),
    AddServiceEndpoints(AddServiceEndpointsRequest),
    GetServiceEndpoints(GetServiceEndpointsRequest),
    SelectEvse(SelectEvseRequest),
    ControlEvse(ControlEvseRequest),
    ReleaseEvse(ReleaseEvseRequest),
    GetEvseStatus(GetEvseStatusRequest),
    ReportDiscrepancy(ReportDiscrepancyRequest),
    InformProvider(InformProviderRequest),
}

/// Values passed through from the transport, never interpreted here
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub timestamp: DateTime<Utc>,
    pub event_tracking_id: Option<String>,
    pub timeout: Option<Duration>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self {
            timestamp: Utc::now(),
            event_tracking_id: None,
            timeout: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_event_tracking_id(mut self, id: impl Into<String>) -> Self {
        self.event_tracking_id = Some(id.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
