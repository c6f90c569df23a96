use crate::message::{OchpMessage, OchpResponse, RESULT};
use crate::types::{EvseStatus, ParkingStatus, ResultStatus};
use chrono::{DateTime, Utc};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, FromXml, OchpResult, ToXml};
use xmltree::Element;

/// Upload of status changes by an operator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct UpdateStatusRequest {
    pub evses: Vec<EvseStatus>,
    pub parkings: Vec<ParkingStatus>,
    /// Default expiry for entries without their own `ttl`
    pub ttl: Option<DateTime<Utc>>,
}

impl UpdateStatusRequest {
    pub fn new(evses: Vec<EvseStatus>, parkings: Vec<ParkingStatus>) -> Self {
        Self {
            evses,
            parkings,
            ttl: None,
        }
    }

    pub fn with_ttl(mut self, ttl: DateTime<Utc>) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

impl FromXml for UpdateStatusRequest {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            evses: element.map_elements("evse")?,
            parkings: element.map_elements("parking")?,
            ttl: element.map_date_time_opt("ttl")?,
        })
    }
}

impl ToXml for UpdateStatusRequest {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_elements("evse", &self.evses)
            .with_elements("parking", &self.parkings)
            .with_opt_date_time("ttl", self.ttl.as_ref())
    }
}

impl OchpMessage for UpdateStatusRequest {
    const ELEMENT: &'static str = "UpdateStatusRequest";
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct UpdateStatusResponse {
    pub result: ResultStatus,
    /// Seconds after which the operator should send the next update
    pub refresh_period: Option<u32>,
}

impl UpdateStatusResponse {
    pub fn ok(refresh_period: Option<u32>) -> Self {
        Self {
            result: ResultStatus::ok(),
            refresh_period,
        }
    }
}

impl FromXml for UpdateStatusResponse {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            result: element.map_element(RESULT)?,
            refresh_period: element.map_value_opt("refreshPeriod")?,
        })
    }
}

impl ToXml for UpdateStatusResponse {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_element(RESULT, &self.result)
            .with_opt_value("refreshPeriod", self.refresh_period)
    }
}

impl OchpMessage for UpdateStatusResponse {
    const ELEMENT: &'static str = "UpdateStatusResponse";
}

impl OchpResponse for UpdateStatusResponse {
    fn from_result(result: ResultStatus) -> Self {
        Self {
            result,
            refresh_period: None,
        }
    }

    fn result(&self) -> &ResultStatus {
        &self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EvseMajorStatus, EvseMinorStatus, ParkingSpotStatus};
    use chrono::TimeZone;
    use ochp_core::xml::element_to_string;
    use ochp_core::{EvseId, ParkingId};

    #[test]
    fn test_request_round_trip_through_text() {
        let request = UpdateStatusRequest::new(
            vec![
                EvseStatus::new(EvseId::parse("DE*ABC*E1").unwrap(), EvseMajorStatus::Available),
                EvseStatus::new(EvseId::parse("DE*ABC*E2").unwrap(), EvseMajorStatus::NotAvailable)
                    .with_minor(EvseMinorStatus::Charging),
            ],
            vec![ParkingStatus::new(
                ParkingId::parse("DE*ABC*P1").unwrap(),
                ParkingSpotStatus::Available,
            )],
        )
        .with_ttl(Utc.with_ymd_and_hms(2024, 1, 1, 0, 15, 0).unwrap());

        let xml = element_to_string(&request.to_xml());
        assert_eq!(UpdateStatusRequest::try_parse_text(&xml).unwrap(), request);
    }

    #[test]
    fn test_empty_request() {
        let request = UpdateStatusRequest::default();
        let element = request.to_xml();
        assert!(element.children.is_empty());
        assert_eq!(UpdateStatusRequest::try_parse(&element).unwrap(), request);
    }

    #[test]
    fn test_refresh_period() {
        let response = UpdateStatusResponse::ok(Some(300));
        let element = response.to_xml();
        assert_eq!(element.child("refreshPeriod").unwrap().text(), "300");
        assert_eq!(UpdateStatusResponse::try_parse(&element).unwrap(), response);
    }
}
