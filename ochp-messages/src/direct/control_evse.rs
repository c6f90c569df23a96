use crate::direct::ChargeLimits;
use crate::message::OchpMessage;
use crate::types::DirectOperation;
use chrono::{DateTime, Utc};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, DirectId, ElementExt, FromXml, OchpResult, ToXml};
use xmltree::Element;

/// Start, change or end of a direct charging session
#[derive(Debug, Clone, PartialEq)]
pub struct ControlEvseRequest {
    direct_id: DirectId,
    operation: DirectOperation,
    limits: ChargeLimits,
    departure: Option<DateTime<Utc>>,
}

impl ControlEvseRequest {
    /// Fails with `InvalidArgument` if the limits are negative, not finite or
    /// if `min_energy` exceeds `max_energy`
    pub fn new(
        direct_id: DirectId,
        operation: DirectOperation,
        limits: ChargeLimits,
        departure: Option<DateTime<Utc>>,
    ) -> OchpResult<Self> {
        limits.validate()?;
        Ok(Self {
            direct_id,
            operation,
            limits,
            departure,
        })
    }

    pub fn start(direct_id: DirectId, limits: ChargeLimits) -> OchpResult<Self> {
        Self::new(direct_id, DirectOperation::Start, limits, None)
    }

    pub fn end(direct_id: DirectId) -> Self {
        Self {
            direct_id,
            operation: DirectOperation::End,
            limits: ChargeLimits::default(),
            departure: None,
        }
    }

    pub fn direct_id(&self) -> &DirectId {
        &self.direct_id
    }

    pub fn operation(&self) -> DirectOperation {
        self.operation
    }

    pub fn limits(&self) -> &ChargeLimits {
        &self.limits
    }

    /// Planned departure of the driver
    pub fn departure(&self) -> Option<DateTime<Utc>> {
        self.departure
    }
}

impl FromXml for ControlEvseRequest {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            direct_id: element.map_value("directId")?,
            operation: element.map_value("operation")?,
            limits: ChargeLimits::read(element)?,
            departure: element.map_date_time_opt("departure")?,
        })
    }
}

impl ToXml for ControlEvseRequest {
    fn to_xml_named(&self, name: &str) -> Element {
        let element = ochp_element(name)
            .with_value("directId", &self.direct_id)
            .with_value("operation", self.operation);
        self.limits
            .write(element)
            .with_opt_date_time("departure", self.departure.as_ref())
    }
}

impl OchpMessage for ControlEvseRequest {
    const ELEMENT: &'static str = "ControlEVSERequest";
}

result_response! {
    ControlEvseResponse => "ControlEVSEResponse"
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ochp_core::xml::element_to_string;
    use ochp_core::OchpError;

    fn direct_id() -> DirectId {
        DirectId::parse("DE*ABC*4711").unwrap()
    }

    #[test]
    fn test_max_power_round_trip() {
        let limits = ChargeLimits {
            max_power: Some(22.0),
            ..ChargeLimits::default()
        };
        let request = ControlEvseRequest::start(direct_id(), limits).unwrap();
        let xml = element_to_string(&request.to_xml());
        assert!(xml.contains("<ns:maxPower>22</ns:maxPower>"));

        let parsed = ControlEvseRequest::try_parse_text(&xml).unwrap();
        assert_eq!(parsed.limits().max_power, Some(22.0f32));
        assert_eq!(parsed, request);
    }

    #[test]
    fn test_full_request_round_trip() {
        let limits = ChargeLimits {
            max_power: Some(11.5),
            max_current: Some(16.0),
            one_phase: Some(true),
            max_energy: Some(40.0),
            min_energy: Some(10.0),
        };
        let departure = Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap();
        let request =
            ControlEvseRequest::new(direct_id(), DirectOperation::Change, limits, Some(departure)).unwrap();
        assert_eq!(ControlEvseRequest::try_parse(&request.to_xml()).unwrap(), request);
    }

    #[test]
    fn test_invalid_limits() {
        let limits = ChargeLimits {
            min_energy: Some(50.0),
            max_energy: Some(40.0),
            ..ChargeLimits::default()
        };
        assert!(matches!(
            ControlEvseRequest::new(direct_id(), DirectOperation::Start, limits, None),
            Err(OchpError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_end_and_response() {
        let request = ControlEvseRequest::end(direct_id());
        let element = request.to_xml();
        assert_eq!(element.child("operation").unwrap().text(), "end");
        assert!(element.child("maxPower").is_none());

        let response = ControlEvseResponse::ok();
        assert_eq!(ControlEvseResponse::try_parse(&response.to_xml()).unwrap(), response);
    }
}
