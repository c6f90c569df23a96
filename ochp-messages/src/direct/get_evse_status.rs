use crate::message::{require_elements, require_items, OchpMessage, OchpResponse, RESULT};
use crate::types::{EvseStatus, ResultStatus};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, EvseId, FromXml, OchpResult, ToXml};
use xmltree::Element;

/// Live status query sent directly to an operator
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GetEvseStatusRequest {
    requested_evse_ids: Vec<EvseId>,
}

impl GetEvseStatusRequest {
    pub fn new(requested_evse_ids: Vec<EvseId>) -> OchpResult<Self> {
        Ok(Self {
            requested_evse_ids: require_items("EVSE id", requested_evse_ids)?,
        })
    }

    pub fn requested_evse_ids(&self) -> &[EvseId] {
        &self.requested_evse_ids
    }
}

impl FromXml for GetEvseStatusRequest {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            requested_evse_ids: require_elements(
                element,
                "requestedEvseId",
                element.map_values("requestedEvseId")?,
            )?,
        })
    }
}

impl ToXml for GetEvseStatusRequest {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name).with_values("requestedEvseId", &self.requested_evse_ids)
    }
}

impl OchpMessage for GetEvseStatusRequest {
    const ELEMENT: &'static str = "GetEVSEStatusRequest";
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GetEvseStatusResponse {
    pub result: ResultStatus,
    pub evses: Vec<EvseStatus>,
}

impl GetEvseStatusResponse {
    pub fn ok(evses: Vec<EvseStatus>) -> Self {
        Self {
            result: ResultStatus::ok(),
            evses,
        }
    }
}

impl FromXml for GetEvseStatusResponse {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            result: element.map_element(RESULT)?,
            evses: element.map_elements("evse")?,
        })
    }
}

impl ToXml for GetEvseStatusResponse {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_element(RESULT, &self.result)
            .with_elements("evse", &self.evses)
    }
}

impl OchpMessage for GetEvseStatusResponse {
    const ELEMENT: &'static str = "GetEVSEStatusResponse";
}

impl OchpResponse for GetEvseStatusResponse {
    fn from_result(result: ResultStatus) -> Self {
        Self {
            result,
            evses: Vec::new(),
        }
    }

    fn result(&self) -> &ResultStatus {
        &self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EvseMajorStatus, EvseMinorStatus};
    use ochp_core::OchpError;

    #[test]
    fn test_request_round_trip() {
        let ids = vec![EvseId::parse("DE*ABC*E1").unwrap(), EvseId::parse("DE*ABC*E2").unwrap()];
        let request = GetEvseStatusRequest::new(ids.clone()).unwrap();
        let parsed = GetEvseStatusRequest::try_parse(&request.to_xml()).unwrap();
        assert_eq!(parsed.requested_evse_ids(), ids.as_slice());
    }

    #[test]
    fn test_ids_are_required() {
        assert!(GetEvseStatusRequest::new(vec![]).is_err());
        let element = ochp_element(GetEvseStatusRequest::ELEMENT);
        assert!(matches!(
            GetEvseStatusRequest::try_parse(&element),
            Err(OchpError::MissingElement(_))
        ));
    }

    #[test]
    fn test_response_round_trip() {
        let response = GetEvseStatusResponse::ok(vec![EvseStatus::new(
            EvseId::parse("DE*ABC*E1").unwrap(),
            EvseMajorStatus::NotAvailable,
        )
        .with_minor(EvseMinorStatus::Blocked)]);
        assert_eq!(GetEvseStatusResponse::try_parse(&response.to_xml()).unwrap(), response);
    }
}
