use crate::message::{require_elements, require_items, OchpMessage, OchpResponse, RESULT};
use crate::types::{ChargePointInfo, ResultStatus};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, FromXml, OchpResult, ToXml};
use xmltree::Element;

/// Upload of the complete charge point list, replacing the previous one
#[derive(Debug, Clone, PartialEq)]
pub struct SetChargePointListRequest {
    charge_point_infos: Vec<ChargePointInfo>,
}

impl SetChargePointListRequest {
    /// Fails with `InvalidArgument` if `charge_point_infos` is empty
    pub fn new(charge_point_infos: Vec<ChargePointInfo>) -> OchpResult<Self> {
        Ok(Self {
            charge_point_infos: require_items("charge point", charge_point_infos)?,
        })
    }

    pub fn charge_point_infos(&self) -> &[ChargePointInfo] {
        &self.charge_point_infos
    }

    pub fn into_charge_point_infos(self) -> Vec<ChargePointInfo> {
        self.charge_point_infos
    }
}

impl FromXml for SetChargePointListRequest {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            charge_point_infos: require_elements(
                element,
                "chargePointInfoArray",
                element.map_elements("chargePointInfoArray")?,
            )?,
        })
    }
}

impl ToXml for SetChargePointListRequest {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name).with_elements("chargePointInfoArray", &self.charge_point_infos)
    }
}

impl OchpMessage for SetChargePointListRequest {
    const ELEMENT: &'static str = "SetChargePointListRequest";
}

/// Outcome of the upload, listing the charge points that were not accepted
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SetChargePointListResponse {
    pub result: ResultStatus,
    pub refused: Vec<ChargePointInfo>,
}

impl SetChargePointListResponse {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn partly(description: impl Into<String>, refused: Vec<ChargePointInfo>) -> Self {
        Self {
            result: ResultStatus::partly(description),
            refused,
        }
    }
}

impl FromXml for SetChargePointListResponse {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            result: element.map_element(RESULT)?,
            refused: element.map_elements("refusedChargePointInfo")?,
        })
    }
}

impl ToXml for SetChargePointListResponse {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_element(RESULT, &self.result)
            .with_elements("refusedChargePointInfo", &self.refused)
    }
}

impl OchpMessage for SetChargePointListResponse {
    const ELEMENT: &'static str = "SetChargePointListResponse";
}

impl OchpResponse for SetChargePointListResponse {
    fn from_result(result: ResultStatus) -> Self {
        Self {
            result,
            refused: Vec::new(),
        }
    }

    fn result(&self) -> &ResultStatus {
        &self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::charge_point_info::tests::sample_charge_point;
    use crate::types::ResultCode;
    use ochp_core::OchpError;

    #[test]
    fn test_empty_list_is_rejected() {
        assert!(matches!(
            SetChargePointListRequest::new(vec![]),
            Err(OchpError::InvalidArgument(_))
        ));
        let element = ochp_element(SetChargePointListRequest::ELEMENT);
        assert!(matches!(
            SetChargePointListRequest::try_parse(&element),
            Err(OchpError::MissingElement(_))
        ));
    }

    #[test]
    fn test_request_round_trip() {
        let request = SetChargePointListRequest::new(vec![
            sample_charge_point("DE*ABC*E1"),
            sample_charge_point("DE*ABC*E2"),
        ])
        .unwrap();
        let parsed = SetChargePointListRequest::try_parse(&request.to_xml()).unwrap();
        assert_eq!(parsed.charge_point_infos().len(), 2);
        assert_eq!(parsed, request);
    }

    #[test]
    fn test_partly_response() {
        let response =
            SetChargePointListResponse::partly("1 refused", vec![sample_charge_point("DE*ABC*E2")]);
        let parsed = SetChargePointListResponse::try_parse(&response.to_xml()).unwrap();
        assert_eq!(parsed.result.code, ResultCode::Partly);
        assert_eq!(parsed.refused[0].evse_id.to_string(), "DE*ABC*E2");
    }
}
