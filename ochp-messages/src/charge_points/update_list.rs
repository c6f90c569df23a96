use crate::message::{require_elements, require_items, OchpMessage, OchpResponse, RESULT};
use crate::types::{ChargePointInfo, ResultStatus};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, FromXml, OchpResult, ToXml};
use xmltree::Element;

/// Upload of new or changed charge points
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateChargePointListRequest {
    charge_point_infos: Vec<ChargePointInfo>,
}

impl UpdateChargePointListRequest {
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

impl FromXml for UpdateChargePointListRequest {
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

impl ToXml for UpdateChargePointListRequest {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name).with_elements("chargePointInfoArray", &self.charge_point_infos)
    }
}

impl OchpMessage for UpdateChargePointListRequest {
    const ELEMENT: &'static str = "UpdateChargePointListRequest";
}

/// Outcome of the upload, listing the charge points that were not accepted
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateChargePointListResponse {
    pub result: ResultStatus,
    pub refused: Vec<ChargePointInfo>,
}

impl UpdateChargePointListResponse {
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

impl FromXml for UpdateChargePointListResponse {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            result: element.map_element(RESULT)?,
            refused: element.map_elements("refusedChargePointInfo")?,
        })
    }
}

impl ToXml for UpdateChargePointListResponse {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_element(RESULT, &self.result)
            .with_elements("refusedChargePointInfo", &self.refused)
    }
}

impl OchpMessage for UpdateChargePointListResponse {
    const ELEMENT: &'static str = "UpdateChargePointListResponse";
}

impl OchpResponse for UpdateChargePointListResponse {
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
    use ochp_core::xml::element_to_string;

    #[test]
    fn test_request_round_trip_through_text() {
        let request = UpdateChargePointListRequest::new(vec![sample_charge_point("DE*ABC*E3")]).unwrap();
        let xml = element_to_string(&request.to_xml());
        let parsed = UpdateChargePointListRequest::try_parse_text(&xml).unwrap();
        assert_eq!(parsed.into_charge_point_infos(), request.charge_point_infos().to_vec());
    }

    #[test]
    fn test_set_request_is_not_an_update() {
        let set = crate::charge_points::SetChargePointListRequest::new(vec![sample_charge_point("DE*ABC*E3")])
            .unwrap();
        assert!(UpdateChargePointListRequest::try_parse(&set.to_xml()).is_err());
    }

    #[test]
    fn test_server_error_response() {
        let response = UpdateChargePointListResponse::server("database offline");
        let parsed = UpdateChargePointListResponse::try_parse(&response.to_xml()).unwrap();
        assert_eq!(parsed, response);
        assert_eq!(parsed.result.description.as_deref(), Some("database offline"));
    }
}
