use crate::message::{OchpMessage, OchpResponse, RESULT};
use crate::types::{ChargePointInfo, ResultStatus};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, FromXml, OchpResult, ToXml};
use xmltree::Element;

/// Download of the complete charge point list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GetChargePointListRequest;

impl FromXml for GetChargePointListRequest {
    fn from_xml(_element: &Element) -> OchpResult<Self> {
        Ok(Self)
    }
}

impl ToXml for GetChargePointListRequest {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
    }
}

impl OchpMessage for GetChargePointListRequest {
    const ELEMENT: &'static str = "GetChargePointListRequest";
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetChargePointListResponse {
    pub result: ResultStatus,
    pub charge_point_infos: Vec<ChargePointInfo>,
}

impl GetChargePointListResponse {
    pub fn ok(charge_point_infos: Vec<ChargePointInfo>) -> Self {
        Self {
            result: ResultStatus::ok(),
            charge_point_infos,
        }
    }
}

impl FromXml for GetChargePointListResponse {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            result: element.map_element(RESULT)?,
            charge_point_infos: element.map_elements("chargePointInfoArray")?,
        })
    }
}

impl ToXml for GetChargePointListResponse {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_element(RESULT, &self.result)
            .with_elements("chargePointInfoArray", &self.charge_point_infos)
    }
}

impl OchpMessage for GetChargePointListResponse {
    const ELEMENT: &'static str = "GetChargePointListResponse";
}

impl OchpResponse for GetChargePointListResponse {
    fn from_result(result: ResultStatus) -> Self {
        Self {
            result,
            charge_point_infos: Vec::new(),
        }
    }

    fn result(&self) -> &ResultStatus {
        &self.result
    }
}
