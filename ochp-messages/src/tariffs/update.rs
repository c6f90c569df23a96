use crate::message::{require_elements, require_items, OchpMessage, OchpResponse, RESULT};
use crate::types::{ResultStatus, TariffInfo};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, FromXml, OchpResult, ToXml};
use xmltree::Element;

/// Upload of new or changed tariffs by an operator
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTariffsRequest {
    tariffs: Vec<TariffInfo>,
}

impl UpdateTariffsRequest {
    pub fn new(tariffs: Vec<TariffInfo>) -> OchpResult<Self> {
        Ok(Self {
            tariffs: require_items("tariff", tariffs)?,
        })
    }

    pub fn tariffs(&self) -> &[TariffInfo] {
        &self.tariffs
    }
}

impl FromXml for UpdateTariffsRequest {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            tariffs: require_elements(
                element,
                "TariffInfoArray",
                element.map_elements("TariffInfoArray")?,
            )?,
        })
    }
}

impl ToXml for UpdateTariffsRequest {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name).with_elements("TariffInfoArray", &self.tariffs)
    }
}

impl OchpMessage for UpdateTariffsRequest {
    const ELEMENT: &'static str = "UpdateTariffsRequest";
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateTariffsResponse {
    pub result: ResultStatus,
    pub refused: Vec<TariffInfo>,
}

impl UpdateTariffsResponse {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn partly(description: impl Into<String>, refused: Vec<TariffInfo>) -> Self {
        Self {
            result: ResultStatus::partly(description),
            refused,
        }
    }
}

impl FromXml for UpdateTariffsResponse {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            result: element.map_element(RESULT)?,
            refused: element.map_elements("refusedTariffInfo")?,
        })
    }
}

impl ToXml for UpdateTariffsResponse {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_element(RESULT, &self.result)
            .with_elements("refusedTariffInfo", &self.refused)
    }
}

impl OchpMessage for UpdateTariffsResponse {
    const ELEMENT: &'static str = "UpdateTariffsResponse";
}

impl OchpResponse for UpdateTariffsResponse {
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
