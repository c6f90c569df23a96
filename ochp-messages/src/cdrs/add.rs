use crate::message::{require_elements, require_items, OchpMessage, OchpResponse, RESULT};
use crate::types::{CdrInfo, ResultStatus};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, FromXml, OchpResult, ToXml};
use xmltree::Element;

/// Upload of charge detail records by an operator
#[derive(Debug, Clone, PartialEq)]
pub struct AddCdrsRequest {
    cdr_infos: Vec<CdrInfo>,
}

impl AddCdrsRequest {
    pub fn new(cdr_infos: Vec<CdrInfo>) -> OchpResult<Self> {
        Ok(Self {
            cdr_infos: require_items("CDR", cdr_infos)?,
        })
    }

    pub fn cdr_infos(&self) -> &[CdrInfo] {
        &self.cdr_infos
    }
}

impl FromXml for AddCdrsRequest {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            cdr_infos: require_elements(
                element,
                "cdrInfoArray",
                element.map_elements("cdrInfoArray")?,
            )?,
        })
    }
}

impl ToXml for AddCdrsRequest {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name).with_elements("cdrInfoArray", &self.cdr_infos)
    }
}

impl OchpMessage for AddCdrsRequest {
    const ELEMENT: &'static str = "AddCDRsRequest";
}

/// Outcome of the upload; implausible CDRs are returned to the operator
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddCdrsResponse {
    pub result: ResultStatus,
    pub implausible_cdrs: Vec<CdrInfo>,
}

impl AddCdrsResponse {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn partly(description: impl Into<String>, implausible_cdrs: Vec<CdrInfo>) -> Self {
        Self {
            result: ResultStatus::partly(description),
            implausible_cdrs,
        }
    }
}

impl FromXml for AddCdrsResponse {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            result: element.map_element(RESULT)?,
            implausible_cdrs: element.map_elements("implausibleCdrsArray")?,
        })
    }
}

impl ToXml for AddCdrsResponse {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_element(RESULT, &self.result)
            .with_elements("implausibleCdrsArray", &self.implausible_cdrs)
    }
}

impl OchpMessage for AddCdrsResponse {
    const ELEMENT: &'static str = "AddCDRsResponse";
}

impl OchpResponse for AddCdrsResponse {
    fn from_result(result: ResultStatus) -> Self {
        Self {
            result,
            implausible_cdrs: Vec::new(),
        }
    }

    fn result(&self) -> &ResultStatus {
        &self.result
    }
}
