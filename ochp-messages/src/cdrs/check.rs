use crate::message::{OchpMessage, OchpResponse, RESULT};
use crate::types::{CdrInfo, CdrStatus, ResultStatus};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, FromXml, OchpResult, ToXml};
use xmltree::Element;

/// Query by an operator for its own CDRs, optionally filtered by status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CheckCdrsRequest {
    pub cdr_status: Option<CdrStatus>,
}

impl CheckCdrsRequest {
    pub fn new(cdr_status: Option<CdrStatus>) -> Self {
        Self { cdr_status }
    }
}

impl FromXml for CheckCdrsRequest {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            cdr_status: element.map_wrapped_opt("cdrStatus", "CdrStatusType")?,
        })
    }
}

impl ToXml for CheckCdrsRequest {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name).with_opt_wrapped("cdrStatus", "CdrStatusType", self.cdr_status)
    }
}

impl OchpMessage for CheckCdrsRequest {
    const ELEMENT: &'static str = "CheckCDRsRequest";
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckCdrsResponse {
    pub result: ResultStatus,
    pub cdr_infos: Vec<CdrInfo>,
}

impl CheckCdrsResponse {
    pub fn ok(cdr_infos: Vec<CdrInfo>) -> Self {
        Self {
            result: ResultStatus::ok(),
            cdr_infos,
        }
    }
}

impl FromXml for CheckCdrsResponse {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            result: element.map_element(RESULT)?,
            cdr_infos: element.map_elements("cdrInfoArray")?,
        })
    }
}

impl ToXml for CheckCdrsResponse {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_element(RESULT, &self.result)
            .with_elements("cdrInfoArray", &self.cdr_infos)
    }
}

impl OchpMessage for CheckCdrsResponse {
    const ELEMENT: &'static str = "CheckCDRsResponse";
}

impl OchpResponse for CheckCdrsResponse {
    fn from_result(result: ResultStatus) -> Self {
        Self {
            result,
            cdr_infos: Vec::new(),
        }
    }

    fn result(&self) -> &ResultStatus {
        &self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::cdr_info::tests::sample_cdr;

    #[test]
    fn test_status_filter() {
        let request = CheckCdrsRequest::new(Some(CdrStatus::Declined));
        let element = request.to_xml();
        let status: CdrStatus = element.map_wrapped("cdrStatus", "CdrStatusType").unwrap();
        assert_eq!(status, CdrStatus::Declined);
        assert_eq!(CheckCdrsRequest::try_parse(&element).unwrap(), request);
    }

    #[test]
    fn test_without_filter() {
        let element = CheckCdrsRequest::default().to_xml();
        assert!(element.children.is_empty());
        assert_eq!(CheckCdrsRequest::try_parse(&element).unwrap().cdr_status, None);
    }

    #[test]
    fn test_response_round_trip() {
        let mut cdr = sample_cdr("CDR-9");
        cdr.status = CdrStatus::Declined;
        let response = CheckCdrsResponse::ok(vec![cdr]);
        assert_eq!(CheckCdrsResponse::try_parse(&response.to_xml()).unwrap(), response);
    }
}
