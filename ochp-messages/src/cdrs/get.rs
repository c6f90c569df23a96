use crate::message::{OchpMessage, OchpResponse, RESULT};
use crate::types::{CdrInfo, CdrStatus, ResultStatus};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, FromXml, OchpResult, ToXml};
use xmltree::Element;

/// Download of CDRs by a provider, optionally filtered by status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GetCdrsRequest {
    pub cdr_status: Option<CdrStatus>,
}

impl GetCdrsRequest {
    pub fn new(cdr_status: Option<CdrStatus>) -> Self {
        Self { cdr_status }
    }
}

impl FromXml for GetCdrsRequest {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            cdr_status: element.map_wrapped_opt("cdrStatus", "CdrStatusType")?,
        })
    }
}

impl ToXml for GetCdrsRequest {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name).with_opt_wrapped("cdrStatus", "CdrStatusType", self.cdr_status)
    }
}

impl OchpMessage for GetCdrsRequest {
    const ELEMENT: &'static str = "GetCDRsRequest";
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetCdrsResponse {
    pub result: ResultStatus,
    pub cdr_infos: Vec<CdrInfo>,
}

impl GetCdrsResponse {
    pub fn ok(cdr_infos: Vec<CdrInfo>) -> Self {
        Self {
            result: ResultStatus::ok(),
            cdr_infos,
        }
    }
}

impl FromXml for GetCdrsResponse {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            result: element.map_element(RESULT)?,
            cdr_infos: element.map_elements("cdrInfoArray")?,
        })
    }
}

impl ToXml for GetCdrsResponse {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_element(RESULT, &self.result)
            .with_elements("cdrInfoArray", &self.cdr_infos)
    }
}

impl OchpMessage for GetCdrsResponse {
    const ELEMENT: &'static str = "GetCDRsResponse";
}

impl OchpResponse for GetCdrsResponse {
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
    use ochp_core::xml::element_to_string;
    use ochp_core::ParseFailure;

    #[test]
    fn test_request_from_text() {
        let request = GetCdrsRequest::try_parse_text(
            r#"<ns:GetCDRsRequest xmlns:ns="http://ochp.eu/1.4">
                 <ns:cdrStatus><ns:CdrStatusType>new</ns:CdrStatusType></ns:cdrStatus>
               </ns:GetCDRsRequest>"#,
        )
        .unwrap();
        assert_eq!(request.cdr_status, Some(CdrStatus::New));
    }

    #[test]
    fn test_unknown_status_is_reported() {
        let text = r#"<ns:GetCDRsRequest xmlns:ns="http://ochp.eu/1.4">
                        <ns:cdrStatus><ns:CdrStatusType>lost</ns:CdrStatusType></ns:cdrStatus>
                      </ns:GetCDRsRequest>"#;
        let mut reported = 0;
        let mut on_failure = |_: ParseFailure| reported += 1;
        assert!(GetCdrsRequest::parse_text(text, Some(&mut on_failure)).is_none());
        assert_eq!(reported, 1);
    }

    #[test]
    fn test_response_round_trip_through_text() {
        let response = GetCdrsResponse::ok(vec![sample_cdr("CDR-1"), sample_cdr("CDR-2")]);
        let xml = element_to_string(&response.to_xml());
        assert_eq!(GetCdrsResponse::try_parse_text(&xml).unwrap(), response);
    }
}
