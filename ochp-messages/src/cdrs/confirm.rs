use crate::message::OchpMessage;
use crate::types::EvseCdrPair;
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, FromXml, OchpResult, ToXml};
use xmltree::Element;

/// Approval or rejection of downloaded CDRs by a provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ConfirmCdrsRequest {
    pub approved: Vec<EvseCdrPair>,
    pub declined: Vec<EvseCdrPair>,
}

impl ConfirmCdrsRequest {
    pub fn new(approved: Vec<EvseCdrPair>, declined: Vec<EvseCdrPair>) -> Self {
        Self { approved, declined }
    }

    pub fn is_empty(&self) -> bool {
        self.approved.is_empty() && self.declined.is_empty()
    }
}

impl FromXml for ConfirmCdrsRequest {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            approved: element.map_elements("approved")?,
            declined: element.map_elements("declined")?,
        })
    }
}

impl ToXml for ConfirmCdrsRequest {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_elements("approved", &self.approved)
            .with_elements("declined", &self.declined)
    }
}

impl OchpMessage for ConfirmCdrsRequest {
    const ELEMENT: &'static str = "ConfirmCDRsRequest";
}

result_response! {
    ConfirmCdrsResponse => "ConfirmCDRsResponse"
}
