use crate::message::OchpMessage;
use crate::types::{OperatorEndpoint, ProviderEndpoint};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, FromXml, OchpResult, ToXml};
use xmltree::Element;

/// Publication of the sender's own direct endpoints
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AddServiceEndpointsRequest {
    pub provider_endpoints: Vec<ProviderEndpoint>,
    pub operator_endpoints: Vec<OperatorEndpoint>,
}

impl FromXml for AddServiceEndpointsRequest {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            provider_endpoints: element.map_elements("providerEndpointArray")?,
            operator_endpoints: element.map_elements("operatorEndpointArray")?,
        })
    }
}

impl ToXml for AddServiceEndpointsRequest {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_elements("providerEndpointArray", &self.provider_endpoints)
            .with_elements("operatorEndpointArray", &self.operator_endpoints)
    }
}

impl OchpMessage for AddServiceEndpointsRequest {
    const ELEMENT: &'static str = "AddServiceEndpointsRequest";
}

result_response! {
    AddServiceEndpointsResponse => "AddServiceEndpointsResponse"
}
