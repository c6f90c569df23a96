use crate::message::{OchpMessage, OchpResponse, RESULT};
use crate::types::{OperatorEndpoint, ProviderEndpoint, ResultStatus};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, FromXml, OchpResult, OperatorId, ProviderId, ToXml};
use xmltree::Element;

/// Download of the direct endpoints of all other participants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GetServiceEndpointsRequest;

impl FromXml for GetServiceEndpointsRequest {
    fn from_xml(_element: &Element) -> OchpResult<Self> {
        Ok(Self)
    }
}

impl ToXml for GetServiceEndpointsRequest {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
    }
}

impl OchpMessage for GetServiceEndpointsRequest {
    const ELEMENT: &'static str = "GetServiceEndpointsRequest";
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GetServiceEndpointsResponse {
    pub result: ResultStatus,
    pub provider_endpoints: Vec<ProviderEndpoint>,
    pub operator_endpoints: Vec<OperatorEndpoint>,
}

impl GetServiceEndpointsResponse {
    pub fn ok(
        provider_endpoints: Vec<ProviderEndpoint>,
        operator_endpoints: Vec<OperatorEndpoint>,
    ) -> Self {
        Self {
            result: ResultStatus::ok(),
            provider_endpoints,
            operator_endpoints,
        }
    }

    /// The endpoints published for `operator`
    pub fn operator_endpoints_for<'a>(
        &'a self,
        operator: &'a OperatorId,
    ) -> impl Iterator<Item = &'a OperatorEndpoint> + 'a {
        self.operator_endpoints
            .iter()
            .filter(move |endpoint| endpoint.operators.contains(operator))
    }

    /// The endpoints published for `provider`
    pub fn provider_endpoints_for<'a>(
        &'a self,
        provider: &'a ProviderId,
    ) -> impl Iterator<Item = &'a ProviderEndpoint> + 'a {
        self.provider_endpoints
            .iter()
            .filter(move |endpoint| endpoint.providers.contains(provider))
    }
}

impl FromXml for GetServiceEndpointsResponse {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            result: element.map_element(RESULT)?,
            provider_endpoints: element.map_elements("providerEndpointArray")?,
            operator_endpoints: element.map_elements("operatorEndpointArray")?,
        })
    }
}

impl ToXml for GetServiceEndpointsResponse {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_element(RESULT, &self.result)
            .with_elements("providerEndpointArray", &self.provider_endpoints)
            .with_elements("operatorEndpointArray", &self.operator_endpoints)
    }
}

impl OchpMessage for GetServiceEndpointsResponse {
    const ELEMENT: &'static str = "GetServiceEndpointsResponse";
}

impl OchpResponse for GetServiceEndpointsResponse {
    fn from_result(result: ResultStatus) -> Self {
        Self {
            result,
            ..Self::default()
        }
    }

    fn result(&self) -> &ResultStatus {
        &self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::endpoints::tests::sample_endpoint;

    fn sample_response() -> GetServiceEndpointsResponse {
        GetServiceEndpointsResponse::ok(
            vec![ProviderEndpoint {
                endpoint: sample_endpoint(r"DE\*8PS\*.*"),
                providers: vec![ProviderId::parse("DE*8PS").unwrap()],
            }],
            vec![
                OperatorEndpoint {
                    endpoint: sample_endpoint(r"DE\*ABC\*E.*"),
                    operators: vec![OperatorId::parse("DE*ABC").unwrap()],
                },
                OperatorEndpoint {
                    endpoint: sample_endpoint(r"NL\*XYZ\*E.*"),
                    operators: vec![OperatorId::parse("NL*XYZ").unwrap()],
                },
            ],
        )
    }

    #[test]
    fn test_round_trip() {
        let response = sample_response();
        assert_eq!(GetServiceEndpointsResponse::try_parse(&response.to_xml()).unwrap(), response);
    }

    #[test]
    fn test_lookup() {
        let response = sample_response();
        let operator = OperatorId::parse("NL*XYZ").unwrap();
        let found: Vec<_> = response.operator_endpoints_for(&operator).collect();
        assert_eq!(found.len(), 1);
        assert!(found[0].endpoint.accepts("NL*XYZ*E1"));

        let unknown = ProviderId::parse("FR*ABC").unwrap();
        assert_eq!(response.provider_endpoints_for(&unknown).count(), 0);
    }
}
