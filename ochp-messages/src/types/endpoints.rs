//! OCHPdirect service endpoints
//!
//! Providers and operators publish the URL of their direct interface through
//! the clearing house together with regular expressions selecting the
//! identifiers they serve.

use chrono::{DateTime, Utc};
use ochp_core::xml::ochp_element;
use ochp_core::{
    BuildElement, ElementExt, FromXml, OchpError, OchpResult, OperatorId, ProviderId, ToXml,
};
use regex::Regex;
use std::hash::{Hash, Hasher};
use xmltree::Element;

/// Identifier pattern that must match the whole identifier
///
/// Compared and hashed by its source text.
#[derive(Debug, Clone)]
pub struct IdPattern {
    source: String,
    regex: Regex,
}

impl IdPattern {
    pub fn new(source: impl Into<String>) -> Result<Self, regex::Error> {
        let source = source.into();
        let regex = Regex::new(&format!("^(?:{})$", source))?;
        Ok(Self { source, regex })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, id: &str) -> bool {
        self.regex.is_match(id)
    }
}

impl PartialEq for IdPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for IdPattern {}

impl Hash for IdPattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
    }
}

/// Address and access data of one direct interface
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndpointInfo {
    pub url: String,
    pub namespace_url: String,
    pub access_token: String,
    /// Last day the access token is valid
    pub valid_date: DateTime<Utc>,
    whitelist: IdPattern,
    blacklist: Option<IdPattern>,
}

impl EndpointInfo {
    /// Create an endpoint, failing with `InvalidArgument` if the whitelist
    /// or blacklist is not a valid regular expression
    pub fn new(
        url: impl Into<String>,
        namespace_url: impl Into<String>,
        access_token: impl Into<String>,
        valid_date: DateTime<Utc>,
        whitelist: impl Into<String>,
        blacklist: Option<String>,
    ) -> OchpResult<Self> {
        let pattern = |name: &str, source: String| {
            IdPattern::new(source)
                .map_err(|e| OchpError::InvalidArgument(format!("invalid {}: {}", name, e)))
        };
        Ok(Self {
            url: url.into(),
            namespace_url: namespace_url.into(),
            access_token: access_token.into(),
            valid_date,
            whitelist: pattern("whitelist", whitelist.into())?,
            blacklist: blacklist.map(|b| pattern("blacklist", b)).transpose()?,
        })
    }

    /// Replace the blacklist, failing with `InvalidArgument` on a bad pattern
    pub fn with_blacklist(mut self, blacklist: impl Into<String>) -> OchpResult<Self> {
        let blacklist = IdPattern::new(blacklist)
            .map_err(|e| OchpError::InvalidArgument(format!("invalid blacklist: {}", e)))?;
        self.blacklist = Some(blacklist);
        Ok(self)
    }

    /// Identifiers served by this endpoint
    pub fn whitelist(&self) -> &IdPattern {
        &self.whitelist
    }

    /// Identifiers excluded although matched by the whitelist
    pub fn blacklist(&self) -> Option<&IdPattern> {
        self.blacklist.as_ref()
    }

    /// Whether `id` is served by this endpoint
    pub fn accepts(&self, id: &str) -> bool {
        self.whitelist.is_match(id)
            && !self.blacklist.as_ref().is_some_and(|blacklist| blacklist.is_match(id))
    }

    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now <= self.valid_date
    }

    fn write(&self, element: Element) -> Element {
        element
            .with_value("url", &self.url)
            .with_value("namespaceUrl", &self.namespace_url)
            .with_value("accessToken", &self.access_token)
            .with_date_time("validDate", &self.valid_date)
            .with_value("whitelist", self.whitelist.as_str())
            .with_opt_value("blacklist", self.blacklist.as_ref().map(IdPattern::as_str))
    }
}

fn read_pattern(name: &str, source: String) -> OchpResult<IdPattern> {
    IdPattern::new(source.as_str())
        .map_err(|e| OchpError::invalid_value(name, format!("'{}': {}", source, e)))
}

impl FromXml for EndpointInfo {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            url: element.map_text("url")?,
            namespace_url: element.map_text("namespaceUrl")?,
            access_token: element.map_text("accessToken")?,
            valid_date: element.map_date_time("validDate")?,
            whitelist: read_pattern("whitelist", element.map_text("whitelist")?)?,
            blacklist: element
                .map_text_opt("blacklist")?
                .map(|source| read_pattern("blacklist", source))
                .transpose()?,
        })
    }
}

impl ToXml for EndpointInfo {
    fn to_xml_named(&self, name: &str) -> Element {
        self.write(ochp_element(name))
    }
}

/// Direct endpoint of a provider, for the listed provider ids
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProviderEndpoint {
    pub endpoint: EndpointInfo,
    pub providers: Vec<ProviderId>,
}

impl FromXml for ProviderEndpoint {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            endpoint: EndpointInfo::from_xml(element)?,
            providers: element.map_values("provider")?,
        })
    }
}

impl ToXml for ProviderEndpoint {
    fn to_xml_named(&self, name: &str) -> Element {
        self.endpoint
            .to_xml_named(name)
            .with_values("provider", &self.providers)
    }
}

/// Direct endpoint of an operator, for the listed operator ids
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperatorEndpoint {
    pub endpoint: EndpointInfo,
    pub operators: Vec<OperatorId>,
}

impl FromXml for OperatorEndpoint {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            endpoint: EndpointInfo::from_xml(element)?,
            operators: element.map_values("operator")?,
        })
    }
}

impl ToXml for OperatorEndpoint {
    fn to_xml_named(&self, name: &str) -> Element {
        self.endpoint
            .to_xml_named(name)
            .with_values("operator", &self.operators)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;

    pub(crate) fn sample_endpoint(whitelist: &str) -> EndpointInfo {
        EndpointInfo::new(
            "https://direct.example.com/ochp",
            "http://ochp.eu/1.4",
            "secret-token",
            Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
            whitelist,
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let result = EndpointInfo::new(
            "https://direct.example.com/ochp",
            "http://ochp.eu/1.4",
            "secret-token",
            Utc::now(),
            "DE\\*ABC(",
            None,
        );
        assert!(matches!(result, Err(OchpError::InvalidArgument(_))));
    }

    #[test]
    fn test_accepts() {
        let endpoint = sample_endpoint(r"DE\*ABC\*E.*");
        assert!(endpoint.accepts("DE*ABC*E1"));
        assert!(!endpoint.accepts("XDE*ABC*E1"));

        let endpoint = endpoint.with_blacklist(r"DE\*ABC\*E9.*").unwrap();
        assert!(endpoint.accepts("DE*ABC*E1"));
        assert!(!endpoint.accepts("DE*ABC*E90"));
        assert_eq!(endpoint.blacklist().map(IdPattern::as_str), Some(r"DE\*ABC\*E9.*"));
        assert!(sample_endpoint(".*").with_blacklist("(").is_err());
    }

    #[test]
    fn test_invalid_pattern_in_xml_is_a_format_error() {
        let element = sample_endpoint(".*")
            .to_xml_named("operatorEndpointArray")
            .with_value("blacklist", "DE\\*ABC(");
        assert!(matches!(
            EndpointInfo::from_xml(&element),
            Err(OchpError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_validity() {
        let endpoint = sample_endpoint(".*");
        assert!(endpoint.is_valid_at(Utc.with_ymd_and_hms(2029, 6, 1, 0, 0, 0).unwrap()));
        assert!(!endpoint.is_valid_at(Utc.with_ymd_and_hms(2030, 6, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_operator_endpoint_round_trip() {
        let endpoint = OperatorEndpoint {
            endpoint: sample_endpoint(".*"),
            operators: vec![OperatorId::parse("DE*ABC").unwrap(), OperatorId::parse("+49*123").unwrap()],
        };
        let parsed = OperatorEndpoint::from_xml(&endpoint.to_xml_named("operatorEndpointArray")).unwrap();
        assert_eq!(parsed, endpoint);
    }

    #[test]
    fn test_provider_endpoint_round_trip() {
        let endpoint = ProviderEndpoint {
            endpoint: sample_endpoint(r"DE\*8PS\*.*"),
            providers: vec![ProviderId::parse("DE*8PS").unwrap()],
        };
        let parsed = ProviderEndpoint::from_xml(&endpoint.to_xml_named("providerEndpointArray")).unwrap();
        assert_eq!(parsed, endpoint);
    }
}
