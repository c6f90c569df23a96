use crate::message::{OchpMessage, OchpResponse, RESULT};
use crate::types::{ResultStatus, TariffInfo};
use chrono::{DateTime, Utc};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, FromXml, OchpResult, ToXml};
use xmltree::Element;

/// Download of tariffs, all of them or those changed since `last_update`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GetTariffUpdatesRequest {
    pub last_update: Option<DateTime<Utc>>,
}

impl GetTariffUpdatesRequest {
    pub fn new(last_update: Option<DateTime<Utc>>) -> Self {
        Self { last_update }
    }
}

impl FromXml for GetTariffUpdatesRequest {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            last_update: element.map_date_time_opt("lastUpdate")?,
        })
    }
}

impl ToXml for GetTariffUpdatesRequest {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name).with_opt_date_time("lastUpdate", self.last_update.as_ref())
    }
}

impl OchpMessage for GetTariffUpdatesRequest {
    const ELEMENT: &'static str = "GetTariffUpdatesRequest";
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetTariffUpdatesResponse {
    pub result: ResultStatus,
    pub tariffs: Vec<TariffInfo>,
}

impl GetTariffUpdatesResponse {
    pub fn ok(tariffs: Vec<TariffInfo>) -> Self {
        Self {
            result: ResultStatus::ok(),
            tariffs,
        }
    }
}

impl FromXml for GetTariffUpdatesResponse {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            result: element.map_element(RESULT)?,
            tariffs: element.map_elements("TariffInfoArray")?,
        })
    }
}

impl ToXml for GetTariffUpdatesResponse {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_element(RESULT, &self.result)
            .with_elements("TariffInfoArray", &self.tariffs)
    }
}

impl OchpMessage for GetTariffUpdatesResponse {
    const ELEMENT: &'static str = "GetTariffUpdatesResponse";
}

impl OchpResponse for GetTariffUpdatesResponse {
    fn from_result(result: ResultStatus) -> Self {
        Self {
            result,
            tariffs: Vec::new(),
        }
    }

    fn result(&self) -> &ResultStatus {
        &self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::tariff_info::tests::sample_tariff;
    use chrono::TimeZone;

    #[test]
    fn test_request() {
        let request = GetTariffUpdatesRequest::new(Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
        assert_eq!(GetTariffUpdatesRequest::try_parse(&request.to_xml()).unwrap(), request);
        assert!(GetTariffUpdatesRequest::default().to_xml().children.is_empty());
    }

    #[test]
    fn test_response_round_trip() {
        let response = GetTariffUpdatesResponse::ok(vec![
            sample_tariff("DE*ABC*T1"),
            sample_tariff("DE*ABC*T2"),
        ]);
        assert_eq!(GetTariffUpdatesResponse::try_parse(&response.to_xml()).unwrap(), response);
    }
}
