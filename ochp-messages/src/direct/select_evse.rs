use crate::message::{OchpMessage, OchpResponse, RESULT};
use crate::types::ResultStatus;
use chrono::{DateTime, Utc};
use ochp_core::xml::ochp_element;
use ochp_core::{
    BuildElement, ContractId, DirectId, ElementExt, EvseId, FromXml, OchpError, OchpResult, ToXml,
};
use xmltree::Element;

/// Selection of a foreign EVSE for a direct charging session
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectEvseRequest {
    evse_id: EvseId,
    contract_id: ContractId,
    reserve_until: Option<DateTime<Utc>>,
}

impl SelectEvseRequest {
    /// Fails with `InvalidArgument` if `reserve_until` is not in the future
    pub fn new(
        evse_id: EvseId,
        contract_id: ContractId,
        reserve_until: Option<DateTime<Utc>>,
    ) -> OchpResult<Self> {
        if let Some(reserve_until) = reserve_until {
            if reserve_until <= Utc::now() {
                return Err(OchpError::InvalidArgument(format!(
                    "reserveUntil {} is not in the future",
                    reserve_until
                )));
            }
        }
        Ok(Self {
            evse_id,
            contract_id,
            reserve_until,
        })
    }

    pub fn evse_id(&self) -> &EvseId {
        &self.evse_id
    }

    pub fn contract_id(&self) -> &ContractId {
        &self.contract_id
    }

    /// Requested end of the reservation
    pub fn reserve_until(&self) -> Option<DateTime<Utc>> {
        self.reserve_until
    }
}

impl FromXml for SelectEvseRequest {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            evse_id: element.map_value("evseId")?,
            contract_id: element.map_value("contractId")?,
            reserve_until: element.map_date_time_opt("reserveUntil")?,
        })
    }
}

impl ToXml for SelectEvseRequest {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_value("evseId", &self.evse_id)
            .with_value("contractId", &self.contract_id)
            .with_opt_date_time("reserveUntil", self.reserve_until.as_ref())
    }
}

impl OchpMessage for SelectEvseRequest {
    const ELEMENT: &'static str = "SelectEVSERequest";
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SelectEvseResponse {
    pub result: ResultStatus,
    /// Session id assigned by the operator
    pub direct_id: Option<DirectId>,
    /// End of the granted reservation
    pub ttl: Option<DateTime<Utc>>,
}

impl SelectEvseResponse {
    pub fn ok(direct_id: DirectId, ttl: Option<DateTime<Utc>>) -> Self {
        Self {
            result: ResultStatus::ok(),
            direct_id: Some(direct_id),
            ttl,
        }
    }
}

impl FromXml for SelectEvseResponse {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            result: element.map_element(RESULT)?,
            direct_id: element.map_value_opt("directId")?,
            ttl: element.map_date_time_opt("ttl")?,
        })
    }
}

impl ToXml for SelectEvseResponse {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_element(RESULT, &self.result)
            .with_opt_value("directId", self.direct_id.as_ref())
            .with_opt_date_time("ttl", self.ttl.as_ref())
    }
}

impl OchpMessage for SelectEvseResponse {
    const ELEMENT: &'static str = "SelectEVSEResponse";
}

impl OchpResponse for SelectEvseResponse {
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
    use chrono::{Duration, TimeZone};

    fn ids() -> (EvseId, ContractId) {
        (
            EvseId::parse("DE*ABC*E1").unwrap(),
            ContractId::parse("DE*8PS*123456789*0").unwrap(),
        )
    }

    #[test]
    fn test_reservation_must_be_in_the_future() {
        let (evse, contract) = ids();
        let past = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        assert!(matches!(
            SelectEvseRequest::new(evse.clone(), contract.clone(), Some(past)),
            Err(OchpError::InvalidArgument(_))
        ));
        assert!(SelectEvseRequest::new(evse.clone(), contract.clone(), None).is_ok());
        assert!(SelectEvseRequest::new(evse, contract, Some(Utc::now() + Duration::minutes(15))).is_ok());
    }

    #[test]
    fn test_parse_keeps_past_reservation() {
        let (evse, contract) = ids();
        let request = SelectEvseRequest {
            evse_id: evse,
            contract_id: contract,
            reserve_until: Some(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()),
        };
        assert_eq!(SelectEvseRequest::try_parse(&request.to_xml()).unwrap(), request);
    }

    #[test]
    fn test_response_round_trip() {
        let response = SelectEvseResponse::ok(
            DirectId::parse("DE*ABC*Session-42").unwrap(),
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 15, 0).unwrap()),
        );
        let parsed = SelectEvseResponse::try_parse(&response.to_xml()).unwrap();
        assert_eq!(parsed, response);
        assert_eq!(parsed.direct_id.unwrap().to_string(), "DE*ABC*Session-42");
    }

    #[test]
    fn test_refused_selection() {
        let response = SelectEvseResponse::invalid_id("EVSE is occupied");
        let parsed = SelectEvseResponse::try_parse(&response.to_xml()).unwrap();
        assert_eq!(parsed.direct_id, None);
        assert!(!parsed.is_ok());
    }
}
