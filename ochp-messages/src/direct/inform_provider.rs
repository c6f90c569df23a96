use crate::direct::ChargeLimits;
use crate::message::OchpMessage;
use crate::types::{CdrPeriod, DirectMessage};
use chrono::{DateTime, Utc};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ContractId, DirectId, ElementExt, EvseId, FromXml, OchpResult, ToXml};
use xmltree::Element;

/// Progress report of a direct session, sent by the operator to the provider
#[derive(Debug, Clone, PartialEq)]
pub struct InformProviderRequest {
    pub message: DirectMessage,
    pub evse_id: EvseId,
    pub contract_id: ContractId,
    pub direct_id: DirectId,
    /// End of the session reservation
    pub ttl: Option<DateTime<Utc>>,
    /// Battery state of charge in percent
    pub state_of_charge: Option<u8>,
    pub limits: ChargeLimits,
    pub departure: Option<DateTime<Utc>>,
    /// kW
    pub current_power: Option<f32>,
    /// kWh
    pub charged_energy: Option<f32>,
    /// kWh
    pub meter_reading: Option<f32>,
    pub charging_periods: Vec<CdrPeriod>,
    pub current_cost: Option<f64>,
    pub currency: Option<String>,
}

impl InformProviderRequest {
    pub fn new(
        message: DirectMessage,
        evse_id: EvseId,
        contract_id: ContractId,
        direct_id: DirectId,
    ) -> Self {
        Self {
            message,
            evse_id,
            contract_id,
            direct_id,
            ttl: None,
            state_of_charge: None,
            limits: ChargeLimits::default(),
            departure: None,
            current_power: None,
            charged_energy: None,
            meter_reading: None,
            charging_periods: Vec::new(),
            current_cost: None,
            currency: None,
        }
    }
}

impl FromXml for InformProviderRequest {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            message: element.map_value("message")?,
            evse_id: element.map_value("evseId")?,
            contract_id: element.map_value("contractId")?,
            direct_id: element.map_value("directId")?,
            ttl: element.map_date_time_opt("ttl")?,
            state_of_charge: element.map_value_opt("stateOfCharge")?,
            limits: ChargeLimits::read(element)?,
            departure: element.map_date_time_opt("departure")?,
            current_power: element.map_value_opt("currentPower")?,
            charged_energy: element.map_value_opt("chargedEnergy")?,
            meter_reading: element.map_value_opt("meterReading")?,
            charging_periods: element.map_elements("chargingPeriods")?,
            current_cost: element.map_value_opt("currentCost")?,
            currency: element.map_text_opt("currency")?,
        })
    }
}

impl ToXml for InformProviderRequest {
    fn to_xml_named(&self, name: &str) -> Element {
        let element = ochp_element(name)
            .with_value("message", self.message)
            .with_value("evseId", &self.evse_id)
            .with_value("contractId", &self.contract_id)
            .with_value("directId", &self.direct_id)
            .with_opt_date_time("ttl", self.ttl.as_ref())
            .with_opt_value("stateOfCharge", self.state_of_charge);
        self.limits
            .write(element)
            .with_opt_date_time("departure", self.departure.as_ref())
            .with_opt_value("currentPower", self.current_power)
            .with_opt_value("chargedEnergy", self.charged_energy)
            .with_opt_value("meterReading", self.meter_reading)
            .with_elements("chargingPeriods", &self.charging_periods)
            .with_opt_value("currentCost", self.current_cost)
            .with_opt_value("currency", self.currency.as_deref())
    }
}

impl OchpMessage for InformProviderRequest {
    const ELEMENT: &'static str = "InformProviderRequest";
}

result_response! {
    InformProviderResponse => "InformProviderResponse"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::cdr_info::tests::sample_cdr;
    use ochp_core::xml::element_to_string;

    fn sample_request(message: DirectMessage) -> InformProviderRequest {
        InformProviderRequest::new(
            message,
            EvseId::parse("DE*ABC*E1").unwrap(),
            ContractId::parse("DE*8PS*123456789*0").unwrap(),
            DirectId::parse("DE*ABC*4711").unwrap(),
        )
    }

    #[test]
    fn test_minimal_round_trip() {
        let request = sample_request(DirectMessage::Info);
        let element = request.to_xml();
        assert_eq!(element.children.len(), 4);
        assert_eq!(InformProviderRequest::try_parse(&element).unwrap(), request);
    }

    #[test]
    fn test_progress_round_trip_through_text() {
        let mut request = sample_request(DirectMessage::Finished);
        request.state_of_charge = Some(80);
        request.limits.max_power = Some(22.0);
        request.current_power = Some(0.0);
        request.charged_energy = Some(12.5);
        request.meter_reading = Some(10234.25);
        request.charging_periods = sample_cdr("CDR-1").charging_periods;
        request.current_cost = Some(4.875);
        request.currency = Some("EUR".into());

        let xml = element_to_string(&request.to_xml());
        assert!(xml.contains("<ns:message>finished</ns:message>"));
        assert_eq!(InformProviderRequest::try_parse_text(&xml).unwrap(), request);
    }

    #[test]
    fn test_unknown_message_kind() {
        let mut element = sample_request(DirectMessage::Error).to_xml();
        if let Some(message) = element.get_mut_child("message") {
            message.children.clear();
            message.children.push(xmltree::XMLNode::Text("warning".into()));
        }
        assert!(InformProviderRequest::try_parse(&element).is_err());
    }
}
