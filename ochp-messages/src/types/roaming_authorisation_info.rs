//! Entries of the roaming authorisation list

use crate::types::EmtId;
use chrono::{DateTime, Utc};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ContractId, ElementExt, FromXml, OchpResult, ToXml};
use xmltree::Element;

/// A token that charge point operators must accept, with its contract
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoamingAuthorisationInfo {
    pub emt_id: EmtId,
    pub contract_id: ContractId,
    /// Number printed on the physical card
    pub printed_number: Option<String>,
    pub expiry_date: DateTime<Utc>,
}

impl RoamingAuthorisationInfo {
    pub fn new(emt_id: EmtId, contract_id: ContractId, expiry_date: DateTime<Utc>) -> Self {
        Self {
            emt_id,
            contract_id,
            printed_number: None,
            expiry_date,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiry_date <= now
    }
}

impl FromXml for RoamingAuthorisationInfo {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            emt_id: element.map_element("EmtId")?,
            contract_id: element.map_value("contractId")?,
            printed_number: element.map_text_opt("printedNumber")?,
            expiry_date: element.map_date_time("expiryDate")?,
        })
    }
}

impl ToXml for RoamingAuthorisationInfo {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_element("EmtId", &self.emt_id)
            .with_value("contractId", &self.contract_id)
            .with_opt_value("printedNumber", self.printed_number.as_deref())
            .with_date_time("expiryDate", &self.expiry_date)
    }
}
