//! Charge detail records

use crate::message::require_elements;
use crate::types::{Address, BillingItem, CdrStatus, ChargePointType, Connector, EmtId, Ratings};
use chrono::{DateTime, FixedOffset};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, CdrId, ContractId, ElementExt, EvseId, FromXml, OchpResult, ToXml};
use xmltree::Element;

/// One billed period of a charging session
#[derive(Debug, Clone, PartialEq)]
pub struct CdrPeriod {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub billing_item: BillingItem,
    /// Billed quantity in the unit of `billing_item`
    pub billing_value: f32,
    /// Price per unit, excluding tax
    pub item_price: f64,
    pub period_cost: Option<f64>,
    /// Tax rate in percent
    pub tax_rate: Option<f32>,
}

impl FromXml for CdrPeriod {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            start: element.map_local_date_time("startDateTime")?,
            end: element.map_local_date_time("endDateTime")?,
            billing_item: element.map_wrapped("billingItem", "BillingItemType")?,
            billing_value: element.map_value("billingValue")?,
            item_price: element.map_value("itemPrice")?,
            period_cost: element.map_value_opt("periodCost")?,
            tax_rate: element.map_value_opt("taxrate")?,
        })
    }
}

impl ToXml for CdrPeriod {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_local_date_time("startDateTime", &self.start)
            .with_local_date_time("endDateTime", &self.end)
            .with_wrapped("billingItem", "BillingItemType", self.billing_item)
            .with_value("billingValue", self.billing_value)
            .with_value("itemPrice", self.item_price)
            .with_opt_value("periodCost", self.period_cost)
            .with_opt_value("taxrate", self.tax_rate)
    }
}

/// Reference to a CDR by its id and EVSE
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EvseCdrPair {
    pub cdr_id: CdrId,
    pub evse_id: EvseId,
}

impl EvseCdrPair {
    pub fn new(cdr_id: CdrId, evse_id: EvseId) -> Self {
        Self { cdr_id, evse_id }
    }
}

impl From<&CdrInfo> for EvseCdrPair {
    fn from(cdr: &CdrInfo) -> Self {
        Self::new(cdr.cdr_id.clone(), cdr.evse_id.clone())
    }
}

impl FromXml for EvseCdrPair {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            cdr_id: element.map_value("cdrId")?,
            evse_id: element.map_value("evseId")?,
        })
    }
}

impl ToXml for EvseCdrPair {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_value("cdrId", &self.cdr_id)
            .with_value("evseId", &self.evse_id)
    }
}

/// Charge detail record of one completed session
#[derive(Debug, Clone, PartialEq)]
pub struct CdrInfo {
    pub cdr_id: CdrId,
    pub emt_id: EmtId,
    pub contract_id: ContractId,
    pub evse_id: EvseId,
    pub charge_point_type: ChargePointType,
    pub connector: Connector,
    pub ratings: Option<Ratings>,
    pub meter_id: Option<String>,
    pub status: CdrStatus,
    /// Session start in the local time of the charge point
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub address: Option<Address>,
    pub charging_periods: Vec<CdrPeriod>,
    pub total_cost: Option<f64>,
    /// ISO 4217 currency code
    pub currency: String,
}

impl CdrInfo {
    pub fn pair(&self) -> EvseCdrPair {
        EvseCdrPair::from(self)
    }

    /// Sum of the period costs, if every period carries one
    pub fn period_cost_sum(&self) -> Option<f64> {
        self.charging_periods
            .iter()
            .map(|period| period.period_cost)
            .sum()
    }
}

impl FromXml for CdrInfo {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            cdr_id: element.map_value("CdrId")?,
            emt_id: element.map_element("emtId")?,
            contract_id: element.map_value("contractId")?,
            evse_id: element.map_value("evseId")?,
            charge_point_type: element.map_value("chargePointType")?,
            connector: element.map_element("connectorType")?,
            ratings: element.map_element_opt("ratings")?,
            meter_id: element.map_text_opt("meterId")?,
            status: element.map_wrapped("status", "CdrStatusType")?,
            start: element.map_local_date_time("startDateTime")?,
            end: element.map_local_date_time("endDateTime")?,
            address: element.map_element_opt("chargePointAddress")?,
            charging_periods: require_elements(
                element,
                "chargingPeriods",
                element.map_elements("chargingPeriods")?,
            )?,
            total_cost: element.map_value_opt("totalCost")?,
            currency: element.map_text("currency")?,
        })
    }
}

impl ToXml for CdrInfo {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_value("CdrId", &self.cdr_id)
            .with_element("emtId", &self.emt_id)
            .with_value("contractId", &self.contract_id)
            .with_value("evseId", &self.evse_id)
            .with_value("chargePointType", self.charge_point_type)
            .with_element("connectorType", &self.connector)
            .with_opt_element("ratings", self.ratings.as_ref())
            .with_opt_value("meterId", self.meter_id.as_deref())
            .with_wrapped("status", "CdrStatusType", self.status)
            .with_local_date_time("startDateTime", &self.start)
            .with_local_date_time("endDateTime", &self.end)
            .with_opt_element("chargePointAddress", self.address.as_ref())
            .with_elements("chargingPeriods", &self.charging_periods)
            .with_opt_value("totalCost", self.total_cost)
            .with_value("currency", &self.currency)
    }
}
