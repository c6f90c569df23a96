//! Tariff publication

use crate::message::require_elements;
use crate::types::{BillingItem, RegularHours};
use chrono::{DateTime, Utc};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, FromXml, OchpResult, ProviderId, TariffId, ToXml};
use xmltree::Element;

/// Price of one billing item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceComponent {
    pub billing_item: BillingItem,
    /// Price per unit, excluding tax
    pub item_price: f64,
    /// Minimum billed amount, in the unit of `billing_item`
    pub step_size: u32,
}

impl PriceComponent {
    pub fn new(billing_item: BillingItem, item_price: f64, step_size: u32) -> Self {
        Self {
            billing_item,
            item_price,
            step_size,
        }
    }
}

impl FromXml for PriceComponent {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            billing_item: element.map_wrapped("billingItem", "BillingItemType")?,
            item_price: element.map_value("itemPrice")?,
            step_size: element.map_value("stepSize")?,
        })
    }
}

impl ToXml for PriceComponent {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_wrapped("billingItem", "BillingItemType", self.billing_item)
            .with_value("itemPrice", self.item_price)
            .with_value("stepSize", self.step_size)
    }
}

/// Conditions under which a tariff element applies
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TariffRestriction {
    pub regular_hours: Vec<RegularHours>,
    pub start_date_time: Option<DateTime<Utc>>,
    pub end_date_time: Option<DateTime<Utc>>,
    /// kWh
    pub min_energy: Option<f32>,
    pub max_energy: Option<f32>,
    /// kW
    pub min_power: Option<f32>,
    pub max_power: Option<f32>,
}

impl FromXml for TariffRestriction {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            regular_hours: element.map_elements("regularHours")?,
            start_date_time: element.map_date_time_opt("startDateTime")?,
            end_date_time: element.map_date_time_opt("endDateTime")?,
            min_energy: element.map_value_opt("minEnergy")?,
            max_energy: element.map_value_opt("maxEnergy")?,
            min_power: element.map_value_opt("minPower")?,
            max_power: element.map_value_opt("maxPower")?,
        })
    }
}

impl ToXml for TariffRestriction {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_elements("regularHours", &self.regular_hours)
            .with_opt_date_time("startDateTime", self.start_date_time.as_ref())
            .with_opt_date_time("endDateTime", self.end_date_time.as_ref())
            .with_opt_value("minEnergy", self.min_energy)
            .with_opt_value("maxEnergy", self.max_energy)
            .with_opt_value("minPower", self.min_power)
            .with_opt_value("maxPower", self.max_power)
    }
}

/// Price components together with their restriction
#[derive(Debug, Clone, PartialEq)]
pub struct TariffElement {
    pub price_components: Vec<PriceComponent>,
    pub restriction: Option<TariffRestriction>,
}

impl TariffElement {
    pub fn new(price_components: Vec<PriceComponent>) -> Self {
        Self {
            price_components,
            restriction: None,
        }
    }
}

impl FromXml for TariffElement {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            price_components: require_elements(
                element,
                "priceComponent",
                element.map_elements("priceComponent")?,
            )?,
            restriction: element.map_element_opt("tariffRestriction")?,
        })
    }
}

impl ToXml for TariffElement {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_elements("priceComponent", &self.price_components)
            .with_opt_element("tariffRestriction", self.restriction.as_ref())
    }
}

/// Tariff offered to a set of providers, or to everyone if `recipients` is empty
#[derive(Debug, Clone, PartialEq)]
pub struct IndividualTariff {
    pub tariff_elements: Vec<TariffElement>,
    pub recipients: Vec<ProviderId>,
    /// ISO 4217 currency code
    pub currency: String,
}

impl IndividualTariff {
    pub fn new(tariff_elements: Vec<TariffElement>, currency: impl Into<String>) -> Self {
        Self {
            tariff_elements,
            recipients: Vec::new(),
            currency: currency.into(),
        }
    }

    /// Whether this tariff applies to the given provider
    pub fn applies_to(&self, provider: &ProviderId) -> bool {
        self.recipients.is_empty() || self.recipients.contains(provider)
    }
}

impl FromXml for IndividualTariff {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            tariff_elements: require_elements(
                element,
                "tariffElement",
                element.map_elements("tariffElement")?,
            )?,
            recipients: element.map_values("recipient")?,
            currency: element.map_text("currency")?,
        })
    }
}

impl ToXml for IndividualTariff {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_elements("tariffElement", &self.tariff_elements)
            .with_values("recipient", &self.recipients)
            .with_value("currency", &self.currency)
    }
}

/// All individual tariffs published under one tariff id
#[derive(Debug, Clone, PartialEq)]
pub struct TariffInfo {
    pub tariff_id: TariffId,
    pub individual_tariffs: Vec<IndividualTariff>,
}

impl TariffInfo {
    pub fn new(tariff_id: TariffId, individual_tariffs: Vec<IndividualTariff>) -> Self {
        Self {
            tariff_id,
            individual_tariffs,
        }
    }

    /// The first individual tariff that applies to `provider`
    pub fn tariff_for(&self, provider: &ProviderId) -> Option<&IndividualTariff> {
        self.individual_tariffs
            .iter()
            .find(|tariff| tariff.applies_to(provider))
    }
}

impl FromXml for TariffInfo {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            tariff_id: element.map_value("tariffId")?,
            individual_tariffs: require_elements(
                element,
                "individualTariff",
                element.map_elements("individualTariff")?,
            )?,
        })
    }
}

impl ToXml for TariffInfo {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_value("tariffId", &self.tariff_id)
            .with_elements("individualTariff", &self.individual_tariffs)
    }
}
