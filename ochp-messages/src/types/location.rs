//! Addresses and geo coordinates

use crate::types::RelatedLocationType;
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, FromXml, OchpError, OchpResult, ToXml};
use xmltree::Element;

/// WGS84 coordinate, written as `lat`/`lon` attributes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Create a coordinate, validating the value ranges
    pub fn new(latitude: f64, longitude: f64) -> OchpResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(OchpError::InvalidArgument(format!(
                "latitude {} out of range",
                latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(OchpError::InvalidArgument(format!(
                "longitude {} out of range",
                longitude
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    fn read(element: &Element) -> OchpResult<Self> {
        let latitude = element.map_attribute("lat")?;
        let longitude = element.map_attribute("lon")?;
        Self::new(latitude, longitude)
            .map_err(|e| OchpError::invalid_value(element.name.clone(), e))
    }
}

impl FromXml for GeoPoint {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Self::read(element)
    }
}

impl ToXml for GeoPoint {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_attribute("lat", self.latitude)
            .with_attribute("lon", self.longitude)
    }
}

/// Additional point of interest near a charge point, e.g. the entrance
#[derive(Debug, Clone, PartialEq)]
pub struct AdditionalGeoPoint {
    pub point: GeoPoint,
    pub name: Option<String>,
    pub kind: RelatedLocationType,
}

impl FromXml for AdditionalGeoPoint {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            point: GeoPoint::read(element)?,
            name: element.map_text_opt("name")?,
            kind: element.map_value("type")?,
        })
    }
}

impl ToXml for AdditionalGeoPoint {
    fn to_xml_named(&self, name: &str) -> Element {
        self.point
            .to_xml_named(name)
            .with_opt_value("name", self.name.as_deref())
            .with_value("type", self.kind)
    }
}

/// Postal address of a charge point
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    pub house_number: Option<String>,
    pub street: String,
    pub city: String,
    pub zip_code: String,
    /// ISO 3166-1 alpha-3 country code
    pub country: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        zip_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            house_number: None,
            street: street.into(),
            city: city.into(),
            zip_code: zip_code.into(),
            country: country.into(),
        }
    }

    pub fn with_house_number(mut self, house_number: impl Into<String>) -> Self {
        self.house_number = Some(house_number.into());
        self
    }
}

impl FromXml for Address {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            house_number: element.map_text_opt("houseNumber")?,
            street: element.map_text("address")?,
            city: element.map_text("city")?,
            zip_code: element.map_text("zipCode")?,
            country: element.map_text("country")?,
        })
    }
}

impl ToXml for Address {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_opt_value("houseNumber", self.house_number.as_deref())
            .with_value("address", &self.street)
            .with_value("city", &self.city)
            .with_value("zipCode", &self.zip_code)
            .with_value("country", &self.country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_point_range() {
        assert!(GeoPoint::new(49.0, 8.4).is_ok());
        assert!(GeoPoint::new(91.0, 8.4).is_err());
        assert!(GeoPoint::new(49.0, -181.0).is_err());
    }

    #[test]
    fn test_geo_point_attributes() {
        let point = GeoPoint::new(49.01, 8.404).unwrap();
        let element = point.to_xml_named("chargePointLocation");
        assert_eq!(element.attributes.get("lat").map(String::as_str), Some("49.01"));
        assert_eq!(GeoPoint::from_xml(&element).unwrap(), point);
    }

    #[test]
    fn test_out_of_range_attribute_is_a_format_error() {
        let element = ochp_element("chargePointLocation")
            .with_attribute("lat", "100")
            .with_attribute("lon", "8");
        assert!(matches!(
            GeoPoint::from_xml(&element),
            Err(OchpError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_related_location() {
        let location = AdditionalGeoPoint {
            point: GeoPoint::new(49.0, 8.0).unwrap(),
            name: Some("Gate 2".into()),
            kind: RelatedLocationType::Entrance,
        };
        let parsed = AdditionalGeoPoint::from_xml(&location.to_xml_named("relatedLocation")).unwrap();
        assert_eq!(parsed, location);
    }

    #[test]
    fn test_address_without_house_number() {
        let address = Address::new("Hauptstrasse", "Karlsruhe", "76131", "DEU");
        let element = address.to_xml_named("chargePointAddress");
        assert!(element.child("houseNumber").is_none());
        assert_eq!(Address::from_xml(&element).unwrap(), address);

        let numbered = address.with_house_number("5a");
        assert_eq!(Address::from_xml(&numbered.to_xml_named("a")).unwrap(), numbered);
    }
}
