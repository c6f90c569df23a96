//! Live status of EVSEs and parking spots

use crate::types::{EvseMajorStatus, EvseMinorStatus, ParkingSpotStatus};
use chrono::{DateTime, Utc};
use ochp_core::xml::{format_date_time, ochp_element, parse_date_time};
use ochp_core::{BuildElement, ElementExt, EvseId, FromXml, OchpResult, ParkingId, ToXml};
use xmltree::Element;

fn read_ttl(element: &Element) -> OchpResult<Option<DateTime<Utc>>> {
    element
        .map_attribute_opt::<String>("ttl")?
        .map(|text| parse_date_time(&text))
        .transpose()
}

/// Status of one EVSE
///
/// `<ns:evse major="available" minor="reserved" ttl="2024-01-01T00:00:00Z"><ns:evseId>..</ns:evseId></ns:evse>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EvseStatus {
    pub evse_id: EvseId,
    pub major: EvseMajorStatus,
    pub minor: Option<EvseMinorStatus>,
    /// Time after which the status falls back to the static one
    pub ttl: Option<DateTime<Utc>>,
}

impl EvseStatus {
    pub fn new(evse_id: EvseId, major: EvseMajorStatus) -> Self {
        Self {
            evse_id,
            major,
            minor: None,
            ttl: None,
        }
    }

    pub fn with_minor(mut self, minor: EvseMinorStatus) -> Self {
        self.minor = Some(minor);
        self
    }

    pub fn with_ttl(mut self, ttl: DateTime<Utc>) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

impl FromXml for EvseStatus {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            evse_id: element.map_value("evseId")?,
            major: element.map_attribute("major")?,
            minor: element.map_attribute_opt("minor")?,
            ttl: read_ttl(element)?,
        })
    }
}

impl ToXml for EvseStatus {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_attribute("major", self.major)
            .with_opt_attribute("minor", self.minor)
            .with_opt_attribute("ttl", self.ttl.as_ref().map(format_date_time))
            .with_value("evseId", &self.evse_id)
    }
}

/// Status of one parking spot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParkingStatus {
    pub parking_id: ParkingId,
    pub status: ParkingSpotStatus,
    pub ttl: Option<DateTime<Utc>>,
}

impl ParkingStatus {
    pub fn new(parking_id: ParkingId, status: ParkingSpotStatus) -> Self {
        Self {
            parking_id,
            status,
            ttl: None,
        }
    }
}

impl FromXml for ParkingStatus {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            parking_id: element.map_value("parkingId")?,
            status: element.map_attribute("status")?,
            ttl: read_ttl(element)?,
        })
    }
}

impl ToXml for ParkingStatus {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_attribute("status", self.status)
            .with_opt_attribute("ttl", self.ttl.as_ref().map(format_date_time))
            .with_value("parkingId", &self.parking_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ochp_core::xml::parse_element;
    use ochp_core::OchpError;

    #[test]
    fn test_evse_status_from_text() {
        let element = parse_element(
            r#"<ns:evse xmlns:ns="http://ochp.eu/1.4" major="not-available" minor="charging">
                 <ns:evseId>DE*ABC*E1</ns:evseId>
               </ns:evse>"#,
        )
        .unwrap();
        let status = EvseStatus::from_xml(&element).unwrap();
        assert_eq!(status.major, EvseMajorStatus::NotAvailable);
        assert_eq!(status.minor, Some(EvseMinorStatus::Charging));
        assert_eq!(status.ttl, None);
    }

    #[test]
    fn test_evse_status_round_trip() {
        let status = EvseStatus::new(EvseId::parse("DE*ABC*E1").unwrap(), EvseMajorStatus::Available)
            .with_minor(EvseMinorStatus::Reserved)
            .with_ttl(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap());
        let element = status.to_xml_named("evse");
        assert_eq!(
            element.attributes.get("ttl").map(String::as_str),
            Some("2024-01-01T12:00:00Z")
        );
        assert_eq!(EvseStatus::from_xml(&element).unwrap(), status);
    }

    #[test]
    fn test_unknown_major_status() {
        let element = ochp_element("evse")
            .with_attribute("major", "broken")
            .with_value("evseId", "DE*ABC*E1");
        assert!(matches!(
            EvseStatus::from_xml(&element),
            Err(OchpError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_parking_status_round_trip() {
        let status = ParkingStatus::new(
            ParkingId::parse("DE*ABC*P1").unwrap(),
            ParkingSpotStatus::NotAvailable,
        );
        assert_eq!(ParkingStatus::from_xml(&status.to_xml_named("parking")).unwrap(), status);
    }
}
