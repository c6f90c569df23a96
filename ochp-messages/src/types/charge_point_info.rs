//! Static charge point data exchanged by the charge point list operations

use crate::message::{require_elements, require_items};
use crate::types::{
    AdditionalGeoPoint, Address, AuthMethod, ChargePointStatus, ConnectorFormat,
    ConnectorStandard, GeneralLocation, GeoPoint, Hours, ImageClass, ParkingRestriction,
    RelatedResourceClass,
};
use chrono::{DateTime, Utc};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, EvseId, FromXml, OchpResult, TariffId, ToXml};
use xmltree::Element;

/// Image linked from a charge point
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EvseImageUrl {
    pub uri: String,
    pub thumb_uri: Option<String>,
    pub class: ImageClass,
    /// Image file type, e.g. `png`
    pub kind: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl FromXml for EvseImageUrl {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            uri: element.map_text("uri")?,
            thumb_uri: element.map_text_opt("thumbUri")?,
            class: element.map_value("class")?,
            kind: element.map_text("type")?,
            width: element.map_value_opt("width")?,
            height: element.map_value_opt("height")?,
        })
    }
}

impl ToXml for EvseImageUrl {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_value("uri", &self.uri)
            .with_opt_value("thumbUri", self.thumb_uri.as_deref())
            .with_value("class", self.class)
            .with_value("type", &self.kind)
            .with_opt_value("width", self.width)
            .with_opt_value("height", self.height)
    }
}

/// Web resource linked from a charge point
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelatedResource {
    pub uri: String,
    pub class: RelatedResourceClass,
}

impl FromXml for RelatedResource {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            uri: element.map_text("uri")?,
            class: element.map_value("class")?,
        })
    }
}

impl ToXml for RelatedResource {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_value("uri", &self.uri)
            .with_value("class", self.class)
    }
}

/// Plug type of an EVSE, optionally bound to a tariff
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Connector {
    pub standard: ConnectorStandard,
    pub format: ConnectorFormat,
    pub tariff_id: Option<TariffId>,
}

impl Connector {
    pub fn new(standard: ConnectorStandard, format: ConnectorFormat) -> Self {
        Self {
            standard,
            format,
            tariff_id: None,
        }
    }

    pub fn with_tariff(mut self, tariff_id: TariffId) -> Self {
        self.tariff_id = Some(tariff_id);
        self
    }
}

impl FromXml for Connector {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            standard: element.map_wrapped("connectorStandard", "ConnectorStandard")?,
            format: element.map_wrapped("connectorFormat", "ConnectorFormat")?,
            tariff_id: element.map_value_opt("tariffId")?,
        })
    }
}

impl ToXml for Connector {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_wrapped("connectorStandard", "ConnectorStandard", self.standard)
            .with_wrapped("connectorFormat", "ConnectorFormat", self.format)
            .with_opt_value("tariffId", self.tariff_id.as_ref())
    }
}

/// Electrical ratings of an EVSE
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratings {
    /// Maximum power in kW
    pub maximum_power: f32,
    /// Power in kW that is guaranteed under all conditions
    pub guaranteed_power: Option<f32>,
    /// Nominal voltage in V
    pub nominal_voltage: Option<u32>,
}

impl Ratings {
    pub fn new(maximum_power: f32) -> Self {
        Self {
            maximum_power,
            guaranteed_power: None,
            nominal_voltage: None,
        }
    }
}

impl FromXml for Ratings {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            maximum_power: element.map_value("maximumPower")?,
            guaranteed_power: element.map_value_opt("guaranteedPower")?,
            nominal_voltage: element.map_value_opt("nominalVoltage")?,
        })
    }
}

impl ToXml for Ratings {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_value("maximumPower", self.maximum_power)
            .with_opt_value("guaranteedPower", self.guaranteed_power)
            .with_opt_value("nominalVoltage", self.nominal_voltage)
    }
}

/// Planned status change of a charge point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChargePointSchedule {
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: ChargePointStatus,
}

impl FromXml for ChargePointSchedule {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            start_date: element.map_date_time("startDate")?,
            end_date: element.map_date_time_opt("endDate")?,
            status: element.map_wrapped("status", "ChargePointStatusType")?,
        })
    }
}

impl ToXml for ChargePointSchedule {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_date_time("startDate", &self.start_date)
            .with_opt_date_time("endDate", self.end_date.as_ref())
            .with_wrapped("status", "ChargePointStatusType", self.status)
    }
}

/// Static data of one EVSE
///
/// ```xml
/// <ns:chargePointInfoArray>
///   <ns:evseId>DE*ABC*E123*1</ns:evseId>
///   <ns:locationId>Loc-1</ns:locationId>
///   <ns:timestamp><ns:DateTime>?</ns:DateTime></ns:timestamp>
///   <ns:locationName>City Hall</ns:locationName>
///   <ns:locationNameLang>DEU</ns:locationNameLang>
///   <ns:images>*</ns:images>
///   <ns:relatedResource>*</ns:relatedResource>
///   <ns:chargePointAddress>..</ns:chargePointAddress>
///   <ns:chargePointLocation lat=".." lon=".."/>
///   <ns:relatedLocation lat=".." lon="..">*</ns:relatedLocation>
///   <ns:timeZone>?</ns:timeZone>
///   <ns:openingTimes>?</ns:openingTimes>
///   <ns:status><ns:ChargePointStatusType>?</ns:ChargePointStatusType></ns:status>
///   <ns:statusSchedule>*</ns:statusSchedule>
///   <ns:telephoneNumber>?</ns:telephoneNumber>
///   <ns:location><ns:GeneralLocationType>on-street</ns:GeneralLocationType></ns:location>
///   <ns:floorLevel>?</ns:floorLevel>
///   <ns:parkingSlotNumber>?</ns:parkingSlotNumber>
///   <ns:parkingRestriction><ns:restriction>*</ns:restriction></ns:parkingRestriction>
///   <ns:authMethods><ns:AuthMethodType>+</ns:AuthMethodType></ns:authMethods>
///   <ns:connectors>+</ns:connectors>
///   <ns:ratings>?</ns:ratings>
///   <ns:userInterfaceLang>*</ns:userInterfaceLang>
///   <ns:maxReservation>?</ns:maxReservation>
/// </ns:chargePointInfoArray>
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ChargePointInfo {
    pub evse_id: EvseId,
    pub location_id: String,
    /// Time of the last change of this record
    pub timestamp: Option<DateTime<Utc>>,
    pub location_name: String,
    /// ISO 639-3 language of `location_name`
    pub location_name_lang: String,
    pub images: Vec<EvseImageUrl>,
    pub related_resources: Vec<RelatedResource>,
    pub address: Address,
    pub location: GeoPoint,
    pub related_locations: Vec<AdditionalGeoPoint>,
    /// IANA time zone name, e.g. `Europe/Berlin`
    pub time_zone: Option<String>,
    pub opening_times: Option<Hours>,
    pub status: Option<ChargePointStatus>,
    pub status_schedule: Vec<ChargePointSchedule>,
    pub telephone_number: Option<String>,
    pub general_location: GeneralLocation,
    pub floor_level: Option<String>,
    pub parking_slot_number: Option<String>,
    pub parking_restrictions: Vec<ParkingRestriction>,
    pub auth_methods: Vec<AuthMethod>,
    pub connectors: Vec<Connector>,
    pub ratings: Option<Ratings>,
    pub user_interface_langs: Vec<String>,
    /// Maximum reservation time in minutes
    pub max_reservation: Option<f32>,
}

impl ChargePointInfo {
    /// Create a record with the mandatory fields
    ///
    /// At least one authorisation method and one connector are required.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        evse_id: EvseId,
        location_id: impl Into<String>,
        location_name: impl Into<String>,
        location_name_lang: impl Into<String>,
        address: Address,
        location: GeoPoint,
        general_location: GeneralLocation,
        auth_methods: Vec<AuthMethod>,
        connectors: Vec<Connector>,
    ) -> OchpResult<Self> {
        let auth_methods = require_items("authorisation method", auth_methods)?;
        let connectors = require_items("connector", connectors)?;

        Ok(Self {
            evse_id,
            location_id: location_id.into(),
            timestamp: None,
            location_name: location_name.into(),
            location_name_lang: location_name_lang.into(),
            images: Vec::new(),
            related_resources: Vec::new(),
            address,
            location,
            related_locations: Vec::new(),
            time_zone: None,
            opening_times: None,
            status: None,
            status_schedule: Vec::new(),
            telephone_number: None,
            general_location,
            floor_level: None,
            parking_slot_number: None,
            parking_restrictions: Vec::new(),
            auth_methods,
            connectors,
            ratings: None,
            user_interface_langs: Vec::new(),
            max_reservation: None,
        })
    }
}

impl FromXml for ChargePointInfo {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        let auth_methods = require_elements(
            element,
            "authMethods",
            element.map_wrapped_values("authMethods", "AuthMethodType")?,
        )?;
        let connectors = require_elements(element, "connectors", element.map_elements("connectors")?)?;

        Ok(Self {
            evse_id: element.map_value("evseId")?,
            location_id: element.map_text("locationId")?,
            timestamp: element.map_date_time_opt("timestamp")?,
            location_name: element.map_text("locationName")?,
            location_name_lang: element.map_text("locationNameLang")?,
            images: element.map_elements("images")?,
            related_resources: element.map_elements("relatedResource")?,
            address: element.map_element("chargePointAddress")?,
            location: element.map_element("chargePointLocation")?,
            related_locations: element.map_elements("relatedLocation")?,
            time_zone: element.map_text_opt("timeZone")?,
            opening_times: element.map_element_opt("openingTimes")?,
            status: element.map_wrapped_opt("status", "ChargePointStatusType")?,
            status_schedule: element.map_elements("statusSchedule")?,
            telephone_number: element.map_text_opt("telephoneNumber")?,
            general_location: element.map_wrapped("location", "GeneralLocationType")?,
            floor_level: element.map_text_opt("floorLevel")?,
            parking_slot_number: element.map_text_opt("parkingSlotNumber")?,
            parking_restrictions: element.map_wrapped_values("parkingRestriction", "restriction")?,
            auth_methods,
            connectors,
            ratings: element.map_element_opt("ratings")?,
            user_interface_langs: element.map_texts("userInterfaceLang")?,
            max_reservation: element.map_value_opt("maxReservation")?,
        })
    }
}

impl ToXml for ChargePointInfo {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_value("evseId", &self.evse_id)
            .with_value("locationId", &self.location_id)
            .with_opt_date_time("timestamp", self.timestamp.as_ref())
            .with_value("locationName", &self.location_name)
            .with_value("locationNameLang", &self.location_name_lang)
            .with_elements("images", &self.images)
            .with_elements("relatedResource", &self.related_resources)
            .with_element("chargePointAddress", &self.address)
            .with_element("chargePointLocation", &self.location)
            .with_elements("relatedLocation", &self.related_locations)
            .with_opt_value("timeZone", self.time_zone.as_deref())
            .with_opt_element("openingTimes", self.opening_times.as_ref())
            .with_opt_wrapped("status", "ChargePointStatusType", self.status)
            .with_elements("statusSchedule", &self.status_schedule)
            .with_opt_value("telephoneNumber", self.telephone_number.as_deref())
            .with_wrapped("location", "GeneralLocationType", self.general_location)
            .with_opt_value("floorLevel", self.floor_level.as_deref())
            .with_opt_value("parkingSlotNumber", self.parking_slot_number.as_deref())
            .with_wrapped_values("parkingRestriction", "restriction", &self.parking_restrictions)
            .with_wrapped_values("authMethods", "AuthMethodType", &self.auth_methods)
            .with_elements("connectors", &self.connectors)
            .with_opt_element("ratings", self.ratings.as_ref())
            .with_values("userInterfaceLang", &self.user_interface_langs)
            .with_opt_value("maxReservation", self.max_reservation)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::types::{Hours, RelatedLocationType};
    use chrono::TimeZone;
    use ochp_core::xml::{element_to_string, parse_element};
    use ochp_core::OchpError;

    pub(crate) fn sample_charge_point(evse: &str) -> ChargePointInfo {
        ChargePointInfo::new(
            EvseId::parse(evse).unwrap(),
            "LOC-1",
            "Rathaus",
            "DEU",
            Address::new("Marktplatz", "Karlsruhe", "76133", "DEU").with_house_number("1"),
            GeoPoint::new(49.0094, 8.4044).unwrap(),
            GeneralLocation::OnStreet,
            vec![AuthMethod::RfidMifareCls, AuthMethod::OchpDirectAuth],
            vec![Connector::new(ConnectorStandard::Iec62196T2, ConnectorFormat::Socket)
                .with_tariff(TariffId::parse("DE*ABC*T1").unwrap())],
        )
        .unwrap()
    }

    #[test]
    fn test_new_requires_connectors_and_auth_methods() {
        let evse = EvseId::parse("DE*ABC*E1").unwrap();
        let address = Address::new("a", "b", "c", "DEU");
        let location = GeoPoint::new(0.0, 0.0).unwrap();
        let connector = Connector::new(ConnectorStandard::Chademo, ConnectorFormat::Cable);

        assert!(ChargePointInfo::new(
            evse.clone(),
            "l",
            "n",
            "DEU",
            address.clone(),
            location,
            GeneralLocation::Other,
            vec![],
            vec![connector],
        )
        .is_err());
        assert!(ChargePointInfo::new(
            evse,
            "l",
            "n",
            "DEU",
            address,
            location,
            GeneralLocation::Other,
            vec![AuthMethod::Public],
            vec![],
        )
        .is_err());
    }

    #[test]
    fn test_minimal_round_trip() {
        let info = sample_charge_point("DE*ABC*E1");
        let parsed = ChargePointInfo::from_xml(&info.to_xml_named("chargePointInfoArray")).unwrap();
        assert_eq!(parsed, info);
    }

    #[test]
    fn test_full_round_trip_through_text() {
        let mut info = sample_charge_point("DE*ABC*E2");
        info.timestamp = Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
        info.images.push(EvseImageUrl {
            uri: "https://example.com/a.png".into(),
            thumb_uri: None,
            class: ImageClass::StationPhoto,
            kind: "png".into(),
            width: Some(640),
            height: Some(480),
        });
        info.related_resources.push(RelatedResource {
            uri: "https://example.com/info".into(),
            class: RelatedResourceClass::StationInfo,
        });
        info.related_locations.push(AdditionalGeoPoint {
            point: GeoPoint::new(49.01, 8.41).unwrap(),
            name: None,
            kind: RelatedLocationType::Entrance,
        });
        info.time_zone = Some("Europe/Berlin".into());
        info.opening_times = Some(Hours::twenty_four_seven());
        info.status = Some(ChargePointStatus::Operative);
        info.status_schedule.push(ChargePointSchedule {
            start_date: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            end_date: None,
            status: ChargePointStatus::Inoperative,
        });
        info.parking_restrictions = vec![ParkingRestriction::EvOnly, ParkingRestriction::Plugged];
        info.ratings = Some(Ratings {
            maximum_power: 22.0,
            guaranteed_power: Some(11.0),
            nominal_voltage: Some(400),
        });
        info.user_interface_langs = vec!["DEU".into(), "ENG".into()];
        info.max_reservation = Some(15.0);

        let xml = element_to_string(&info.to_xml_named("chargePointInfoArray"));
        assert!(xml.contains("<ns:authMethods><ns:AuthMethodType>RfidMifareCls</ns:AuthMethodType></ns:authMethods>"));
        assert!(xml.contains("<ns:parkingRestriction><ns:restriction>evonly</ns:restriction></ns:parkingRestriction>"));

        let parsed = ChargePointInfo::from_xml(&parse_element(&xml).unwrap()).unwrap();
        assert_eq!(parsed, info);
    }

    #[test]
    fn test_missing_connectors_is_rejected() {
        let info = sample_charge_point("DE*ABC*E3");
        let mut element = info.to_xml_named("chargePointInfoArray");
        element
            .children
            .retain(|node| node.as_element().map_or(true, |e| e.name != "connectors"));
        assert!(matches!(
            ChargePointInfo::from_xml(&element),
            Err(OchpError::MissingElement(_))
        ));
    }
}
