//! Fluent construction of OCHP elements

use crate::xml::read::{DATE_TIME, LOCAL_DATE_TIME};
use crate::xml::time::{format_date_time, format_local_date_time};
use crate::xml::{text_element, wrapped_element, ToXml};
use chrono::{DateTime, FixedOffset, Utc};
use xmltree::{Element, XMLNode};

/// Builder methods for OCHP elements
///
/// Every method consumes and returns the element so that a message can be
/// written as one expression. The `_opt` variants skip absent values, so
/// optional fields never produce empty elements.
pub trait BuildElement: Sized {
    fn with_child(self, child: Element) -> Self;

    fn with_text(self, value: impl ToString) -> Self;

    fn with_attribute(self, name: &str, value: impl ToString) -> Self;

    fn with_children(self, children: impl IntoIterator<Item = Element>) -> Self {
        children
            .into_iter()
            .fold(self, |element, child| element.with_child(child))
    }

    fn with_opt_child(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.with_child(child),
            None => self,
        }
    }

    fn with_opt_attribute<T: ToString>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.with_attribute(name, value),
            None => self,
        }
    }

    /// `<ns:name>value</ns:name>`
    fn with_value(self, name: &str, value: impl ToString) -> Self {
        self.with_child(text_element(name, value))
    }

    fn with_opt_value<T: ToString>(self, name: &str, value: Option<T>) -> Self {
        self.with_opt_child(value.map(|value| text_element(name, value)))
    }

    /// One `<ns:name>` per item
    fn with_values<T: ToString>(self, name: &str, values: impl IntoIterator<Item = T>) -> Self {
        self.with_children(values.into_iter().map(|value| text_element(name, value)))
    }

    fn with_element<T: ToXml>(self, name: &str, value: &T) -> Self {
        self.with_child(value.to_xml_named(name))
    }

    fn with_opt_element<T: ToXml>(self, name: &str, value: Option<&T>) -> Self {
        self.with_opt_child(value.map(|value| value.to_xml_named(name)))
    }

    fn with_elements<'a, T: ToXml + 'a>(
        self,
        name: &str,
        values: impl IntoIterator<Item = &'a T>,
    ) -> Self {
        self.with_children(values.into_iter().map(|value| value.to_xml_named(name)))
    }

    /// `<ns:outer><ns:inner>value</ns:inner></ns:outer>`
    fn with_wrapped(self, outer: &str, inner: &str, value: impl ToString) -> Self {
        self.with_child(wrapped_element(outer, inner, value))
    }

    fn with_opt_wrapped<T: ToString>(self, outer: &str, inner: &str, value: Option<T>) -> Self {
        self.with_opt_child(value.map(|value| wrapped_element(outer, inner, value)))
    }

    fn with_wrapped_values<T: ToString>(
        self,
        outer: &str,
        inner: &str,
        values: impl IntoIterator<Item = T>,
    ) -> Self {
        self.with_children(
            values
                .into_iter()
                .map(|value| wrapped_element(outer, inner, value)),
        )
    }

    fn with_date_time(self, name: &str, value: &DateTime<Utc>) -> Self {
        self.with_wrapped(name, DATE_TIME, format_date_time(value))
    }

    fn with_opt_date_time(self, name: &str, value: Option<&DateTime<Utc>>) -> Self {
        match value {
            Some(value) => self.with_date_time(name, value),
            None => self,
        }
    }

    fn with_local_date_time(self, name: &str, value: &DateTime<FixedOffset>) -> Self {
        self.with_wrapped(name, LOCAL_DATE_TIME, format_local_date_time(value))
    }

    fn with_opt_local_date_time(self, name: &str, value: Option<&DateTime<FixedOffset>>) -> Self {
        match value {
            Some(value) => self.with_local_date_time(name, value),
            None => self,
        }
    }
}

impl BuildElement for Element {
    fn with_child(mut self, child: Element) -> Self {
        self.children.push(XMLNode::Element(child));
        self
    }

    fn with_text(mut self, value: impl ToString) -> Self {
        self.children.push(XMLNode::Text(value.to_string()));
        self
    }

    fn with_attribute(mut self, name: &str, value: impl ToString) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::{element_to_string, ochp_element, parse_element, ElementExt};
    use chrono::TimeZone;

    #[test]
    fn test_optional_values_are_omitted() {
        let element = ochp_element("ControlEVSERequest")
            .with_value("directId", "DE*ABC*1")
            .with_opt_value::<f32>("maxPower", None)
            .with_opt_value("maxCurrent", Some(16.0f32));
        assert!(element.child("maxPower").is_none());
        assert_eq!(element.child("maxCurrent").unwrap().text(), "16");
    }

    #[test]
    fn test_repeated_values_keep_order() {
        let element = ochp_element("GetEVSEStatusRequest")
            .with_values("requestedEvseId", ["DE*ABC*E1", "DE*ABC*E2", "DE*ABC*E3"]);
        let values: Vec<String> = element.map_values("requestedEvseId").unwrap();
        assert_eq!(values, vec!["DE*ABC*E1", "DE*ABC*E2", "DE*ABC*E3"]);
    }

    #[test]
    fn test_date_time_round_trip_through_text() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let element = ochp_element("GetChargePointListUpdatesRequest")
            .with_date_time("lastUpdate", &instant)
            .with_attribute("note", "x");
        let xml = element_to_string(&element);
        assert!(xml.contains("<ns:lastUpdate><ns:DateTime>2024-01-01T00:00:00Z</ns:DateTime></ns:lastUpdate>"));

        let parsed = parse_element(&xml).unwrap();
        assert_eq!(parsed.map_date_time("lastUpdate").unwrap(), instant);
        assert_eq!(parsed.map_attribute::<String>("note").unwrap(), "x");
    }
}
