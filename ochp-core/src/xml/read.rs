//! Typed extraction from OCHP elements

use crate::error::{OchpError, OchpResult};
use crate::xml::time::{parse_date_time, parse_local_date_time};
use crate::xml::{FromXml, OCHP_NS};
use chrono::{DateTime, FixedOffset, Utc};
use std::fmt::Display;
use std::str::FromStr;
use xmltree::Element;

/// Element name of the inner node of a UTC date-time wrapper
pub const DATE_TIME: &str = "DateTime";

/// Element name of the inner node of a local date-time wrapper
pub const LOCAL_DATE_TIME: &str = "LocalDateTime";

fn parse_text<T>(name: &str, text: &str) -> OchpResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    text.parse::<T>()
        .map_err(|e| OchpError::invalid_value(name, format!("'{}': {}", text, e)))
}

fn parse_flag(name: &str, text: &str) -> OchpResult<bool> {
    match text {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(OchpError::invalid_value(name, format!("'{}' is not a boolean", other))),
    }
}

/// Read access to OCHP elements
///
/// The `map_*` methods follow one naming scheme: the plain form requires the
/// child, `_opt` maps a missing child to `None`, and the plural form collects
/// all children of that name in document order.
pub trait ElementExt {
    /// Whether this element is `name` in the OCHP namespace
    fn is_ochp(&self, name: &str) -> bool;

    /// First OCHP child with the given name
    fn child(&self, name: &str) -> Option<&Element>;

    /// All OCHP children with the given name, in document order
    fn children_named<'a, 'b>(&'a self, name: &'b str) -> impl Iterator<Item = &'a Element>;

    /// Trimmed text content, empty if there is none
    fn text(&self) -> String;

    /// Text content exactly as written, empty if there is none
    fn raw_text(&self) -> String;

    fn required_child(&self, name: &str) -> OchpResult<&Element>;

    fn map_value<T>(&self, name: &str) -> OchpResult<T>
    where
        T: FromStr,
        T::Err: Display;

    fn map_value_opt<T>(&self, name: &str) -> OchpResult<Option<T>>
    where
        T: FromStr,
        T::Err: Display;

    fn map_values<T>(&self, name: &str) -> OchpResult<Vec<T>>
    where
        T: FromStr,
        T::Err: Display;

    /// Free text of a child, whitespace preserved
    fn map_text(&self, name: &str) -> OchpResult<String>;

    fn map_text_opt(&self, name: &str) -> OchpResult<Option<String>>;

    fn map_texts(&self, name: &str) -> OchpResult<Vec<String>>;

    fn map_flag_opt(&self, name: &str) -> OchpResult<Option<bool>>;

    fn map_element<T: FromXml>(&self, name: &str) -> OchpResult<T>;

    fn map_element_opt<T: FromXml>(&self, name: &str) -> OchpResult<Option<T>>;

    fn map_elements<T: FromXml>(&self, name: &str) -> OchpResult<Vec<T>>;

    /// Value of `<outer><inner>value</inner></outer>`
    fn map_wrapped<T>(&self, outer: &str, inner: &str) -> OchpResult<T>
    where
        T: FromStr,
        T::Err: Display;

    fn map_wrapped_opt<T>(&self, outer: &str, inner: &str) -> OchpResult<Option<T>>
    where
        T: FromStr,
        T::Err: Display;

    fn map_wrapped_values<T>(&self, outer: &str, inner: &str) -> OchpResult<Vec<T>>
    where
        T: FromStr,
        T::Err: Display;

    fn map_date_time(&self, name: &str) -> OchpResult<DateTime<Utc>>;

    fn map_date_time_opt(&self, name: &str) -> OchpResult<Option<DateTime<Utc>>>;

    fn map_local_date_time(&self, name: &str) -> OchpResult<DateTime<FixedOffset>>;

    fn map_local_date_time_opt(&self, name: &str) -> OchpResult<Option<DateTime<FixedOffset>>>;

    fn map_attribute<T>(&self, name: &str) -> OchpResult<T>
    where
        T: FromStr,
        T::Err: Display;

    fn map_attribute_opt<T>(&self, name: &str) -> OchpResult<Option<T>>
    where
        T: FromStr,
        T::Err: Display;
}

impl ElementExt for Element {
    fn is_ochp(&self, name: &str) -> bool {
        self.name == name && self.namespace.as_deref() == Some(OCHP_NS)
    }

    fn child(&self, name: &str) -> Option<&Element> {
        self.children
            .iter()
            .filter_map(|node| node.as_element())
            .find(|element| element.is_ochp(name))
    }

    fn children_named<'a, 'b>(&'a self, name: &'b str) -> impl Iterator<Item = &'a Element> {
        self.children
            .iter()
            .filter_map(|node| node.as_element())
            .filter(move |element| element.is_ochp(name))
    }

    fn text(&self) -> String {
        self.get_text()
            .map(|text| text.trim().to_string())
            .unwrap_or_default()
    }

    fn raw_text(&self) -> String {
        self.get_text()
            .map(|text| text.into_owned())
            .unwrap_or_default()
    }

    fn required_child(&self, name: &str) -> OchpResult<&Element> {
        self.child(name)
            .ok_or_else(|| OchpError::MissingElement(format!("{}/{}", self.name, name)))
    }

    fn map_value<T>(&self, name: &str) -> OchpResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        parse_text(name, &self.required_child(name)?.text())
    }

    fn map_value_opt<T>(&self, name: &str) -> OchpResult<Option<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.child(name)
            .map(|child| parse_text(name, &child.text()))
            .transpose()
    }

    fn map_values<T>(&self, name: &str) -> OchpResult<Vec<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.children_named(name)
            .map(|child| parse_text(name, &child.text()))
            .collect()
    }

    fn map_text(&self, name: &str) -> OchpResult<String> {
        Ok(self.required_child(name)?.raw_text())
    }

    fn map_text_opt(&self, name: &str) -> OchpResult<Option<String>> {
        Ok(self.child(name).map(|child| child.raw_text()))
    }

    fn map_texts(&self, name: &str) -> OchpResult<Vec<String>> {
        Ok(self.children_named(name).map(|child| child.raw_text()).collect())
    }

    fn map_flag_opt(&self, name: &str) -> OchpResult<Option<bool>> {
        self.child(name)
            .map(|child| parse_flag(name, &child.text()))
            .transpose()
    }

    fn map_element<T: FromXml>(&self, name: &str) -> OchpResult<T> {
        T::from_xml(self.required_child(name)?)
    }

    fn map_element_opt<T: FromXml>(&self, name: &str) -> OchpResult<Option<T>> {
        self.child(name).map(T::from_xml).transpose()
    }

    fn map_elements<T: FromXml>(&self, name: &str) -> OchpResult<Vec<T>> {
        self.children_named(name).map(T::from_xml).collect()
    }

    fn map_wrapped<T>(&self, outer: &str, inner: &str) -> OchpResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.required_child(outer)?.map_value(inner)
    }

    fn map_wrapped_opt<T>(&self, outer: &str, inner: &str) -> OchpResult<Option<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.child(outer)
            .map(|child| child.map_value(inner))
            .transpose()
    }

    fn map_wrapped_values<T>(&self, outer: &str, inner: &str) -> OchpResult<Vec<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.children_named(outer)
            .map(|child| child.map_value(inner))
            .collect()
    }

    fn map_date_time(&self, name: &str) -> OchpResult<DateTime<Utc>> {
        let wrapper = self.required_child(name)?;
        parse_date_time(&wrapper.required_child(DATE_TIME)?.text())
    }

    fn map_date_time_opt(&self, name: &str) -> OchpResult<Option<DateTime<Utc>>> {
        match self.child(name) {
            Some(wrapper) => Ok(Some(parse_date_time(
                &wrapper.required_child(DATE_TIME)?.text(),
            )?)),
            None => Ok(None),
        }
    }

    fn map_local_date_time(&self, name: &str) -> OchpResult<DateTime<FixedOffset>> {
        let wrapper = self.required_child(name)?;
        parse_local_date_time(&wrapper.required_child(LOCAL_DATE_TIME)?.text())
    }

    fn map_local_date_time_opt(&self, name: &str) -> OchpResult<Option<DateTime<FixedOffset>>> {
        match self.child(name) {
            Some(wrapper) => Ok(Some(parse_local_date_time(
                &wrapper.required_child(LOCAL_DATE_TIME)?.text(),
            )?)),
            None => Ok(None),
        }
    }

    fn map_attribute<T>(&self, name: &str) -> OchpResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let value = self
            .attributes
            .get(name)
            .ok_or_else(|| OchpError::MissingAttribute {
                element: self.name.clone(),
                attribute: name.to_string(),
            })?;
        parse_text(name, value.trim())
    }

    fn map_attribute_opt<T>(&self, name: &str) -> OchpResult<Option<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.attributes
            .get(name)
            .map(|value| parse_text(name, value.trim()))
            .transpose()
    }
}
