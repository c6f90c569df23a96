use crate::message::OchpMessage;
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, EvseId, FromXml, OchpResult, ToXml};
use xmltree::Element;

/// Report of wrong static or live data about an EVSE
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReportDiscrepancyRequest {
    pub evse_id: EvseId,
    /// Free text description of the problem
    pub report: String,
}

impl ReportDiscrepancyRequest {
    pub fn new(evse_id: EvseId, report: impl Into<String>) -> Self {
        Self {
            evse_id,
            report: report.into(),
        }
    }
}

impl FromXml for ReportDiscrepancyRequest {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            evse_id: element.map_value("evseId")?,
            report: element.map_text("report")?,
        })
    }
}

impl ToXml for ReportDiscrepancyRequest {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_value("evseId", &self.evse_id)
            .with_value("report", &self.report)
    }
}

impl OchpMessage for ReportDiscrepancyRequest {
    const ELEMENT: &'static str = "ReportDiscrepancyRequest";
}

result_response! {
    ReportDiscrepancyResponse => "ReportDiscrepancyResponse"
}
