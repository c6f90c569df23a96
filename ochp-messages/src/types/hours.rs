//! Opening hours

use chrono::{DateTime, NaiveTime, Timelike, Utc};
use ochp_core::xml::ochp_element;
use ochp_core::{BuildElement, ElementExt, FromXml, OchpError, OchpResult, ToXml};
use xmltree::Element;

const TIME_FORMAT: &str = "%H:%M";

fn parse_time(element: &Element, attribute: &str) -> OchpResult<NaiveTime> {
    let text: String = element.map_attribute(attribute)?;
    NaiveTime::parse_from_str(&text, TIME_FORMAT)
        .map_err(|e| OchpError::invalid_value(attribute, format!("'{}': {}", text, e)))
}

/// Weekly recurring opening period
///
/// Written as `<ns:regularHours weekday="1" periodBegin="08:00" periodEnd="18:00"/>`,
/// weekdays counted from Monday (1) to Sunday (7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegularHours {
    weekday: u8,
    period_begin: NaiveTime,
    period_end: NaiveTime,
}

impl RegularHours {
    /// Fails with `InvalidArgument` for a weekday outside 1..=7 or a time
    /// with seconds, which `HH:MM` cannot carry
    pub fn new(weekday: u8, period_begin: NaiveTime, period_end: NaiveTime) -> OchpResult<Self> {
        if !(1..=7).contains(&weekday) {
            return Err(OchpError::InvalidArgument(format!(
                "weekday must be within 1..=7, got {}",
                weekday
            )));
        }
        for time in [period_begin, period_end] {
            if time.second() != 0 || time.nanosecond() != 0 {
                return Err(OchpError::InvalidArgument(format!(
                    "opening time {} has seconds, only hours and minutes are allowed",
                    time
                )));
            }
        }
        Ok(Self {
            weekday,
            period_begin,
            period_end,
        })
    }

    pub fn weekday(&self) -> u8 {
        self.weekday
    }

    pub fn period_begin(&self) -> NaiveTime {
        self.period_begin
    }

    pub fn period_end(&self) -> NaiveTime {
        self.period_end
    }
}

impl FromXml for RegularHours {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        let weekday: u8 = element.map_attribute("weekday")?;
        Self::new(
            weekday,
            parse_time(element, "periodBegin")?,
            parse_time(element, "periodEnd")?,
        )
        .map_err(|e| OchpError::invalid_value(element.name.clone(), e))
    }
}

impl ToXml for RegularHours {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_attribute("weekday", self.weekday)
            .with_attribute("periodBegin", self.period_begin.format(TIME_FORMAT))
            .with_attribute("periodEnd", self.period_end.format(TIME_FORMAT))
    }
}

/// One-off opening or closing period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExceptionalPeriod {
    pub begin: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl FromXml for ExceptionalPeriod {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            begin: element.map_date_time("periodBegin")?,
            end: element.map_date_time("periodEnd")?,
        })
    }
}

impl ToXml for ExceptionalPeriod {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_date_time("periodBegin", &self.begin)
            .with_date_time("periodEnd", &self.end)
    }
}

/// Opening times of a charge point
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Hours {
    pub regular_hours: Vec<RegularHours>,
    pub twenty_four_seven: bool,
    pub exceptional_openings: Vec<ExceptionalPeriod>,
    pub exceptional_closings: Vec<ExceptionalPeriod>,
    /// Whether charging is impossible while the location is closed
    pub closed_charging: Option<bool>,
}

impl Hours {
    /// Always open
    pub fn twenty_four_seven() -> Self {
        Self {
            twenty_four_seven: true,
            ..Self::default()
        }
    }

    pub fn regular(regular_hours: Vec<RegularHours>) -> Self {
        Self {
            regular_hours,
            ..Self::default()
        }
    }
}

impl FromXml for Hours {
    fn from_xml(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            regular_hours: element.map_elements("regularHours")?,
            twenty_four_seven: element.map_flag_opt("twentyfourseven")?.unwrap_or(false),
            exceptional_openings: element.map_elements("exceptionalOpenings")?,
            exceptional_closings: element.map_elements("exceptionalClosings")?,
            closed_charging: element.map_flag_opt("closedCharging")?,
        })
    }
}

impl ToXml for Hours {
    fn to_xml_named(&self, name: &str) -> Element {
        ochp_element(name)
            .with_elements("regularHours", &self.regular_hours)
            .with_opt_value("twentyfourseven", self.twenty_four_seven.then_some(true))
            .with_elements("exceptionalOpenings", &self.exceptional_openings)
            .with_elements("exceptionalClosings", &self.exceptional_closings)
            .with_opt_value("closedCharging", self.closed_charging)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_weekday_range() {
        assert!(RegularHours::new(0, time(8, 0), time(18, 0)).is_err());
        assert!(RegularHours::new(8, time(8, 0), time(18, 0)).is_err());
        assert!(RegularHours::new(7, time(8, 0), time(18, 0)).is_ok());
    }

    #[test]
    fn test_seconds_are_rejected() {
        let with_seconds = NaiveTime::from_hms_opt(8, 0, 30).unwrap();
        assert!(matches!(
            RegularHours::new(1, with_seconds, time(18, 0)),
            Err(OchpError::InvalidArgument(_))
        ));
        let with_millis = NaiveTime::from_hms_milli_opt(18, 0, 0, 500).unwrap();
        assert!(RegularHours::new(1, time(8, 0), with_millis).is_err());
    }

    #[test]
    fn test_regular_hours_attributes() {
        let hours = RegularHours::new(1, time(8, 0), time(18, 30)).unwrap();
        let element = hours.to_xml_named("regularHours");
        assert_eq!(element.attributes.get("periodEnd").map(String::as_str), Some("18:30"));
        assert_eq!(RegularHours::from_xml(&element).unwrap(), hours);
    }

    #[test]
    fn test_hours_round_trip() {
        let closing = ExceptionalPeriod {
            begin: Utc.with_ymd_and_hms(2024, 12, 24, 0, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 12, 26, 0, 0, 0).unwrap(),
        };
        let hours = Hours {
            regular_hours: vec![
                RegularHours::new(1, time(8, 0), time(18, 0)).unwrap(),
                RegularHours::new(2, time(8, 0), time(18, 0)).unwrap(),
            ],
            exceptional_closings: vec![closing],
            closed_charging: Some(false),
            ..Hours::default()
        };
        assert_eq!(Hours::from_xml(&hours.to_xml_named("openingTimes")).unwrap(), hours);
    }

    #[test]
    fn test_twenty_four_seven() {
        let element = Hours::twenty_four_seven().to_xml_named("openingTimes");
        assert_eq!(element.child("twentyfourseven").unwrap().text(), "true");
        assert!(Hours::from_xml(&element).unwrap().twenty_four_seven);

        let element = Hours::regular(vec![]).to_xml_named("openingTimes");
        assert!(element.child("twentyfourseven").is_none());
    }
}
