use ochp_core::{BuildElement, ElementExt, OchpError, OchpResult};
use xmltree::Element;

/// Power and energy limits of a direct charging session
///
/// Written inline into `ControlEVSE` and `InformProvider` messages.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChargeLimits {
    /// kW
    pub max_power: Option<f32>,
    /// A
    pub max_current: Option<f32>,
    pub one_phase: Option<bool>,
    /// kWh
    pub max_energy: Option<f32>,
    /// kWh
    pub min_energy: Option<f32>,
}

impl ChargeLimits {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check that all values are finite and non-negative and that the energy
    /// range is not inverted
    pub fn validate(&self) -> OchpResult<()> {
        let values = [
            ("maxPower", self.max_power),
            ("maxCurrent", self.max_current),
            ("maxEnergy", self.max_energy),
            ("minEnergy", self.min_energy),
        ];
        for (name, value) in values {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(OchpError::InvalidArgument(format!(
                        "{} must be a finite, non-negative number, got {}",
                        name, value
                    )));
                }
            }
        }

        if let (Some(min), Some(max)) = (self.min_energy, self.max_energy) {
            if min > max {
                return Err(OchpError::InvalidArgument(format!(
                    "minEnergy {} exceeds maxEnergy {}",
                    min, max
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn read(element: &Element) -> OchpResult<Self> {
        Ok(Self {
            max_power: element.map_value_opt("maxPower")?,
            max_current: element.map_value_opt("maxCurrent")?,
            one_phase: element.map_flag_opt("onePhase")?,
            max_energy: element.map_value_opt("maxEnergy")?,
            min_energy: element.map_value_opt("minEnergy")?,
        })
    }

    pub(crate) fn write(&self, element: Element) -> Element {
        element
            .with_opt_value("maxPower", self.max_power)
            .with_opt_value("maxCurrent", self.max_current)
            .with_opt_value("onePhase", self.one_phase)
            .with_opt_value("maxEnergy", self.max_energy)
            .with_opt_value("minEnergy", self.min_energy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ochp_core::xml::ochp_element;

    #[test]
    fn test_validate() {
        assert!(ChargeLimits::default().validate().is_ok());

        let limits = ChargeLimits {
            max_power: Some(22.0),
            min_energy: Some(5.0),
            max_energy: Some(30.0),
            ..ChargeLimits::default()
        };
        assert!(limits.validate().is_ok());

        let negative = ChargeLimits {
            max_current: Some(-1.0),
            ..ChargeLimits::default()
        };
        assert!(matches!(negative.validate(), Err(OchpError::InvalidArgument(_))));

        let not_finite = ChargeLimits {
            max_power: Some(f32::NAN),
            ..ChargeLimits::default()
        };
        assert!(not_finite.validate().is_err());

        let inverted = ChargeLimits {
            min_energy: Some(10.0),
            max_energy: Some(5.0),
            ..ChargeLimits::default()
        };
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn test_inline_round_trip() {
        let limits = ChargeLimits {
            max_power: Some(11.0),
            one_phase: Some(false),
            ..ChargeLimits::default()
        };
        let element = limits.write(ochp_element("ControlEVSERequest"));
        assert_eq!(element.child("onePhase").unwrap().text(), "false");
        assert!(element.child("maxCurrent").is_none());
        assert_eq!(ChargeLimits::read(&element).unwrap(), limits);
        assert!(!limits.is_empty());
    }
}
