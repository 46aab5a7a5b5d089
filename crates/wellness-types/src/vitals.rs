//! Vital sign readings.

/// Optional vital sign readings supplied alongside a symptom report.
///
/// Every field is optional; `None` means the reading was not taken and is
/// distinct from a zero value.
///
/// # Examples
///
/// ```
/// use wellness_types::VitalSigns;
///
/// let vitals = VitalSigns {
///     temperature: Some(38.6),
///     ..Default::default()
/// };
/// assert!(!vitals.is_empty());
/// assert!(VitalSigns::default().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct VitalSigns {
    /// Body temperature in degrees Celsius.
    pub temperature: Option<f64>,
    /// Heart rate in beats per minute.
    pub heart_rate: Option<u32>,
    /// Blood pressure as entered, e.g. "120/80". Not parsed.
    pub blood_pressure: Option<String>,
    /// Peripheral oxygen saturation in percent.
    pub oxygen_saturation: Option<f64>,
}

impl VitalSigns {
    /// Returns true if no reading is present.
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none()
            && self.heart_rate.is_none()
            && self.blood_pressure.is_none()
            && self.oxygen_saturation.is_none()
    }

    /// Returns the number of readings present.
    pub fn reading_count(&self) -> usize {
        [
            self.temperature.is_some(),
            self.heart_rate.is_some(),
            self.blood_pressure.is_some(),
            self.oxygen_saturation.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_not_absent() {
        let vitals = VitalSigns {
            heart_rate: Some(0),
            ..Default::default()
        };
        assert!(!vitals.is_empty());
        assert_eq!(vitals.reading_count(), 1);
    }

    #[test]
    fn test_reading_count() {
        let vitals = VitalSigns {
            temperature: Some(37.0),
            heart_rate: Some(72),
            blood_pressure: Some("120/80".to_string()),
            oxygen_saturation: Some(98.0),
        };
        assert_eq!(vitals.reading_count(), 4);
    }
}
