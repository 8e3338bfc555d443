//! Body-mass-index derivation.

use std::fmt;

use serde::Serialize;

/// Computes BMI from height in meters and weight in kilograms, rounded to
/// two decimal places.
///
/// Rounding works on the exact binary value of the quotient, so a value
/// stored just below `x.xx5` rounds down. Scaling by 100 first would round
/// it up and can move a patient across a verdict boundary.
pub fn bmi(height: f64, weight: f64) -> f64 {
    let raw = weight / (height * height);
    format!("{raw:.2}").parse().unwrap_or(raw)
}

/// Classification label derived from a BMI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    Overweight,
    Obesity,
}

impl Verdict {
    /// Classifies a BMI value.
    ///
    /// Values in `[24.9, 25)` match neither the normal nor the overweight
    /// band and fall through to `Obesity`, as do values from 29.9 up.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Verdict::Underweight
        } else if (18.5..24.9).contains(&bmi) {
            Verdict::NormalWeight
        } else if (25.0..29.9).contains(&bmi) {
            Verdict::Overweight
        } else {
            Verdict::Obesity
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Underweight => "Underweight",
            Verdict::NormalWeight => "Normal weight",
            Verdict::Overweight => "Overweight",
            Verdict::Obesity => "Obesity",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_is_rounded_to_two_places() {
        assert_eq!(bmi(1.75, 70.0), 22.86);
        assert_eq!(bmi(1.65, 90.0), 33.06);
        assert_eq!(bmi(2.0, 100.0), 25.0);
    }

    #[test]
    fn bmi_rounds_exact_quotient_below_half() {
        assert_eq!(bmi(2.0, 99.58), 24.89);
        assert_eq!(Verdict::from_bmi(bmi(2.0, 99.58)), Verdict::NormalWeight);

        assert_eq!(bmi(1.0, 29.895), 29.89);
        assert_eq!(Verdict::from_bmi(bmi(1.0, 29.895)), Verdict::Overweight);
    }

    #[test]
    fn bmi_of_degenerate_height_is_not_finite() {
        assert!(!bmi(1e-200, 70.0).is_finite());
    }

    #[test]
    fn verdict_bands() {
        assert_eq!(Verdict::from_bmi(16.0), Verdict::Underweight);
        assert_eq!(Verdict::from_bmi(22.0), Verdict::NormalWeight);
        assert_eq!(Verdict::from_bmi(27.0), Verdict::Overweight);
        assert_eq!(Verdict::from_bmi(35.0), Verdict::Obesity);
    }

    #[test]
    fn verdict_boundaries() {
        assert_eq!(Verdict::from_bmi(18.49), Verdict::Underweight);
        assert_eq!(Verdict::from_bmi(18.5), Verdict::NormalWeight);
        assert_eq!(Verdict::from_bmi(24.89), Verdict::NormalWeight);
        assert_eq!(Verdict::from_bmi(25.0), Verdict::Overweight);
        assert_eq!(Verdict::from_bmi(29.89), Verdict::Overweight);
        assert_eq!(Verdict::from_bmi(29.9), Verdict::Obesity);
    }

    #[test]
    fn values_between_normal_and_overweight_fall_through_to_obesity() {
        assert_eq!(Verdict::from_bmi(24.9), Verdict::Obesity);
        assert_eq!(Verdict::from_bmi(24.95), Verdict::Obesity);
        assert_eq!(Verdict::from_bmi(24.99), Verdict::Obesity);
    }

    #[test]
    fn verdict_serializes_as_label() {
        assert_eq!(
            serde_json::to_string(&Verdict::NormalWeight).unwrap(),
            "\"Normal weight\""
        );
        assert_eq!(Verdict::Obesity.to_string(), "Obesity");
    }
}
