//! Parameter range descriptors and scale transforms.
//!
//! A [`ParamRange`] describes the domain a dial controls: bounds, default,
//! display unit, and the curve used to map between the dial's normalized
//! `[0, 1]` position and the domain value. Linear ranges have equal
//! resolution everywhere; logarithmic ranges concentrate resolution at the
//! low end, which is why a frequency dial spanning several decades is
//! usable at all.
//!
//! # Normalization Formulas
//!
//! - **Linear**: `normalized = (value - min) / (max - min)`
//! - **Logarithmic**: `normalized = ln(value/min) / ln(max/min)`
//!
//! The logarithmic denormalization `min × (max/min)^n` with `min = F_max/R`
//! and `max = F_max` is the ratio form `F_max × R^(n-1)`; the standard
//! frequency dial uses `F_max = 20000`, `R = 2000`, so `min = 10` Hz and the
//! midpoint lands near 447 Hz.

use crate::dial::DialError;

/// Scaling curve for mapping between normalized and domain values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamScale {
    /// Linear mapping (default). Equal resolution across the range.
    #[default]
    Linear,
    /// Logarithmic mapping. More resolution at low values; ideal for
    /// frequency parameters. Requires `min > 0.0`.
    Logarithmic,
}

/// Unit type for parameter display and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Hertz (Hz) - frequency parameters like oscillator pitch or cutoff.
    Hertz,
    /// Percentage (%) - mix and blend parameters, domain 0-100.
    Percent,
    /// No unit - dimensionless parameters.
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Hertz => "Hz",
            ParamUnit::Percent => "%",
            ParamUnit::None => "",
        }
    }
}

/// Describes the domain range a dial binding controls.
///
/// The range is the single place bounds, default, curve shape, and unit are
/// declared; the composition root uses it to create the target, the binding
/// uses it for normalize/denormalize, and the GUI uses it for formatting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    /// Display name, also used as the dial label.
    pub name: &'static str,
    /// Unit for formatting the readout.
    pub unit: ParamUnit,
    /// Minimum domain value.
    pub min: f32,
    /// Maximum domain value.
    pub max: f32,
    /// Initial domain value.
    pub default: f32,
    /// Curve for normalize/denormalize.
    pub scale: ParamScale,
}

impl ParamRange {
    /// Dimensionless linear range.
    pub const fn linear(name: &'static str, min: f32, max: f32, default: f32) -> Self {
        Self {
            name,
            unit: ParamUnit::None,
            min,
            max,
            default,
            scale: ParamScale::Linear,
        }
    }

    /// Percentage range, 0-100.
    pub const fn percent(name: &'static str, default: f32) -> Self {
        Self {
            name,
            unit: ParamUnit::Percent,
            min: 0.0,
            max: 100.0,
            default,
            scale: ParamScale::Linear,
        }
    }

    /// Logarithmic frequency range in Hz.
    pub const fn frequency(name: &'static str, min: f32, max: f32, default: f32) -> Self {
        Self {
            name,
            unit: ParamUnit::Hertz,
            min,
            max,
            default,
            scale: ParamScale::Logarithmic,
        }
    }

    /// Validate the range at binding construction time.
    ///
    /// The interactive path never errors (motion results are clamped), so
    /// this is the one place a malformed descriptor is rejected instead of
    /// silently producing NaN renders.
    pub fn validate(&self) -> Result<(), DialError> {
        let reject = |reason| {
            Err(DialError::InvalidRange {
                name: self.name,
                reason,
            })
        };
        if !self.min.is_finite() || !self.max.is_finite() {
            return reject("bounds must be finite");
        }
        if !self.default.is_finite() {
            return reject("default must be finite");
        }
        if self.max <= self.min {
            return reject("max must exceed min");
        }
        if self.scale == ParamScale::Logarithmic && self.min <= 0.0 {
            return reject("logarithmic scale requires min > 0");
        }
        if self.default < self.min || self.default > self.max {
            return reject("default outside range");
        }
        Ok(())
    }

    /// Clamps a domain value to `[min, max]`.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Converts a domain value to normalized `[0, 1]`, respecting the scale.
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let span = self.max - self.min;
        if span == 0.0 {
            return 0.0;
        }
        match self.scale {
            ParamScale::Linear => (value - self.min) / span,
            ParamScale::Logarithmic => {
                if self.min <= 0.0 || value <= 0.0 {
                    return 0.0;
                }
                libm::logf(value / self.min) / libm::logf(self.max / self.min)
            }
        }
    }

    /// Converts a normalized `[0, 1]` value to the domain range.
    ///
    /// Inverse of [`normalize`](Self::normalize).
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        match self.scale {
            ParamScale::Linear => self.min + normalized * (self.max - self.min),
            ParamScale::Logarithmic => {
                if self.min <= 0.0 {
                    return self.min;
                }
                self.min * libm::powf(self.max / self.min, normalized)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_normalize_denormalize() {
        let range = ParamRange::linear("Q", 0.0, 20.0, 1.0);
        assert_eq!(range.normalize(0.0), 0.0);
        assert_eq!(range.normalize(10.0), 0.5);
        assert_eq!(range.normalize(20.0), 1.0);
        assert_eq!(range.denormalize(0.5), 10.0);
    }

    #[test]
    fn frequency_midpoint_matches_ratio_form() {
        // min = F_max/R = 20000/2000, so denormalize(v) = 20000 * 2000^(v-1).
        let range = ParamRange::frequency("Freq", 10.0, 20000.0, 440.0);
        let mid = range.denormalize(0.5);
        assert!(
            (mid - 447.2136).abs() < 0.05,
            "expected ~447.2 Hz at midpoint, got {mid}"
        );
    }

    #[test]
    fn frequency_inverse_matches_log_form() {
        // unmap(f) = log(f / F_max) / log(R) + 1 in the ratio form.
        let range = ParamRange::frequency("Freq", 10.0, 20000.0, 440.0);
        let n = range.normalize(440.0);
        let expected = libm::logf(440.0 / 20000.0) / libm::logf(2000.0) + 1.0;
        assert!(
            (n - expected).abs() < 1e-5,
            "expected {expected}, got {n}"
        );
    }

    #[test]
    fn log_round_trip() {
        let range = ParamRange::frequency("Cutoff", 10.0, 20000.0, 2000.0);
        for &hz in &[10.0, 100.0, 440.0, 2000.0, 20000.0] {
            let rt = range.denormalize(range.normalize(hz));
            assert!(
                (rt - hz).abs() / hz < 1e-4,
                "round-trip failed for {hz}: got {rt}"
            );
        }
    }

    #[test]
    fn validate_rejects_bad_ranges() {
        assert!(ParamRange::linear("ok", 0.0, 1.0, 0.5).validate().is_ok());
        assert!(
            ParamRange::linear("rev", 1.0, 0.0, 0.5)
                .validate()
                .is_err()
        );
        assert!(
            ParamRange::linear("nan", 0.0, f32::NAN, 0.5)
                .validate()
                .is_err()
        );
        assert!(
            ParamRange::frequency("log0", 0.0, 1000.0, 100.0)
                .validate()
                .is_err()
        );
        assert!(
            ParamRange::linear("out", 0.0, 1.0, 2.0)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn percent_range_is_linear_0_to_100() {
        let range = ParamRange::percent("MIX", 50.0);
        assert!(range.validate().is_ok());
        assert_eq!(range.unit, ParamUnit::Percent);
        assert_eq!(range.normalize(50.0), 0.5);
        assert_eq!(range.denormalize(0.25), 25.0);
    }

    #[test]
    fn unit_suffixes() {
        assert_eq!(ParamUnit::Hertz.suffix(), "Hz");
        assert_eq!(ParamUnit::Percent.suffix(), "%");
        assert_eq!(ParamUnit::None.suffix(), "");
    }
}
