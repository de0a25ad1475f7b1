use thiserror::Error;

// ---------------------------------------------------------------------------
// Reference redox energies w.r.t. vacuum [eV]
// ---------------------------------------------------------------------------

pub const HER: f64 = -4.4;
pub const OER: f64 = -5.629;
pub const CO2_CH4: f64 = -3.79;
pub const CO2_CH3OH: f64 = -3.65;
pub const CO2_HCOOH: f64 = -3.42;
pub const N2_NH3: f64 = -4.3;
/// Sacrificial agents.
pub const TEOA: f64 = -5.47;
pub const TEA: f64 = -5.34;
/// Visible-light absorption edge [eV].
pub const VIS_E: f64 = 3.2;

pub const OXIDATION_PRESETS: &[(&str, f64)] = &[("OER", OER), ("TEOA", TEOA), ("TEA", TEA)];

pub const REDUCTION_PRESETS: &[(&str, f64)] = &[
    ("HER", HER),
    ("N2_NH3", N2_NH3),
    ("CO2_CH4", CO2_CH4),
    ("CO2_CH3OH", CO2_CH3OH),
    ("CO2_HCOOH", CO2_HCOOH),
];

pub const BAND_GAP_PRESETS: &[(&str, f64)] = &[("Visible light", VIS_E)];

pub const MASS_PRESETS: &[(&str, f64)] = &[
    ("1", 1.0),
    ("10", 10.0),
    ("50", 50.0),
    ("100", 100.0),
];

pub const OVERLAP_PRESETS: &[(&str, f64)] = &[
    ("0.25", 0.25),
    ("0.50", 0.50),
    ("0.75", 0.75),
    ("1.00", 1.00),
];

// ---------------------------------------------------------------------------
// Parameter resolution errors
// ---------------------------------------------------------------------------

/// Validation failure for a custom threshold field.  Malformed input is
/// rejected rather than silently defaulting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("{field}: '{input}' is not a valid number")]
    InvalidNumber { field: &'static str, input: String },
    #[error("{field}: type a value")]
    Empty { field: &'static str },
}

// ---------------------------------------------------------------------------
// ThresholdControl – one of the six screening parameters
// ---------------------------------------------------------------------------

/// Which option of a control is active: a preset from its table, or the
/// free-form "Type a value" input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Preset(usize),
    Custom,
}

/// One threshold parameter: a fixed preset table plus an optional custom
/// numeric override.
#[derive(Debug, Clone)]
pub struct ThresholdControl {
    /// Widget title shown above the dropdown.
    pub title: &'static str,
    /// Short field name used in validation messages.
    pub field: &'static str,
    pub presets: &'static [(&'static str, f64)],
    pub selection: Selection,
    /// Raw text of the custom input; only consulted in custom mode.
    pub custom_text: String,
}

impl ThresholdControl {
    pub fn new(
        title: &'static str,
        field: &'static str,
        presets: &'static [(&'static str, f64)],
        default_preset: usize,
    ) -> Self {
        debug_assert!(default_preset < presets.len());
        ThresholdControl {
            title,
            field,
            presets,
            selection: Selection::Preset(default_preset),
            custom_text: String::new(),
        }
    }

    pub fn is_custom(&self) -> bool {
        self.selection == Selection::Custom
    }

    /// Text shown in the closed dropdown.
    pub fn selected_text(&self) -> &str {
        match self.selection {
            Selection::Preset(i) => self.presets[i].0,
            Selection::Custom => "Type a value",
        }
    }

    /// Name used in the plot title: preset name, or the custom number.
    pub fn display_name(&self) -> String {
        match self.selection {
            Selection::Preset(i) => self.presets[i].0.to_string(),
            Selection::Custom => self.custom_text.trim().to_string(),
        }
    }

    /// Resolve the control to its numeric value.
    pub fn resolve(&self) -> Result<f64, ParamError> {
        match self.selection {
            Selection::Preset(i) => Ok(self.presets[i].1),
            Selection::Custom => {
                let text = self.custom_text.trim();
                if text.is_empty() {
                    return Err(ParamError::Empty { field: self.field });
                }
                text.parse::<f64>().map_err(|_| ParamError::InvalidNumber {
                    field: self.field,
                    input: text.to_string(),
                })
            }
        }
    }
}

// ---------------------------------------------------------------------------
// ThresholdParams – the six controls
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ThresholdParams {
    pub oxidation: ThresholdControl,
    pub reduction: ThresholdControl,
    pub band_gap: ThresholdControl,
    pub electron_mass: ThresholdControl,
    pub hole_mass: ThresholdControl,
    pub overlap: ThresholdControl,
}

impl Default for ThresholdParams {
    fn default() -> Self {
        ThresholdParams {
            oxidation: ThresholdControl::new(
                "Oxidation reaction energy w.r.t. vacuum [eV]",
                "oxidation level",
                OXIDATION_PRESETS,
                0, // OER
            ),
            reduction: ThresholdControl::new(
                "Reduction reaction energy w.r.t. vacuum [eV]",
                "reduction level",
                REDUCTION_PRESETS,
                0, // HER
            ),
            band_gap: ThresholdControl::new(
                "Band gap upper limit [eV]",
                "band gap limit",
                BAND_GAP_PRESETS,
                0, // Visible light
            ),
            electron_mass: ThresholdControl::new(
                "Effective mass electron [m/me]",
                "electron mass limit",
                MASS_PRESETS,
                1, // 10
            ),
            hole_mass: ThresholdControl::new(
                "Effective mass hole [m/me]",
                "hole mass limit",
                MASS_PRESETS,
                1, // 10
            ),
            overlap: ThresholdControl::new(
                "Charge recombination descriptor [0-1]",
                "overlap limit",
                OVERLAP_PRESETS,
                1, // 0.50
            ),
        }
    }
}

impl ThresholdParams {
    /// All six controls, in display order.
    pub fn controls_mut(&mut self) -> [&mut ThresholdControl; 6] {
        [
            &mut self.oxidation,
            &mut self.reduction,
            &mut self.band_gap,
            &mut self.electron_mass,
            &mut self.hole_mass,
            &mut self.overlap,
        ]
    }

    /// Resolve every control before returning; a single invalid field fails
    /// the whole resolution so downstream never sees a partial update.
    pub fn resolve_all(&self) -> Result<Thresholds, ParamError> {
        Ok(Thresholds {
            oxidation: self.oxidation.resolve()?,
            reduction: self.reduction.resolve()?,
            band_gap_max: self.band_gap.resolve()?,
            electron_mass_max: self.electron_mass.resolve()?,
            hole_mass_max: self.hole_mass.resolve()?,
            overlap_max: self.overlap.resolve()?,
        })
    }
}

// ---------------------------------------------------------------------------
// Thresholds – fully resolved numeric values for the Filter Engine
// ---------------------------------------------------------------------------

/// Immutable snapshot of the six resolved threshold values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub oxidation: f64,
    pub reduction: f64,
    pub band_gap_max: f64,
    pub electron_mass_max: f64,
    pub hole_mass_max: f64,
    pub overlap_max: f64,
}

impl Thresholds {
    /// Thresholds that pass every finite record; useful as a neutral filter.
    pub fn permissive() -> Self {
        Thresholds {
            oxidation: f64::INFINITY,
            reduction: f64::NEG_INFINITY,
            band_gap_max: f64::INFINITY,
            electron_mass_max: f64::INFINITY,
            hole_mass_max: f64::INFINITY,
            overlap_max: f64::INFINITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_resolution_uses_preset_values() {
        let params = ThresholdParams::default();
        let t = params.resolve_all().unwrap();
        assert_eq!(t.oxidation, OER);
        assert_eq!(t.reduction, HER);
        assert_eq!(t.band_gap_max, VIS_E);
        assert_eq!(t.electron_mass_max, 10.0);
        assert_eq!(t.hole_mass_max, 10.0);
        assert_eq!(t.overlap_max, 0.50);
    }

    #[test]
    fn custom_value_is_parsed_with_whitespace() {
        let mut params = ThresholdParams::default();
        params.oxidation.selection = Selection::Custom;
        params.oxidation.custom_text = "  -5.2  ".to_string();
        assert_eq!(params.oxidation.resolve().unwrap(), -5.2);
        assert_eq!(params.oxidation.display_name(), "-5.2");
    }

    #[test]
    fn malformed_custom_value_is_rejected() {
        let mut ctl = ThresholdParams::default().overlap;
        ctl.selection = Selection::Custom;
        ctl.custom_text = "0,5".to_string();
        assert_eq!(
            ctl.resolve(),
            Err(ParamError::InvalidNumber {
                field: "overlap limit",
                input: "0,5".to_string(),
            })
        );
    }

    #[test]
    fn empty_custom_value_is_rejected() {
        let mut ctl = ThresholdParams::default().band_gap;
        ctl.selection = Selection::Custom;
        ctl.custom_text = "   ".to_string();
        assert_eq!(ctl.resolve(), Err(ParamError::Empty { field: "band gap limit" }));
    }

    #[test]
    fn one_invalid_field_fails_the_whole_resolution() {
        let mut params = ThresholdParams::default();
        params.hole_mass.selection = Selection::Custom;
        params.hole_mass.custom_text = "ten".to_string();
        assert!(params.resolve_all().is_err());
    }

    #[test]
    fn switching_back_to_preset_ignores_stale_custom_text() {
        let mut ctl = ThresholdParams::default().reduction;
        ctl.selection = Selection::Custom;
        ctl.custom_text = "garbage".to_string();
        ctl.selection = Selection::Preset(0);
        assert_eq!(ctl.resolve().unwrap(), HER);
        assert_eq!(ctl.selected_text(), "HER");
    }
}
