//! Per-zone air flow math.
//!
//! Converts a flow specification into a standard volumetric flow rate in
//! m3/s and normalizes it by envelope or floor area. The blower-door
//! correction uses the power-law infiltration model:
//!
//!   Q_ref = Q_test / (P_test / P_ref)^n
//!
//! with P_ref = 4 Pa (typical natural pressure differential) and n = 0.63.

use serde::{Deserialize, Serialize};

use crate::ZoneRecord;

/// Seconds per hour, for ACH to m3/s conversion.
pub const SECONDS_PER_HOUR: f64 = 3600.0;
/// Reference natural pressure differential between indoors and outdoors in Pa.
pub const REFERENCE_PRESSURE_PA: f64 = 4.0;
/// Empirical flow exponent of the power-law infiltration model.
pub const FLOW_EXPONENT: f64 = 0.63;

/// Interpretation of the input flow rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlowMode {
    /// Air changes per hour: zone volume equivalents of air exchanged per hour.
    #[default]
    AirChangesPerHour,
    /// m3/s per m2 of outdoor-exposed envelope area. The usual way
    /// infiltration rates are specified.
    PerExposedArea,
}

/// Input flow specification for a conversion batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowSpec {
    /// Flow rate; interpretation depends on `mode`.
    pub rate: f64,
    /// `None` means unspecified, which defaults to ACH during validation.
    pub mode: Option<FlowMode>,
    /// Pressure differential at which `rate` was measured, in Pa (blower-door
    /// tests commonly run at 50 or 75 Pa). `None` or 0 means the rate is
    /// already at natural pressure and no correction is applied.
    pub blower_pressure_pa: Option<f64>,
}

impl FlowSpec {
    /// Flow rate in air changes per hour.
    pub fn ach(rate: f64) -> Self {
        Self {
            rate,
            mode: Some(FlowMode::AirChangesPerHour),
            blower_pressure_pa: None,
        }
    }

    /// Flow rate in m3/s per m2 of exposed envelope area.
    pub fn per_exposed_area(rate: f64) -> Self {
        Self {
            rate,
            mode: Some(FlowMode::PerExposedArea),
            blower_pressure_pa: None,
        }
    }

    /// Marks the rate as measured at an elevated test pressure.
    pub fn with_blower_pressure(mut self, pressure_pa: f64) -> Self {
        self.blower_pressure_pa = Some(pressure_pa);
        self
    }
}

/// Computes the standard volumetric flow rate for a zone in m3/s.
///
/// ACH mode: `rate * volume / 3600`. Area mode: `rate * exposed_area`
/// (a zone without exposed area gets zero flow).
pub fn standard_flow_rate(rate: f64, mode: FlowMode, zone: &ZoneRecord) -> f64 {
    match mode {
        FlowMode::AirChangesPerHour => rate * zone.volume / SECONDS_PER_HOUR,
        FlowMode::PerExposedArea => rate * zone.exposed_area.unwrap_or(0.0),
    }
}

/// Converts a flow measured at an elevated test pressure to the flow at the
/// 4 Pa reference pressure. Identity when no pressure is given.
pub fn correct_for_test_pressure(flow_m3_s: f64, blower_pressure_pa: Option<f64>) -> f64 {
    match blower_pressure_pa {
        Some(p) if p != 0.0 => flow_m3_s / (p / REFERENCE_PRESSURE_PA).powf(FLOW_EXPONENT),
        _ => flow_m3_s,
    }
}

/// Normalizes a flow by an area. Returns `None` when the area is missing or
/// non-positive, so the caller can substitute a default and report it.
pub fn area_intensity(flow_m3_s: f64, area_m2: Option<f64>) -> Option<f64> {
    match area_m2 {
        Some(a) if a > 0.0 => Some(flow_m3_s / a),
        _ => None,
    }
}
