//! Conversion outputs and the collected text report.

use std::fmt;

use crate::GeometryRef;

/// Text log collected during a conversion run.
///
/// Info lines describe per-zone results; warnings record recoverable
/// zone-level problems (a warning never aborts the batch).
#[derive(Debug, Clone, Default)]
pub struct Report {
    lines: Vec<String>,
    warnings: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, msg: impl Into<String>) {
        self.lines.push(msg.into());
    }

    pub fn warn(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        for warning in &self.warnings {
            writeln!(f, "Warning: {warning}")?;
        }
        Ok(())
    }
}

/// Result of a batch flow conversion.
#[derive(Debug, Clone)]
pub struct ConversionResult {
    /// Infiltration intensity per zone in m3/s per m2 of exposed facade.
    /// Indexed like the input zone list.
    pub infiltration_per_facade_area: Vec<f64>,
    /// Ventilation intensity per zone in m3/s per m2 of floor.
    /// Indexed like the input zone list.
    pub ventilation_per_floor_area: Vec<f64>,
    /// Geometries of surfaces facing outdoor air, flattened across zones.
    pub all_exposed: Vec<GeometryRef>,
    /// Geometries of regular floor surfaces, flattened across zones.
    pub all_floors: Vec<GeometryRef>,
    /// Per-zone info lines and recoverable warnings.
    pub report: Report,
}

impl ConversionResult {
    pub fn new() -> Self {
        Self {
            infiltration_per_facade_area: Vec::new(),
            ventilation_per_floor_area: Vec::new(),
            all_exposed: Vec::new(),
            all_floors: Vec::new(),
            report: Report::new(),
        }
    }
}

impl Default for ConversionResult {
    fn default() -> Self {
        Self::new()
    }
}
