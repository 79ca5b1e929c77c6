//! Batch conversion of zone flow rates into area intensities.
//!
//! Single-pass, stateless transform over the input zone list. For each zone:
//! compute the standard flow rate in m3/s, apply the optional blower-door
//! pressure correction, normalize by exposed facade area and by floor area,
//! and collect the floor and outdoor-facing surface geometries.

use crate::error::{ConvertError, ConvertResult};
use crate::flow::{
    FlowMode, FlowSpec, area_intensity, correct_for_test_pressure, standard_flow_rate,
};
use crate::host::HostEnv;
use crate::result::ConversionResult;
use crate::zone::ZoneRecord;

/// Validates batch inputs and resolves the effective flow mode.
///
/// Fails the whole batch on a negative rate or an empty zone list. An unset
/// mode defaults to ACH.
pub fn check_inputs(spec: &FlowSpec, zones: &[ZoneRecord]) -> ConvertResult<FlowMode> {
    if spec.rate < 0.0 {
        return Err(ConvertError::InvalidInput(
            "air flow rate must not be negative".to_string(),
        ));
    }
    if zones.is_empty() {
        return Err(ConvertError::InvalidInput("no zones supplied".to_string()));
    }
    Ok(spec.mode.unwrap_or_default())
}

/// Trigger condition for host-driven callers: the batch only fires with a
/// ready host, at least one zone and a nonzero rate.
///
/// `convert_zones` itself accepts a zero rate (it just computes zero flows);
/// this helper is for callers that want the fire-or-don't semantics.
pub fn preconditions_met(host: &impl HostEnv, spec: &FlowSpec, zones: &[ZoneRecord]) -> bool {
    host.is_ready() && !zones.is_empty() && spec.rate != 0.0
}

/// Converts the flow specification into per-zone facade and floor
/// intensities, both in m3/s-m2.
///
/// Zones are processed in input order and the two intensity vectors are
/// indexed like `zones`. A zone with a missing or zero area gets a `0` for
/// the affected intensity plus a warning in the report; zone-level problems
/// never abort the batch. The geometry collections are flat concatenations
/// across zones with no zone index retained.
pub fn convert_zones(
    host: &impl HostEnv,
    spec: &FlowSpec,
    zones: &[ZoneRecord],
) -> ConvertResult<ConversionResult> {
    if !host.is_ready() {
        return Err(ConvertError::HostUnavailable(
            "host model is not loaded".to_string(),
        ));
    }
    let mode = check_inputs(spec, zones)?;

    let mut result = ConversionResult::new();

    for zone in zones {
        let base = standard_flow_rate(spec.rate, mode, zone);
        let flow = correct_for_test_pressure(base, spec.blower_pressure_pa);

        result.report.info(format!(
            "Zone \"{}\" has a total flow rate of {flow:.4} m3/s",
            zone.name
        ));

        match area_intensity(flow, zone.exposed_area) {
            Some(intensity) => result.infiltration_per_facade_area.push(intensity),
            None => {
                result.report.warn(format!(
                    "Zone \"{}\" has no exposed surface area. \
                     A value of 0 will be output for the facade intensity.",
                    zone.name
                ));
                result.infiltration_per_facade_area.push(0.0);
            }
        }

        match area_intensity(flow, zone.floor_area) {
            Some(intensity) => result.ventilation_per_floor_area.push(intensity),
            None => {
                result.report.warn(format!(
                    "Zone \"{}\" has no floor area. \
                     A value of 0 will be output for the floor intensity.",
                    zone.name
                ));
                result.ventilation_per_floor_area.push(0.0);
            }
        }

        for surface in &zone.surfaces {
            if surface.surface_type.is_floor() {
                result.all_floors.push(surface.geometry.clone());
            }
            if surface.is_outdoors() {
                result.all_exposed.push(surface.geometry.clone());
            }
        }
    }

    Ok(result)
}
