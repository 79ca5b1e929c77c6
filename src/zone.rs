//! Zone and surface records pulled from the host model.
//!
//! A zone exposes the three quantities needed for flow conversion (air
//! volume, exposed facade area, floor area) plus its bounding surfaces.
//! Records are read-only inputs; the converter never mutates them.

use serde::{Deserialize, Serialize};

use crate::GeometryRef;

/// Surface type as coded by the host energy model.
///
/// The host uses fractional codes to distinguish floor variants:
/// 0 = wall, 1 = roof, 2 = floor, 2.5 = ground floor, 2.75 = exposed floor,
/// 3 = ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceType {
    Wall,
    Roof,
    Floor,
    GroundFloor,
    ExposedFloor,
    Ceiling,
}

impl SurfaceType {
    /// Numeric code used by the host model.
    pub fn code(&self) -> f64 {
        match self {
            SurfaceType::Wall => 0.0,
            SurfaceType::Roof => 1.0,
            SurfaceType::Floor => 2.0,
            SurfaceType::GroundFloor => 2.5,
            SurfaceType::ExposedFloor => 2.75,
            SurfaceType::Ceiling => 3.0,
        }
    }

    /// Maps a host code back to a surface type. Only exact codes are
    /// recognized.
    pub fn from_code(code: f64) -> Option<Self> {
        if code == 0.0 {
            Some(SurfaceType::Wall)
        } else if code == 1.0 {
            Some(SurfaceType::Roof)
        } else if code == 2.0 {
            Some(SurfaceType::Floor)
        } else if code == 2.5 {
            Some(SurfaceType::GroundFloor)
        } else if code == 2.75 {
            Some(SurfaceType::ExposedFloor)
        } else if code == 3.0 {
            Some(SurfaceType::Ceiling)
        } else {
            None
        }
    }

    /// True only for regular floors (code 2). Ground floors (2.5) and
    /// exposed floors (2.75) do not count.
    pub fn is_floor(&self) -> bool {
        matches!(self, SurfaceType::Floor)
    }
}

/// A single bounding surface of a zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceRecord {
    pub surface_type: SurfaceType,
    /// Boundary condition tag as reported by the host, e.g. "Outdoors",
    /// "Ground", "Surface", "Adiabatic".
    pub boundary_condition: String,
    pub geometry: GeometryRef,
}

impl SurfaceRecord {
    /// Creates a surface record with a fresh geometry handle.
    pub fn new(surface_type: SurfaceType, boundary_condition: &str) -> Self {
        Self {
            surface_type,
            boundary_condition: boundary_condition.to_string(),
            geometry: GeometryRef::new(),
        }
    }

    /// True if the surface faces outdoor air. The tag comparison is
    /// case-insensitive because hosts are not consistent about casing.
    pub fn is_outdoors(&self) -> bool {
        self.boundary_condition.eq_ignore_ascii_case("outdoors")
    }
}

/// A zone record as supplied by the host model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneRecord {
    pub name: String,
    /// Zone air volume in m^3.
    pub volume: f64,
    /// Exposed (outdoor-facing) envelope area in m^2, if the zone has any.
    pub exposed_area: Option<f64>,
    /// Floor area in m^2, if the zone has any.
    pub floor_area: Option<f64>,
    pub surfaces: Vec<SurfaceRecord>,
}

impl ZoneRecord {
    /// Creates a zone record with no surfaces attached yet.
    pub fn new(name: &str, volume: f64, exposed_area: Option<f64>, floor_area: Option<f64>) -> Self {
        Self {
            name: name.to_string(),
            volume,
            exposed_area,
            floor_area,
            surfaces: Vec::new(),
        }
    }

    /// Adds a bounding surface to the zone.
    pub fn add_surface(&mut self, surface: SurfaceRecord) {
        self.surfaces.push(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_creation() {
        let zone = ZoneRecord::new("office", 75.0, Some(55.0), Some(25.0));
        assert_eq!(zone.name, "office");
        assert!((zone.volume - 75.0).abs() < 1e-10);
        assert!(zone.surfaces.is_empty());
    }

    #[test]
    fn test_add_surface() {
        let mut zone = ZoneRecord::new("office", 75.0, Some(55.0), Some(25.0));
        zone.add_surface(SurfaceRecord::new(SurfaceType::Wall, "Outdoors"));
        zone.add_surface(SurfaceRecord::new(SurfaceType::Floor, "Ground"));
        assert_eq!(zone.surfaces.len(), 2);
    }

    #[test]
    fn test_surface_type_codes_roundtrip() {
        for t in [
            SurfaceType::Wall,
            SurfaceType::Roof,
            SurfaceType::Floor,
            SurfaceType::GroundFloor,
            SurfaceType::ExposedFloor,
            SurfaceType::Ceiling,
        ] {
            assert_eq!(SurfaceType::from_code(t.code()), Some(t));
        }
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        assert_eq!(SurfaceType::from_code(2.25), None);
        assert_eq!(SurfaceType::from_code(-1.0), None);
        assert_eq!(SurfaceType::from_code(7.0), None);
    }

    #[test]
    fn test_is_floor_excludes_variants() {
        assert!(SurfaceType::Floor.is_floor());
        assert!(!SurfaceType::GroundFloor.is_floor());
        assert!(!SurfaceType::ExposedFloor.is_floor());
        assert!(!SurfaceType::Wall.is_floor());
    }

    #[test]
    fn test_is_outdoors_case_insensitive() {
        assert!(SurfaceRecord::new(SurfaceType::Wall, "Outdoors").is_outdoors());
        assert!(SurfaceRecord::new(SurfaceType::Wall, "OUTDOORS").is_outdoors());
        assert!(SurfaceRecord::new(SurfaceType::Wall, "outdoors").is_outdoors());
        assert!(!SurfaceRecord::new(SurfaceType::Wall, "Ground").is_outdoors());
        assert!(!SurfaceRecord::new(SurfaceType::Wall, "Surface").is_outdoors());
    }
}
