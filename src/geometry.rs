//! Opaque geometry handles.
//!
//! Zone surfaces reference geometry owned by the host model. The converter
//! never inspects the geometry itself; it only collects handles and hands
//! them back grouped by classification.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque reference to a surface geometry in the host model.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Serialize, Deserialize)]
pub struct GeometryRef(String);

impl From<&str> for GeometryRef {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for GeometryRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Default for GeometryRef {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryRef {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_handles_are_unique() {
        assert_ne!(GeometryRef::new(), GeometryRef::new());
    }

    #[test]
    fn test_from_str() {
        let handle = GeometryRef::from("srf-042");
        assert_eq!(handle.as_str(), "srf-042");
        assert_eq!(handle, GeometryRef::from("srf-042".to_string()));
    }
}
