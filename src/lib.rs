pub mod convert;
pub mod error;
pub mod flow;
mod geometry;
pub mod host;
pub mod io;
pub mod result;
pub mod zone;

// Prelude
pub use convert::{check_inputs, convert_zones, preconditions_met};
pub use error::{ConvertError, ConvertResult};
pub use flow::{FlowMode, FlowSpec};
pub use geometry::GeometryRef;
pub use host::{HostEnv, ReadyHost};
pub use result::{ConversionResult, Report};
pub use zone::{SurfaceRecord, SurfaceType, ZoneRecord};
