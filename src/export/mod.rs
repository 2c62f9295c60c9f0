mod error;
mod exporter;
mod record;
mod remap;
mod resolve;
mod rotation;
mod scene;
mod snapshot;

/// Error and result aliases.
pub use error::{ExportError, Result};
/// Export entry points, layouts, and options.
pub use exporter::{ExportLayout, ExportOptions, collect_linked_records, collect_raw_records, export_linked_objects, export_with_options, to_json_string};
/// Serialized record types.
pub use record::{ExportRecord, QuatJson, RawRecord, Vec3Json};
/// Axis remap and decimal truncation.
pub use remap::{POSITION_DECIMALS, QUATERNION_DECIMALS, RemappedTransform, SCALE_DECIMALS, remap_position, remap_quaternion, remap_scale, truncate};
/// Asset and library resolution.
pub use resolve::{AssetLink, BLEND_EXTENSION, resolve_asset_link, strip_blend_extension};
/// Rotation representations and scoped mode switching.
pub use rotation::{Rotation, RotationMode, RotationModeGuard, read_quaternion};
/// Scene data model and source trait.
pub use scene::{Collection, InstanceKind, Library, ObjectKind, Scene, SceneObject, SceneSource};
/// Snapshot compression detection.
pub use snapshot::{Compression, MAX_DECOMPRESSED_BYTES, decode_bytes, decode_bytes_with_limit};
