use crate::export::{AssetLink, RemappedTransform, SceneObject};

/// `{x, y, z}` JSON object.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Vec3Json {
	/// X component.
	pub x: f64,
	/// Y component.
	pub y: f64,
	/// Z component.
	pub z: f64,
}

impl From<[f64; 3]> for Vec3Json {
	fn from([x, y, z]: [f64; 3]) -> Self {
		Self { x, y, z }
	}
}

/// `{w, x, y, z}` JSON object.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct QuatJson {
	/// W (scalar) component, or the angle for axis-angle values.
	pub w: f64,
	/// X component.
	pub x: f64,
	/// Y component.
	pub y: f64,
	/// Z component.
	pub z: f64,
}

impl From<[f64; 4]> for QuatJson {
	fn from([w, x, y, z]: [f64; 4]) -> Self {
		Self { w, x, y, z }
	}
}

/// Exported transform and linkage of one collection instance.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ExportRecord {
	/// Object name.
	pub name: String,
	/// Remapped position, one decimal.
	pub position: Vec3Json,
	/// Remapped rotation, three decimals.
	pub quaternion: QuatJson,
	/// Remapped scale, two decimals.
	pub scale: Vec3Json,
	/// Instanced collection name.
	pub parent: String,
	/// Library file name without `.blend`.
	pub filename: String,
	/// Visible in both viewport and render.
	pub visible: bool,
}

impl ExportRecord {
	/// Assemble a record from an already remapped transform.
	pub fn new(name: &str, transform: RemappedTransform, link: &AssetLink, visible: bool) -> Self {
		Self {
			name: name.to_owned(),
			position: transform.position.into(),
			quaternion: transform.quaternion.into(),
			scale: transform.scale.into(),
			parent: link.asset_name.clone(),
			filename: link.filename(),
			visible,
		}
	}
}

/// Unremapped host transform dump in the add-on's first output layout.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RawRecord {
	/// Object name.
	pub name: String,
	/// Host location.
	pub location: Vec3Json,
	/// Stored quaternion, regardless of the active mode.
	pub rotation_quaternion: QuatJson,
	/// Stored axis-angle, `w` holding the angle.
	pub rotation_axis_angle: QuatJson,
	/// Stored Euler angles.
	pub rotation_euler: Vec3Json,
	/// Active rotation mode tag.
	pub rotation_mode: &'static str,
	/// Host scale.
	pub scale: Vec3Json,
	/// Instanced collection name.
	pub asset_name: String,
}

impl RawRecord {
	/// Dump `object`'s stored values for `asset_name`.
	pub fn new(object: &SceneObject, asset_name: &str) -> Self {
		Self {
			name: object.name.clone(),
			location: object.location.into(),
			rotation_quaternion: object.rotation.quaternion.into(),
			rotation_axis_angle: object.rotation.axis_angle.into(),
			rotation_euler: object.rotation.euler.into(),
			rotation_mode: object.rotation.mode.as_str(),
			scale: object.scale.into(),
			asset_name: asset_name.to_owned(),
		}
	}
}
