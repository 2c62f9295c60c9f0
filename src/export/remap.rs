//! Axis remap from the host's Z-up right-handed space into the export convention.
//!
//! The sign pattern is asymmetric: scale flips the remapped Z, position does not.

/// Decimal places kept for exported positions.
pub const POSITION_DECIMALS: u32 = 1;
/// Decimal places kept for exported quaternion components.
pub const QUATERNION_DECIMALS: u32 = 3;
/// Decimal places kept for exported scale components.
pub const SCALE_DECIMALS: u32 = 2;

/// Truncate `value` toward zero, keeping `decimals` fractional digits.
pub fn truncate(value: f64, decimals: u32) -> f64 {
	let factor = 10_f64.powi(decimals as i32);
	(value * factor).trunc() / factor
}

/// Remap a host position `(x, y, z)` to `(-x, z, y)`.
pub fn remap_position([x, y, z]: [f64; 3]) -> [f64; 3] {
	[-x, z, y]
}

/// Remap a host quaternion `(w, x, y, z)`.
///
/// Y and Z are swapped into `(w, x, z, -y)` first, then X and the new Z are
/// negated, giving `(w, -x, z, -y)`.
pub fn remap_quaternion([w, x, y, z]: [f64; 4]) -> [f64; 4] {
	let swapped = [w, x, z, -y];
	[swapped[0], -swapped[1], swapped[2], swapped[3]]
}

/// Remap a host scale `(x, y, z)` to `(-x, z, -y)`.
pub fn remap_scale([x, y, z]: [f64; 3]) -> [f64; 3] {
	[-x, z, -y]
}

/// Remapped and truncated transform of one object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemappedTransform {
	/// Position `(x, y, z)`.
	pub position: [f64; 3],
	/// Quaternion `(w, x, y, z)`.
	pub quaternion: [f64; 4],
	/// Scale `(x, y, z)`.
	pub scale: [f64; 3],
}

impl RemappedTransform {
	/// Remap and truncate a host transform.
	pub fn from_host(position: [f64; 3], quaternion: [f64; 4], scale: [f64; 3]) -> Self {
		Self {
			position: remap_position(position).map(|value| truncate(value, POSITION_DECIMALS)),
			quaternion: remap_quaternion(quaternion).map(|value| truncate(value, QUATERNION_DECIMALS)),
			scale: remap_scale(scale).map(|value| truncate(value, SCALE_DECIMALS)),
		}
	}
}
