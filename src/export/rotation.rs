use glam::{DQuat, DVec3, EulerRot};

/// Active rotation representation of a scene object.
///
/// Euler orders name the axis applied first, so `XYZ` rotates about X, then Y, then Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RotationMode {
	/// Quaternion `(w, x, y, z)`.
	Quaternion,
	/// Euler angles, X then Y then Z.
	#[default]
	Xyz,
	/// Euler angles, X then Z then Y.
	Xzy,
	/// Euler angles, Y then X then Z.
	Yxz,
	/// Euler angles, Y then Z then X.
	Yzx,
	/// Euler angles, Z then X then Y.
	Zxy,
	/// Euler angles, Z then Y then X.
	Zyx,
	/// Axis-angle `(angle, x, y, z)`.
	AxisAngle,
}

impl RotationMode {
	/// Stable host label for JSON/text output.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Quaternion => "QUATERNION",
			Self::Xyz => "XYZ",
			Self::Xzy => "XZY",
			Self::Yxz => "YXZ",
			Self::Yzx => "YZX",
			Self::Zxy => "ZXY",
			Self::Zyx => "ZYX",
			Self::AxisAngle => "AXIS_ANGLE",
		}
	}

	/// Whether this mode stores Euler angles.
	pub fn is_euler(self) -> bool {
		self.euler_order().is_some()
	}

	// glam orders are intrinsic, so the host's extrinsic `ABC` maps to `CBA`
	// with the angle components read in reverse.
	fn euler_order(self) -> Option<(EulerRot, [usize; 3])> {
		match self {
			Self::Xyz => Some((EulerRot::ZYX, [2, 1, 0])),
			Self::Xzy => Some((EulerRot::YZX, [1, 2, 0])),
			Self::Yxz => Some((EulerRot::ZXY, [2, 0, 1])),
			Self::Yzx => Some((EulerRot::XZY, [0, 2, 1])),
			Self::Zxy => Some((EulerRot::YXZ, [1, 0, 2])),
			Self::Zyx => Some((EulerRot::XYZ, [0, 1, 2])),
			Self::Quaternion | Self::AxisAngle => None,
		}
	}
}

/// Multi-representation rotation as stored on a host object.
///
/// Only the representation selected by `mode` is authoritative; the others keep
/// whatever values they held when the mode last changed.
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct Rotation {
	/// Active representation.
	#[serde(rename = "rotation_mode")]
	pub mode: RotationMode,
	/// Euler angles in radians, indexed by axis.
	#[serde(rename = "rotation_euler")]
	pub euler: [f64; 3],
	/// Quaternion `(w, x, y, z)`.
	#[serde(rename = "rotation_quaternion")]
	pub quaternion: [f64; 4],
	/// Axis-angle `(angle, x, y, z)`.
	#[serde(rename = "rotation_axis_angle")]
	pub axis_angle: [f64; 4],
}

impl Default for Rotation {
	fn default() -> Self {
		Self {
			mode: RotationMode::Xyz,
			euler: [0.0; 3],
			quaternion: [1.0, 0.0, 0.0, 0.0],
			axis_angle: [0.0, 0.0, 1.0, 0.0],
		}
	}
}

impl Rotation {
	/// Rotation stored as a quaternion `(w, x, y, z)`.
	pub fn from_quaternion(quaternion: [f64; 4]) -> Self {
		Self {
			mode: RotationMode::Quaternion,
			quaternion,
			..Self::default()
		}
	}

	/// Rotation stored as Euler angles in the given order.
	pub fn from_euler(mode: RotationMode, euler: [f64; 3]) -> Self {
		debug_assert!(mode.is_euler(), "{} is not an Euler order", mode.as_str());
		Self { mode, euler, ..Self::default() }
	}

	/// Rotation stored as axis-angle `(angle, x, y, z)`.
	pub fn from_axis_angle(axis_angle: [f64; 4]) -> Self {
		Self {
			mode: RotationMode::AxisAngle,
			axis_angle,
			..Self::default()
		}
	}

	/// Change the active mode, converting the current values like the host does.
	///
	/// Switching to the already-active mode leaves every value untouched.
	pub fn set_mode(&mut self, mode: RotationMode) {
		if mode == self.mode {
			return;
		}

		let quat = self.active_quat();
		match mode {
			RotationMode::Quaternion => self.quaternion = quat_to_array(quat),
			RotationMode::AxisAngle => self.axis_angle = quat_to_axis_angle(quat),
			euler => {
				if let Some((order, index)) = euler.euler_order() {
					let (a, b, c) = quat.to_euler(order);
					self.euler[index[0]] = a;
					self.euler[index[1]] = b;
					self.euler[index[2]] = c;
				}
			}
		}
		self.mode = mode;
	}

	// Quaternion mode values are normalized before conversion, matching the host.
	fn active_quat(&self) -> DQuat {
		match self.mode {
			RotationMode::Quaternion => {
				let [w, x, y, z] = self.quaternion;
				let quat = DQuat::from_xyzw(x, y, z, w);
				if quat.length_squared() > 0.0 { quat.normalize() } else { DQuat::IDENTITY }
			}
			RotationMode::AxisAngle => {
				let [angle, x, y, z] = self.axis_angle;
				match DVec3::new(x, y, z).try_normalize() {
					Some(axis) => DQuat::from_axis_angle(axis, angle),
					None => DQuat::IDENTITY,
				}
			}
			mode => match mode.euler_order() {
				Some((order, index)) => DQuat::from_euler(order, self.euler[index[0]], self.euler[index[1]], self.euler[index[2]]),
				None => DQuat::IDENTITY,
			},
		}
	}
}

/// Scoped rotation-mode switch that restores the prior rotation on drop.
///
/// The full rotation is snapshotted, so the restore is exact even when the
/// mode round trip would drift through floating-point conversion.
pub struct RotationModeGuard<'a> {
	rotation: &'a mut Rotation,
	saved: Rotation,
}

impl<'a> RotationModeGuard<'a> {
	/// Snapshot `rotation` and switch it to `mode`.
	pub fn switch(rotation: &'a mut Rotation, mode: RotationMode) -> Self {
		let saved = *rotation;
		rotation.set_mode(mode);
		Self { rotation, saved }
	}

	/// Rotation as seen while the switch is active.
	pub fn rotation(&self) -> &Rotation {
		self.rotation
	}

	/// Quaternion `(w, x, y, z)` as seen while the switch is active.
	pub fn quaternion(&self) -> [f64; 4] {
		self.rotation.quaternion
	}

	/// Rotation that will be restored on drop.
	pub fn saved(&self) -> &Rotation {
		&self.saved
	}
}

impl Drop for RotationModeGuard<'_> {
	fn drop(&mut self) {
		*self.rotation = self.saved;
	}
}

/// Read `rotation` as a quaternion `(w, x, y, z)` through a scoped mode switch.
pub fn read_quaternion(rotation: &mut Rotation) -> [f64; 4] {
	RotationModeGuard::switch(rotation, RotationMode::Quaternion).quaternion()
}

fn quat_to_array(quat: DQuat) -> [f64; 4] {
	[quat.w, quat.x, quat.y, quat.z]
}

fn quat_to_axis_angle(quat: DQuat) -> [f64; 4] {
	let angle = 2.0 * quat.w.clamp(-1.0, 1.0).acos();
	let axis = DVec3::new(quat.x, quat.y, quat.z).try_normalize().unwrap_or(DVec3::Y);
	[angle, axis.x, axis.y, axis.z]
}

#[cfg(test)]
mod tests;
