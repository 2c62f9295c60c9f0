use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2};

use super::{Rotation, RotationMode, RotationModeGuard, read_quaternion};

fn assert_quat_eq(actual: [f64; 4], expected: [f64; 4]) {
	for (got, want) in actual.iter().zip(expected) {
		assert!((got - want).abs() < 1e-9, "expected {expected:?}, got {actual:?}");
	}
}

#[test]
fn quaternion_mode_reads_stored_values_verbatim() {
	let mut rotation = Rotation::from_quaternion([0.5, 0.5, 0.5, 0.5]);
	assert_eq!(read_quaternion(&mut rotation), [0.5, 0.5, 0.5, 0.5]);
}

#[test]
fn xyz_euler_about_single_axis_converts_to_half_angle_quaternion() {
	let mut rotation = Rotation::from_euler(RotationMode::Xyz, [FRAC_PI_2, 0.0, 0.0]);
	assert_quat_eq(read_quaternion(&mut rotation), [FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0, 0.0]);

	let mut rotation = Rotation::from_euler(RotationMode::Xyz, [0.0, 0.0, FRAC_PI_2]);
	assert_quat_eq(read_quaternion(&mut rotation), [FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2]);
}

#[test]
fn euler_order_decides_composition() {
	let mut xyz = Rotation::from_euler(RotationMode::Xyz, [FRAC_PI_2, 0.0, FRAC_PI_2]);
	assert_quat_eq(read_quaternion(&mut xyz), [0.5, 0.5, 0.5, 0.5]);

	let mut zyx = Rotation::from_euler(RotationMode::Zyx, [FRAC_PI_2, 0.0, FRAC_PI_2]);
	assert_quat_eq(read_quaternion(&mut zyx), [0.5, 0.5, -0.5, 0.5]);
}

#[test]
fn axis_angle_normalizes_axis() {
	let mut rotation = Rotation::from_axis_angle([FRAC_PI_2, 0.0, 0.0, 2.0]);
	assert_quat_eq(read_quaternion(&mut rotation), [FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2]);
}

#[test]
fn zero_axis_angle_reads_as_identity() {
	let mut rotation = Rotation::from_axis_angle([1.0, 0.0, 0.0, 0.0]);
	assert_quat_eq(read_quaternion(&mut rotation), [1.0, 0.0, 0.0, 0.0]);
}

#[test]
fn guard_restores_mode_and_values_on_drop() {
	let mut rotation = Rotation::from_euler(RotationMode::Yzx, [0.3, -1.1, 2.7]);
	let before = rotation;

	{
		let guard = RotationModeGuard::switch(&mut rotation, RotationMode::Quaternion);
		assert_eq!(guard.rotation().mode, RotationMode::Quaternion);
		assert_eq!(*guard.saved(), before);
	}

	assert_eq!(rotation, before);
}

#[test]
fn set_mode_round_trip_preserves_euler_angles() {
	let mut rotation = Rotation::from_euler(RotationMode::Xyz, [0.2, 0.4, -0.6]);
	rotation.set_mode(RotationMode::Quaternion);
	rotation.set_mode(RotationMode::Xyz);

	for (got, want) in rotation.euler.iter().zip([0.2, 0.4, -0.6]) {
		assert!((got - want).abs() < 1e-9, "euler drifted: {:?}", rotation.euler);
	}
}

#[test]
fn quaternion_to_axis_angle_uses_y_axis_for_identity() {
	let mut rotation = Rotation::from_quaternion([1.0, 0.0, 0.0, 0.0]);
	rotation.set_mode(RotationMode::AxisAngle);
	assert_eq!(rotation.axis_angle, [0.0, 0.0, 1.0, 0.0]);
}

#[test]
fn same_mode_switch_is_a_no_op() {
	let mut rotation = Rotation::from_quaternion([2.0, 0.0, 0.0, 0.0]);
	rotation.set_mode(RotationMode::Quaternion);
	assert_eq!(rotation.quaternion, [2.0, 0.0, 0.0, 0.0]);
}

#[test]
fn mode_labels_match_host_tags() {
	assert_eq!(RotationMode::AxisAngle.as_str(), "AXIS_ANGLE");
	assert_eq!(RotationMode::Zxy.as_str(), "ZXY");
	assert!(!RotationMode::Quaternion.is_euler());
	let parsed: RotationMode = serde_json::from_str("\"AXIS_ANGLE\"").expect("mode parses");
	assert_eq!(parsed, RotationMode::AxisAngle);
}
