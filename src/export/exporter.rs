use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::export::{ExportError, ExportRecord, RawRecord, RemappedTransform, Result, SceneSource, read_quaternion, resolve_asset_link};

/// Output layout written by an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportLayout {
	/// Remapped, truncated transforms with library linkage.
	#[default]
	Linked,
	/// Stored host values in every rotation representation.
	Raw,
}

impl ExportLayout {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Linked => "linked",
			Self::Raw => "raw",
		}
	}
}

impl FromStr for ExportLayout {
	type Err = ExportError;

	fn from_str(value: &str) -> Result<Self> {
		match value {
			"linked" => Ok(Self::Linked),
			"raw" => Ok(Self::Raw),
			_ => Err(ExportError::InvalidLayout { value: value.to_owned() }),
		}
	}
}

/// Export tuning.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
	/// Output layout.
	pub layout: ExportLayout,
}

/// Build export records for every linked collection instance, in scene order.
///
/// Each qualifying object's rotation is read as a quaternion through a scoped
/// mode switch; the object is left exactly as it was found.
pub fn collect_linked_records<S: SceneSource + ?Sized>(scene: &mut S) -> Result<Vec<ExportRecord>> {
	let mut out = Vec::new();
	for index in 0..scene.object_count() {
		let object = scene.object(index).ok_or(ExportError::ObjectOutOfRange { index })?;
		if !object.is_collection_instance() {
			log::debug!("skipping {}: not a collection instance", object.name);
			continue;
		}

		let link = resolve_asset_link(&*scene, object)?;
		let object = scene.object_mut(index).ok_or(ExportError::ObjectOutOfRange { index })?;
		let quaternion = read_quaternion(&mut object.rotation);
		let transform = RemappedTransform::from_host(object.location, quaternion, object.scale);
		log::trace!("{}: {:?}", object.name, transform);

		out.push(ExportRecord::new(&object.name, transform, &link, object.is_visible()));
	}

	Ok(out)
}

/// Build raw records for every linked collection instance, in scene order.
pub fn collect_raw_records<S: SceneSource + ?Sized>(scene: &S) -> Result<Vec<RawRecord>> {
	let mut out = Vec::new();
	for index in 0..scene.object_count() {
		let object = scene.object(index).ok_or(ExportError::ObjectOutOfRange { index })?;
		if !object.is_collection_instance() {
			continue;
		}

		let asset_name = object
			.instance_collection
			.as_deref()
			.ok_or_else(|| ExportError::MissingInstanceCollection { object: object.name.clone() })?;
		out.push(RawRecord::new(object, asset_name));
	}

	Ok(out)
}

/// Export linked collection instances of `scene` to `output_path`.
pub fn export_linked_objects<S: SceneSource + ?Sized>(scene: &mut S, output_path: impl AsRef<Path>) -> Result<()> {
	export_with_options(scene, output_path, &ExportOptions::default()).map(|_| ())
}

/// Export with explicit options, returning the number of records written.
///
/// Every record is resolved before the output is opened, so a failed export
/// never creates or truncates `output_path`.
pub fn export_with_options<S: SceneSource + ?Sized>(scene: &mut S, output_path: impl AsRef<Path>, options: &ExportOptions) -> Result<usize> {
	let output_path = output_path.as_ref();
	let count = match options.layout {
		ExportLayout::Linked => {
			let records = collect_linked_records(scene)?;
			write_json(output_path, &records)?;
			records.len()
		}
		ExportLayout::Raw => {
			let records = collect_raw_records(scene)?;
			write_json(output_path, &records)?;
			records.len()
		}
	};

	log::info!("exported {count} linked objects ({}) to {}", options.layout.as_str(), output_path.display());
	Ok(count)
}

/// Render records as two-space indented JSON text.
pub fn to_json_string<T: Serialize + ?Sized>(records: &T) -> Result<String> {
	Ok(serde_json::to_string_pretty(records)?)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, records: &T) -> Result<()> {
	let text = to_json_string(records)?;
	fs::write(path, text)?;
	Ok(())
}
