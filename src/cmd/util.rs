use std::path::{Path, PathBuf};

use blendlink::export::Result;

/// Extension the exporter writes.
pub(crate) const JSON_EXTENSION: &str = "json";

/// Print `value` as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}

/// Output path for an export of `scene`.
///
/// Explicit paths gain `.json` when they have no extension; otherwise the output
/// is `<name>.export.json` next to the snapshot, `<name>` being the snapshot file
/// name up to its first dot.
pub(crate) fn output_path(scene: &Path, output: Option<PathBuf>) -> PathBuf {
	if let Some(output) = output {
		if output.extension().is_none() {
			return output.with_extension(JSON_EXTENSION);
		}
		return output;
	}

	let file_name = scene.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
	let stem = file_name.split('.').next().filter(|stem| !stem.is_empty()).unwrap_or("scene");
	scene.with_file_name(format!("{stem}.export.{JSON_EXTENSION}"))
}
