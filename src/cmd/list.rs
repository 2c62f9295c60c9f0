use std::path::PathBuf;

use blendlink::export::{Result, Scene, resolve_asset_link};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// Scene snapshot (JSON, optionally zstd-compressed).
	pub scene: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print every linked collection instance with its resolved library.
pub fn run(args: Args) -> Result<()> {
	let Args { scene: path, json } = args;

	let scene = Scene::open(&path)?;
	let rows: Vec<_> = scene
		.objects
		.iter()
		.filter(|object| object.is_collection_instance())
		.map(|object| {
			let (link, error) = match resolve_asset_link(&scene, object) {
				Ok(link) => (Some(link), None),
				Err(err) => (None, Some(err.to_string())),
			};
			InstanceJson {
				name: object.name.clone(),
				asset: object.instance_collection.clone(),
				library: link.as_ref().map(|link| link.library_file_name.clone()),
				filename: link.as_ref().map(|link| link.filename()),
				rotation_mode: object.rotation.mode.as_str(),
				visible: object.is_visible(),
				error,
			}
		})
		.collect();

	if json {
		return emit_json(&rows);
	}

	println!("path: {}", path.display());
	println!("instances: {}", rows.len());
	println!();
	println!("name\tasset\tlibrary\tfilename\trotation_mode\tvisible\terror");
	for row in &rows {
		println!(
			"{}\t{}\t{}\t{}\t{}\t{}\t{}",
			row.name,
			row.asset.as_deref().unwrap_or("-"),
			row.library.as_deref().unwrap_or("<unresolved>"),
			row.filename.as_deref().unwrap_or("-"),
			row.rotation_mode,
			row.visible,
			row.error.as_deref().unwrap_or("-")
		);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct InstanceJson {
	name: String,
	asset: Option<String>,
	library: Option<String>,
	filename: Option<String>,
	rotation_mode: &'static str,
	visible: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	error: Option<String>,
}
