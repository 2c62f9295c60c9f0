use std::path::PathBuf;

use blendlink::export::{ExportLayout, ExportOptions, Result, Scene, export_with_options};

use crate::cmd::util::output_path;

#[derive(clap::Args)]
pub struct Args {
	/// Scene snapshot (JSON, optionally zstd-compressed).
	pub scene: PathBuf,
	/// Output file; defaults to `<name>.export.json` next to the snapshot.
	#[arg(short, long)]
	pub output: Option<PathBuf>,
	/// Output layout: `linked` or `raw`.
	#[arg(long, default_value = "linked")]
	pub layout: ExportLayout,
}

/// Export linked collection instances of a snapshot.
pub fn run(args: Args) -> Result<()> {
	let Args { scene: path, output, layout } = args;

	let mut scene = Scene::open(&path)?;
	let output = output_path(&path, output);
	let count = export_with_options(&mut scene, &output, &ExportOptions { layout })?;

	println!("scene: {}", path.display());
	println!("output: {}", output.display());
	println!("layout: {}", layout.as_str());
	println!("records: {count}");

	Ok(())
}
