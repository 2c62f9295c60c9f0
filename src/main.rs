#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "blendlink", about = "Export linked Blender collection instances to JSON")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Write linked collection instances of a scene snapshot to a JSON file.
	Export(cmd::export::Args),
	/// List linked collection instances of a scene snapshot.
	List(cmd::list::Args),
}

fn main() {
	pretty_env_logger::init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> blendlink::export::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Export(args) => cmd::export::run(args),
		Commands::List(args) => cmd::list::run(args),
	}
}
