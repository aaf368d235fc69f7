use std::time::Instant;

use clap::Parser;
use cloth::cloth::{Cloth, ClothConfig};
use cloth::physics::PhysicsProperties;

/// Measure how fast the cloth simulates compared to real time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
	#[arg(long, default_value = "30")]
	width: usize,

	#[arg(long, default_value = "25")]
	height: usize,

	/// Relaxation passes per step.
	#[arg(short('i'), long, default_value = "3")]
	iterations: usize,

	/// Number of fixed steps to simulate.
	#[arg(short('n'), long, default_value = "6000")]
	frames: usize,

	#[arg(long, default_value = "0.0166667")]
	dt: f32,
}

fn main() -> Result<(), String> {
	env_logger::Builder::from_default_env()
		.filter_level(log::LevelFilter::Info)
		.init();
	let args = Args::parse();
	let config = ClothConfig::default()
		.with_size(args.width, args.height)
		.with_iterations(args.iterations);
	let mut cloth = Cloth::new(config).map_err(|e| e.to_string())?;
	let props = PhysicsProperties::default();
	let start = Instant::now();
	for _ in 0..args.frames {
		cloth.update(args.dt, &props);
	}
	let simulated = args.frames as f32 * args.dt;
	let duration = start.elapsed().as_secs_f32();
	log::info!(
		"{} steps in {:.3}s ({:.3}% of real time), {} links left",
		args.frames,
		duration,
		duration / simulated * 100.,
		cloth.link_count(),
	);
	Ok(())
}
