use std::sync::mpsc::channel;

use clap::Parser;
use cloth::cloth::{Cloth, ClothConfig};
use cloth::controller_message::ControllerMessage;
use cloth::physics::PhysicsProperties;
use cloth::pworld::PWorld;
use frontend::controller::{Button, Controller};
use protocol::pr_model::PrModel;
use protocol::user_event::UserEvent;
use protocol::V2;

/// Run the cloth on a physics thread and replay a scripted drag and pin
/// session against it, logging what a renderer would receive.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
	#[arg(long, default_value = "30")]
	width: usize,

	#[arg(long, default_value = "25")]
	height: usize,

	#[arg(short('i'), long, default_value = "3")]
	iterations: usize,

	#[arg(short('t'), long, default_value = "180.0")]
	tear_distance: f32,

	/// Frames to receive before quitting.
	#[arg(short('n'), long, default_value = "600")]
	frames: usize,

	/// Physics steps per second.
	#[arg(long, default_value = "60.0")]
	rate: f32,

	#[arg(short('g'), long, default_value = "9.81")]
	gravity: f32,

	#[arg(short('f'), long, default_value = "0.015")]
	friction: f32,
}

fn point_on_screen(controller: &Controller, model: &PrModel, id: usize) -> V2 {
	let pos: V2 = model.particles[id].pos.into();
	controller.get_view().w2s(pos)
}

fn script(
	frame: usize,
	frames: usize,
	args: &Args,
	model: &PrModel,
	controller: &mut Controller,
) -> Vec<ControllerMessage> {
	let w = args.width;
	let grab = (args.height - 1) * w + w / 2;
	let pin = w / 2;
	let cursor = controller.get_cursor();
	if frame == frames / 4 {
		let c = point_on_screen(controller, model, grab);
		controller.mouse_down(Button::Left, c)
	} else if frame > frames / 4 && frame < frames / 2 {
		controller.mouse_move(cursor + V2::new(2., 3.)).into_iter().collect()
	} else if frame == frames / 2 {
		controller.mouse_up(Button::Left, cursor).into_iter().collect()
	} else if frame == frames * 5 / 8 {
		let c = point_on_screen(controller, model, pin);
		controller.mouse_down(Button::Right, c)
	} else if frame > frames * 5 / 8 && frame < frames * 3 / 4 {
		controller.mouse_move(cursor + V2::new(1., 0.)).into_iter().collect()
	} else if frame == frames * 3 / 4 {
		controller.mouse_up(Button::Right, cursor).into_iter().collect()
	} else {
		Vec::new()
	}
}

fn main() -> Result<(), String> {
	env_logger::Builder::from_default_env()
		.filter_level(log::LevelFilter::Info)
		.init();
	let args = Args::parse();
	if args.rate <= 0. {
		return Err(format!("rate must be positive, got {}", args.rate));
	}

	let config = ClothConfig::default()
		.with_size(args.width, args.height)
		.with_iterations(args.iterations)
		.with_tear_distance(args.tear_distance);
	let cloth = Cloth::new(config).map_err(|e| e.to_string())?;
	let props = PhysicsProperties::default()
		.with_gravity(args.gravity)
		.with_friction(args.friction);
	let mut pworld = PWorld::default()
		.with_dt(1. / args.rate)
		.with_props(props)
		.with_cloth(cloth);

	let (tx, rx) = channel();
	let (ctx, crx) = channel();
	let handle = std::thread::spawn(move || pworld.run_thread(tx, crx));

	let mut controller = Controller::default();
	controller.resize([800, 600]);
	let mut load_smoother = 0.0;
	let mut last_model = None;
	for frame in 0..args.frames {
		let UserEvent::Update(models, info) =
			rx.recv().map_err(|e| format!("physics thread stopped: {}", e))?;
		load_smoother *= 0.8;
		load_smoother += info.load * 0.2;
		let model = match models.into_iter().next() {
			Some(m) => m,
			None => return Err("no cloth in world".to_string()),
		};
		for msg in script(frame, args.frames, &args, &model, &mut controller) {
			log::debug!("frame {}: {:?}", frame, msg);
			ctx.send(msg).map_err(|e| e.to_string())?;
		}
		if frame % 60 == 0 {
			log::info!(
				"frame {}: {} steps, {} points, {} links, load {:.2}%",
				frame,
				info.steps,
				info.particle_len,
				info.link_len,
				load_smoother * 100.,
			);
		}
		last_model = Some(model);
	}

	ctx.send(ControllerMessage::Quit).map_err(|e| e.to_string())?;
	handle
		.join()
		.map_err(|_| "physics thread panicked".to_string())?;

	if let Some(model) = last_model {
		let pinned = model.particles.iter().filter(|p| !p.dynamic).count();
		let visible = model
			.particles
			.iter()
			.filter(|p| controller.get_view().contains(p.pos.into()))
			.count();
		log::info!(
			"done: {} links left, {} pinned, {} of {} points on screen",
			model.link_len(),
			pinned,
			visible,
			model.particle_len(),
		);
	}
	Ok(())
}
