use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};

use crate::cloth::Cloth;
use crate::controller_message::ControllerMessage;
use crate::physics::{Physics, PhysicsProperties};
use crate::time_manager::{FixedStep, TimeManager};
use protocol::pr_model::PrModel;
use protocol::user_event::{UpdateInfo, UserEvent};

/// Host-side driver. Owns all simulation state; renderers only ever receive
/// snapshots through `run_thread`.
pub struct PWorld {
	physics: Physics,
	stepper: FixedStep,
	frame_interval: Duration,

	// -1: always play
	// 0: pause
	// n: play n frames
	forward_frames: i32,
	quit: bool,
}

impl Default for PWorld {
	fn default() -> Self {
		Self {
			physics: Physics::default(),
			stepper: FixedStep::default(),
			frame_interval: Duration::from_micros(16_667),
			forward_frames: -1,
			quit: false,
		}
	}
}

impl PWorld {
	pub fn with_dt(mut self, dt: f32) -> Self {
		self.stepper = self.stepper.with_dt(dt);
		self
	}

	pub fn with_max_steps(mut self, max_steps: usize) -> Self {
		self.stepper = self.stepper.with_max_steps(max_steps);
		self
	}

	pub fn with_paused(mut self) -> Self {
		self.forward_frames = 0;
		self
	}

	pub fn with_frame_interval(mut self, interval: Duration) -> Self {
		self.frame_interval = interval;
		self
	}

	pub fn with_props(mut self, props: PhysicsProperties) -> Self {
		self.physics = self.physics.with_props(props);
		self
	}

	pub fn with_cloth(mut self, cloth: Cloth) -> Self {
		self.add_cloth(cloth);
		self
	}

	pub fn add_cloth(&mut self, cloth: Cloth) {
		log::info!(
			"add cloth: {} points, {} links",
			cloth.point_count(),
			cloth.link_count()
		);
		self.physics.add_body(Box::new(cloth));
	}

	pub fn get_physics(&self) -> &Physics {
		&self.physics
	}

	pub fn get_dt(&self) -> f32 {
		self.stepper.get_dt()
	}

	pub fn is_paused(&self) -> bool {
		self.forward_frames == 0
	}

	pub fn should_quit(&self) -> bool {
		self.quit
	}

	pub fn snapshot(&self) -> Vec<PrModel> {
		self.physics.pr_models()
	}

	/// Advance by `elapsed` seconds of real time, returning the number of
	/// fixed steps taken. A single-frame forward runs exactly one step.
	pub fn tick(&mut self, elapsed: f32) -> usize {
		match self.forward_frames {
			0 => 0,
			-1 => {
				let steps = self.stepper.advance(elapsed);
				for _ in 0..steps {
					self.physics.step(self.stepper.get_dt());
				}
				steps
			}
			_ => {
				self.forward_frames -= 1;
				self.physics.step(self.stepper.get_dt());
				1
			}
		}
	}

	pub fn handle_message(&mut self, msg: ControllerMessage) {
		match msg {
			ControllerMessage::TogglePause => {
				if self.forward_frames == 0 {
					self.forward_frames = -1;
				} else {
					self.forward_frames = 0;
				}
				log::info!("paused: {}", self.is_paused());
			}
			ControllerMessage::FrameForward => {
				if self.forward_frames >= 0 {
					self.forward_frames += 1;
				}
			}
			ControllerMessage::BeginMove(pos) => self.physics.begin_move(pos),
			ControllerMessage::Move(dp) => self.physics.move_by(dp),
			ControllerMessage::EndMove(pos) => self.physics.end_move(pos),
			ControllerMessage::Pin(pos) => self.physics.pin(pos),
			ControllerMessage::Reset => self.physics.reset(),
			ControllerMessage::Quit => self.quit = true,
		}
	}

	pub fn run_thread(
		&mut self,
		tx: Sender<UserEvent>,
		rx: Receiver<ControllerMessage>,
	) {
		let mut time = TimeManager::default();
		loop {
			let start_time = Instant::now();
			while let Ok(msg) = rx.try_recv() {
				self.handle_message(msg);
			}
			if self.quit {
				break;
			}
			time.set(!self.is_paused());
			let steps = self.tick(time.take_time());
			let models = self.snapshot();
			let busy = start_time.elapsed();
			let load =
				busy.as_secs_f32() / self.frame_interval.as_secs_f32().max(1e-6);
			let info = UpdateInfo::from_models(&models, steps, load);
			if tx.send(UserEvent::Update(models, info)).is_err() {
				log::info!("render side hung up");
				break;
			}
			if busy < self.frame_interval {
				std::thread::sleep(self.frame_interval - busy);
			}
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::cloth::ClothConfig;
	use crate::V2;

	fn world() -> PWorld {
		let cloth = Cloth::new(ClothConfig::default().with_size(3, 3)).unwrap();
		PWorld::default().with_dt(0.01).with_cloth(cloth)
	}

	#[test]
	fn test_tick_runs_whole_steps() {
		let mut pworld = world();
		assert_eq!(pworld.tick(0.025), 2);
		assert_eq!(pworld.tick(0.006), 1);
	}

	#[test]
	fn test_pause_and_frame_forward() {
		let mut pworld = world().with_paused();
		let before = pworld.snapshot();
		assert_eq!(pworld.tick(1.), 0);
		assert_eq!(pworld.snapshot(), before);
		pworld.handle_message(ControllerMessage::FrameForward);
		assert_eq!(pworld.tick(0.), 1);
		assert_eq!(pworld.tick(1.), 0);
		assert_ne!(pworld.snapshot(), before);
		pworld.handle_message(ControllerMessage::TogglePause);
		assert!(!pworld.is_paused());
	}

	#[test]
	fn test_messages_reach_cloth() {
		let mut pworld = world().with_paused();
		let pos: V2 = pworld.snapshot()[0].particles[4].pos.into();
		pworld.handle_message(ControllerMessage::BeginMove(pos));
		pworld.handle_message(ControllerMessage::Move(V2::new(5., 0.)));
		let p = &pworld.snapshot()[0].particles[4];
		assert!(p.selected);
		assert_eq!(p.pos, [pos[0] + 5., pos[1]]);
		pworld.handle_message(ControllerMessage::EndMove(pos));
		pworld.handle_message(ControllerMessage::Pin(pos + V2::new(5., 0.)));
		let p = &pworld.snapshot()[0].particles[4];
		assert!(!p.selected);
		assert!(!p.dynamic);
	}

	#[test]
	fn test_run_thread_quits() {
		use std::sync::mpsc::channel;
		let mut pworld = world().with_frame_interval(Duration::from_millis(1));
		let (tx, rx) = channel();
		let (ctx, crx) = channel();
		let handle = std::thread::spawn(move || {
			pworld.run_thread(tx, crx);
			pworld
		});
		match rx.recv().unwrap() {
			UserEvent::Update(models, info) => {
				assert_eq!(models.len(), 1);
				assert_eq!(info.particle_len, 9);
			}
		}
		ctx.send(ControllerMessage::Quit).unwrap();
		let pworld = handle.join().unwrap();
		assert!(pworld.should_quit());
	}
}
