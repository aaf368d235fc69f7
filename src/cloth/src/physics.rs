use crate::V2;
use protocol::pr_model::PrModel;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsProperties {
	pub gravity: f32,
	pub friction: f32,
}

impl Default for PhysicsProperties {
	fn default() -> Self {
		Self {
			gravity: 9.81,
			friction: 0.015,
		}
	}
}

impl PhysicsProperties {
	pub fn with_gravity(mut self, gravity: f32) -> Self {
		self.gravity = gravity;
		self
	}

	pub fn with_friction(mut self, friction: f32) -> Self {
		self.friction = friction;
		self
	}
}

/// A simulated body driven by `Physics`. Positions are in the body's local space.
pub trait Updatable {
	fn update(&mut self, dt: f32, props: &PhysicsProperties);

	fn begin_move(&mut self, pos: V2) -> Option<usize>;

	fn move_by(&mut self, dp: V2);

	fn end_move(&mut self, pos: V2);

	fn pin(&mut self, pos: V2) -> Option<usize>;

	fn reset(&mut self) {}

	fn render(&self) -> PrModel;
}

pub type BodyRef = Box<dyn Updatable + Send>;

#[derive(Default)]
pub struct Physics {
	props: PhysicsProperties,
	bodies: Vec<BodyRef>,
}

impl Physics {
	pub fn with_props(mut self, props: PhysicsProperties) -> Self {
		self.props = props;
		self
	}

	pub fn get_props(&self) -> PhysicsProperties {
		self.props
	}

	pub fn add_body(&mut self, body: BodyRef) {
		self.bodies.push(body);
	}

	pub fn body_len(&self) -> usize {
		self.bodies.len()
	}

	pub fn step(&mut self, dt: f32) {
		let props = self.props;
		for body in self.bodies.iter_mut() {
			body.update(dt, &props);
		}
	}

	pub fn begin_move(&mut self, pos: V2) {
		for body in self.bodies.iter_mut() {
			if let Some(id) = body.begin_move(pos) {
				log::debug!("selected point {}", id);
			}
		}
	}

	pub fn move_by(&mut self, dp: V2) {
		for body in self.bodies.iter_mut() {
			body.move_by(dp);
		}
	}

	pub fn end_move(&mut self, pos: V2) {
		for body in self.bodies.iter_mut() {
			body.end_move(pos);
		}
	}

	pub fn pin(&mut self, pos: V2) {
		for body in self.bodies.iter_mut() {
			if let Some(id) = body.pin(pos) {
				log::debug!("toggled pin on point {}", id);
			}
		}
	}

	pub fn reset(&mut self) {
		for body in self.bodies.iter_mut() {
			body.reset();
		}
	}

	pub fn pr_models(&self) -> Vec<PrModel> {
		self.bodies.iter().map(|b| b.render()).collect()
	}
}
