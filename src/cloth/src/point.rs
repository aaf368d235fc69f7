use crate::physics::PhysicsProperties;
use crate::V2;
use protocol::pr_model::PrParticle;

// simulation units -> pixels
pub const GRAVITY_SCALE: f32 = 100.0;

#[derive(Clone, Debug)]
pub struct ClothPoint {
	pos: V2,
	// velocity is implicit: pos - ppos
	ppos: V2,
	dynamic: bool,
	selected: bool,
}

impl ClothPoint {
	pub fn new(pos: V2, dynamic: bool) -> Self {
		Self {
			pos,
			ppos: pos,
			dynamic,
			selected: false,
		}
	}

	pub fn get_pos(&self) -> V2 {
		self.pos
	}

	pub fn get_ppos(&self) -> V2 {
		self.ppos
	}

	pub fn velocity_raw(&self) -> V2 {
		self.pos - self.ppos
	}

	/// Pinned points only accept a new position while they are being dragged.
	/// A dragged point also forgets its velocity so letting go does not fling it.
	pub fn set_pos(&mut self, p: V2) {
		if !self.dynamic && !self.selected {
			return;
		}
		self.pos = p;
		if self.selected {
			self.ppos = p;
		}
	}

	pub fn is_dynamic(&self) -> bool {
		self.dynamic
	}

	pub fn set_dynamic(&mut self, dynamic: bool) {
		self.dynamic = dynamic;
	}

	pub fn is_selected(&self) -> bool {
		self.selected
	}

	pub fn set_selected(&mut self, selected: bool) {
		self.selected = selected;
	}

	pub fn integrate(&mut self, t: f32, props: &PhysicsProperties) {
		if !self.dynamic || self.selected {
			return;
		}
		let dp = (self.pos - self.ppos) * (1.0 - props.friction);
		let gravity = V2::new(0., props.gravity * GRAVITY_SCALE * t * t);
		let ppos = self.pos;
		self.pos += dp + gravity;
		self.ppos = ppos;
	}

	pub fn render(&self) -> PrParticle {
		PrParticle {
			pos: [self.pos[0], self.pos[1]],
			dynamic: self.dynamic,
			selected: self.selected,
		}
	}
}
