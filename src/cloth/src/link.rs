use crate::point::ClothPoint;
use crate::vector::EPSILON;
use protocol::pr_model::PrLink;

/// Distance constraint between two points of the cloth's point arena.
#[derive(Clone, Debug)]
pub struct ClothLink {
	ps: [usize; 2],
	l0: f32,
	tear: f32,
	broken: bool,
}

impl ClothLink {
	pub fn new(p1: usize, p2: usize, l0: f32, tear: f32) -> Self {
		Self {
			ps: [p1, p2],
			l0,
			tear,
			broken: false,
		}
	}

	pub fn ids(&self) -> [usize; 2] {
		self.ps
	}

	pub fn get_resting_distance(&self) -> f32 {
		self.l0
	}

	pub fn get_tear_distance(&self) -> f32 {
		self.tear
	}

	pub fn is_broken(&self) -> bool {
		self.broken
	}

	pub fn length(&self, points: &[ClothPoint]) -> f32 {
		(points[self.ps[0]].get_pos() - points[self.ps[1]].get_pos()).magnitude()
	}

	pub fn check_tear(&mut self, points: &[ClothPoint]) -> bool {
		if !self.broken && self.length(points) > self.tear {
			self.broken = true;
		}
		self.broken
	}

	// one Gauss-Seidel step: each end moves half of the error
	pub fn relax(&mut self, points: &mut [ClothPoint]) {
		if self.check_tear(points) {
			return;
		}
		let [a, b] = self.ps;
		let dp = points[a].get_pos() - points[b].get_pos();
		let l = dp.magnitude();
		if l < EPSILON {
			log::debug!("skip degenerate link {:?} (l = {})", self.ps, l);
			return;
		}
		let correct = dp * (0.5 * (self.l0 - l) / l);
		if !points[a].is_selected() {
			let pos = points[a].get_pos();
			points[a].set_pos(pos + correct);
		}
		if !points[b].is_selected() {
			let pos = points[b].get_pos();
			points[b].set_pos(pos - correct);
		}
	}

	pub fn render(&self) -> PrLink {
		PrLink {
			particles: self.ps,
			broken: self.broken,
		}
	}
}
