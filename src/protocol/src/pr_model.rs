// pr_model: Physical model for rendering

#[derive(Clone, Debug, PartialEq)]
pub struct PrParticle {
	pub pos: [f32; 2],
	pub dynamic: bool,
	pub selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PrLink {
	pub particles: [usize; 2],
	pub broken: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrModel {
	pub particles: Vec<PrParticle>,
	pub links: Vec<PrLink>,
}

impl PrModel {
	pub fn particle_len(&self) -> usize {
		self.particles.len()
	}

	pub fn link_len(&self) -> usize {
		self.links.len()
	}

	/// Endpoint positions of every link, in link order.
	pub fn segments(&self) -> impl Iterator<Item = ([f32; 2], [f32; 2])> + '_ {
		self.links.iter().map(move |link| {
			let [a, b] = link.particles;
			(self.particles[a].pos, self.particles[b].pos)
		})
	}
}
