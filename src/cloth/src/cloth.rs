use crate::error::ClothError;
use crate::link::ClothLink;
use crate::physics::{PhysicsProperties, Updatable};
use crate::point::ClothPoint;
use crate::V2;
use protocol::pr_model::PrModel;

#[derive(Clone, Debug, PartialEq)]
pub struct ClothConfig {
	pub width: usize,
	pub height: usize,
	pub iterations: usize,
	pub spacing: f32,
	pub resting_distance: f32,
	pub tear_distance: f32,
	pub select_radius: f32,
}

impl Default for ClothConfig {
	fn default() -> Self {
		Self {
			width: 30,
			height: 25,
			iterations: 3,
			spacing: 15.,
			resting_distance: 20.,
			tear_distance: 180.,
			select_radius: 10.,
		}
	}
}

impl ClothConfig {
	pub fn with_size(mut self, width: usize, height: usize) -> Self {
		self.width = width;
		self.height = height;
		self
	}

	pub fn with_iterations(mut self, iterations: usize) -> Self {
		self.iterations = iterations;
		self
	}

	pub fn with_spacing(mut self, spacing: f32) -> Self {
		self.spacing = spacing;
		self
	}

	pub fn with_resting_distance(mut self, d: f32) -> Self {
		self.resting_distance = d;
		self
	}

	pub fn with_tear_distance(mut self, d: f32) -> Self {
		self.tear_distance = d;
		self
	}

	pub fn with_select_radius(mut self, r: f32) -> Self {
		self.select_radius = r;
		self
	}

	pub fn validate(&self) -> Result<(), ClothError> {
		if self.width == 0 || self.height == 0 {
			return Err(ClothError::InvalidDimensions {
				width: self.width,
				height: self.height,
			});
		}
		if self.iterations == 0 {
			return Err(ClothError::InvalidIterations);
		}
		if !(self.spacing > 0.) {
			return Err(ClothError::InvalidSpacing(self.spacing));
		}
		if !(self.resting_distance > 0.) {
			return Err(ClothError::InvalidRestingDistance(self.resting_distance));
		}
		if !(self.tear_distance > self.resting_distance) {
			return Err(ClothError::TearBelowRest {
				resting: self.resting_distance,
				tear: self.tear_distance,
			});
		}
		if !(self.select_radius > 0.) {
			return Err(ClothError::InvalidSelectRadius(self.select_radius));
		}
		Ok(())
	}
}

/// Grid of points joined by horizontal and vertical links.
///
/// Points are stored row-major, `index(x, y) = y * width + x`; links refer to
/// points by index. Links only ever leave the set (when they tear).
pub struct Cloth {
	config: ClothConfig,
	points: Vec<ClothPoint>,
	links: Vec<ClothLink>,
	selected: Option<usize>,
}

impl Cloth {
	pub fn new(config: ClothConfig) -> Result<Self, ClothError> {
		config.validate()?;
		let mut result = Self {
			config,
			points: Vec::new(),
			links: Vec::new(),
			selected: None,
		};
		result.build();
		log::info!(
			"cloth {}x{}: {} points, {} links",
			result.config.width,
			result.config.height,
			result.points.len(),
			result.links.len(),
		);
		Ok(result)
	}

	fn build(&mut self) {
		let w = self.config.width;
		let h = self.config.height;
		let size = self.config.spacing;
		let l0 = self.config.resting_distance;
		let tear = self.config.tear_distance;
		self.points = Vec::with_capacity(w * h);
		self.links = Vec::with_capacity(2 * w * h);
		self.selected = None;
		for idy in 0..h {
			for idx in 0..w {
				// top corners hold the cloth up
				let dynamic = !(idy == 0 && (idx == 0 || idx == w - 1));
				let pos = V2::new(
					(idx as f32 - w as f32 / 2.) * size,
					(idy as f32 - h as f32) * size,
				);
				let id = self.points.len();
				self.points.push(ClothPoint::new(pos, dynamic));
				if idx > 0 {
					self.links.push(ClothLink::new(id - 1, id, l0, tear));
				}
				if idy > 0 {
					self.links.push(ClothLink::new(id - w, id, l0, tear));
				}
			}
		}
	}

	pub fn get_config(&self) -> &ClothConfig {
		&self.config
	}

	pub fn width(&self) -> usize {
		self.config.width
	}

	pub fn height(&self) -> usize {
		self.config.height
	}

	pub fn index(&self, x: usize, y: usize) -> usize {
		y * self.config.width + x
	}

	pub fn points(&self) -> &[ClothPoint] {
		&self.points
	}

	pub fn links(&self) -> &[ClothLink] {
		&self.links
	}

	pub fn point(&self, id: usize) -> &ClothPoint {
		&self.points[id]
	}

	pub fn point_mut(&mut self, id: usize) -> &mut ClothPoint {
		&mut self.points[id]
	}

	pub fn point_count(&self) -> usize {
		self.points.len()
	}

	pub fn link_count(&self) -> usize {
		self.links.len()
	}

	pub fn selected(&self) -> Option<usize> {
		self.selected
	}

	fn relax_links(&mut self) {
		for _ in 0..self.config.iterations {
			for link in self.links.iter_mut() {
				link.relax(&mut self.points);
			}
		}
	}

	fn tear_links(&mut self) {
		for link in self.links.iter_mut() {
			link.check_tear(&self.points);
		}
	}

	fn drop_broken(&mut self) {
		let before = self.links.len();
		self.links.retain(|link| !link.is_broken());
		let torn = before - self.links.len();
		if torn > 0 {
			log::debug!("{} links torn, {} left", torn, self.links.len());
		}
	}

	#[cfg(not(debug_assertions))]
	fn integrate_points(&mut self, dt: f32, props: &PhysicsProperties) {
		use rayon::prelude::*;
		self.points
			.par_iter_mut()
			.for_each(|p| p.integrate(dt, props));
	}

	#[cfg(debug_assertions)]
	fn integrate_points(&mut self, dt: f32, props: &PhysicsProperties) {
		self.points
			.iter_mut()
			.for_each(|p| p.integrate(dt, props));
	}

	pub fn update(&mut self, dt: f32, props: &PhysicsProperties) {
		if dt == 0f32 {
			// nothing moves, but links already past their limit still tear
			self.tear_links();
			self.drop_broken();
			return;
		}
		self.relax_links();
		self.drop_broken();
		self.integrate_points(dt, props);
	}

	fn find_closest(&self, pos: V2) -> Option<usize> {
		let mut min_dist = self.config.select_radius;
		let mut min_id = None;
		for (id, p) in self.points.iter().enumerate() {
			let dist = (p.get_pos() - pos).magnitude();
			if dist < min_dist {
				min_dist = dist;
				min_id = Some(id);
			}
		}
		min_id
	}

	pub fn begin_move(&mut self, pos: V2) -> Option<usize> {
		self.end_move(pos);
		let id = self.find_closest(pos)?;
		self.points[id].set_selected(true);
		self.selected = Some(id);
		Some(id)
	}

	pub fn move_by(&mut self, dp: V2) {
		if let Some(id) = self.selected {
			let pos = self.points[id].get_pos();
			self.points[id].set_pos(pos + dp);
		}
	}

	pub fn end_move(&mut self, _pos: V2) {
		if let Some(id) = self.selected.take() {
			self.points[id].set_selected(false);
		}
	}

	pub fn pin(&mut self, pos: V2) -> Option<usize> {
		let id = self.find_closest(pos)?;
		let p = &mut self.points[id];
		p.set_dynamic(!p.is_dynamic());
		Some(id)
	}

	/// Rebuild the grid from its config, restoring torn links and pins.
	pub fn reset(&mut self) {
		self.build();
		log::info!("cloth reset");
	}

	pub fn render(&self) -> PrModel {
		PrModel {
			particles: self.points.iter().map(|p| p.render()).collect(),
			links: self.links.iter().map(|l| l.render()).collect(),
		}
	}
}

impl Updatable for Cloth {
	fn update(&mut self, dt: f32, props: &PhysicsProperties) {
		Cloth::update(self, dt, props)
	}

	fn begin_move(&mut self, pos: V2) -> Option<usize> {
		Cloth::begin_move(self, pos)
	}

	fn move_by(&mut self, dp: V2) {
		Cloth::move_by(self, dp)
	}

	fn end_move(&mut self, pos: V2) {
		Cloth::end_move(self, pos)
	}

	fn pin(&mut self, pos: V2) -> Option<usize> {
		Cloth::pin(self, pos)
	}

	fn reset(&mut self) {
		Cloth::reset(self)
	}

	fn render(&self) -> PrModel {
		Cloth::render(self)
	}
}
