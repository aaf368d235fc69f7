use crate::V2;

/// Screen <-> cloth-local transform. The cloth hangs from its top edge
/// around local x = 0, so the offset places that origin on screen.
pub struct View {
	offset: V2,
	screen_size: V2,
	top_margin: f32,
}

impl Default for View {
	fn default() -> Self {
		let mut result = Self {
			offset: V2::zeros(),
			screen_size: V2::new(800., 600.),
			top_margin: 400.,
		};
		result.recenter();
		result
	}
}

impl View {
	pub fn with_top_margin(mut self, top_margin: f32) -> Self {
		self.top_margin = top_margin;
		self.recenter();
		self
	}

	fn recenter(&mut self) {
		self.offset = V2::new(self.screen_size[0] / 2., self.top_margin);
	}

	pub fn get_offset(&self) -> V2 {
		self.offset
	}

	pub fn move_view(&mut self, ds: V2) {
		self.offset += ds;
	}

	pub fn s2w(&self, pos: V2) -> V2 {
		pos - self.offset
	}

	pub fn w2s(&self, pos: V2) -> V2 {
		pos + self.offset
	}

	pub fn resize(&mut self, new_size: [u32; 2]) {
		self.screen_size = V2::new(new_size[0] as f32, new_size[1] as f32);
		self.recenter();
	}

	pub fn contains(&self, pos: V2) -> bool {
		let s = self.w2s(pos);
		(s[0] >= 0. && s[0] <= self.screen_size[0])
			&& (s[1] >= 0. && s[1] <= self.screen_size[1])
	}
}
