use cloth::controller_message::ControllerMessage;
use protocol::view::View;
use protocol::V2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Button {
	Left,
	Middle,
	Right,
	Other,
}

/// Turns raw pointer and key input into controller messages.
///
/// Left button drags points, right button pins a point and pans the view
/// while held. All positions passed in are screen coordinates.
pub struct Controller {
	view: View,
	button_state: [bool; 4],
	last_cursor: V2,
}

impl Default for Controller {
	fn default() -> Self {
		Self {
			view: View::default(),
			button_state: [false; 4],
			last_cursor: V2::zeros(),
		}
	}
}

fn button_idx(b: Button) -> usize {
	match b {
		Button::Left => 0,
		Button::Middle => 1,
		Button::Right => 2,
		Button::Other => 3,
	}
}

impl Controller {
	pub fn with_view(mut self, view: View) -> Self {
		self.view = view;
		self
	}

	pub fn get_view(&self) -> &View {
		&self.view
	}

	pub fn resize(&mut self, new_size: [u32; 2]) {
		self.view.resize(new_size);
	}

	pub fn get_cursor(&self) -> V2 {
		self.last_cursor
	}

	pub fn is_pressed(&self, b: Button) -> bool {
		self.button_state[button_idx(b)]
	}

	/// A press always starts from a clean state, so an ongoing drag is
	/// ended first and its `EndMove` comes before the press's own message.
	pub fn mouse_down(&mut self, b: Button, c: V2) -> Vec<ControllerMessage> {
		let mut result: Vec<_> = self.mouse_out().into_iter().collect();
		self.last_cursor = c;
		self.button_state[button_idx(b)] = true;
		let local = self.view.s2w(c);
		match b {
			Button::Left => result.push(ControllerMessage::BeginMove(local)),
			Button::Right => result.push(ControllerMessage::Pin(local)),
			_ => {}
		}
		result
	}

	pub fn mouse_move(&mut self, c: V2) -> Option<ControllerMessage> {
		let dp = c - self.last_cursor;
		self.last_cursor = c;
		if self.is_pressed(Button::Right) {
			self.view.move_view(dp);
		}
		if self.is_pressed(Button::Left) {
			return Some(ControllerMessage::Move(dp));
		}
		None
	}

	pub fn mouse_up(&mut self, b: Button, c: V2) -> Option<ControllerMessage> {
		self.button_state[button_idx(b)] = false;
		self.last_cursor = c;
		if b == Button::Left {
			return Some(ControllerMessage::EndMove(self.view.s2w(c)));
		}
		None
	}

	pub fn mouse_out(&mut self) -> Option<ControllerMessage> {
		let dragging = self.is_pressed(Button::Left);
		self.button_state = [false; 4];
		if dragging {
			Some(ControllerMessage::EndMove(self.view.s2w(self.last_cursor)))
		} else {
			None
		}
	}

	pub fn key_pressed(&mut self, key: u8) -> Option<ControllerMessage> {
		let msg = match key {
			b' ' => ControllerMessage::TogglePause,
			b's' => ControllerMessage::FrameForward,
			b'r' => ControllerMessage::Reset,
			b'q' => ControllerMessage::Quit,
			_ => return None,
		};
		Some(msg)
	}
}
