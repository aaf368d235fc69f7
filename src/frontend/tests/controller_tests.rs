use cloth::controller_message::ControllerMessage;
use frontend::controller::{Button, Controller};
use protocol::V2;

fn controller() -> Controller {
	let mut c = Controller::default();
	c.resize([800, 600]);
	c
}

#[test]
fn left_drag_sequence() {
	let mut c = controller();
	let offset = c.get_view().get_offset();
	let down = V2::new(410., 300.);
	assert_eq!(
		c.mouse_down(Button::Left, down),
		vec![ControllerMessage::BeginMove(down - offset)]
	);
	assert_eq!(
		c.mouse_move(V2::new(415., 300.)),
		Some(ControllerMessage::Move(V2::new(5., 0.)))
	);
	assert_eq!(
		c.mouse_up(Button::Left, V2::new(415., 300.)),
		Some(ControllerMessage::EndMove(V2::new(415., 300.) - offset))
	);
	// nothing held any more
	assert_eq!(c.mouse_move(V2::new(500., 500.)), None);
}

#[test]
fn right_button_pins_and_pans() {
	let mut c = controller();
	let offset = c.get_view().get_offset();
	let down = V2::new(100., 100.);
	assert_eq!(
		c.mouse_down(Button::Right, down),
		vec![ControllerMessage::Pin(down - offset)]
	);
	assert_eq!(c.mouse_move(V2::new(110., 95.)), None);
	assert_eq!(c.get_view().get_offset(), offset + V2::new(10., -5.));
	assert_eq!(c.mouse_up(Button::Right, V2::new(110., 95.)), None);
	c.mouse_move(V2::new(200., 200.));
	assert_eq!(c.get_view().get_offset(), offset + V2::new(10., -5.));
}

#[test]
fn leaving_window_ends_drag() {
	let mut c = controller();
	c.mouse_down(Button::Left, V2::new(400., 300.));
	assert!(matches!(c.mouse_out(), Some(ControllerMessage::EndMove(_))));
	assert!(!c.is_pressed(Button::Left));
	assert_eq!(c.mouse_out(), None);
}

#[test]
fn keys() {
	let mut c = controller();
	assert_eq!(c.key_pressed(b' '), Some(ControllerMessage::TogglePause));
	assert_eq!(c.key_pressed(b's'), Some(ControllerMessage::FrameForward));
	assert_eq!(c.key_pressed(b'r'), Some(ControllerMessage::Reset));
	assert_eq!(c.key_pressed(b'q'), Some(ControllerMessage::Quit));
	assert_eq!(c.key_pressed(b'x'), None);
}

#[test]
fn right_press_during_drag_releases_point() {
	let mut c = controller();
	let offset = c.get_view().get_offset();
	let grab = V2::new(400., 300.);
	c.mouse_down(Button::Left, grab);
	c.mouse_move(V2::new(420., 300.));
	let pin = V2::new(100., 100.);
	assert_eq!(
		c.mouse_down(Button::Right, pin),
		vec![
			ControllerMessage::EndMove(V2::new(420., 300.) - offset),
			ControllerMessage::Pin(pin - offset),
		]
	);
	assert!(!c.is_pressed(Button::Left));
	assert!(c.is_pressed(Button::Right));
}

#[test]
fn right_press_during_drag_unselects_in_world() {
	use cloth::cloth::{Cloth, ClothConfig};
	use cloth::pworld::PWorld;

	let cloth = Cloth::new(ClothConfig::default().with_size(4, 4)).unwrap();
	let mut pworld = PWorld::default().with_paused().with_cloth(cloth);
	let mut c = controller();
	let target: V2 = pworld.snapshot()[0].particles[9].pos.into();
	for msg in c.mouse_down(Button::Left, c.get_view().w2s(target)) {
		pworld.handle_message(msg);
	}
	assert!(pworld.snapshot()[0].particles[9].selected);
	for msg in c.mouse_down(Button::Right, V2::new(0., 0.)) {
		pworld.handle_message(msg);
	}
	// left button released outside the window: nothing more is sent
	c.mouse_out();
	assert!(pworld.snapshot()[0].particles.iter().all(|p| !p.selected));
}
