use crate::V2;

#[derive(Debug, Clone, PartialEq)]
pub enum ControllerMessage {
	TogglePause,
	FrameForward,
	// positions are in cloth-local space
	BeginMove(V2),
	Move(V2),
	EndMove(V2),
	Pin(V2),
	Reset,
	Quit,
}
