use crate::V2;

// separations below this are treated as coincident points
pub const EPSILON: f32 = 1e-6;

pub fn normalize_or_zero(v: V2) -> V2 {
	let l = v.magnitude();
	if l < EPSILON {
		V2::zeros()
	} else {
		v / l
	}
}
