use crate::pr_model::PrModel;

#[derive(Debug)]
pub enum UserEvent {
	Update(Vec<PrModel>, UpdateInfo),
}

#[derive(Debug, Clone, Default)]
pub struct UpdateInfo {
	// fraction of the frame budget spent in physics
	pub load: f32,
	pub steps: usize,
	pub particle_len: usize,
	pub link_len: usize,
}

impl UpdateInfo {
	pub fn from_models(models: &[PrModel], steps: usize, load: f32) -> Self {
		Self {
			load,
			steps,
			particle_len: models.iter().map(|m| m.particle_len()).sum(),
			link_len: models.iter().map(|m| m.link_len()).sum(),
		}
	}
}
