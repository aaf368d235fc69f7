pub mod cloth;
pub mod controller_message;
pub mod error;
pub mod link;
pub mod physics;
pub mod point;
pub mod pworld;
pub mod time_manager;
pub mod vector;

pub type V2 = nalgebra::Vector2<f32>;
