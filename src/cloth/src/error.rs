use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
	InvalidDimensions { width: usize, height: usize },
	InvalidIterations,
	InvalidSpacing(f32),
	InvalidRestingDistance(f32),
	TearBelowRest { resting: f32, tear: f32 },
	InvalidSelectRadius(f32),
}

impl fmt::Display for ClothError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ClothError::InvalidDimensions { width, height } => {
				write!(f, "cloth must be at least 1x1, got {}x{}", width, height)
			}
			ClothError::InvalidIterations => {
				write!(f, "at least one relaxation iteration is required")
			}
			ClothError::InvalidSpacing(s) => {
				write!(f, "grid spacing must be positive, got {}", s)
			}
			ClothError::InvalidRestingDistance(d) => {
				write!(f, "resting distance must be positive, got {}", d)
			}
			ClothError::TearBelowRest { resting, tear } => write!(
				f,
				"tear distance {} must exceed resting distance {}",
				tear, resting
			),
			ClothError::InvalidSelectRadius(r) => {
				write!(f, "select radius must be positive, got {}", r)
			}
		}
	}
}

impl std::error::Error for ClothError {}
