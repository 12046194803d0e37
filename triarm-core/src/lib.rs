pub mod algorithm;

pub use self::angles::JointAngles;
pub use self::arm::Arm;
pub use self::error::KinematicError;

mod angles;
mod arm;
mod error;

pub use nalgebra;
