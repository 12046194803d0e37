pub use self::kinematic::Kinematic;
pub use self::pipeline::Pipeline;

mod kinematic;
mod pipeline;
