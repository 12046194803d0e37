pub use self::input::ScreenProjection;
pub use self::state::ArmState;
pub use self::target::Target;

mod input;
mod state;
mod target;
