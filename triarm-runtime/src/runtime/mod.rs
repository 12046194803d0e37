mod component;
mod error;

pub use self::component::{Component, ComponentContext};
pub use self::error::Error;

pub type Result<T = ()> = std::result::Result<T, error::Error>;
