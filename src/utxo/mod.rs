mod entity;
mod resolver;

pub use entity::*;
pub use resolver::*;
