mod entity;
mod parser;

pub use entity::*;
pub use parser::*;
