//! Output side: shaping aggregates into chart descriptions and printing them.

pub mod shape;
pub mod text;
