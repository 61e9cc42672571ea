//! Hello cube: a single flat-colored mesh drawn through one OpenGL pipeline,
//! spun every frame and nudged from the keyboard.

pub mod engine;
mod index;

pub use index::Program;
