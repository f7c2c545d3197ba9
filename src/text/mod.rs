//! Pasted verification text handling.

pub mod lines;
pub mod normalize;

pub use lines::split_lines;
pub use normalize::normalize;
