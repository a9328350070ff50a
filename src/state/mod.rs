pub mod reveal;

pub use reveal::{IntersectionBinding, MapReveal, OneShot};
