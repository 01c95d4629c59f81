pub mod collision;
pub mod movement;

pub use collision::aabb_overlap;
pub use movement::advance;
