pub mod animation;
pub mod dodger;
pub mod hazards;
pub mod player;
