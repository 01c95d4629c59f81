pub mod axe;
pub mod dodge;
pub mod runner;

pub use axe::AxeSession;
pub use dodge::DodgeSession;
pub use runner::RunnerSession;
