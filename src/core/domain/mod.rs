//! Domain types.

mod env_spec;
mod matrix;
mod stages;
mod variables;

pub use env_spec::EnvSpec;
pub use matrix::{MatrixEntry, StageMatrix};
pub use stages::ActiveStages;
pub use variables::{Scope, Variables};
