//! Testing infrastructure for sub integration tests.
//!
//! - `TestWorld`: declarative setup of a tool root with a `libexec` tree
//! - `fixtures`: small shell scripts exercising the script metadata contract

pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
