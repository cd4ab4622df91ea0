//! Graph capabilities shared by all storages and consumed by the algorithms.

pub mod error;
pub mod marker;
pub mod weight;

mod create;
mod graph;

pub use create::*;
pub use error::*;
pub use graph::*;
pub use weight::Weight;
