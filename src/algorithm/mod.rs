//! Graph algorithms
mod traverse;
pub use self::traverse::*;
mod toposort;
pub use self::toposort::*;
mod cycle;
pub use self::cycle::*;
mod shortest_path;
pub use self::shortest_path::*;
mod spanning_tree;
pub use self::spanning_tree::*;
mod components;
pub use self::components::*;
