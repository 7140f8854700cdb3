mod digraph;
pub use self::digraph::*;

#[cfg(test)]
pub use self::tests::*;
