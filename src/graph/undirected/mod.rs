mod ugraph;
pub use self::ugraph::*;

#[cfg(test)]
pub use self::tests::*;
