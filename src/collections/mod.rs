//! Building blocks shared by graphs and algorithms.

mod set;
pub use self::set::*;
mod fixed_heap;
pub use self::fixed_heap::*;
mod linked_list;
pub use self::linked_list::*;
