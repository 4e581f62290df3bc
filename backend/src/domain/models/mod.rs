pub mod child;
pub mod child_collection;

pub use child::*;
pub use child_collection::ChildCollection;
