pub mod edge_list;
pub mod error;

pub use edge_list::EdgeList;
pub use error::LoadError;
