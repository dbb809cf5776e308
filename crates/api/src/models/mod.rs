pub mod component;
pub mod graph;
pub mod role;
pub mod security;

pub use component::*;
pub use graph::*;
pub use role::*;
pub use security::*;
