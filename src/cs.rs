pub mod error;
pub mod graph;
pub mod randomized;
pub mod sort;

// Re-export all modules
pub use graph::*;
pub use randomized::*;
pub use sort::*;
