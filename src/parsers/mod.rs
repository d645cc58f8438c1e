pub mod common;
pub mod treesitter;

pub use common::is_java_source;
pub use treesitter::JavaParser;
