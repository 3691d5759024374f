pub mod analyzer;
pub mod result;
