//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod seed_file;

pub use seed_file::{read_seed_file, SeedFileError};
