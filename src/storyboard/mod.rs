pub mod builder;
pub mod step;
pub mod file;
