pub mod batch;
pub mod sink;
