pub mod drawable;
pub mod trace;
