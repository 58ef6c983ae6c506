pub mod env;
pub mod simulated;
