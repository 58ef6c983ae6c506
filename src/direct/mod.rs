pub mod director;
pub mod juxtaposed;
pub mod stage;
pub mod superposed;
