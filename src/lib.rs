pub mod persist;
pub mod state;
pub mod stats;
pub mod store;
