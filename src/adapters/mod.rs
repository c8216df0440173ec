// Adapters layer: concrete implementations of the domain ports.

pub mod file;
pub mod fixed;

pub use file::FileStore;
pub use fixed::FixedFetcher;
