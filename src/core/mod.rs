pub mod app;

pub use crate::domain::model::Person;
pub use crate::domain::ports::{Fetcher, Storer};
pub use crate::utils::error::Result;
