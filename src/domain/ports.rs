use crate::domain::model::Person;
use crate::utils::error::Result;
use std::path::Path;

/// Produces person records from some source.
pub trait Fetcher: Send + Sync {
    fn fetch(&self) -> Result<Person>;
}

/// Persists person records and reports how many bytes were written.
pub trait Storer: Send + Sync {
    fn save(&self, person: &Person) -> Result<usize>;

    fn save_to(&self, path: &Path, person: &Person) -> Result<usize>;
}
