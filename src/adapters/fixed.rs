use crate::domain::model::Person;
use crate::domain::ports::Fetcher;
use crate::utils::error::Result;

/// Hands out the same person on every call.
#[derive(Debug, Clone)]
pub struct FixedFetcher {
    person: Person,
}

impl FixedFetcher {
    pub fn new(person: Person) -> Self {
        Self { person }
    }
}

impl Fetcher for FixedFetcher {
    fn fetch(&self) -> Result<Person> {
        Ok(self.person.clone())
    }
}
