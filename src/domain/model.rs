use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub forename: String,
    pub surname: String,
    pub age: u32,
}

impl Person {
    pub fn new(forename: impl Into<String>, surname: impl Into<String>, age: u32) -> Self {
        Self {
            forename: forename.into(),
            surname: surname.into(),
            age,
        }
    }

    /// Forename and surname joined by a single space.
    pub fn name(&self) -> String {
        match (self.forename.is_empty(), self.surname.is_empty()) {
            (false, false) => format!("{} {}", self.forename, self.surname),
            (false, true) => self.forename.clone(),
            _ => self.surname.clone(),
        }
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}
