use std::fmt;

use serde::{Deserialize, Serialize};

/// A single address book entry.
///
/// The pair (`first_name`, `last_name`) is the lookup key. Keys compare as exact,
/// case-sensitive strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn new(first_name: &str, last_name: &str, phone: &str, email: &str) -> Self {
        Contact {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        }
    }

    pub fn has_key(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name == first_name && self.last_name == last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, Phone: {}, Email: {}",
            self.first_name, self.last_name, self.phone, self.email
        )
    }
}
