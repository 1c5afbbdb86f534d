use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Personal details of an account holder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub bio: Option<String>,
    /// Stored image id.
    pub avatar: Option<Uuid>,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_first_and_last() {
        let person = Person {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            bio: None,
            avatar: None,
        };
        assert_eq!(person.full_name(), "Ada Lovelace");
    }
}
