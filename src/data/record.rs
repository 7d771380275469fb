//! The customer record type.

/// A single synthetic customer.
///
/// `search_text` concatenates the other fields with `|` at construction time,
/// so filtering is one substring scan per record instead of four field
/// comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Unique sequential id, starting at 1.
    pub id: u32,
    /// Customer display name.
    pub name: String,
    /// Customer email address.
    pub email: String,
    /// Customer age in years.
    pub age: u8,
    /// Precomputed `id|name|email|age` text the filter matches against.
    pub search_text: String,
}

impl Record {
    /// Create a record, precomputing its search text.
    pub fn new(id: u32, name: impl Into<String>, email: impl Into<String>, age: u8) -> Self {
        let name = name.into();
        let email = email.into();
        let search_text = format!("{}|{}|{}|{}", id, name, email, age);
        Self {
            id,
            name,
            email,
            age,
            search_text,
        }
    }

    /// Resolve a column key to this record's display text for that column.
    ///
    /// Returns `None` for a key that does not name a record field; the table
    /// renders that as a blank cell (caller misconfiguration, not an error).
    pub fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.to_string()),
            "name" => Some(self.name.clone()),
            "email" => Some(self.email.clone()),
            "age" => Some(self.age.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_text_joins_all_fields() {
        let record = Record::new(7, "Customer 7", "email7@user.com", 31);
        assert_eq!(record.search_text, "7|Customer 7|email7@user.com|31");
    }

    #[test]
    fn test_field_resolves_known_keys() {
        let record = Record::new(1, "Customer 1", "email1@user.com", 24);
        assert_eq!(record.field("id").as_deref(), Some("1"));
        assert_eq!(record.field("name").as_deref(), Some("Customer 1"));
        assert_eq!(record.field("email").as_deref(), Some("email1@user.com"));
        assert_eq!(record.field("age").as_deref(), Some("24"));
    }

    #[test]
    fn test_field_unknown_key_is_none() {
        let record = Record::new(1, "Customer 1", "email1@user.com", 24);
        assert_eq!(record.field("phone"), None);
    }
}
