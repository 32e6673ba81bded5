//! Contact record type

use serde::{Deserialize, Serialize};

/// A single contact book entry.
///
/// Contacts carry no identity field: a contact is identified by its position
/// in the book, and two structurally identical contacts may coexist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Display name
    pub name: String,
    /// Phone number, stored verbatim (no format enforced)
    pub phone: String,
    /// Free-form description ("Friend", "Work", ...)
    #[serde(default)]
    pub description: String,
}

impl Contact {
    /// Create a contact from its three fields
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            description: description.into(),
        }
    }

    /// Whether name and phone are both present.
    ///
    /// Description is optional; a submit is only valid when this holds.
    pub fn has_required_fields(&self) -> bool {
        !self.name.is_empty() && !self.phone.is_empty()
    }
}

/// The editable fields of a contact draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Phone,
    Description,
}

impl ContactField {
    /// Human-readable label for form rendering
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Phone => "Phone",
            ContactField::Description => "Description",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_labels() {
        assert_eq!(ContactField::Name.label(), "Name");
        assert_eq!(ContactField::Phone.label(), "Phone");
        assert_eq!(ContactField::Description.label(), "Description");
    }

    #[test]
    fn test_required_fields() {
        assert!(Contact::new("Sam", "111", "").has_required_fields());
        assert!(!Contact::new("", "111", "x").has_required_fields());
        assert!(!Contact::new("Sam", "", "x").has_required_fields());
        assert!(!Contact::default().has_required_fields());
    }
}
