//! Contact book state and transitions
//!
//! All mutable session state lives in [`ContactBook`]: the ordered contact
//! list, the form draft, the editing reference, the search term, and the
//! form overlay visibility. The public methods below are the only mutators,
//! so the state cells cannot drift out of step with each other.

use crate::core::contact::{Contact, ContactField};
use crate::error::{Result, RoloError};

/// What the form overlay is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Overlay hidden
    Closed,
    /// Overlay open, draft will be appended on submit
    Adding,
    /// Overlay open, draft will overwrite the contact at this index
    Editing(usize),
}

/// The in-memory contact book and its form/search session state
#[derive(Debug)]
pub struct ContactBook {
    /// Ordered contact list; display order is insertion order
    contacts: Vec<Contact>,
    /// Scratch record staged in the add/edit form
    draft: Contact,
    /// Index the draft will overwrite on submit; `None` means insert mode
    editing: Option<usize>,
    /// Whether the form overlay is shown
    popup_open: bool,
    /// Case-insensitive name filter, stored verbatim
    search_term: String,
}

impl ContactBook {
    /// Create a book from an initial roster
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            draft: Contact::default(),
            editing: None,
            popup_open: false,
            search_term: String::new(),
        }
    }

    /// The default startup roster
    pub fn with_seed_contacts() -> Self {
        Self::new(vec![
            Contact::new("John Doe", "123-456-7890", "Friend"),
            Contact::new("Jane Doe", "000-555-999", "Family"),
        ])
    }

    // ─────────────────────────────────────────────────────────────────────
    // Read access
    // ─────────────────────────────────────────────────────────────────────

    /// All contacts, unfiltered, in storage order
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// The draft currently staged in the form
    pub fn draft(&self) -> &Contact {
        &self.draft
    }

    /// Current search term, verbatim as entered
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Current form overlay state
    pub fn form_mode(&self) -> FormMode {
        if !self.popup_open {
            FormMode::Closed
        } else {
            match self.editing {
                Some(i) => FormMode::Editing(i),
                None => FormMode::Adding,
            }
        }
    }

    /// Whether the form overlay is visible
    pub fn is_popup_open(&self) -> bool {
        self.popup_open
    }

    /// Contacts whose name contains the search term case-insensitively,
    /// paired with their index into the *unfiltered* list.
    ///
    /// Edit and delete address storage positions, so the true index travels
    /// with each visible row. Filtering never mutates the list.
    pub fn filtered(&self) -> Vec<(usize, &Contact)> {
        let needle = self.search_term.to_lowercase();
        self.contacts
            .iter()
            .enumerate()
            .filter(|(_, c)| c.name.to_lowercase().contains(&needle))
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────

    /// Set one field of the draft, preserving the other two.
    ///
    /// No validation happens here; values are checked only on submit.
    pub fn set_draft_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.draft.name = value,
            ContactField::Phone => self.draft.phone = value,
            ContactField::Description => self.draft.description = value,
        }
    }

    /// Read one field of the draft
    pub fn draft_field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.draft.name,
            ContactField::Phone => &self.draft.phone,
            ContactField::Description => &self.draft.description,
        }
    }

    /// Commit the draft: overwrite the edited contact, or append a new one.
    ///
    /// Fails with [`RoloError::MissingRequiredFields`] when name or phone is
    /// empty; on failure nothing changes and the overlay stays open. On
    /// success the draft is reset, the editing reference cleared, and the
    /// overlay closed.
    pub fn submit_draft(&mut self) -> Result<()> {
        if !self.draft.has_required_fields() {
            return Err(RoloError::MissingRequiredFields);
        }

        let draft = std::mem::take(&mut self.draft);
        match self.editing.take() {
            Some(index) => {
                tracing::debug!(index, name = %draft.name, "updating contact");
                self.contacts[index] = draft;
            }
            None => {
                tracing::debug!(name = %draft.name, "adding contact");
                self.contacts.push(draft);
            }
        }
        self.popup_open = false;
        Ok(())
    }

    /// Remove the contact currently being edited and close the overlay.
    ///
    /// Only reachable from the edit form; when no editing reference is set
    /// this just closes the overlay, removing nothing.
    pub fn delete_current_edit(&mut self) {
        if let Some(index) = self.editing {
            tracing::debug!(index, "deleting contact");
            self.contacts.remove(index);
            self.editing = None;
        }
        self.close_popup();
    }

    /// Open the form overlay pre-filled with the contact at `index`.
    ///
    /// `index` addresses the unfiltered list; callers holding a filtered row
    /// must map it back through [`ContactBook::filtered`] first.
    pub fn open_for_edit(&mut self, index: usize) {
        self.draft = self.contacts[index].clone();
        self.editing = Some(index);
        self.popup_open = true;
    }

    /// Open the form overlay with an empty draft in insert mode
    pub fn open_for_add(&mut self) {
        self.draft = Contact::default();
        self.editing = None;
        self.popup_open = true;
    }

    /// Hide the form overlay.
    ///
    /// The draft and editing reference are left as-is; the next open or a
    /// successful submit resets them.
    pub fn close_popup(&mut self) {
        self.popup_open = false;
    }

    /// Replace the search term verbatim; comparison is case-insensitive at
    /// filter time, no trimming or normalization happens here.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }
}

impl Default for ContactBook {
    fn default() -> Self {
        Self::with_seed_contacts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(rows: &[(usize, &Contact)]) -> Vec<String> {
        rows.iter().map(|(_, c)| c.name.clone()).collect()
    }

    #[test]
    fn test_empty_search_returns_full_list_in_order() {
        let book = ContactBook::with_seed_contacts();
        let rows = book.filtered();
        assert_eq!(names(&rows), vec!["John Doe", "Jane Doe"]);
        assert_eq!(rows[0].0, 0);
        assert_eq!(rows[1].0, 1);
    }

    #[test]
    fn test_filter_is_case_insensitive_and_exclusive() {
        let mut book = ContactBook::with_seed_contacts();
        book.set_search_term("JANE");
        let rows = book.filtered();
        assert_eq!(names(&rows), vec!["Jane Doe"]);
        // Row carries the true storage index, not the filtered position
        assert_eq!(rows[0].0, 1);
        // Filtering never mutates the list
        assert_eq!(book.contacts().len(), 2);
    }

    #[test]
    fn test_filter_no_match_yields_empty_view() {
        let mut book = ContactBook::with_seed_contacts();
        book.set_search_term("zzz");
        assert!(book.filtered().is_empty());
        assert_eq!(book.contacts().len(), 2);
    }

    #[test]
    fn test_submit_without_phone_is_rejected() {
        let mut book = ContactBook::with_seed_contacts();
        book.open_for_add();
        book.set_draft_field(ContactField::Name, "Sam");

        let err = book.submit_draft().unwrap_err();
        assert!(matches!(err, RoloError::MissingRequiredFields));
        assert_eq!(err.to_string(), "Please fill the name and phone number.");

        // No state change: list untouched, overlay still open, draft kept
        assert_eq!(book.contacts().len(), 2);
        assert!(book.is_popup_open());
        assert_eq!(book.draft().name, "Sam");
    }

    #[test]
    fn test_submit_without_name_is_rejected() {
        let mut book = ContactBook::with_seed_contacts();
        book.open_for_add();
        book.set_draft_field(ContactField::Phone, "111");

        assert!(book.submit_draft().is_err());
        assert_eq!(book.contacts().len(), 2);
        assert!(book.is_popup_open());
    }

    #[test]
    fn test_submit_appends_in_insert_mode() {
        let mut book = ContactBook::with_seed_contacts();
        book.open_for_add();
        book.set_draft_field(ContactField::Name, "Sam");
        book.set_draft_field(ContactField::Phone, "111");

        book.submit_draft().unwrap();

        assert_eq!(book.contacts().len(), 3);
        assert_eq!(
            book.contacts().last().unwrap(),
            &Contact::new("Sam", "111", "")
        );
        assert!(!book.is_popup_open());
        assert_eq!(book.draft(), &Contact::default());
        assert_eq!(book.form_mode(), FormMode::Closed);
    }

    #[test]
    fn test_submit_overwrites_in_edit_mode() {
        let mut book = ContactBook::with_seed_contacts();
        book.open_for_edit(0);
        assert_eq!(book.form_mode(), FormMode::Editing(0));
        assert_eq!(book.draft().name, "John Doe");

        book.set_draft_field(ContactField::Phone, "999");
        book.submit_draft().unwrap();

        assert_eq!(book.contacts().len(), 2);
        assert_eq!(book.contacts()[0], Contact::new("John Doe", "999", "Friend"));
        // The other slot is untouched
        assert_eq!(
            book.contacts()[1],
            Contact::new("Jane Doe", "000-555-999", "Family")
        );
        assert!(!book.is_popup_open());
    }

    #[test]
    fn test_edit_is_full_overwrite_not_merge() {
        let mut book = ContactBook::with_seed_contacts();
        book.open_for_edit(1);
        book.set_draft_field(ContactField::Name, "Janet");
        book.set_draft_field(ContactField::Phone, "42");
        book.set_draft_field(ContactField::Description, "");

        book.submit_draft().unwrap();
        assert_eq!(book.contacts()[1], Contact::new("Janet", "42", ""));
    }

    #[test]
    fn test_delete_current_edit_removes_and_closes() {
        let mut book = ContactBook::with_seed_contacts();
        book.open_for_edit(0);
        book.delete_current_edit();

        assert_eq!(book.contacts().len(), 1);
        assert_eq!(
            book.contacts()[0],
            Contact::new("Jane Doe", "000-555-999", "Family")
        );
        assert!(!book.is_popup_open());
    }

    #[test]
    fn test_delete_preserves_relative_order() {
        let mut book = ContactBook::new(vec![
            Contact::new("A", "1", ""),
            Contact::new("B", "2", ""),
            Contact::new("C", "3", ""),
        ]);
        book.open_for_edit(1);
        book.delete_current_edit();

        let remaining: Vec<&str> = book.contacts().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(remaining, vec!["A", "C"]);
    }

    #[test]
    fn test_delete_without_editing_reference_is_a_noop() {
        let mut book = ContactBook::with_seed_contacts();
        book.open_for_add();
        book.delete_current_edit();

        assert_eq!(book.contacts().len(), 2);
        assert!(!book.is_popup_open());
    }

    #[test]
    fn test_open_for_add_resets_a_stale_draft() {
        let mut book = ContactBook::with_seed_contacts();
        book.open_for_edit(0);
        book.close_popup();
        // Cancel leaves draft/editing in place until the next open
        assert_eq!(book.draft().name, "John Doe");

        book.open_for_add();
        assert_eq!(book.draft(), &Contact::default());
        assert_eq!(book.form_mode(), FormMode::Adding);
    }

    #[test]
    fn test_search_term_is_stored_verbatim() {
        let mut book = ContactBook::with_seed_contacts();
        book.set_search_term("  JoHn ");
        assert_eq!(book.search_term(), "  JoHn ");
        // Leading spaces are part of the term, so nothing matches
        assert!(book.filtered().is_empty());
        book.set_search_term("JoHn");
        assert_eq!(names(&book.filtered()), vec!["John Doe"]);
    }

    #[test]
    fn test_structurally_identical_contacts_are_allowed() {
        let mut book = ContactBook::with_seed_contacts();
        for _ in 0..2 {
            book.open_for_add();
            book.set_draft_field(ContactField::Name, "Twin");
            book.set_draft_field(ContactField::Phone, "7");
            book.submit_draft().unwrap();
        }
        assert_eq!(book.contacts().len(), 4);
        assert_eq!(book.contacts()[2], book.contacts()[3]);
    }
}
