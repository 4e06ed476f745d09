//! Contact store module
//!
//! Owns the in-memory contact sequence and the identifier counter.

mod contact;
mod error;

pub use contact::{Contact, ContactInput};
pub use error::StoreError;

use tokio::sync::RwLock;

/// Contacts in creation order plus the next identifier to hand out
#[derive(Debug)]
struct Inner {
    contacts: Vec<Contact>,
    next_id: u64,
}

/// In-memory contact store
///
/// Every operation runs under a single lock, so each one is atomic with
/// respect to the others. Identifiers start at 1 and are never reused.
#[derive(Debug)]
pub struct ContactStore {
    inner: RwLock<Inner>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                contacts: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// All contacts in creation order
    pub async fn list(&self) -> Vec<Contact> {
        self.inner.read().await.contacts.clone()
    }

    /// Number of stored contacts
    pub async fn len(&self) -> usize {
        self.inner.read().await.contacts.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.contacts.is_empty()
    }

    /// Create a contact from a complete input
    ///
    /// Fails without consuming an identifier when any field is missing.
    pub async fn create(&self, input: ContactInput) -> Result<Contact, StoreError> {
        let (name, email, phone) = input.into_required()?;

        let mut inner = self.inner.write().await;
        let id = inner.next_id.to_string();
        inner.next_id += 1;

        let contact = Contact {
            id,
            name,
            email,
            phone,
        };
        inner.contacts.push(contact.clone());
        drop(inner);

        Ok(contact)
    }

    /// Overwrite the provided fields of an existing contact
    pub async fn update(&self, id: &str, input: ContactInput) -> Result<Contact, StoreError> {
        let mut inner = self.inner.write().await;
        let contact = inner
            .contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        contact.apply(input);
        Ok(contact.clone())
    }

    /// Remove a contact, returning the removed record
    pub async fn delete(&self, id: &str) -> Result<Contact, StoreError> {
        let mut inner = self.inner.write().await;
        let index = inner
            .contacts
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        Ok(inner.contacts.remove(index))
    }
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, email: &str, phone: &str) -> ContactInput {
        ContactInput {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            phone: Some(phone.to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let store = ContactStore::new();
        let a = store.create(input("Ana", "ana@example.com", "555-0101")).await.unwrap();
        let b = store.create(input("Luis", "luis@example.com", "555-0102")).await.unwrap();

        assert_eq!(a.id, "1");
        assert_eq!(b.id, "2");
        assert_eq!(b.name, "Luis");
    }

    #[tokio::test]
    async fn test_create_missing_field_leaves_store_untouched() {
        let store = ContactStore::new();
        let incomplete = ContactInput {
            name: Some("Ana".to_string()),
            email: None,
            phone: Some(String::new()),
        };

        let err = store.create(incomplete).await.unwrap_err();
        assert_eq!(err, StoreError::MissingFields);
        assert!(store.is_empty().await);

        // The failed attempt must not burn an identifier
        let c = store.create(input("Ana", "ana@example.com", "555")).await.unwrap();
        assert_eq!(c.id, "1");
    }

    #[tokio::test]
    async fn test_list_preserves_creation_order() {
        let store = ContactStore::new();
        for i in 0..5 {
            store
                .create(input(&format!("c{i}"), "x@example.com", "1"))
                .await
                .unwrap();
        }

        let names: Vec<_> = store.list().await.into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["c0", "c1", "c2", "c3", "c4"]);
    }

    #[tokio::test]
    async fn test_update_keeps_fields_not_provided() {
        let store = ContactStore::new();
        store.create(input("Ana", "ana@example.com", "555")).await.unwrap();

        let patch = ContactInput {
            name: Some(String::new()),
            email: Some("ana@work.example".to_string()),
            phone: None,
        };
        let updated = store.update("1", patch).await.unwrap();

        assert_eq!(updated.id, "1");
        assert_eq!(updated.name, "Ana");
        assert_eq!(updated.email, "ana@work.example");
        assert_eq!(updated.phone, "555");
        assert_eq!(store.list().await, vec![updated]);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let store = ContactStore::new();
        store.create(input("Ana", "ana@example.com", "555")).await.unwrap();
        let before = store.list().await;

        let err = store.update("42", input("X", "Y", "Z")).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound("42".to_string()));
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let store = ContactStore::new();
        for name in ["a", "b", "c"] {
            store.create(input(name, "e", "p")).await.unwrap();
        }

        let removed = store.delete("2").await.unwrap();
        assert_eq!(removed.name, "b");
        assert_eq!(store.len().await, 2);

        let ids: Vec<_> = store.list().await.into_iter().map(|c| c.id).collect();
        assert_eq!(ids, ["1", "3"]);

        assert_eq!(
            store.delete("2").await.unwrap_err(),
            StoreError::NotFound("2".to_string())
        );
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = ContactStore::new();
        store.create(input("a", "e", "p")).await.unwrap();
        store.create(input("b", "e", "p")).await.unwrap();
        store.delete("2").await.unwrap();

        let c = store.create(input("c", "e", "p")).await.unwrap();
        assert_eq!(c.id, "3");
    }
}
