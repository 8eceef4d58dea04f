//! Item storage (plain CRUD, no auth concerns).

use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wicket_core::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
}

pub trait ItemStore: Send + Sync {
    fn create(&self, name: String) -> Result<Item, DomainError>;
    fn list(&self) -> Result<Vec<Item>, DomainError>;
    fn update(&self, id: Uuid, name: String) -> Result<Item, DomainError>;
    fn delete(&self, id: Uuid) -> Result<(), DomainError>;
}

/// In-memory item store. Ids are v7 UUIDs, so sorting by id preserves
/// creation order.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    items: RwLock<HashMap<Uuid, Item>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ItemStore for InMemoryItemStore {
    fn create(&self, name: String) -> Result<Item, DomainError> {
        let mut items = self.items.write().map_err(|_| DomainError::internal("store lock poisoned"))?;

        let item = Item {
            id: Uuid::now_v7(),
            name,
        };
        items.insert(item.id, item.clone());
        Ok(item)
    }

    fn list(&self) -> Result<Vec<Item>, DomainError> {
        let items = self.items.read().map_err(|_| DomainError::internal("store lock poisoned"))?;

        let mut all: Vec<Item> = items.values().cloned().collect();
        all.sort_by_key(|item| item.id);
        Ok(all)
    }

    fn update(&self, id: Uuid, name: String) -> Result<Item, DomainError> {
        let mut items = self.items.write().map_err(|_| DomainError::internal("store lock poisoned"))?;

        let item = items.get_mut(&id).ok_or(DomainError::NotFound)?;
        item.name = name;
        Ok(item.clone())
    }

    fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let mut items = self.items.write().map_err(|_| DomainError::internal("store lock poisoned"))?;

        items.remove(&id).ok_or(DomainError::NotFound)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_list_update_delete() {
        let store = InMemoryItemStore::new();

        let first = store.create("hammer".to_string()).unwrap();
        let second = store.create("wrench".to_string()).unwrap();

        let all = store.list().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[1].id, second.id);

        let renamed = store.update(first.id, "sledgehammer".to_string()).unwrap();
        assert_eq!(renamed.name, "sledgehammer");

        store.delete(second.id).unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn update_and_delete_unknown_item_fail() {
        let store = InMemoryItemStore::new();
        let ghost = Uuid::now_v7();

        assert_eq!(
            store.update(ghost, "anything".to_string()),
            Err(DomainError::NotFound)
        );
        assert_eq!(store.delete(ghost), Err(DomainError::NotFound));
    }
}
