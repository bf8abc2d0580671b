use super::{php_string_cast, ConfigStore, StoreError, StoreResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory store for tests.
///
/// By default values read back exactly as written. `MemoryStore::php()`
/// casts them the way the wp-config.php backend does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    writes: RefCell<Vec<(String, String)>>,
    php_cast: bool,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that reads `true` back as "1"
    pub fn php() -> Self {
        Self {
            php_cast: true,
            ..Self::default()
        }
    }

    /// A store whose `set` always fails
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }

    /// Every successful `set` in call order
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.borrow().clone()
    }
}

impl ConfigStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let values = self.values.borrow();
        Ok(values.get(key).map(|raw| {
            if self.php_cast {
                php_string_cast(raw)
            } else {
                raw.clone()
            }
        }))
    }

    fn set(&self, key: &str, raw_value: &str) -> StoreResult<()> {
        if self.read_only {
            return Err(StoreError::ReadOnly);
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), raw_value.to_string());
        self.writes
            .borrow_mut()
            .push((key.to_string(), raw_value.to_string()));
        Ok(())
    }
}
