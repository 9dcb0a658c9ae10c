//! Persistence seam for leaderboard and settings.
//!
//! The core only defines the contract and an in-memory implementation; the
//! file-backed store lives in the binary crate.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("stored data is corrupt: {0}")]
    Corrupt(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Key-value style persistence of a single document
pub trait Store<T> {
    /// `Ok(None)` when nothing has been saved yet
    fn load(&self) -> Result<Option<T>, StoreError>;

    fn save(&self, value: &T) -> Result<(), StoreError>;
}

impl<T, S: Store<T> + ?Sized> Store<T> for &S {
    fn load(&self) -> Result<Option<T>, StoreError> {
        (**self).load()
    }

    fn save(&self, value: &T) -> Result<(), StoreError> {
        (**self).save(value)
    }
}

/// Volatile store. Clones share the same slot.
#[derive(Debug)]
pub struct MemoryStore<T> {
    slot: Rc<RefCell<Option<T>>>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
        }
    }

    pub fn with_value(value: T) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(value))),
        }
    }
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Store<T> for MemoryStore<T> {
    fn load(&self) -> Result<Option<T>, StoreError> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, value: &T) -> Result<(), StoreError> {
        *self.slot.borrow_mut() = Some(value.clone());
        Ok(())
    }
}
