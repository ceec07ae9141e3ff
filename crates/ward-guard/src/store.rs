//! Storage abstraction and in-memory store.
//!
//! The store is the transaction boundary for the rotation protocol:
//! [`GuardStore::update`] must run its closure with exclusive access to
//! the principal's record and must discard the closure's mutations when it
//! returns an error. That contract is what turns the read-validate-rotate
//! sequence into an atomic step and makes replayed codes impossible even
//! under racing calls.

use crate::record::PrincipalRecord;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use ward_core::{Address, Result};

/// Keyed persistence for principal records.
pub trait GuardStore: Send + Sync {
    /// Read a principal's record, if one exists.
    fn load(&self, principal: &Address) -> Result<Option<PrincipalRecord>>;

    /// Run `op` atomically against the principal's record slot.
    ///
    /// The slot is `None` until the first successful mutation creates a
    /// record. If `op` returns an error, the stored state is unchanged,
    /// regardless of what `op` did to the working copy.
    fn update<T>(
        &self,
        principal: &Address,
        op: impl FnOnce(&mut Option<PrincipalRecord>) -> Result<T>,
    ) -> Result<T>;
}

/// In-memory store backed by a mutex-guarded map.
///
/// One mutex serializes all principals, which trivially satisfies the
/// per-principal exclusivity contract; a sharded or per-key scheme would
/// satisfy it equally. Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct MemoryGuardStore {
    records: Arc<Mutex<HashMap<Address, PrincipalRecord>>>,
}

impl MemoryGuardStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl GuardStore for MemoryGuardStore {
    fn load(&self, principal: &Address) -> Result<Option<PrincipalRecord>> {
        Ok(self.records.lock().get(principal).cloned())
    }

    fn update<T>(
        &self,
        principal: &Address,
        op: impl FnOnce(&mut Option<PrincipalRecord>) -> Result<T>,
    ) -> Result<T> {
        let mut records = self.records.lock();
        let mut working = records.get(principal).cloned();
        let value = op(&mut working)?;
        match working {
            Some(record) => {
                records.insert(*principal, record);
            }
            None => {
                records.remove(principal);
            }
        }
        Ok(value)
    }
}
