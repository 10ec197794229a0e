//! Storage primitive shared by the in-memory repositories.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::errors::{DomainError, DomainResult};

/// Rows keyed by id, with an id sequence and a failure switch for tests
pub(crate) struct InMemoryTable<T> {
    rows: RwLock<BTreeMap<i64, T>>,
    sequence: AtomicI64,
    should_fail: AtomicBool,
}

impl<T> InMemoryTable<T> {
    pub(crate) fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            sequence: AtomicI64::new(0),
            should_fail: AtomicBool::new(false),
        }
    }

    /// Next identifier, starting at 1
    pub(crate) fn next_id(&self) -> i64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub(crate) fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    fn check(&self) -> DomainResult<()> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::internal("In-memory store unavailable"));
        }
        Ok(())
    }

    pub(crate) async fn read(&self) -> DomainResult<RwLockReadGuard<'_, BTreeMap<i64, T>>> {
        self.check()?;
        Ok(self.rows.read().await)
    }

    pub(crate) async fn write(&self) -> DomainResult<RwLockWriteGuard<'_, BTreeMap<i64, T>>> {
        self.check()?;
        Ok(self.rows.write().await)
    }
}
