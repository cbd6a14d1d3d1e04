//! Data synchronization and alert lifecycle engine for the siemdash
//! dashboard.
//!
//! The engine periodically pulls statistics and alerts from a
//! [`DashboardSource`](siemdash_client::DashboardSource), reconciles
//! partial or missing responses against a synthetic fallback dataset,
//! and publishes consolidated [`DashboardSnapshot`]s for presentation
//! collaborators. Alert resolution is optimistic: the local state
//! transitions whether or not the backend acknowledged the mutation.
//!
//! [`DashboardSnapshot`]: siemdash_common::types::DashboardSnapshot

pub mod controller;
pub mod defaults;
pub mod reconcile;
pub mod scheduler;
pub mod store;


use std::sync::{Mutex, MutexGuard};
use store::AlertStore;

/// Lock the shared alert store, recovering from poisoning. Store
/// mutations are whole-operation atomic; a panic mid-hold cannot leave
/// a half-applied seed or resolve behind.
pub(crate) fn lock_store(store: &Mutex<AlertStore>) -> MutexGuard<'_, AlertStore> {
    store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
