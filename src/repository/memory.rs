//! Process-local dossier list.
//!
//! The store is owned by the composition root and handed to handlers as
//! `web::Data`. It is never synchronized with the relational database and is
//! lost on restart.

use std::collections::VecDeque;
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::{dossier::Dossier, types::DossierId};

/// Shared, newest-first list of dossiers.
#[derive(Clone, Debug, Default)]
pub struct DossierStore {
    inner: Arc<RwLock<VecDeque<Dossier>>>,
}

impl DossierStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record, most recently added first.
    pub fn get_all(&self) -> Vec<Dossier> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    /// First record carrying `id`, if any.
    pub fn get_by_id(&self, id: DossierId) -> Option<Dossier> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|dossier| dossier.id == id)
            .cloned()
    }

    /// Prepends `dossier`. Duplicated ids are kept.
    pub fn add(&self, dossier: Dossier) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push_front(dossier);
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::domain::dossier::DossierStatus;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 4, 1)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap()
    }

    fn dossier(id: i32, problem: &str) -> Dossier {
        Dossier {
            id: DossierId::new(id).unwrap(),
            vehicle_id: None,
            problem: problem.to_string(),
            status: DossierStatus::Pending,
            estimated_price: None,
            final_price: None,
            payment_status: None,
            scheduled_on: None,
            created_at: timestamp(),
        }
    }

    #[test]
    fn added_record_is_found_by_id() {
        let store = DossierStore::new();
        let d = dossier(1, "battery");
        store.add(d.clone());

        assert_eq!(store.get_by_id(d.id), Some(d));
        assert_eq!(store.get_by_id(DossierId::new(2).unwrap()), None);
    }

    #[test]
    fn records_are_returned_newest_first() {
        let store = DossierStore::new();
        for id in 1..=4 {
            store.add(dossier(id, "tyres"));
        }

        let ids: Vec<i32> = store.get_all().iter().map(|d| d.id.get()).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn duplicate_ids_are_kept_and_lookup_returns_latest() {
        let store = DossierStore::new();
        store.add(dossier(5, "first"));
        store.add(dossier(5, "second"));

        assert_eq!(store.len(), 2);
        let found = store.get_by_id(DossierId::new(5).unwrap()).unwrap();
        assert_eq!(found.problem, "second");
    }

    #[test]
    fn clones_share_the_same_list() {
        let store = DossierStore::new();
        let handle = store.clone();
        handle.add(dossier(1, "wipers"));

        assert!(!store.is_empty());
        assert_eq!(store.get_all()[0].problem, "wipers");
    }

    #[test]
    fn separate_stores_are_isolated() {
        let a = DossierStore::new();
        let b = DossierStore::new();
        a.add(dossier(1, "exhaust"));

        assert!(b.is_empty());
    }
}
