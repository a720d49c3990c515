use std::sync::{Mutex, MutexGuard};

use crate::models::{Case, Donation, Mosque, User};

/// Process-wide in-memory state. Everything lives in plain vectors behind
/// one mutex per collection; restarting the server resets all of it.
#[derive(Default)]
pub struct MockStore {
    users: Mutex<Vec<User>>,
    cases: Mutex<Vec<Case>>,
    donations: Mutex<Vec<Donation>>,
    mosques: Mutex<Vec<Mosque>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> MutexGuard<'_, Vec<User>> {
        self.users.lock().unwrap()
    }

    pub fn cases(&self) -> MutexGuard<'_, Vec<Case>> {
        self.cases.lock().unwrap()
    }

    pub fn donations(&self) -> MutexGuard<'_, Vec<Donation>> {
        self.donations.lock().unwrap()
    }

    pub fn mosques(&self) -> MutexGuard<'_, Vec<Mosque>> {
        self.mosques.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn collections_start_empty_and_hold_inserts() {
        let store = MockStore::new();
        assert!(store.users().is_empty());
        assert!(store.cases().is_empty());
        assert!(store.donations().is_empty());
        assert!(store.mosques().is_empty());

        let case = Case::create(serde_json::from_value(json!({ "title": "x" })).unwrap());
        let id = case.id.clone();
        store.cases().push(case);

        let cases = store.cases();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].id, id);
    }
}
