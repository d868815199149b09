//! Record-list state for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dashboard, result and review pages all render from this list. The order is
//! newest-first; local mutations keep that order until the follow-up refetch
//! replaces the list with the API's view.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

use assessments::Assessment;

#[derive(Clone, Debug, Default)]
pub struct DataState {
    pub records: Vec<Assessment>,
    pub loading: bool,
    /// True once a fetch has completed for the current session.
    pub loaded: bool,
    pub error: Option<String>,
}

impl DataState {
    /// Replace the list with a fresh fetch, sorting newest-first.
    pub fn replace_all(&mut self, mut records: Vec<Assessment>) {
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        self.records = records;
        self.loading = false;
        self.loaded = true;
        self.error = None;
    }

    /// Add a just-created record at the front.
    pub fn insert(&mut self, record: Assessment) {
        self.records.retain(|r| r.id != record.id);
        self.records.insert(0, record);
    }

    /// Swap in an edited record, keeping its position. Returns false when the
    /// id is not in the list.
    pub fn update(&mut self, record: Assessment) -> bool {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Drop the record with `id`. Returns false when nothing matched.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    pub fn start_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Forget everything, e.g. on sign-out.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Assessment> {
        assessments::stats::latest(&self.records)
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Assessment> {
        self.records.iter().find(|r| r.id == id)
    }
}
