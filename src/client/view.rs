/// Registry view-model
///
/// In-memory working copy of the worker list as the client shows it: the fetched
/// list sorted by first name, a filtered view, the search term, the pending form,
/// and the edit dialog target. Every row keeps the store's worker (and so its real
/// id) next to the cosmetic display id.

use crate::registry::{Worker, WorkerField, WorkerFields};
use std::cmp::Ordering;

/// Ordering of the list by first name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// A worker as displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerRow {
    /// On-screen numbering; not the store id
    pub display_id: i64,
    /// The record as returned by the store
    pub worker: Worker,
}

impl WorkerRow {
    fn matches(&self, term: &str) -> bool {
        self.worker.matches(term) || self.display_id.to_string() == term
    }
}

#[derive(Debug, Default)]
pub struct RegistryView {
    workers: Vec<WorkerRow>,
    filtered: Vec<WorkerRow>,
    sort: SortDirection,
    search_term: String,
    form: WorkerFields,
    selected: Option<Worker>,
    edit_open: bool,
}

impl RegistryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every fetched worker, sorted and relabeled
    pub fn workers(&self) -> &[WorkerRow] {
        &self.workers
    }

    /// What the table currently shows
    pub fn filtered(&self) -> &[WorkerRow] {
        &self.filtered
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn form(&self) -> &WorkerFields {
        &self.form
    }

    /// Worker targeted by the edit dialog
    pub fn selected(&self) -> Option<&Worker> {
        self.selected.as_ref()
    }

    pub fn is_edit_open(&self) -> bool {
        self.edit_open
    }

    /// Replace the list with a fresh fetch
    ///
    /// Sorts by first name in the active direction and numbers the rows 1..N in
    /// that order. The filtered view is recomputed against the current term.
    pub fn load(&mut self, mut workers: Vec<Worker>) {
        let sort = self.sort;
        workers.sort_by(|a, b| sort.apply(compare_names(&a.first_name, &b.first_name)));

        self.workers = workers
            .into_iter()
            .enumerate()
            .map(|(index, worker)| WorkerRow {
                display_id: index as i64 + 1,
                worker,
            })
            .collect();
        self.refilter();
    }

    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        self.sort = direction;
    }

    /// Filter-as-you-type over the in-memory list
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_lowercase();
        self.refilter();
    }

    /// Show a server search result as-is
    ///
    /// Rows are not relabeled: their display id is the store id.
    pub fn apply_search_results(&mut self, workers: Vec<Worker>) {
        self.filtered = workers
            .into_iter()
            .map(|worker| WorkerRow {
                display_id: worker.id,
                worker,
            })
            .collect();
    }

    /// Drop a worker locally after the store deleted it
    ///
    /// Store ids above the deleted one shift down by one, as they did in the store.
    /// Display ids of the remaining rows are left as they were until the next load.
    pub fn remove_worker(&mut self, worker_id: i64) {
        self.workers.retain(|row| row.worker.id != worker_id);
        for row in &mut self.workers {
            if row.worker.id > worker_id {
                row.worker.id -= 1;
            }
        }

        if self.selected.as_ref().is_some_and(|w| w.id == worker_id) {
            self.close_edit();
        } else if let Some(selected) = self.selected.as_mut() {
            if selected.id > worker_id {
                selected.id -= 1;
            }
        }
        self.refilter();
    }

    pub fn set_field(&mut self, field: WorkerField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn clear_form(&mut self) {
        self.form = WorkerFields::default();
    }

    /// Copy a worker into the form and open the edit dialog on it
    pub fn open_edit(&mut self, worker: &Worker) {
        self.form = worker.fields();
        self.selected = Some(worker.clone());
        self.edit_open = true;
    }

    pub fn close_edit(&mut self) {
        self.selected = None;
        self.edit_open = false;
    }

    fn refilter(&mut self) {
        let term = self.search_term.as_str();
        self.filtered = self
            .workers
            .iter()
            .filter(|row| row.matches(term))
            .cloned()
            .collect();
    }
}

/// Case-insensitive name order, ties broken by exact comparison
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worker(id: i64, first: &str, address: &str) -> Worker {
        Worker {
            id,
            first_name: first.to_string(),
            last_name: "Doe".to_string(),
            address: address.to_string(),
            phone_number: format!("555-010{}", id),
            worker_position: "Clerk".to_string(),
        }
    }

    fn sample() -> Vec<Worker> {
        vec![
            worker(1, "carl", "1 Pine"),
            worker(2, "Ann", "2 Oak"),
            worker(3, "Bob", "3 Elm"),
        ]
    }

    fn names(rows: &[WorkerRow]) -> Vec<&str> {
        rows.iter().map(|r| r.worker.first_name.as_str()).collect()
    }

    fn display_ids(rows: &[WorkerRow]) -> Vec<i64> {
        rows.iter().map(|r| r.display_id).collect()
    }

    #[test]
    fn load_sorts_by_first_name_and_relabels() {
        let mut view = RegistryView::new();
        view.load(sample());

        assert_eq!(names(view.workers()), vec!["Ann", "Bob", "carl"]);
        assert_eq!(display_ids(view.workers()), vec![1, 2, 3]);
        // Store ids survive relabeling
        assert_eq!(view.workers()[0].worker.id, 2);
        assert_eq!(view.filtered(), view.workers());
    }

    #[test]
    fn descending_reverses_order() {
        let mut view = RegistryView::new();
        view.set_sort_direction(SortDirection::Ascending.toggled());
        view.load(sample());

        assert_eq!(view.sort_direction(), SortDirection::Descending);
        assert_eq!(names(view.workers()), vec!["carl", "Bob", "Ann"]);
        assert_eq!(display_ids(view.workers()), vec![1, 2, 3]);
    }

    #[test]
    fn search_term_filters_across_fields() {
        let mut view = RegistryView::new();
        view.load(sample());

        view.set_search_term("OAK");
        assert_eq!(view.search_term(), "oak");
        assert_eq!(names(view.filtered()), vec!["Ann"]);

        view.set_search_term("clerk");
        assert_eq!(view.filtered().len(), 3);

        view.set_search_term("zzz");
        assert!(view.filtered().is_empty());

        view.set_search_term("");
        assert_eq!(view.filtered().len(), 3);
    }

    #[test]
    fn search_term_matches_display_id_exactly() {
        let mut view = RegistryView::new();
        view.load(vec![worker(9, "Bob", "Quay"), worker(7, "Ann", "Pier")]);

        view.set_search_term("2");
        assert_eq!(names(view.filtered()), vec!["Bob"]);
        assert_eq!(view.filtered()[0].worker.id, 9);
    }

    #[test]
    fn reload_keeps_active_filter() {
        let mut view = RegistryView::new();
        view.set_search_term("elm");
        view.load(sample());

        assert_eq!(names(view.filtered()), vec!["Bob"]);
    }

    #[test]
    fn server_results_keep_store_ids() {
        let mut view = RegistryView::new();
        view.load(sample());

        view.apply_search_results(vec![worker(3, "Bob", "3 Elm")]);

        assert_eq!(display_ids(view.filtered()), vec![3]);
        assert_eq!(view.workers().len(), 3);
    }

    #[test]
    fn remove_worker_does_not_renumber() {
        let mut view = RegistryView::new();
        view.load(sample());

        // "Ann" has store id 2 and display id 1
        view.remove_worker(2);

        assert_eq!(names(view.workers()), vec!["Bob", "carl"]);
        assert_eq!(display_ids(view.workers()), vec![2, 3]);
        assert_eq!(view.filtered(), view.workers());
    }

    #[test]
    fn remove_worker_shifts_higher_store_ids() {
        let mut view = RegistryView::new();
        view.load(sample());
        let bob = view.workers()[1].worker.clone();
        view.open_edit(&bob);

        // carl=1, Ann=2, Bob=3 in the store; deleting carl shifts Ann and Bob down
        view.remove_worker(1);

        let store_ids: Vec<i64> = view.workers().iter().map(|r| r.worker.id).collect();
        assert_eq!(names(view.workers()), vec!["Ann", "Bob"]);
        assert_eq!(store_ids, vec![1, 2]);
        assert_eq!(display_ids(view.workers()), vec![1, 2]);
        assert_eq!(view.selected().map(|w| w.id), Some(2));
        assert!(view.is_edit_open());
    }

    #[test]
    fn remove_selected_worker_closes_edit() {
        let mut view = RegistryView::new();
        view.load(sample());
        let ann = view.workers()[0].worker.clone();
        view.open_edit(&ann);

        view.remove_worker(ann.id);

        assert!(!view.is_edit_open());
        assert!(view.selected().is_none());
    }

    #[test]
    fn edit_dialog_copies_fields_and_closes() {
        let mut view = RegistryView::new();
        let target = worker(3, "Bob", "3 Elm");

        view.open_edit(&target);
        assert!(view.is_edit_open());
        assert_eq!(view.selected(), Some(&target));
        assert_eq!(view.form(), &target.fields());

        view.set_field(WorkerField::Address, "4 Ash");
        assert_eq!(view.form().address, "4 Ash");

        view.close_edit();
        assert!(!view.is_edit_open());
        assert!(view.selected().is_none());
    }
}
