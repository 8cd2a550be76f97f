/// Registry client session
///
/// Drives a `RegistryView` from user actions: each mutating action calls the
/// API, then re-synchronizes the view. Failures are logged and returned; the view
/// keeps whatever state it had before the failing call.

use crate::{
    client::{
        api::WorkerApi,
        view::{RegistryView, SortDirection},
        ClientError,
    },
    registry::{Worker, WorkerField},
};

pub struct RegistryClient {
    api: WorkerApi,
    view: RegistryView,
}

impl RegistryClient {
    pub fn new(api: WorkerApi) -> Self {
        Self {
            api,
            view: RegistryView::new(),
        }
    }

    pub fn view(&self) -> &RegistryView {
        &self.view
    }

    pub fn api(&self) -> &WorkerApi {
        &self.api
    }

    /// Fetch the full list and reload the view from it
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let workers = self
            .api
            .get_all_workers()
            .await
            .inspect_err(|e| tracing::error!("Error fetching workers: {}", e))?;

        tracing::debug!("Fetched {} workers", workers.len());
        self.view.load(workers);
        Ok(())
    }

    /// Change the sort direction and re-fetch
    pub async fn set_sort_direction(&mut self, direction: SortDirection) -> Result<(), ClientError> {
        self.view.set_sort_direction(direction);
        self.refresh().await
    }

    pub async fn toggle_sort(&mut self) -> Result<(), ClientError> {
        let direction = self.view.sort_direction().toggled();
        self.set_sort_direction(direction).await
    }

    /// Keystroke in the search box: filter the local list
    pub fn set_search_term(&mut self, term: &str) {
        self.view.set_search_term(term);
    }

    /// Explicit search submission: ask the server and show its answer
    pub async fn submit_search(&mut self) -> Result<(), ClientError> {
        let workers = self
            .api
            .search_workers(self.view.search_term())
            .await
            .inspect_err(|e| tracing::error!("Error searching workers: {}", e))?;

        self.view.apply_search_results(workers);
        Ok(())
    }

    pub fn set_field(&mut self, field: WorkerField, value: impl Into<String>) {
        self.view.set_field(field, value);
    }

    /// Create a worker from the form, clear the form, and re-fetch
    pub async fn submit_new_worker(&mut self) -> Result<Worker, ClientError> {
        let worker = self
            .api
            .add_worker(self.view.form())
            .await
            .inspect_err(|e| tracing::error!("Error adding worker: {}", e))?;

        tracing::info!("Added worker {}", worker.id);
        self.view.clear_form();
        self.refresh().await?;
        Ok(worker)
    }

    /// Delete by store id and drop the row locally without re-fetching
    pub async fn delete_worker(&mut self, worker_id: i64) -> Result<(), ClientError> {
        self.api
            .delete_worker(worker_id)
            .await
            .inspect_err(|e| tracing::error!("Error deleting worker: {}", e))?;

        self.view.remove_worker(worker_id);
        Ok(())
    }

    pub fn open_edit(&mut self, worker: &Worker) {
        self.view.open_edit(worker);
    }

    pub fn close_edit(&mut self) {
        self.view.close_edit();
    }

    /// Send the form as an update for the selected worker, close, and re-fetch
    ///
    /// Returns `None` when no worker is selected.
    pub async fn submit_edit(&mut self) -> Result<Option<Worker>, ClientError> {
        let Some(selected) = self.view.selected() else {
            return Ok(None);
        };

        let worker = self
            .api
            .update_worker(selected.id, self.view.form())
            .await
            .inspect_err(|e| tracing::error!("Error updating worker: {}", e))?;

        tracing::info!("Updated worker {}", worker.id);
        self.view.close_edit();
        self.refresh().await?;
        Ok(Some(worker))
    }
}
