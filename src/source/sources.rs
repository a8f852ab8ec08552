use std::sync::Arc;

use reqwest::Client;
use tokio::task::JoinSet;

use super::{Location, Source};
use crate::{cache::Store, date::Date};

/// Every configured location, in display order.
#[derive(Debug, Default)]
pub struct Sources(Vec<Arc<Source>>);

impl Sources {
    pub fn new(locations: impl IntoIterator<Item = Location>) -> Self {
        Self(
            locations
                .into_iter()
                .map(|location| Arc::new(Source::new(location)))
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &Source> {
        self.0.iter().map(AsRef::as_ref)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Starts one independent load per location.
    pub fn start(&self, client: &Client, store: Arc<Store>, today: Date) -> Loading {
        let mut tasks = JoinSet::new();
        for source in &self.0 {
            let source = Arc::clone(source);
            let client = client.clone();
            let store = Arc::clone(&store);
            tasks.spawn(async move {
                source.load(&client, &store, today).await;
            });
        }
        Loading(tasks)
    }

    /// Locations that have finished at least one load and aren't mid-load.
    pub fn settled_count(&self) -> usize {
        self.iter()
            .filter(|source| source.snapshot().is_some_and(|s| s.is_settled()))
            .count()
    }

    pub fn all_settled(&self) -> bool {
        self.settled_count() == self.len()
    }
}

/// The loads started by [`Sources::start`].
#[derive(Debug)]
#[must_use = "dropping the handle aborts the loads"]
pub struct Loading(JoinSet<()>);

impl Loading {
    /// Waits for every load. A load that panicked is logged and the rest
    /// still run to completion.
    pub async fn join(mut self) {
        while let Some(res) = self.0.join_next().await {
            if let Err(e) = res {
                log::error!("Menu load task failed: {e}");
            }
        }
    }

    /// Loads that haven't been reaped by [`Loading::join`] yet.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
