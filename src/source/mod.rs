mod location;
mod snapshot;
mod sources;

use std::sync::Arc;

use futures_locks::RwLock;
use reqwest::Client;
use tracing::instrument;

use crate::{cache::Store, date::Date, fetch};

pub use location::Location;
pub use snapshot::Snapshot;
pub use sources::{Loading, Sources};

/// One location and its latest [`Snapshot`].
///
/// A load holds the write lock from the cache read until the cache write, so
/// readers going through [`Source::snapshot`] see either the previous
/// snapshot or nothing at all while a load is running.
#[derive(Debug)]
pub struct Source {
    location: Location,
    state: RwLock<Snapshot>,
}

impl Source {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            state: RwLock::new(Snapshot::Idle),
        }
    }

    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// Never blocks; `None` means a load is in progress and the caller should
    /// try again later.
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.state.try_read().ok().map(|guard| Snapshot::clone(&guard))
    }

    /// Uses the cached menu if it has an entry for `today`, otherwise fetches
    /// the page and caches it. Cache problems only decide whether to fetch;
    /// a failed fetch is what ends up in the snapshot.
    #[instrument(skip_all, fields(dc = %self.location.id(), today = %today))]
    pub async fn load(&self, client: &Client, store: &Store, today: Date) -> Snapshot {
        let mut state = self.state.write().await;
        let id = self.location.id();

        log::info!("Fetching menu [{id}]");
        match store.load(id).await {
            Ok(cached) if cached.has_day(&today) => {
                log::info!("Using cached menu [{id}]");
                *state = Snapshot::Ready(Arc::new(cached));
                return Snapshot::clone(&state);
            }
            Ok(_) => log::info!("Ignoring stale cache [{id}]"),
            Err(e) => log::info!("Cache [{id}]: {e}"),
        }

        let menu = match fetch::fetch_menu(client, self.location.url()).await {
            Ok(menu) => Arc::new(menu),
            Err(e) => {
                log::warn!("Error fetching menu [{id}]: {e}");
                *state = Snapshot::Failed(e.to_string().into());
                return Snapshot::clone(&state);
            }
        };
        *state = Snapshot::Ready(Arc::clone(&menu));

        if let Err(e) = store.save(id, &menu).await {
            log::warn!("Error saving cache [{id}]: {e}");
        }
        Snapshot::clone(&state)
    }
}
