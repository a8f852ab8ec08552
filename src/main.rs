#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod cache;
mod config;
mod date;
mod error;
mod fetch;
mod menu;
mod parse;
mod render;
mod source;

use std::{sync::Arc, time::Duration};

use crate::{config::Config, render::Theme, source::Sources};

pub use error::{Error, Result};

#[cfg(all(target_env = "musl", target_pointer_width = "64"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// How often the loading screen is redrawn.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

#[tokio::main(flavor = "multi_thread")]
async fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let config = Config::from_env()?;
    log::debug!("{config:?}");

    let today = date::today(config.timezone());
    log::info!("Today is {today}");

    let store = Arc::new(config.store()?);
    match store.root() {
        Some(root) => log::info!("Caching menus in {}", root.display()),
        None => log::info!("Not caching menus"),
    }
    let sources = Sources::new(config.locations()?);
    let client = fetch::make_client()?;

    let loading = sources.start(&client, store, today);
    log::info!("Started {} of {} loads", loading.len(), sources.len());
    let waiting = tokio::spawn(loading.join());
    while !waiting.is_finished() {
        log::info!(
            "Loading... {} of {} locations ready",
            sources.settled_count(),
            sources.len()
        );
        tokio::time::sleep(POLL_INTERVAL).await;
    }
    waiting.await?;
    if !sources.all_settled() {
        log::warn!("Some locations were still loading after all loads finished");
    }

    let theme = Theme::default();
    let mut out = String::new();
    for source in sources.iter() {
        let snapshot = source.snapshot();
        if let Some(day) = snapshot.as_ref().and_then(|s| s.today(&today)) {
            log::debug!("{}: {} items today", source.location().id(), day.item_count());
        }
        render::render_tab(
            &mut out,
            source.location().name(),
            snapshot.as_ref(),
            &today,
            None,
            &theme,
        )?;
        out.push('\n');
    }
    print!("{out}");
    Ok(())
}
