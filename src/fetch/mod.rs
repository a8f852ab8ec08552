use reqwest::Client;
use tracing::{instrument, Level};
use url::Url;

use crate::{menu::Menu, parse};

static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub fn make_client() -> crate::Result<Client> {
    Ok(Client::builder()
        .gzip(true)
        .user_agent(USER_AGENT)
        .build()?)
}

/// GETs the page, failing on transport errors and non-2xx statuses.
pub async fn menu_page(client: &Client, url: &Url) -> crate::Result<String> {
    log::info!("Visiting {url}");
    let start = std::time::Instant::now();
    let text = client
        .get(url.clone())
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    log::trace!("Got text of menu page in \t {:?}", start.elapsed());
    Ok(text)
}

#[instrument(skip(client, url), fields(url = %url), level = Level::DEBUG)]
pub async fn fetch_menu(client: &Client, url: &Url) -> crate::Result<Menu> {
    let html = menu_page(client, url).await?;
    Ok(parse::parse_menu(&html))
}
