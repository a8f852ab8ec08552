//! Startup configuration, read once from the environment.
//!
//! | variable            | default                                                    |
//! |---------------------|------------------------------------------------------------|
//! | `DC_MENU_TIMEZONE`  | `America/Los_Angeles`                                      |
//! | `DC_MENU_BASE_URL`  | `https://housing.ucdavis.edu/dining/menus/dining-commons/` |
//! | `DC_MENU_LOCATIONS` | `segundo,cuarto,tercero,latitude`                          |
//! | `DC_MENU_APP_ID`    | unset                                                      |
//! | `CACHE`             | platform cache dir; `:memory:` disables the cache          |
use std::{env, path::PathBuf};

use chrono_tz::Tz;
use url::Url;

use crate::{
    cache::{self, Store},
    date,
    source::Location,
};

pub const DEFAULT_TIMEZONE: &str = "America/Los_Angeles";
pub const DEFAULT_BASE_URL: &str = "https://housing.ucdavis.edu/dining/menus/dining-commons/";
pub const DEFAULT_LOCATIONS: [&str; 4] = ["segundo", "cuarto", "tercero", "latitude"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheSetting {
    Platform,
    Memory,
    Dir(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub timezone: String,
    pub base_url: Url,
    pub locations: Vec<String>,
    pub cache: CacheSetting,
    pub app_id: Option<String>,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> crate::Result<Self> {
        let timezone = lookup("DC_MENU_TIMEZONE").unwrap_or_else(|| DEFAULT_TIMEZONE.to_owned());

        let mut base = lookup("DC_MENU_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        let locations = lookup("DC_MENU_LOCATIONS").map_or_else(
            || DEFAULT_LOCATIONS.map(str::to_owned).to_vec(),
            |ids| {
                ids.split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(str::to_owned)
                    .collect()
            },
        );

        let cache = match lookup("CACHE").as_deref() {
            Some(":memory:") => CacheSetting::Memory,
            Some("") | None => CacheSetting::Platform,
            Some(p) => CacheSetting::Dir(p.into()),
        };

        Ok(Self {
            timezone,
            base_url,
            locations,
            cache,
            app_id: lookup("DC_MENU_APP_ID").filter(|id| !id.is_empty()),
        })
    }

    pub fn timezone(&self) -> Tz {
        date::timezone(&self.timezone)
    }

    pub fn store(&self) -> crate::Result<Store> {
        Ok(match &self.cache {
            CacheSetting::Memory => Store::AdHoc,
            CacheSetting::Dir(p) => Store::local(p),
            CacheSetting::Platform => Store::local(cache::cache_root(self.app_id.as_deref())?),
        })
    }

    pub fn locations(&self) -> crate::Result<Vec<Location>> {
        self.locations
            .iter()
            .map(|id| Location::new(id, &self.base_url))
            .collect()
    }
}
