use std::sync::Arc;

use crate::{
    date::Date,
    menu::{DailyMenu, Menu},
};

/// What a location looked like after its last load. Cheap to clone, never
/// mutated once published.
#[derive(Debug, Clone, Default)]
pub enum Snapshot {
    /// No load has finished yet.
    #[default]
    Idle,
    Ready(Arc<Menu>),
    Failed(Arc<str>),
}

impl Snapshot {
    pub fn menu(&self) -> Option<&Menu> {
        match self {
            Self::Ready(menu) => Some(menu.as_ref()),
            Self::Idle | Self::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(e) => Some(e.as_ref()),
            Self::Idle | Self::Ready(_) => None,
        }
    }

    /// `None` when the load failed or the page had nothing for `date`.
    pub fn today(&self, date: &Date) -> Option<&DailyMenu> {
        self.menu().and_then(|menu| menu.day(date))
    }

    pub const fn is_settled(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
