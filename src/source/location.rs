use url::Url;

use crate::Error;

/// A dining commons, ex. `segundo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    id: String,
    name: String,
    url: Url,
}

impl Location {
    /// The page lives at `base` joined with `id`, so `base` should end in `/`.
    pub fn new(id: &str, base: &Url) -> crate::Result<Self> {
        let id = id.trim();
        if id.is_empty() {
            return Err(Error::Config("location ids can't be empty".into()));
        }
        Ok(Self {
            id: id.to_owned(),
            name: id.to_uppercase(),
            url: base.join(id)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Shown until a menu with a real name has been loaded.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn url(&self) -> &Url {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        "https://housing.ucdavis.edu/dining/menus/dining-commons/"
            .parse()
            .unwrap()
    }

    #[test]
    fn test_new() {
        let location = Location::new("segundo", &base()).unwrap();
        assert_eq!(location.id(), "segundo");
        assert_eq!(location.name(), "SEGUNDO");
        assert_eq!(
            location.url().as_str(),
            "https://housing.ucdavis.edu/dining/menus/dining-commons/segundo"
        );
    }

    #[test]
    fn test_empty() {
        assert!(matches!(Location::new(" ", &base()), Err(Error::Config(_))));
    }
}
