use url::Url;

use crate::error::Result;
use crate::routes::{self, EDIT_PREFIX};

/// The address of the page the editor is running on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    url: Url,
}

impl PageLocation {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    pub fn parse(input: &str) -> Result<Self> {
        Ok(Self::new(Url::parse(input)?))
    }

    /// Location of the edit page for `item` on the service at `base`.
    pub fn for_item(base: &Url, item: &str) -> Result<Self> {
        let origin = base.origin().ascii_serialization();
        Ok(Self::new(routes::edit_url(&origin, item)?))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// `<protocol>//<host>`; the port is only kept when it isn't the scheme default.
    pub fn origin(&self) -> String {
        self.url.origin().ascii_serialization()
    }

    /// The mapping source this page edits: the path with the first `/edit/` cut out.
    ///
    /// The path stays percent-encoded, matching what the browser hands out.
    pub fn source(&self) -> String {
        self.url.path().replacen(EDIT_PREFIX, "", 1)
    }
}
