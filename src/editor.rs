//! The actions behind the edit page: save, open for edit, delete.

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::client::SaveClient;
use crate::debounce::{Debouncer, DEFAULT_DELAY};
use crate::document::{Document, RowId};
use crate::error::{Error, Result};
use crate::location::PageLocation;
use crate::model::Mapping;
use crate::opener::Opener;
use crate::routes;

/// Id of the input holding the destination being edited.
pub const DESTINATION_FIELD: &str = "destination";

struct Page<D> {
    location: PageLocation,
    client: SaveClient,
    document: D,
}

impl<D: Document> Page<D> {
    fn current_mapping(&self) -> Result<Mapping> {
        let destination = self
            .document
            .value_of(DESTINATION_FIELD)
            .ok_or_else(|| Error::MissingField(DESTINATION_FIELD.to_owned()))?;
        Ok(Mapping::new(self.location.source(), destination))
    }

    async fn save_input(&self) -> Result<()> {
        let mapping = self.current_mapping()?;
        self.client.save(&mapping).await
    }
}

pub struct Editor<D, O> {
    page: Arc<Page<D>>,
    opener: O,
    changes: Debouncer<()>,
}

impl<D, O> Editor<D, O>
where
    D: Document + 'static,
    O: Opener,
{
    pub fn new(location: PageLocation, client: SaveClient, document: D, opener: O) -> Self {
        Self::with_delay(location, client, document, opener, DEFAULT_DELAY)
    }

    pub fn with_delay(
        location: PageLocation,
        client: SaveClient,
        document: D,
        opener: O,
        delay: Duration,
    ) -> Self {
        let page = Arc::new(Page {
            location,
            client,
            document,
        });

        let debounced = Arc::clone(&page);
        let changes = Debouncer::with_delay(delay, move |()| {
            let page = Arc::clone(&debounced);
            async move {
                if let Err(err) = page.save_input().await {
                    tracing::warn!(source = %page.location.source(), "save failed: {err}");
                }
            }
        });

        Self {
            page,
            opener,
            changes,
        }
    }

    pub fn location(&self) -> &PageLocation {
        &self.page.location
    }

    pub fn document(&self) -> &D {
        &self.page.document
    }

    /// Called on every edit of the destination field. The field is read and
    /// saved once it has been quiet for the debounce delay.
    pub fn process_change(&mut self) {
        self.changes.trigger(());
    }

    pub fn has_pending_change(&self) -> bool {
        self.changes.is_pending()
    }

    /// Waits until any debounced save has gone out.
    pub async fn settle(&mut self) {
        self.changes.settle().await;
    }

    /// Saves the destination field right away.
    pub async fn save_input(&self) -> Result<()> {
        self.page.save_input().await
    }

    /// Opens the edit page for `item` and returns its address.
    pub fn edit_item(&self, item: &str) -> Result<Url> {
        let url = routes::edit_url(&self.page.location.origin(), item)?;
        self.opener.open(&url)?;
        Ok(url)
    }

    /// Drops `row` from the page, then asks the service to forget `item`.
    pub async fn delete_item(&self, row: &RowId, item: &str) -> Result<()> {
        if !self.page.document.remove_row(row) {
            tracing::warn!(%row, item, "row to delete is not on the page");
        }
        self.page.client.save(&Mapping::removal(item)).await
    }
}
