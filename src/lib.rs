//! Client side of the golinks redirect editor.

pub mod client;
pub mod config;
pub mod debounce;
pub mod document;
pub mod editor;
pub mod error;
pub mod import;
pub mod location;
pub mod model;
pub mod opener;
pub mod routes;

pub use client::SaveClient;
pub use config::Config;
pub use debounce::Debouncer;
pub use document::{Document, MemoryDocument, RowId};
pub use editor::{Editor, DESTINATION_FIELD};
pub use error::{Error, Result};
pub use location::PageLocation;
pub use model::Mapping;
pub use opener::{Opener, SystemOpener};
