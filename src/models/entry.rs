//! Catalog entry model

use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    provider::Document,
};

/// One lendable item with its display metadata.
///
/// The id is opaque, provider-assigned and stable; entries are immutable
/// from this core's perspective and are fetched as a full snapshot on every
/// render cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub title: String,
    pub cover_url: String,
}

/// Fields for a catalog entry about to be created; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub title: String,
    pub cover_url: String,
}

/// Wire form of an entry's stored fields (the id lives on the document)
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntryFields {
    title: String,
    #[serde(default)]
    cover_url: String,
}

impl TryFrom<Document> for CatalogEntry {
    type Error = AppError;

    fn try_from(doc: Document) -> AppResult<Self> {
        let fields: EntryFields = serde_json::from_value(doc.fields)
            .map_err(|e| AppError::Fetch(format!("malformed catalog entry {}: {}", doc.id, e)))?;
        Ok(Self {
            id: doc.id,
            title: fields.title,
            cover_url: fields.cover_url,
        })
    }
}
