//! Live title search over the rendered catalog

use std::sync::Arc;

use crate::{
    services::renderer::RenderedSet,
    view::{Presenter, SearchHandler},
};

/// Case-insensitive substring filter over the currently rendered entries.
///
/// Pure visibility toggling: it never re-fetches, and it holds no state of
/// its own beyond whatever the search box currently contains. A fresh render
/// replaces the rendered set and thereby resets the filter.
#[derive(Clone)]
pub struct SearchFilter {
    presenter: Arc<dyn Presenter>,
    rendered: RenderedSet,
}

impl SearchFilter {
    pub fn new(presenter: Arc<dyn Presenter>, rendered: RenderedSet) -> Self {
        Self { presenter, rendered }
    }

    /// Show each rendered unit iff its title contains the query; the empty
    /// query matches everything
    pub async fn apply(&self, query: &str) {
        let needle = query.to_lowercase();
        for card in self.rendered.read().await.iter() {
            let visible = card.title.to_lowercase().contains(&needle);
            self.presenter.set_visible(card.node, visible);
        }
    }

    /// Register the input-change handler with the presenter
    pub fn attach(&self) {
        let filter = self.clone();
        let handler: SearchHandler = Box::new(move |query| {
            let filter = filter.clone();
            let query = query.to_string();
            Box::pin(async move { filter.apply(&query).await })
        });
        self.presenter.on_search_input(handler);
    }
}
