//! Fetch-and-render lifecycle of the catalog pages.
//!
//! A view is mounted per request with an empty [`ViewState`], loads its data
//! with exactly one fetch and renders either the empty state or one keyed
//! card per entity.

use tera::Context;

pub mod card;
pub mod detail;
pub mod list;
pub mod nav;
pub mod state;

pub use detail::{DetailPage, EntityDetailView};
pub use list::{EntityListView, ListPage};
pub use nav::NavItem;
pub use state::ViewState;

use crate::views::nav::nav_links;

/// Presentation switches taken from the server configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    /// Show a notice when a page could not load its data. Off by default:
    /// a failed page silently renders its empty state.
    pub show_load_errors: bool,
}

/// Context shared by every page: navigation and the load-failure flag.
pub(crate) fn base_context(
    current: Option<NavItem>,
    options: RenderOptions,
    failed: bool,
) -> Context {
    let mut context = Context::new();
    context.insert("nav", &nav_links(current));
    context.insert("load_failed", &(options.show_load_errors && failed));
    context
}
