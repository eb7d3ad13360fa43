//! `EntityListView` - a page listing one entity collection.

use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::Entity;
use crate::domain::person::PersonRole;
use crate::source::SourceResult;
use crate::views::card::cards;
use crate::views::{NavItem, RenderOptions, ViewState, base_context};

/// Static description of a list page: what it fetches and how it renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListPage {
    /// Template holding the per-item renderer.
    pub template: &'static str,
    pub heading: &'static str,
    pub list_class: &'static str,
    pub nav: NavItem,
    /// Collection name used in log lines.
    pub resource: &'static str,
}

impl ListPage {
    pub const MOVIES: Self = Self {
        template: "main/index.html",
        heading: "Home Page",
        list_class: "movie-list",
        nav: NavItem::Home,
        resource: "movies",
    };

    #[must_use]
    pub const fn people(role: PersonRole) -> Self {
        match role {
            PersonRole::Actor => Self {
                template: "people/index.html",
                heading: "Actors Page",
                list_class: "actor-list",
                nav: NavItem::Actors,
                resource: "actors",
            },
            PersonRole::Director => Self {
                template: "people/index.html",
                heading: "Directors Page",
                list_class: "director-list",
                nav: NavItem::Directors,
                resource: "directors",
            },
        }
    }
}

#[derive(Debug)]
pub struct EntityListView<T> {
    page: ListPage,
    state: ViewState<Vec<T>>,
    requested: bool,
}

impl<T> EntityListView<T> {
    /// Mounts the view with an empty state. Nothing is fetched yet.
    #[must_use]
    pub const fn mount(page: ListPage) -> Self {
        Self {
            page,
            state: ViewState::Empty,
            requested: false,
        }
    }

    /// Awaits the page's single fetch and applies its result.
    ///
    /// A failure is logged and leaves the state without data. Calls after
    /// the first are ignored and the given future is never polled.
    pub async fn load<F>(&mut self, fetch: F)
    where
        F: Future<Output = SourceResult<Vec<T>>>,
    {
        if self.requested {
            log::debug!("{} already requested for this page", self.page.resource);
            return;
        }
        self.requested = true;

        match fetch.await {
            Ok(items) => {
                log::debug!("Loaded {} {}", items.len(), self.page.resource);
                self.state.populate(items);
            }
            Err(err) => {
                log::error!("Error fetching {}: {err}", self.page.resource);
                self.state.fail();
            }
        }
    }

    #[must_use]
    pub const fn page(&self) -> ListPage {
        self.page
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState<Vec<T>> {
        &self.state
    }

    /// Items to render; empty until a fetch succeeds.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.state.data().map(Vec::as_slice).unwrap_or_default()
    }
}

impl<T: Entity + Serialize> EntityListView<T> {
    #[must_use]
    pub fn context(&self, options: RenderOptions) -> Context {
        let mut context = base_context(Some(self.page.nav), options, self.state.is_failed());
        context.insert("heading", self.page.heading);
        context.insert("list_class", self.page.list_class);
        context.insert("cards", &cards(self.items()));
        context
    }

    /// Renders the page through its template.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is missing or fails to render.
    pub fn render(&self, tera: &Tera, options: RenderOptions) -> tera::Result<String> {
        tera.render(self.page.template, &self.context(options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::movie::MovieSummary;
    use crate::domain::types::EntityId;
    use crate::source::SourceError;

    fn movie(id: i64, title: &str) -> MovieSummary {
        MovieSummary {
            id: EntityId::new(id).expect("valid id"),
            title: title.to_string(),
        }
    }

    #[tokio::test]
    async fn success_populates_items() {
        let mut view = EntityListView::mount(ListPage::MOVIES);

        view.load(async { Ok(vec![movie(1, "Doctor Strange")]) }).await;

        assert_eq!(view.items().len(), 1);
        assert!(!view.state().is_failed());
    }

    #[tokio::test]
    async fn failure_leaves_empty_items() {
        let mut view = EntityListView::<MovieSummary>::mount(ListPage::MOVIES);

        view.load(async { Err(SourceError::Request("refused".to_string())) })
            .await;

        assert!(view.items().is_empty());
        assert!(view.state().is_failed());
    }

    #[tokio::test]
    async fn only_first_fetch_is_applied() {
        let mut view = EntityListView::mount(ListPage::MOVIES);

        view.load(async { Ok(vec![movie(1, "First")]) }).await;
        view.load(async { Ok(vec![movie(2, "Second"), movie(3, "Third")]) })
            .await;

        assert_eq!(view.items(), [movie(1, "First")]);
    }

    #[tokio::test]
    async fn context_carries_keyed_cards_and_page_labels() {
        let mut view = EntityListView::mount(ListPage::people(PersonRole::Director));
        view.load(async { Ok(vec![movie(4, "Sinister"), movie(8, "Arrival")]) })
            .await;

        let context = view.context(RenderOptions::default()).into_json();

        assert_eq!(context["heading"], "Directors Page");
        assert_eq!(context["list_class"], "director-list");
        assert_eq!(context["cards"][0]["key"], 4);
        assert_eq!(context["cards"][1]["key"], 8);
        assert_eq!(context["load_failed"], false);
    }

    #[tokio::test]
    async fn failure_flag_respects_render_options() {
        let mut view = EntityListView::<MovieSummary>::mount(ListPage::MOVIES);
        view.load(async { Err(SourceError::NotFound) }).await;

        let silent = view.context(RenderOptions::default()).into_json();
        let loud = view
            .context(RenderOptions {
                show_load_errors: true,
            })
            .into_json();

        assert_eq!(silent["load_failed"], false);
        assert_eq!(loud["load_failed"], true);
    }
}
