//! `EntityDetailView` - a page showing one entity picked by the route id.

use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::Entity;
use crate::domain::types::EntityId;
use crate::source::SourceResult;
use crate::views::card::labels;
use crate::views::{RenderOptions, ViewState, base_context};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetailPage {
    pub template: &'static str,
    /// Entity name used in log lines.
    pub resource: &'static str,
}

impl DetailPage {
    pub const MOVIE: Self = Self {
        template: "movie/show.html",
        resource: "movie",
    };
}

#[derive(Debug)]
pub struct EntityDetailView<T> {
    page: DetailPage,
    id: Option<EntityId>,
    state: ViewState<T>,
    requested: bool,
}

impl<T> EntityDetailView<T> {
    /// Mounts the view for the raw route segment.
    ///
    /// An id that is not a positive number is never fetched and the page
    /// renders without an entity.
    #[must_use]
    pub fn mount(page: DetailPage, raw_id: &str) -> Self {
        let id = match raw_id.parse::<EntityId>() {
            Ok(id) => Some(id),
            Err(err) => {
                log::warn!("Ignoring {} id {raw_id:?}: {err}", page.resource);
                None
            }
        };

        Self {
            page,
            id,
            state: ViewState::Empty,
            requested: false,
        }
    }

    /// Runs the single fetch for the mounted id and applies its result.
    pub async fn load<F, Fut>(&mut self, fetch: F)
    where
        F: FnOnce(EntityId) -> Fut,
        Fut: Future<Output = SourceResult<T>>,
    {
        let Some(id) = self.id else {
            return;
        };
        if self.requested {
            log::debug!("{} {id} already requested for this page", self.page.resource);
            return;
        }
        self.requested = true;

        match fetch(id).await {
            Ok(entity) => {
                log::debug!("Loaded {} {id}", self.page.resource);
                self.state.populate(entity);
            }
            Err(err) => {
                log::error!("Error fetching {} {id}: {err}", self.page.resource);
                self.state.fail();
            }
        }
    }

    #[must_use]
    pub const fn id(&self) -> Option<EntityId> {
        self.id
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState<T> {
        &self.state
    }

    #[must_use]
    pub const fn entity(&self) -> Option<&T> {
        self.state.data()
    }
}

impl<T: Entity + Serialize> EntityDetailView<T> {
    #[must_use]
    pub fn context(&self, options: RenderOptions) -> Context {
        let mut context = base_context(None, options, self.state.is_failed());
        let entity = self.entity();
        context.insert("entity", &entity);
        context.insert("labels", &entity.map(|e| labels(e.labels())).unwrap_or_default());
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
