//! Page-local display state.

/// Data a page shows, as of its last successful fetch.
///
/// `Empty -> Populated` on success, `Empty -> Failed` on error. A failure
/// never discards data that was already populated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState<T> {
    #[default]
    Empty,
    Populated(T),
    /// The fetch failed before any data arrived; renders like `Empty`.
    Failed,
}

impl<T> ViewState<T> {
    /// Replaces the held data wholesale.
    pub fn populate(&mut self, data: T) {
        *self = Self::Populated(data);
    }

    /// Records a failed fetch, keeping previously populated data.
    pub fn fail(&mut self) {
        if !matches!(self, Self::Populated(_)) {
            *self = Self::Failed;
        }
    }

    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Populated(data) => Some(data),
            Self::Empty | Self::Failed => None,
        }
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}
