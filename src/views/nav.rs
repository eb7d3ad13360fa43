//! Navigation bar shared by every page.

use serde::Serialize;

/// Top-level pages reachable from the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Actors,
    Directors,
}

const NAV_ITEMS: [(NavItem, &str, &str); 3] = [
    (NavItem::Home, "/", "Home"),
    (NavItem::Actors, "/actors", "Actors"),
    (NavItem::Directors, "/directors", "Directors"),
];

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Builds the navigation links, marking `current` as active.
#[must_use]
pub fn nav_links(current: Option<NavItem>) -> Vec<NavLink> {
    NAV_ITEMS
        .iter()
        .map(|&(item, href, label)| NavLink {
            href,
            label,
            active: current == Some(item),
        })
        .collect()
}
