//! Page identifiers and their canonical paths.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Top-level page used for navigation highlight and menu state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

/// Menu order shared by the navbar, mobile menu and footer.
pub const NAVIGATION_ORDER: [PageId; 4] = [
    PageId::Home,
    PageId::About,
    PageId::Projects,
    PageId::Contact,
];

impl PageId {
    /// Stable identifier exchanged with menus and buttons.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Route path this page lives at.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Projects => "/projects",
            Self::Contact => "/contact",
        }
    }

    /// Parses a page identifier. Exact match after trimming.
    pub fn parse(value: &str) -> Option<Self> {
        NAVIGATION_ORDER
            .into_iter()
            .find(|page| page.as_str() == value.trim())
    }

    /// Parses a page identifier, degrading unknown values to `Home`.
    pub fn parse_or_home(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }
}

impl Display for PageId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target path for a raw page identifier; unknown identifiers map to `/`.
pub fn path_for_page_id(page_id: &str) -> &'static str {
    PageId::parse_or_home(page_id).path()
}

#[cfg(test)]
mod tests {
    use super::{path_for_page_id, PageId, NAVIGATION_ORDER};

    #[test]
    fn page_ids_map_to_table_paths() {
        assert_eq!(path_for_page_id("home"), "/");
        assert_eq!(path_for_page_id("projects"), "/projects");
        assert_eq!(path_for_page_id("about"), "/about");
        assert_eq!(path_for_page_id("contact"), "/contact");
    }

    #[test]
    fn unknown_ids_degrade_to_root() {
        assert_eq!(path_for_page_id("experiments"), "/");
        assert_eq!(path_for_page_id(""), "/");
        assert_eq!(path_for_page_id("About"), "/");
        assert_eq!(PageId::parse_or_home("nope"), PageId::Home);
    }

    #[test]
    fn menu_order_is_home_about_projects_contact() {
        let labels: Vec<&str> = NAVIGATION_ORDER.iter().map(|page| page.label()).collect();
        assert_eq!(labels, vec!["Home", "About", "Projects", "Contact"]);
    }
}
