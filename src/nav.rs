//! Navigation menu tree and breadcrumb derivation.
//!
//! The dashboard's navigation bar is a small static tree loaded from JSON.
//! Icons are named in the configuration and resolved once, at load time,
//! against a closed set of identifiers; unknown names resolve to no icon.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Icons the navigation bar knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
    /// House
    Home,
    /// Dashboard tiles
    Dashboard,
    /// Page with folded corner
    Document,
    /// Pen
    Editor,
    /// Picture frame
    Image,
    /// Gear
    Settings,
    /// People
    Users,
    /// Bell
    Notifications,
    /// Bar chart
    Analytics,
    /// Question mark
    Help,
}

impl IconId {
    /// Every known icon.
    pub const ALL: [Self; 10] = [
        Self::Home,
        Self::Dashboard,
        Self::Document,
        Self::Editor,
        Self::Image,
        Self::Settings,
        Self::Users,
        Self::Notifications,
        Self::Analytics,
        Self::Help,
    ];

    /// Configuration name of this icon.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Dashboard => "dashboard",
            Self::Document => "document",
            Self::Editor => "editor",
            Self::Image => "image",
            Self::Settings => "settings",
            Self::Users => "users",
            Self::Notifications => "notifications",
            Self::Analytics => "analytics",
            Self::Help => "help",
        }
    }

    /// Resolve a configuration name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|icon| icon.name().eq_ignore_ascii_case(name))
    }
}

/// One entry of the navigation tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Stable identifier
    pub id: String,

    /// Display title
    pub title: String,

    /// Route path; group headings may have none
    #[serde(default)]
    pub path: Option<String>,

    /// Icon name as written in the configuration
    #[serde(default, rename = "icon")]
    pub icon_name: Option<String>,

    /// Resolved icon, filled in at load time
    #[serde(skip)]
    pub icon: Option<IconId>,

    /// Nested entries
    #[serde(default)]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// Create a leaf item.
    pub fn new(id: impl Into<String>, title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            path: Some(path.into()),
            icon_name: None,
            icon: None,
            children: Vec::new(),
        }
    }

    /// Builder-style child append.
    pub fn with_child(mut self, child: MenuItem) -> Self {
        self.children.push(child);
        self
    }

    /// Builder-style icon, resolved immediately.
    pub fn with_icon(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.icon = IconId::parse(&name);
        self.icon_name = Some(name);
        self
    }
}

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crumb {
    /// Item identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Route path, if the item has one
    pub path: Option<String>,
}

impl From<&MenuItem> for Crumb {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            path: item.path.clone(),
        }
    }
}

/// The navigation tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Build a menu from items, resolving icons and checking ids.
    pub fn new(items: Vec<MenuItem>) -> Result<Self> {
        let mut menu = Self { items };
        menu.resolve()?;
        Ok(menu)
    }

    /// Load a menu from its JSON configuration (an array of items).
    pub fn from_json(json: &str) -> Result<Self> {
        let items: Vec<MenuItem> =
            serde_json::from_str(json).map_err(|e| Error::InvalidMenu(e.to_string()))?;
        Self::new(items)
    }

    /// Top-level items.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    fn resolve(&mut self) -> Result<()> {
        fn walk(items: &mut [MenuItem], seen: &mut HashSet<String>) -> Result<()> {
            for item in items {
                if !seen.insert(item.id.clone()) {
                    return Err(Error::InvalidMenu(format!("duplicate id {:?}", item.id)));
                }
                item.icon = item.icon_name.as_deref().and_then(|name| {
                    let icon = IconId::parse(name);
                    if icon.is_none() {
                        log::warn!("Unknown icon {:?} on menu item {:?}", name, item.id);
                    }
                    icon
                });
                walk(&mut item.children, seen)?;
            }
            Ok(())
        }

        walk(&mut self.items, &mut HashSet::new())
    }

    /// Find an item by id.
    pub fn find(&self, id: &str) -> Option<&MenuItem> {
        fn search<'a>(items: &'a [MenuItem], id: &str) -> Option<&'a MenuItem> {
            for item in items {
                if item.id == id {
                    return Some(item);
                }
                if let Some(found) = search(&item.children, id) {
                    return Some(found);
                }
            }
            None
        }
        search(&self.items, id)
    }

    /// Breadcrumb trail from the root to the item routed at `path`.
    ///
    /// Trailing slashes are ignored. Returns an empty trail when no item
    /// matches.
    pub fn breadcrumbs(&self, path: &str) -> Vec<Crumb> {
        fn search<'a>(items: &'a [MenuItem], path: &str, trail: &mut Vec<&'a MenuItem>) -> bool {
            for item in items {
                trail.push(item);
                if item.path.as_deref().map(normalize_path) == Some(path) {
                    return true;
                }
                if search(&item.children, path, trail) {
                    return true;
                }
                trail.pop();
            }
            false
        }

        let target = normalize_path(path);
        let mut trail = Vec::new();
        search(&self.items, target, &mut trail);
        trail.into_iter().map(Crumb::from).collect()
    }

    /// Total number of items (including nested).
    pub fn total_items(&self) -> usize {
        fn count_items(items: &[MenuItem]) -> usize {
            items
                .iter()
                .map(|item| 1 + count_items(&item.children))
                .sum()
        }
        count_items(&self.items)
    }
}

fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MENU: &str = r#"[
        {"id": "home", "title": "Home", "path": "/", "icon": "home"},
        {"id": "content", "title": "Content", "icon": "document", "children": [
            {"id": "pages", "title": "Pages", "path": "/content/pages", "children": [
                {"id": "editor", "title": "Editor", "path": "/content/pages/edit", "icon": "editor"}
            ]},
            {"id": "media", "title": "Media", "path": "/content/media", "icon": "sparkles"}
        ]}
    ]"#;

    #[test]
    fn test_breadcrumbs_nested() {
        let menu = Menu::from_json(MENU).unwrap();
        let titles: Vec<_> = menu
            .breadcrumbs("/content/pages/edit/")
            .into_iter()
            .map(|c| c.title)
            .collect();

        assert_eq!(titles, vec!["Content", "Pages", "Editor"]);
    }

    #[test]
    fn test_breadcrumbs_root_and_missing() {
        let menu = Menu::from_json(MENU).unwrap();

        let root = menu.breadcrumbs("/");
        assert_eq!(root.len(), 1);
        assert_eq!(root[0].id, "home");

        assert!(menu.breadcrumbs("/nowhere").is_empty());
    }

    #[test]
    fn test_icons_fail_closed() {
        let menu = Menu::from_json(MENU).unwrap();

        assert_eq!(menu.find("editor").unwrap().icon, Some(IconId::Editor));
        let media = menu.find("media").unwrap();
        assert_eq!(media.icon_name.as_deref(), Some("sparkles"));
        assert_eq!(media.icon, None);
        assert_eq!(menu.find("pages").unwrap().icon, None);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let items = vec![
            MenuItem::new("a", "A", "/a"),
            MenuItem::new("b", "B", "/b").with_child(MenuItem::new("a", "Again", "/b/a")),
        ];
        assert!(matches!(Menu::new(items), Err(Error::InvalidMenu(_))));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Menu::from_json("{\"id\": 1}"),
            Err(Error::InvalidMenu(_))
        ));
    }

    #[test]
    fn test_total_items() {
        let menu = Menu::from_json(MENU).unwrap();
        assert_eq!(menu.total_items(), 5);
    }

    #[test]
    fn test_icon_parse() {
        assert_eq!(IconId::parse("Settings"), Some(IconId::Settings));
        assert_eq!(IconId::parse("FaHome"), None);
        for icon in IconId::ALL {
            assert_eq!(IconId::parse(icon.name()), Some(icon));
        }
    }

    #[test]
    fn test_builder_icon() {
        let item = MenuItem::new("x", "X", "/x").with_icon("help");
        assert_eq!(item.icon, Some(IconId::Help));
    }
}
