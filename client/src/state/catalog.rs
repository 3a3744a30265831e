//! Catalog data and home-page selection state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog is a fixed in-memory list. The home page owns one
//! `CatalogState` per visit; every user interaction goes through one of the
//! transition methods below so the dropdown and search rules stay testable
//! without a DOM.
//!
//! DESIGN
//! ======
//! Suggestions use case-insensitive substring matching, while the Search
//! action requires case-insensitive exact equality against the full list.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::util::route::asset_detail_path;

/// Label shown in the category picker while nothing is selected.
pub const UNSELECTED_LABEL: &str = "Select Category";

/// Closed set of asset classifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    IndustrialRobots,
    MedicalRobots,
    MilitaryRobots,
}

impl Category {
    /// All categories in picker order.
    pub const ALL: [Self; 3] = [Self::IndustrialRobots, Self::MedicalRobots, Self::MilitaryRobots];

    pub fn label(self) -> &'static str {
        match self {
            Self::IndustrialRobots => "Industrial Robots",
            Self::MedicalRobots => "Medical Robots",
            Self::MilitaryRobots => "Military Robots",
        }
    }
}

/// A catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Asset {
    pub id: u32,
    pub name: &'static str,
    pub category: Category,
}

const fn asset(id: u32, name: &'static str, category: Category) -> Asset {
    Asset { id, name, category }
}

/// The fixed asset population.
pub static CATALOG: [Asset; 15] = [
    asset(1, "ABB IRB 6700", Category::IndustrialRobots),
    asset(2, "KUKA KR AGILUS", Category::IndustrialRobots),
    asset(3, "Da Vinci Surgical System", Category::MedicalRobots),
    asset(4, "CyberKnife", Category::MedicalRobots),
    asset(5, "Predator Drone", Category::MilitaryRobots),
    asset(6, "PackBot", Category::MilitaryRobots),
    asset(7, "Universal Robots UR5e", Category::IndustrialRobots),
    asset(8, "MAKO Robotic Arm", Category::MedicalRobots),
    asset(9, "BigDog", Category::MilitaryRobots),
    asset(10, "TALON", Category::MilitaryRobots),
    asset(11, "FANUC R-2000iC", Category::IndustrialRobots),
    asset(12, "Yaskawa Motoman HC20DT", Category::IndustrialRobots),
    asset(13, "Versius", Category::MedicalRobots),
    asset(14, "ROSATM", Category::MedicalRobots),
    asset(15, "SWORDS", Category::MilitaryRobots),
];

/// Assets in `category` whose name contains `query`, ignoring case.
///
/// Always empty when no category is selected. Catalog order is preserved.
pub fn filter_assets<'a>(assets: &'a [Asset], category: Option<Category>, query: &str) -> Vec<&'a Asset> {
    let Some(category) = category else {
        return Vec::new();
    };
    let needle = query.to_lowercase();
    assets
        .iter()
        .filter(|a| a.category == category && a.name.to_lowercase().contains(&needle))
        .collect()
}

/// The asset whose name equals `query` (ignoring case) within `category`.
pub fn find_asset<'a>(assets: &'a [Asset], category: Option<Category>, query: &str) -> Option<&'a Asset> {
    let category = category?;
    let needle = query.to_lowercase();
    assets
        .iter()
        .find(|a| a.category == category && a.name.to_lowercase() == needle)
}

/// Result of pressing Search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Route to the detail page at this path.
    Navigate(String),
    /// No asset matched; the user gets a blocking notice.
    NotFound,
}

/// Selection state for the home page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogState {
    pub category: Option<Category>,
    pub search_query: String,
    pub category_menu_open: bool,
    pub asset_menu_open: bool,
}

impl CatalogState {
    pub fn toggle_category_menu(&mut self) {
        self.category_menu_open = !self.category_menu_open;
    }

    pub fn select_category(&mut self, category: Category) {
        self.category = Some(category);
        self.category_menu_open = false;
    }

    /// Focusing the search box opens suggestions once a category is chosen.
    pub fn focus_search(&mut self) {
        if self.category.is_some() {
            self.asset_menu_open = true;
        }
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }

    pub fn pick_asset(&mut self, asset: &Asset) {
        self.search_query = asset.name.to_owned();
        self.asset_menu_open = false;
    }

    /// Close every menu whose region did not contain the pointer-down target.
    pub fn pointer_down_outside(&mut self, inside_category: bool, inside_asset: bool) {
        if !inside_category {
            self.category_menu_open = false;
        }
        if !inside_asset {
            self.asset_menu_open = false;
        }
    }

    pub fn filtered(&self) -> Vec<&'static Asset> {
        filter_assets(&CATALOG, self.category, &self.search_query)
    }

    pub fn category_label(&self) -> &'static str {
        self.category.map_or(UNSELECTED_LABEL, Category::label)
    }

    pub fn search_input_enabled(&self) -> bool {
        self.category.is_some()
    }

    /// Text shown in the search box; blank until a category is chosen.
    pub fn displayed_query(&self) -> String {
        if self.category.is_some() { self.search_query.clone() } else { String::new() }
    }

    pub fn search_placeholder(&self) -> &'static str {
        if self.category.is_some() { "Search or Select Asset" } else { "Select a category first" }
    }

    pub fn search_enabled(&self) -> bool {
        self.category.is_some() && !self.search_query.trim().is_empty()
    }

    pub fn show_suggestions(&self) -> bool {
        self.asset_menu_open && !self.filtered().is_empty()
    }

    pub fn show_no_match_hint(&self) -> bool {
        self.asset_menu_open && self.filtered().is_empty()
    }

    /// Resolve the Search action against the full catalog.
    pub fn resolve_search(&self) -> SearchOutcome {
        match find_asset(&CATALOG, self.category, &self.search_query) {
            Some(found) => SearchOutcome::Navigate(asset_detail_path(found.name, found.id)),
            None => SearchOutcome::NotFound,
        }
    }
}
