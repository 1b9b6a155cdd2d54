//! Navigation state: which top-level view is shown.

/// `Homepage` is entered after a successful load; `Detail` names the active
/// category and sub-category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NavigationState {
    #[default]
    Homepage,
    Detail {
        category: String,
        sub_category: String,
    },
}

impl NavigationState {
    pub fn detail(category: impl Into<String>, sub_category: impl Into<String>) -> Self {
        Self::Detail {
            category: category.into(),
            sub_category: sub_category.into(),
        }
    }

    pub fn is_homepage(&self) -> bool {
        matches!(self, Self::Homepage)
    }

    pub fn is_detail(&self) -> bool {
        matches!(self, Self::Detail { .. })
    }

    /// Active `(category, sub_category)` when in the detail view
    pub fn active(&self) -> Option<(&str, &str)> {
        match self {
            Self::Homepage => None,
            Self::Detail {
                category,
                sub_category,
            } => Some((category.as_str(), sub_category.as_str())),
        }
    }
}

/// Which regions are visible. The search toggle only applies inside the
/// homepage region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionVisibility {
    pub homepage: bool,
    pub detail: bool,
    pub category_cards: bool,
    pub search_results: bool,
}

impl RegionVisibility {
    pub fn compute(nav: &NavigationState, search_active: bool) -> Self {
        Self {
            homepage: nav.is_homepage(),
            detail: nav.is_detail(),
            category_cards: !search_active,
            search_results: search_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_follow_state_and_search() {
        let home = RegionVisibility::compute(&NavigationState::Homepage, false);
        assert!(home.homepage && home.category_cards);
        assert!(!home.detail && !home.search_results);

        let searching = RegionVisibility::compute(&NavigationState::Homepage, true);
        assert!(searching.search_results && !searching.category_cards);

        let detail = RegionVisibility::compute(&NavigationState::detail("Writing", "Essays"), true);
        assert!(detail.detail && !detail.homepage);
        // search toggle persists underneath the hidden homepage
        assert!(detail.search_results);
    }

    #[test]
    fn test_active_pair() {
        assert_eq!(NavigationState::Homepage.active(), None);
        assert_eq!(
            NavigationState::detail("Writing", "Poems").active(),
            Some(("Writing", "Poems"))
        );
    }
}
