//! src/view/snapshots.rs
//! ============================================================
//! Declarative render output. The pure functions in `view::render`
//! build these from the catalog and UI state; the ratatui adapter
//! paints them without touching the catalog again.

/// Destination of any navigable element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTarget {
    pub category: String,
    pub sub_category: String,
}

impl NavTarget {
    pub fn new(category: impl Into<String>, sub_category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            sub_category: sub_category.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubCategoryLink {
    pub label: String,
    pub target: NavTarget,
}

/// "See all" resolves to the category's first sub-category when activated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeeAllAction {
    pub label: &'static str,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCard {
    pub category: String,
    pub heading: String,
    pub links: Vec<SubCategoryLink>,
    pub see_all: SeeAllAction,
}

/// Focusable element of the homepage card region, in render order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeTarget {
    Link(NavTarget),
    SeeAll(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomepageSnapshot {
    pub cards: Vec<CategoryCard>,
}

impl HomepageSnapshot {
    /// Card links then the see-all action, card by card
    pub fn focus_targets(&self) -> Vec<HomeTarget> {
        self.cards
            .iter()
            .flat_map(|card| {
                card.links
                    .iter()
                    .map(|link| HomeTarget::Link(link.target.clone()))
                    .chain(std::iter::once(HomeTarget::SeeAll(card.category.clone())))
            })
            .collect()
    }

    /// Index of the first focus target belonging to each card
    pub fn card_offsets(&self) -> Vec<usize> {
        let mut offset = 0;
        self.cards
            .iter()
            .map(|card| {
                let start = offset;
                offset += card.links.len() + 1;
                start
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyControl {
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptBlock {
    pub index: usize,
    pub title: String,
    pub content: String,
    pub copy: CopyControl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub label: String,
    pub target: NavTarget,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarSection {
    pub category: String,
    pub heading: String,
    pub entries: Vec<SidebarEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sidebar {
    pub sections: Vec<SidebarSection>,
}

impl Sidebar {
    /// Entries flattened in display order
    pub fn entries(&self) -> impl Iterator<Item = &SidebarEntry> {
        self.sections.iter().flat_map(|s| s.entries.iter())
    }

    pub fn active_index(&self) -> Option<usize> {
        self.entries().position(|e| e.active)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSnapshot {
    pub category: String,
    pub sub_category: String,
    pub heading: String,
    pub blocks: Vec<PromptBlock>,
    pub sidebar: Sidebar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPreview {
    pub title: String,
    pub provenance: String,
    pub preview: String,
    pub target: NavTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchSnapshot {
    NoResults { message: &'static str },
    Results(Vec<ResultPreview>),
}

impl SearchSnapshot {
    pub fn len(&self) -> usize {
        match self {
            Self::NoResults { .. } => 0,
            Self::Results(previews) => previews.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn target(&self, index: usize) -> Option<&NavTarget> {
        match self {
            Self::NoResults { .. } => None,
            Self::Results(previews) => previews.get(index).map(|p| &p.target),
        }
    }
}
