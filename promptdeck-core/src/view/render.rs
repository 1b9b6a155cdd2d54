//! src/view/render.rs
//! ============================================================================
//! # Pure view rendering
//!
//! Each function maps catalog (and UI) state to a complete snapshot of one
//! region. Calling one twice with the same input yields an equal snapshot;
//! nothing is patched incrementally.

use clipr::CopyFeedback;
use tracing::{instrument, trace};

use crate::error::AppError;
use crate::model::catalog::Catalog;
use crate::model::ui_state::PromptKey;
use crate::operators::search_engine::SearchResult;
use crate::view::snapshots::{
    CategoryCard, CopyControl, DetailSnapshot, HomepageSnapshot, NavTarget, PromptBlock,
    ResultPreview, SearchSnapshot, SeeAllAction, Sidebar, SidebarEntry, SidebarSection,
    SubCategoryLink,
};

pub const SEE_ALL_LABEL: &str = "See all prompts →";
pub const NO_RESULTS_MESSAGE: &str = "No prompts found.";
pub const ELLIPSIS: &str = "...";

/// Heading shared by homepage cards, the detail view and sidebar sections
pub fn heading_for(name: &str) -> String {
    format!("Gemini Prompts for {name}")
}

/// One card per category, sub-category links in catalog order.
#[instrument(level = "trace", skip_all)]
pub fn render_homepage(catalog: &Catalog) -> HomepageSnapshot {
    let cards = catalog
        .categories()
        .map(|(category, subs)| CategoryCard {
            category: category.to_string(),
            heading: heading_for(category),
            links: subs
                .keys()
                .map(|sub| SubCategoryLink {
                    label: format!("→ {sub}"),
                    target: NavTarget::new(category, sub.as_str()),
                })
                .collect(),
            see_all: SeeAllAction {
                label: SEE_ALL_LABEL,
                category: category.to_string(),
            },
        })
        .collect::<Vec<_>>();

    trace!(cards = cards.len(), "homepage rendered");
    HomepageSnapshot { cards }
}

/// All prompts of `(category, sub_category)` plus the full sidebar with the
/// active entry marked. Unknown targets are reported, not rendered.
#[instrument(level = "trace", skip(catalog, feedback))]
pub fn render_detail_view(
    catalog: &Catalog,
    category: &str,
    sub_category: &str,
    feedback: &CopyFeedback<PromptKey>,
) -> Result<DetailSnapshot, AppError> {
    let prompts = catalog.prompts(category, sub_category)?;

    let blocks = prompts
        .iter()
        .enumerate()
        .map(|(index, prompt)| {
            let key = PromptKey::new(category, sub_category, index);
            PromptBlock {
                index,
                title: prompt.title.clone(),
                content: prompt.content.clone(),
                copy: CopyControl {
                    label: feedback.label(&key),
                    disabled: feedback.is_disabled(&key),
                },
            }
        })
        .collect();

    Ok(DetailSnapshot {
        category: category.to_string(),
        sub_category: sub_category.to_string(),
        heading: heading_for(sub_category),
        blocks,
        sidebar: render_sidebar(catalog, category, sub_category),
    })
}

/// Quick-links sidebar: every category with all of its sub-categories
pub fn render_sidebar(catalog: &Catalog, active_category: &str, active_sub: &str) -> Sidebar {
    let sections = catalog
        .categories()
        .map(|(category, subs)| SidebarSection {
            category: category.to_string(),
            heading: heading_for(category),
            entries: subs
                .keys()
                .map(|sub| SidebarEntry {
                    label: sub.clone(),
                    target: NavTarget::new(category, sub.as_str()),
                    active: category == active_category && sub == active_sub,
                })
                .collect(),
        })
        .collect();

    Sidebar { sections }
}

/// Result previews with provenance, or the "no results" state
pub fn render_search_results(results: &[SearchResult<'_>], preview_chars: usize) -> SearchSnapshot {
    if results.is_empty() {
        return SearchSnapshot::NoResults {
            message: NO_RESULTS_MESSAGE,
        };
    }

    SearchSnapshot::Results(
        results
            .iter()
            .map(|result| ResultPreview {
                title: result.prompt.title.clone(),
                provenance: format!("{} > {}", result.category, result.subcategory),
                preview: truncate_preview(&result.prompt.content, preview_chars),
                target: NavTarget::new(result.category, result.subcategory),
            })
            .collect(),
    )
}

/// First `max_chars` characters plus `...` when longer, otherwise the
/// content unchanged.
pub fn truncate_preview(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{ELLIPSIS}", &content[..byte_idx]),
        None => content.to_string(),
    }
}
