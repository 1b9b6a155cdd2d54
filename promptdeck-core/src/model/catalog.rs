//! src/model/catalog.rs
//! ============================================================================
//! # Catalog: in-memory prompt collection
//!
//! Nested, insertion-ordered mapping `category -> sub-category -> prompts`.
//! Built once by the loader and shared read-only behind an `Arc`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A single reusable prompt. Identity is its index within the sub-category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub title: String,
    pub content: String,
}

impl Prompt {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

pub type SubCategories = IndexMap<String, Vec<Prompt>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: IndexMap<String, SubCategories>,
}

/// On-disk document shape: `{ "promptData": { ... } }`
#[derive(Debug, Deserialize)]
pub struct CatalogDocument {
    #[serde(rename = "promptData")]
    pub prompt_data: Option<Catalog>,
}

/// Borrowed view of one prompt with its provenance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptRef<'a> {
    pub category: &'a str,
    pub sub_category: &'a str,
    pub index: usize,
    pub prompt: &'a Prompt,
}

impl Catalog {
    pub fn new(categories: IndexMap<String, SubCategories>) -> Self {
        Self { categories }
    }

    /// Parse a full document and extract `promptData`
    pub fn from_document_str(text: &str) -> Result<Self, AppError> {
        let document: CatalogDocument = serde_json::from_str(text)?;
        document.prompt_data.ok_or(AppError::MissingPromptData)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn prompt_count(&self) -> usize {
        self.categories
            .values()
            .flat_map(|subs| subs.values())
            .map(Vec::len)
            .sum()
    }

    /// Categories in insertion order
    pub fn categories(&self) -> impl Iterator<Item = (&str, &SubCategories)> {
        self.categories
            .iter()
            .map(|(name, subs)| (name.as_str(), subs))
    }

    pub fn category(&self, category: &str) -> Result<&SubCategories, AppError> {
        self.categories
            .get(category)
            .ok_or_else(|| AppError::UnknownCategory(category.to_string()))
    }

    pub fn prompts(&self, category: &str, sub_category: &str) -> Result<&[Prompt], AppError> {
        self.category(category)?
            .get(sub_category)
            .map(Vec::as_slice)
            .ok_or_else(|| AppError::unknown_sub_category(category, sub_category))
    }

    pub fn prompt(
        &self,
        category: &str,
        sub_category: &str,
        index: usize,
    ) -> Result<&Prompt, AppError> {
        self.prompts(category, sub_category)?
            .get(index)
            .ok_or_else(|| AppError::UnknownPrompt {
                category: category.to_string(),
                sub_category: sub_category.to_string(),
                index,
            })
    }

    /// First sub-category of `category` in catalog order, the "see all" target
    pub fn first_sub_category(&self, category: &str) -> Result<&str, AppError> {
        self.category(category)?
            .keys()
            .next()
            .map(String::as_str)
            .ok_or_else(|| AppError::unknown_sub_category(category, "<none>"))
    }

    /// Every prompt in traversal order: categories, sub-categories, list
    pub fn flatten(&self) -> impl Iterator<Item = PromptRef<'_>> {
        self.categories.iter().flat_map(|(category, subs)| {
            subs.iter().flat_map(move |(sub_category, prompts)| {
                prompts
                    .iter()
                    .enumerate()
                    .map(move |(index, prompt)| PromptRef {
                        category: category.as_str(),
                        sub_category: sub_category.as_str(),
                        index,
                        prompt,
                    })
            })
        })
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Writing: Essays(2), Poems(1); Coding: Rust(1)
    pub fn sample_catalog() -> Catalog {
        let text = r#"{
            "promptData": {
                "Writing": {
                    "Essays": [
                        {"title": "Intro", "content": "Write an essay about X"},
                        {"title": "Outline", "content": "Outline a persuasive piece"}
                    ],
                    "Poems": [
                        {"title": "Haiku", "content": "Compose a haiku about autumn"}
                    ]
                },
                "Coding": {
                    "Rust": [
                        {"title": "Borrow checker", "content": "Explain lifetimes like I'm five"}
                    ]
                }
            }
        }"#;
        Catalog::from_document_str(text).expect("fixture parses")
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::sample_catalog;
    use super::*;

    #[test]
    fn test_document_preserves_insertion_order() {
        let catalog = sample_catalog();

        let names: Vec<&str> = catalog.categories().map(|(name, _)| name).collect();
        assert_eq!(names, ["Writing", "Coding"]);

        let subs: Vec<&String> = catalog.category("Writing").unwrap().keys().collect();
        assert_eq!(subs, ["Essays", "Poems"]);
        assert_eq!(catalog.prompt_count(), 4);
    }

    #[test]
    fn test_missing_prompt_data_is_rejected() {
        let err = Catalog::from_document_str(r#"{"other": 1}"#).unwrap_err();
        assert!(matches!(err, AppError::MissingPromptData));
    }

    #[test]
    fn test_malformed_prompt_is_a_parse_error() {
        let err = Catalog::from_document_str(r#"{"promptData": {"A": {"B": [{"title": 1}]}}}"#)
            .unwrap_err();
        assert!(matches!(err, AppError::Serde(_)));
    }

    #[test]
    fn test_lookups_are_checked() {
        let catalog = sample_catalog();

        assert_eq!(catalog.prompts("Writing", "Poems").unwrap().len(), 1);
        assert_eq!(catalog.first_sub_category("Writing").unwrap(), "Essays");
        assert_eq!(catalog.prompt("Coding", "Rust", 0).unwrap().title, "Borrow checker");

        assert!(matches!(
            catalog.prompts("Cooking", "Soups"),
            Err(AppError::UnknownCategory(_))
        ));
        assert!(matches!(
            catalog.prompts("Writing", "Limericks"),
            Err(AppError::UnknownSubCategory { .. })
        ));
        assert!(matches!(
            catalog.prompt("Writing", "Poems", 5),
            Err(AppError::UnknownPrompt { index: 5, .. })
        ));
    }

    #[test]
    fn test_flatten_follows_traversal_order() {
        let catalog = sample_catalog();

        let order: Vec<(&str, &str, usize)> = catalog
            .flatten()
            .map(|p| (p.category, p.sub_category, p.index))
            .collect();

        assert_eq!(
            order,
            [
                ("Writing", "Essays", 0),
                ("Writing", "Essays", 1),
                ("Writing", "Poems", 0),
                ("Coding", "Rust", 0),
            ]
        );
    }
}
