//! ``src/operators/catalog_loader.rs``
//!
//! # `Catalog Loader`: one-shot asynchronous catalog fetch
//!
//! Reads the prompt document from a local file or fetches it with a single
//! HTTP GET, then parses it into a [`Catalog`]. The load is all-or-nothing:
//! any I/O, transport, status or parse failure yields an error and no
//! partial catalog. There is no retry and no timeout.

use std::{
    fmt,
    path::PathBuf,
    sync::Arc,
    time::{Duration, Instant},
};

use serde::{Deserialize, Serialize};
use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle};
use tracing::{error, info, instrument};

use crate::controller::actions::Action;
use crate::error::AppError;
use crate::model::catalog::Catalog;

/// Static message shown in place of the category cards after a failed load
pub const LOAD_ERROR_MESSAGE: &str = "Error loading prompts. Please try again later.";

pub const DEFAULT_CATALOG_PATH: &str = "./prompts.json";

/// Where the prompt document lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CatalogSource {
    File(PathBuf),
    Url(String),
}

impl Default for CatalogSource {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_CATALOG_PATH))
    }
}

impl From<String> for CatalogSource {
    fn from(value: String) -> Self {
        let lower = value.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(value)
        } else {
            Self::File(PathBuf::from(value))
        }
    }
}

impl From<CatalogSource> for String {
    fn from(source: CatalogSource) -> Self {
        match source {
            CatalogSource::File(path) => path.to_string_lossy().into_owned(),
            CatalogSource::Url(url) => url,
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Load and parse the catalog from `source`
#[instrument(level = "info", skip_all, fields(source = %source))]
pub async fn load_catalog(source: &CatalogSource) -> Result<Catalog, AppError> {
    let start_time = Instant::now();

    let text = match source {
        CatalogSource::File(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::catalog_io(path.clone(), e))?,
        CatalogSource::Url(url) => fetch_text(url).await?,
    };

    let catalog = Catalog::from_document_str(&text)?;

    let duration: Duration = start_time.elapsed();
    info!(
        marker = "CATALOG_LOADED",
        operation_type = "catalog_load",
        categories = catalog.category_count(),
        prompts = catalog.prompt_count(),
        duration_ms = duration.as_millis() as u64,
        "Catalog loaded in {:?}",
        duration
    );

    Ok(catalog)
}

async fn fetch_text(url: &str) -> Result<String, AppError> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| AppError::http(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::http_status(url, status.as_u16()));
    }

    response.text().await.map_err(|e| AppError::http(url, e))
}

/// Run the load on its own task and report the outcome as
/// [`Action::CatalogLoaded`].
pub fn spawn_catalog_load(
    source: CatalogSource,
    action_tx: UnboundedSender<Action>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = load_catalog(&source).await.map(Arc::new);

        if let Err(e) = &result {
            error!(
                marker = "CATALOG_LOAD_FAILED",
                operation_type = "catalog_load",
                source = %source,
                error = %e,
                "Failed to load prompts"
            );
        }

        if action_tx.send(Action::CatalogLoaded(result)).is_err() {
            info!("Event loop gone before catalog load finished");
        }
    })
}
