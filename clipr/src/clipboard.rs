use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::config::ClipboardConfig;
use crate::error::{ClipError, ClipResult};

/// Backend able to place plain text on a clipboard
pub trait TextClipboard: Send {
    fn name(&self) -> &'static str;

    fn set_text(&mut self, text: &str) -> ClipResult<()>;
}

/// OS clipboard via `arboard`. The handle is opened lazily and kept alive,
/// since some platforms drop the contents together with the owner.
#[cfg(feature = "system")]
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

#[cfg(feature = "system")]
impl SystemClipboard {
    pub fn new() -> Self {
        Self { inner: None }
    }

    fn handle(&mut self) -> ClipResult<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(ClipError::from)?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipError::unavailable("clipboard handle missing"))
    }
}

#[cfg(feature = "system")]
impl TextClipboard for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn set_text(&mut self, text: &str) -> ClipResult<()> {
        let result = self.handle()?.set_text(text.to_owned());
        if result.is_err() {
            // Reopen on the next attempt; the old handle may be stale.
            self.inner = None;
        }
        result.map_err(ClipError::from)
    }
}

/// In-process clipboard. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
    fail_with: Option<ClipError>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every write fails with `err`
    pub fn failing(err: ClipError) -> Self {
        Self {
            contents: Arc::default(),
            fail_with: Some(err),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|guard| guard.clone())
    }
}

impl TextClipboard for MemoryClipboard {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn set_text(&mut self, text: &str) -> ClipResult<()> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        let mut guard = self
            .contents
            .lock()
            .map_err(|_| ClipError::write_failed("memory clipboard poisoned"))?;
        *guard = Some(text.to_owned());
        Ok(())
    }
}

/// Clipboard front used by the application
pub struct Clipboard {
    backend: Box<dyn TextClipboard>,
    stats: ClipboardStats,
}

impl Clipboard {
    pub fn new(backend: Box<dyn TextClipboard>) -> Self {
        Self {
            backend,
            stats: ClipboardStats::default(),
        }
    }

    /// Pick a backend according to `config`
    pub fn from_config(config: &ClipboardConfig) -> Self {
        if config.use_system_clipboard {
            return Self::system();
        }
        Self::new(Box::new(MemoryClipboard::new()))
    }

    #[cfg(feature = "system")]
    fn system() -> Self {
        Self::new(Box::new(SystemClipboard::new()))
    }

    #[cfg(not(feature = "system"))]
    fn system() -> Self {
        warn!("clipr built without the `system` feature, using in-memory clipboard");
        Self::new(Box::new(MemoryClipboard::new()))
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Copy `text` to the clipboard
    pub fn copy_text(&mut self, text: &str) -> ClipResult<()> {
        match self.backend.set_text(text) {
            Ok(()) => {
                self.stats.copies += 1;
                debug!(
                    marker = "CLIPBOARD_COPY",
                    operation_type = "clipboard",
                    backend = self.backend.name(),
                    chars = text.chars().count(),
                    "Copied text to clipboard"
                );
                Ok(())
            }
            Err(err) => {
                self.stats.failures += 1;
                warn!(
                    marker = "CLIPBOARD_COPY_FAILED",
                    operation_type = "clipboard",
                    backend = self.backend.name(),
                    error = %err,
                    "Failed to copy text"
                );
                Err(err)
            }
        }
    }

    pub fn stats(&self) -> ClipboardStats {
        self.stats
    }
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::new(Box::new(MemoryClipboard::new()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClipboardStats {
    pub copies: u64,
    pub failures: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_shares_buffer() {
        let memory = MemoryClipboard::new();
        let mut clipboard = Clipboard::new(Box::new(memory.clone()));

        clipboard.copy_text("Write an essay about X").unwrap();

        assert_eq!(memory.contents().as_deref(), Some("Write an essay about X"));
        assert_eq!(clipboard.stats().copies, 1);
        assert_eq!(clipboard.backend_name(), "memory");
    }

    #[test]
    fn test_failure_counts_and_propagates() {
        let mut clipboard = Clipboard::new(Box::new(MemoryClipboard::failing(
            ClipError::unavailable("no display"),
        )));

        let err = clipboard.copy_text("text").unwrap_err();

        assert_eq!(err, ClipError::unavailable("no display"));
        assert_eq!(
            clipboard.stats(),
            ClipboardStats {
                copies: 0,
                failures: 1
            }
        );
    }

    #[test]
    fn test_from_config_memory_backend() {
        let config = ClipboardConfig {
            use_system_clipboard: false,
            ..ClipboardConfig::default()
        };
        assert_eq!(Clipboard::from_config(&config).backend_name(), "memory");
    }
}
