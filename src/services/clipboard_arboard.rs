use arboard::Clipboard;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Arboard-based clipboard implementation.
///
/// The underlying handle is opened on first write, so a headless environment
/// only fails when a copy is actually attempted.
pub struct ArboardClipboard {
    clipboard: Option<Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self { clipboard: None }
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        let clipboard = match &mut self.clipboard {
            Some(clipboard) => clipboard,
            None => {
                let handle =
                    Clipboard::new().map_err(|e| AppError::Clipboard(format!("{}", e)))?;
                self.clipboard.insert(handle)
            }
        };
        clipboard.set_text(text).map_err(|e| AppError::Clipboard(format!("{}", e)))
    }
}
