//! Collapsible code blocks with a copy button.

use crate::error::ClipboardError;
use std::time::{Duration, Instant};
use tracing::error;

/// Label shown after a successful copy.
pub const COPIED_LABEL: &str = "Copied!";

/// How long the copied label stays up.
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// Destination for copied text.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone)]
pub struct CodeBlock {
    code: String,
    expanded: bool,
    label: String,
    original_label: String,
    restore_at: Option<Instant>,
}

impl CodeBlock {
    /// Expanded block whose copy control reads `label`.
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            code: code.into(),
            expanded: true,
            original_label: label.clone(),
            label,
            restore_at: None,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Current copy control label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Header clicked. Clicks on the copy control do not collapse.
    pub fn header_clicked(&mut self, on_copy_button: bool) {
        if !on_copy_button {
            self.expanded = !self.expanded;
        }
    }

    /// Copy the code. Returns whether the clipboard accepted it; failures are
    /// logged and leave the block untouched. Each successful copy restarts
    /// the feedback period.
    pub fn copy<C: Clipboard + ?Sized>(&mut self, clipboard: &mut C, now: Instant) -> bool {
        match clipboard.write_text(&self.code) {
            Ok(()) => {
                self.label = COPIED_LABEL.to_string();
                self.restore_at = Some(now + COPY_FEEDBACK);
                true
            }
            Err(e) => {
                error!("failed to copy: {}", e);
                false
            }
        }
    }

    /// Restore the label once the feedback period is over.
    pub fn tick(&mut self, now: Instant) {
        if self.restore_at.is_some_and(|at| now >= at) {
            self.label.clone_from(&self.original_label);
            self.restore_at = None;
        }
    }
}
