//! Image lightbox overlay.

use crate::input::KeyCode;

/// The thumbnail that was clicked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trigger {
    pub src: String,
    pub alt: Option<String>,
    /// Text of the element right after the image, if any.
    pub sibling_text: Option<String>,
}

impl Trigger {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Default::default()
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn with_sibling_text(mut self, text: impl Into<String>) -> Self {
        self.sibling_text = Some(text.into());
        self
    }

    /// Alt text, else the sibling's text, else empty. Empty strings fall
    /// through.
    pub fn caption(&self) -> &str {
        [&self.alt, &self.sibling_text]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|text| !text.is_empty())
            .unwrap_or("")
    }
}

/// Where a click inside the open lightbox landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxTarget {
    CloseButton,
    /// The overlay itself, not anything on it.
    Backdrop,
    Content,
}

#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    active: bool,
    image_src: String,
    caption: String,
    scroll_locked: bool,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn image_src(&self) -> &str {
        &self.image_src
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Whether page scrolling is suspended.
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn open(&mut self, trigger: &Trigger) {
        self.image_src.clone_from(&trigger.src);
        self.caption = trigger.caption().to_string();
        self.active = true;
        self.scroll_locked = true;
    }

    pub fn close(&mut self) {
        self.active = false;
        self.scroll_locked = false;
    }

    pub fn handle_click(&mut self, target: LightboxTarget) {
        match target {
            LightboxTarget::CloseButton | LightboxTarget::Backdrop => self.close(),
            LightboxTarget::Content => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        if key == KeyCode::Escape && self.active {
            self.close();
        }
    }
}
