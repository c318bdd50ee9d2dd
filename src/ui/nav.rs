//! Mobile menu and dropdown.

use crate::input::KeyCode;

/// Id given to the menu when the page did not set one.
pub const DEFAULT_MENU_ID: &str = "primary-navigation";

/// Viewports wider than this show the desktop menu.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Where a document click landed, relative to the navigation elements.
///
/// The dropdown and its toggle sit inside the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Menu,
    MenuToggle,
    Dropdown,
    DropdownToggle,
    Outside,
}

/// Open/closed state of the menu and its optional dropdown.
#[derive(Debug, Clone)]
pub struct Navigation {
    menu_id: String,
    menu_open: bool,
    /// `None` when the page has no dropdown.
    dropdown_open: Option<bool>,
}

impl Navigation {
    pub fn new(menu_id: Option<String>, has_dropdown: bool) -> Self {
        Self {
            menu_id: menu_id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| DEFAULT_MENU_ID.to_string()),
            menu_open: false,
            dropdown_open: has_dropdown.then_some(false),
        }
    }

    /// Value for the toggle's `aria-controls`.
    pub fn menu_id(&self) -> &str {
        &self.menu_id
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open.unwrap_or(false)
    }

    pub fn has_dropdown(&self) -> bool {
        self.dropdown_open.is_some()
    }

    /// Menu toggle pressed. Returns the new state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Dropdown toggle pressed. Returns the new state.
    pub fn toggle_dropdown(&mut self) -> bool {
        match self.dropdown_open.as_mut() {
            Some(open) => {
                *open = !*open;
                *open
            }
            None => false,
        }
    }

    pub fn aria_expanded_menu(&self) -> &'static str {
        aria(self.menu_open)
    }

    pub fn aria_expanded_dropdown(&self) -> &'static str {
        aria(self.dropdown_open())
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn close_dropdown(&mut self) {
        if let Some(open) = self.dropdown_open.as_mut() {
            *open = false;
        }
    }

    /// A click anywhere in the document closes whatever it landed outside of.
    pub fn handle_click(&mut self, target: ClickTarget) {
        if !matches!(target, ClickTarget::Dropdown | ClickTarget::DropdownToggle) {
            self.close_dropdown();
        }
        if target == ClickTarget::Outside {
            self.close_menu();
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        if key == KeyCode::Escape {
            self.close_dropdown();
            self.close_menu();
        }
    }

    pub fn handle_resize(&mut self, width: f32) {
        if width > MOBILE_BREAKPOINT {
            self.close_menu();
        }
    }

    /// A navigation link was followed.
    pub fn link_clicked(&mut self, in_dropdown: bool) {
        self.close_menu();
        if in_dropdown {
            self.close_dropdown();
        }
    }
}

fn aria(open: bool) -> &'static str {
    if open {
        "true"
    } else {
        "false"
    }
}
