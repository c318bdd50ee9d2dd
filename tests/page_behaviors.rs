//! Integration tests for the page behaviors, wired the way a host page would.

use antigravity::error::ClipboardError;
use antigravity::ui::{
    active_links, current_page, section_active, Clipboard, ClickTarget, CodeBlock, Lightbox,
    LightboxTarget, Navigation, RevealTracker, Trigger, COPIED_LABEL,
};
use antigravity::KeyCode;
use std::time::{Duration, Instant};

const NAV_HREFS: [&str; 5] = [
    "index.html",
    "index.html#about",
    "week1.html",
    "week2.html",
    "contact.html",
];

#[test]
fn test_week_page_navigation() {
    let page = current_page("/portfolio/week2.html");
    assert_eq!(active_links(&NAV_HREFS, page, ""), vec![3]);
    assert!(section_active(page));

    let mut nav = Navigation::new(None, true);
    nav.toggle_menu();
    nav.toggle_dropdown();
    assert_eq!(nav.aria_expanded_dropdown(), "true");

    // Following a week link from the dropdown closes everything
    nav.link_clicked(true);
    assert_eq!(nav.aria_expanded_menu(), "false");
    assert_eq!(nav.aria_expanded_dropdown(), "false");
}

#[test]
fn test_home_page_hash_changes() {
    let page = current_page("/portfolio/");
    assert_eq!(page, "index.html");
    assert!(!section_active(page));

    assert_eq!(active_links(&NAV_HREFS, page, ""), vec![0]);
    assert_eq!(active_links(&NAV_HREFS, page, "#about"), vec![1]);
    assert_eq!(active_links(&NAV_HREFS, page, "#missing"), vec![0]);
}

#[test]
fn test_escape_closes_menu_and_lightbox() {
    let mut nav = Navigation::new(Some("main-nav".into()), false);
    let mut lightbox = Lightbox::new();

    nav.toggle_menu();
    lightbox.open(&Trigger::new("img/wiring.jpg").with_sibling_text("Wiring diagram"));
    assert_eq!(lightbox.caption(), "Wiring diagram");

    for key in [KeyCode::Tab, KeyCode::Escape] {
        nav.handle_key(key);
        lightbox.handle_key(key);
    }
    assert!(!nav.menu_open());
    assert!(!lightbox.is_active());
    assert!(!lightbox.scroll_locked());
}

#[test]
fn test_lightbox_close_button() {
    let mut lightbox = Lightbox::new();
    lightbox.open(&Trigger::new("a.png"));
    lightbox.handle_click(LightboxTarget::CloseButton);
    assert!(!lightbox.is_active());
}

#[test]
fn test_outside_click_and_wide_resize() {
    let mut nav = Navigation::new(None, true);
    nav.toggle_menu();
    nav.toggle_dropdown();
    nav.handle_click(ClickTarget::Outside);
    assert!(!nav.menu_open() && !nav.dropdown_open());

    nav.toggle_menu();
    nav.handle_resize(1280.0);
    assert!(!nav.menu_open());
}

#[test]
fn test_sections_reveal_as_they_scroll_in() {
    let mut reveal = RevealTracker::new();
    for id in ["intro", "projects", "contact"] {
        reveal.observe(id);
    }

    let scroll = [
        ("intro", 1.0, true),
        ("contact", 0.0, false),
        ("projects", 0.05, true),
        ("projects", 0.4, true),
        ("intro", 0.0, false),
    ];
    let revealed: Vec<&str> = scroll
        .iter()
        .filter(|(id, ratio, hit)| reveal.on_intersection(id, *ratio, *hit))
        .map(|(id, _, _)| *id)
        .collect();

    assert_eq!(revealed, vec!["intro", "projects"]);
    assert!(reveal.is_visible("intro"));
    assert_eq!(reveal.pending(), 1);
}

struct FlakyClipboard {
    fail_next: bool,
    copied: Vec<String>,
}

impl Clipboard for FlakyClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if std::mem::take(&mut self.fail_next) {
            return Err(ClipboardError::Unavailable("no focus".into()));
        }
        self.copied.push(text.to_string());
        Ok(())
    }
}

#[test]
fn test_code_block_copy_retry() {
    let mut block = CodeBlock::new("cargo bench", "Copy");
    let mut clipboard = FlakyClipboard {
        fail_next: true,
        copied: Vec::new(),
    };
    let t0 = Instant::now();

    assert!(!block.copy(&mut clipboard, t0));
    assert_eq!(block.label(), "Copy");

    assert!(block.copy(&mut clipboard, t0 + Duration::from_millis(100)));
    assert_eq!(block.label(), COPIED_LABEL);
    assert_eq!(clipboard.copied, vec!["cargo bench"]);

    block.tick(t0 + Duration::from_millis(2100));
    assert_eq!(block.label(), "Copy");

    block.header_clicked(false);
    assert!(!block.is_expanded());
}
