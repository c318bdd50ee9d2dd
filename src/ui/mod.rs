//! Page behaviors that accompany the animation.
//!
//! Each behavior is a small state machine. The host wires it to its own
//! elements: it forwards clicks, keys and resizes, then applies the state the
//! machine reports (open classes, `aria-expanded` values, labels). When an
//! element a behavior needs does not exist, the host simply does not build
//! that behavior.

pub mod code_block;
pub mod lightbox;
pub mod links;
pub mod nav;
pub mod reveal;

pub use code_block::{Clipboard, CodeBlock, COPIED_LABEL, COPY_FEEDBACK};
pub use lightbox::{Lightbox, LightboxTarget, Trigger};
pub use links::{active_links, current_page, section_active, HOME_PAGE};
pub use nav::{ClickTarget, Navigation, DEFAULT_MENU_ID, MOBILE_BREAKPOINT};
pub use reveal::{RevealTracker, REVEAL_THRESHOLD};
