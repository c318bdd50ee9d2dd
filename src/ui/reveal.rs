//! Reveal-on-scroll.

use std::collections::HashSet;
use tracing::debug;

/// Visible fraction at which the host's intersection observer reports.
///
/// The tracker does not gate on it: any intersecting report reveals.
pub const REVEAL_THRESHOLD: f32 = 0.15;

/// Tracks which elements are still waiting to be revealed.
///
/// Elements are revealed once and never hidden again.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f32,
    observed: HashSet<String>,
    visible: HashSet<String>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::with_threshold(REVEAL_THRESHOLD)
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            threshold,
            observed: HashSet::new(),
            visible: HashSet::new(),
        }
    }

    /// Observer threshold the host should register with.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Start watching an element. Already revealed elements are ignored.
    pub fn observe(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.visible.contains(&id) {
            self.observed.insert(id);
        }
    }

    /// Intersection report for an element. Returns `true` when the element
    /// should become visible now; the host then adds its visible class.
    /// `ratio` is only logged.
    pub fn on_intersection(&mut self, id: &str, ratio: f32, is_intersecting: bool) -> bool {
        if !is_intersecting || !self.observed.remove(id) {
            return false;
        }
        debug!(id, ratio, "revealed");
        self.visible.insert(id.to_string());
        true
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.contains(id)
    }

    pub fn is_observed(&self, id: &str) -> bool {
        self.observed.contains(id)
    }

    /// Elements still waiting.
    pub fn pending(&self) -> usize {
        self.observed.len()
    }
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new()
    }
}
