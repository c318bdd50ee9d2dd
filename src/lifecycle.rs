//! Start/stop lifecycle around the frame loop.
//!
//! An [`Animation`] ties a [`ParticleField`] to a surface and a host. The host
//! owns the real frame callback ("run this before the next repaint") and the
//! input listeners; the animation tells it when to schedule, cancel, attach
//! and detach them.
//!
//! ```text
//!   Idle --start--> Running --stop / StopHandle--> Stopped
//! ```
//!
//! The stop flag is checked at the top of every frame, so a
//! [`StopHandle`] signalled from anywhere ends the loop on the next callback
//! and releases the host's listeners.

use crate::field::ParticleField;
use crate::input::{InputEvent, Pointer};
use crate::surface::DrawSurface;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Host-side scheduling and listener registration.
pub trait FrameHost {
    /// Schedule one frame callback.
    fn request_frame(&mut self);
    /// Drop a pending frame callback, if any.
    fn cancel_frame(&mut self);
    /// Start delivering pointer/resize events to the animation.
    fn attach_listeners(&mut self);
    /// Stop delivering events.
    fn detach_listeners(&mut self);
}

/// Shared cancellation flag.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the animation to stop at its next frame.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Idle,
    Running,
    Stopped,
}

/// Result of one frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// A frame was drawn and the next one requested.
    Continue,
    /// The animation is over; nothing was drawn.
    Stopped,
}

/// A particle field animating on a surface.
pub struct Animation<S: DrawSurface> {
    field: ParticleField,
    surface: S,
    pointer: Pointer,
    stop: StopHandle,
    state: AnimationState,
    frames: u64,
}

impl<S: DrawSurface> Animation<S> {
    pub fn new(field: ParticleField, surface: S) -> Self {
        Self::with_stop_handle(field, surface, StopHandle::new())
    }

    /// Animation observing an existing stop flag.
    pub fn with_stop_handle(field: ParticleField, surface: S, stop: StopHandle) -> Self {
        Self {
            field,
            surface,
            pointer: Pointer::new(),
            stop,
            state: AnimationState::Idle,
            frames: 0,
        }
    }

    /// Handle that can stop this animation from elsewhere.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    /// Attach listeners and request the first frame.
    pub fn start<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        if self.state != AnimationState::Idle {
            return;
        }
        if self.stop.is_stopped() {
            self.state = AnimationState::Stopped;
            return;
        }
        host.attach_listeners();
        host.request_frame();
        self.state = AnimationState::Running;
        info!(particles = self.field.len(), "animation started");
    }

    /// Apply an input event. Ignored unless running.
    pub fn handle_event(&mut self, event: &InputEvent) {
        if self.state != AnimationState::Running {
            return;
        }
        match *event {
            InputEvent::PointerMoved(position) => self.pointer.move_to(position),
            InputEvent::PointerLeft => self.pointer.leave(),
            InputEvent::Resized(viewport) => {
                debug!(width = viewport.width, height = viewport.height, "surface resized");
                self.field.resize(viewport, &mut self.surface);
            }
            InputEvent::KeyPressed(_) | InputEvent::Clicked(_) => {}
        }
    }

    /// The frame callback. Draws one frame and schedules the next, or tears
    /// down if a stop was requested.
    pub fn on_frame<H: FrameHost + ?Sized>(&mut self, host: &mut H) -> FrameStatus {
        match self.state {
            AnimationState::Running if !self.stop.is_stopped() => {
                self.field.frame(&mut self.surface, &self.pointer);
                self.frames += 1;
                host.request_frame();
                FrameStatus::Continue
            }
            AnimationState::Running => {
                self.dispose(host);
                FrameStatus::Stopped
            }
            AnimationState::Idle | AnimationState::Stopped => FrameStatus::Stopped,
        }
    }

    /// Stop now: cancel the pending frame and detach listeners.
    pub fn stop<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        self.stop.stop();
        match self.state {
            AnimationState::Running => self.dispose(host),
            AnimationState::Idle => self.state = AnimationState::Stopped,
            AnimationState::Stopped => {}
        }
    }

    fn dispose<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        host.cancel_frame();
        host.detach_listeners();
        self.state = AnimationState::Stopped;
        info!(frames = self.frames, "animation stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::config::FieldConfig;
    use crate::particle::Particle;
    use crate::surface::{DrawCommand, Recorder, Viewport};
    use glam::Vec2;

    #[derive(Debug, Default)]
    struct MockHost {
        requested: u32,
        cancelled: u32,
        attached: u32,
        detached: u32,
    }

    impl FrameHost for MockHost {
        fn request_frame(&mut self) {
            self.requested += 1;
        }
        fn cancel_frame(&mut self) {
            self.cancelled += 1;
        }
        fn attach_listeners(&mut self) {
            self.attached += 1;
        }
        fn detach_listeners(&mut self) {
            self.detached += 1;
        }
    }

    fn animation() -> Animation<Recorder> {
        let particles = vec![Particle::new(Vec2::new(100.0, 100.0), Vec2::ZERO, 1.0, Rgba::TEAL)];
        let viewport = Viewport::new(800.0, 600.0);
        let field = ParticleField::from_particles(&FieldConfig::default(), viewport, particles);
        Animation::new(field, Recorder::new())
    }

    #[test]
    fn test_start_schedules_first_frame_once() {
        let mut host = MockHost::default();
        let mut anim = animation();
        anim.start(&mut host);
        anim.start(&mut host);
        assert_eq!(anim.state(), AnimationState::Running);
        assert_eq!(host.attached, 1);
        assert_eq!(host.requested, 1);
    }

    #[test]
    fn test_frames_reschedule_until_stopped() {
        let mut host = MockHost::default();
        let mut anim = animation();
        anim.start(&mut host);
        for _ in 0..3 {
            assert_eq!(anim.on_frame(&mut host), FrameStatus::Continue);
        }
        assert_eq!(anim.frames(), 3);
        assert_eq!(host.requested, 4);

        anim.stop_handle().stop();
        assert_eq!(anim.on_frame(&mut host), FrameStatus::Stopped);
        assert_eq!(anim.on_frame(&mut host), FrameStatus::Stopped);
        assert_eq!(anim.frames(), 3);
        assert_eq!(host.requested, 4);
        assert_eq!(host.cancelled, 1);
        assert_eq!(host.detached, 1);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut host = MockHost::default();
        let mut anim = animation();
        anim.start(&mut host);
        anim.stop(&mut host);
        anim.stop(&mut host);
        assert_eq!(anim.state(), AnimationState::Stopped);
        assert_eq!(host.detached, 1);
        assert_eq!(host.cancelled, 1);
    }

    #[test]
    fn test_stop_before_start_never_attaches() {
        let mut host = MockHost::default();
        let mut anim = animation();
        anim.stop_handle().stop();
        anim.start(&mut host);
        assert_eq!(anim.state(), AnimationState::Stopped);
        assert_eq!(host.attached, 0);
        assert_eq!(host.requested, 0);
    }

    #[test]
    fn test_shared_handle_stops_from_another_thread() {
        let mut host = MockHost::default();
        let handle = StopHandle::new();
        let field = animation().field().clone();
        let mut anim = Animation::with_stop_handle(field, Recorder::new(), handle.clone());
        anim.start(&mut host);
        assert_eq!(anim.on_frame(&mut host), FrameStatus::Continue);

        std::thread::spawn(move || handle.stop()).join().unwrap();
        assert_eq!(anim.on_frame(&mut host), FrameStatus::Stopped);
        assert_eq!(anim.state(), AnimationState::Stopped);
        assert_eq!(host.detached, 1);
    }

    #[test]
    fn test_events_update_pointer_and_viewport() {
        let mut host = MockHost::default();
        let mut anim = animation();

        // Not running yet: ignored
        anim.handle_event(&InputEvent::PointerMoved(Vec2::new(1.0, 1.0)));
        assert_eq!(anim.pointer().position(), None);

        anim.start(&mut host);
        anim.handle_event(&InputEvent::PointerMoved(Vec2::new(120.0, 100.0)));
        assert_eq!(anim.pointer().position(), Some(Vec2::new(120.0, 100.0)));

        anim.on_frame(&mut host);
        // Pointer 20 units to the right pushes the particle left
        assert!(anim.field().particles()[0].velocity.x < 0.0);

        anim.handle_event(&InputEvent::PointerLeft);
        assert_eq!(anim.pointer().position(), None);

        anim.handle_event(&InputEvent::Resized(Viewport::new(640.0, 480.0)));
        assert_eq!(anim.field().viewport(), Viewport::new(640.0, 480.0));
        assert_eq!(
            anim.surface().commands.last(),
            Some(&DrawCommand::Resize(Viewport::new(640.0, 480.0)))
        );
    }
}
