//! Frame-driven loop: update the stage, run callbacks, render.
//!
//! The host's frame scheduler calls [`RenderLoop::tick`] (or
//! [`RenderLoop::frame`] with its own delta) once per frame. Nothing here
//! blocks or spawns.

use super::{Backend, BackendError, Clock, RenderInfo};
use crate::scene::{Stage, StageError};
use thiserror::Error;

/// Errors from running a frame.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderLoopError {
    /// The backend failed to draw.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// A frame callback failed.
    #[error("frame callback failed: {0}")]
    Callback(#[from] StageError),
}

/// Timing passed to frame callbacks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Seconds since the first frame.
    pub elapsed: f64,
    /// Frame counter, starting at 1.
    pub frame: u64,
}

type FrameCallback = Box<dyn FnMut(&mut Stage, &FrameInfo) -> Result<(), StageError>>;

/// Owns a stage and a backend and drives them once per frame.
pub struct RenderLoop<B: Backend> {
    stage: Stage,
    backend: B,
    clock: Clock,
    callbacks: Vec<FrameCallback>,
    frame: u64,
    elapsed: f64,
}

impl<B: Backend> RenderLoop<B> {
    /// Create a loop over `stage`, sizing the backend from the stage config.
    pub fn new(stage: Stage, mut backend: B) -> Self {
        let config = stage.config();
        backend.resize(config.width, config.height);
        Self {
            stage,
            backend,
            clock: Clock::new(),
            callbacks: Vec::new(),
            frame: 0,
            elapsed: 0.0,
        }
    }

    /// Register a callback run every frame after animations advance.
    pub fn on_frame<F>(&mut self, callback: F)
    where
        F: FnMut(&mut Stage, &FrameInfo) -> Result<(), StageError> + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// Run one frame with an explicit delta in seconds.
    pub fn frame(&mut self, dt: f32) -> Result<RenderInfo, RenderLoopError> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.frame += 1;
        self.elapsed += f64::from(dt);
        let info = FrameInfo {
            dt,
            elapsed: self.elapsed,
            frame: self.frame,
        };

        self.stage.update(dt);
        for callback in &mut self.callbacks {
            callback(&mut self.stage, &info)?;
        }
        let stats = self.backend.render(&self.stage)?;
        log::trace!("frame {} rendered in loop: {:?}", self.frame, stats);
        Ok(stats)
    }

    /// Run one frame timed by the wall clock.
    pub fn tick(&mut self) -> Result<RenderInfo, RenderLoopError> {
        let dt = self.clock.delta() as f32;
        self.frame(dt)
    }

    /// Run `count` frames of `dt` seconds each, stopping at the first error.
    ///
    /// Returns the statistics of the last frame.
    pub fn run_frames(&mut self, count: u32, dt: f32) -> Result<RenderInfo, RenderLoopError> {
        let mut last = RenderInfo::default();
        for _ in 0..count {
            last = self.frame(dt)?;
        }
        Ok(last)
    }

    /// Propagate a viewport change to the backend and the camera.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.backend.resize(width, height);
        self.stage.camera_mut().set_aspect(width as f32 / height as f32);
        log::debug!("resized to {width}x{height}");
    }

    /// Frames run so far.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// The stage.
    #[inline]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// The stage, mutably.
    #[inline]
    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    /// The backend.
    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Take the stage and backend back.
    pub fn into_parts(self) -> (Stage, B) {
        (self.stage, self.backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::OrbitState;
    use crate::core::HeadlessBackend;
    use crate::geometry::Cube;
    use crate::material::MaterialOptions;
    use crate::math::{Euler, Vector3};
    use approx::assert_abs_diff_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FailingBackend;

    impl Backend for FailingBackend {
        fn render(&mut self, _stage: &Stage) -> Result<RenderInfo, BackendError> {
            Err(BackendError::SurfaceLost)
        }
    }

    #[test]
    fn test_callbacks_see_frame_info() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut render_loop = RenderLoop::new(Stage::default(), HeadlessBackend::new());
        render_loop.on_frame(move |_, info| {
            sink.borrow_mut().push((info.frame, info.elapsed));
            Ok(())
        });
        let info = render_loop.run_frames(3, 0.5).unwrap();
        assert_eq!(info.frame, 3);
        assert_eq!(*seen.borrow(), vec![(1, 0.5), (2, 1.0), (3, 1.5)]);
        assert_eq!(render_loop.backend().size(), (800, 600));
    }

    #[test]
    fn test_callback_drives_rotation() {
        let mut stage = Stage::default();
        let id = stage.cube(Cube::default(), MaterialOptions::new()).unwrap();
        let mut render_loop = RenderLoop::new(stage, HeadlessBackend::new());
        render_loop.on_frame(move |stage, info| {
            let r = stage.node(id)?.transform.rotation;
            stage.rotate(id, Euler::xyz(r.x, r.y + info.dt, r.z))
        });
        render_loop.run_frames(4, 0.25).unwrap();
        let y = render_loop.stage().node(id).unwrap().transform.rotation.y;
        assert_abs_diff_eq!(y, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_animations_advance_before_render() {
        let mut stage = Stage::default();
        let id = stage.cube(Cube::default(), MaterialOptions::new()).unwrap();
        stage.move_to(id, [4.0, 0.0, 0.0], 1.0).unwrap();
        let mut render_loop = RenderLoop::new(stage, HeadlessBackend::new());
        render_loop.frame(0.5).unwrap();
        let p = render_loop.stage().node(id).unwrap().transform.position;
        assert!(p.approx_eq(&Vector3::new(2.0, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn test_spin_orbits_camera_each_frame() {
        let mut stage = Stage::default();
        stage.spin_camera(OrbitState::default(), 90.0).unwrap();
        let mut render_loop = RenderLoop::new(stage, HeadlessBackend::new());
        render_loop.run_frames(2, 0.5).unwrap();
        let p = render_loop.stage().camera().position();
        assert!(p.approx_eq(&Vector3::new(5.0, 0.0, 0.0), 1e-3), "{p:?}");
    }

    #[test]
    fn test_callback_error_stops_frame() {
        let mut render_loop = RenderLoop::new(Stage::default(), HeadlessBackend::new());
        render_loop.on_frame(|stage, _| {
            stage.pos(crate::core::NodeId::from_raw(99), [0.0, 0.0, 0.0])
        });
        let err = render_loop.frame(0.016).unwrap_err();
        assert!(matches!(err, RenderLoopError::Callback(StageError::UnknownNode(_))));
        assert_eq!(render_loop.backend().frames(), 0);
    }

    #[test]
    fn test_backend_error_is_reported() {
        let mut render_loop = RenderLoop::new(Stage::default(), FailingBackend);
        let err = render_loop.tick().unwrap_err();
        assert_eq!(err, RenderLoopError::Backend(BackendError::SurfaceLost));
    }

    #[test]
    fn test_into_parts_returns_stage_and_backend() {
        let mut stage = Stage::default();
        let id = stage.cube(Cube::default(), MaterialOptions::new()).unwrap();
        let mut render_loop = RenderLoop::new(stage, HeadlessBackend::new());
        render_loop.run_frames(2, 0.1).unwrap();
        assert_eq!(render_loop.frame_count(), 2);
        let (stage, backend) = render_loop.into_parts();
        assert!(stage.node(id).is_ok());
        assert_eq!(backend.frames(), 2);
        assert_eq!(backend.last_info().draw_calls, 1);
    }

    #[test]
    fn test_resize_updates_camera_aspect() {
        let mut render_loop = RenderLoop::new(Stage::default(), HeadlessBackend::new());
        render_loop.resize(1000, 500);
        assert_eq!(render_loop.backend().size(), (1000, 500));
        assert_eq!(render_loop.stage().camera().aspect, 2.0);
        render_loop.resize(0, 10);
        assert_eq!(render_loop.backend().size(), (1000, 500));
    }
}
