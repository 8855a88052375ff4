//! The seam to the rendering engine.
//!
//! Everything that touches GPU resources, meshes, fonts or shaders lives
//! behind [`Backend`]. The stage only describes what should be drawn.

use crate::scene::{NodeKind, Stage};
use thiserror::Error;

/// Errors reported by a backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The render target is gone and must be recreated.
    #[error("render surface lost")]
    SurfaceLost,

    /// Any other engine failure.
    #[error("backend failure: {0}")]
    Other(String),
}

/// Render statistics for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderInfo {
    /// Number of draw calls.
    pub draw_calls: u32,
    /// Number of lights submitted.
    pub lights: u32,
    /// Frame number.
    pub frame: u64,
}

/// A rendering engine that can draw a [`Stage`].
pub trait Backend {
    /// Draw one frame of `stage`.
    fn render(&mut self, stage: &Stage) -> Result<RenderInfo, BackendError>;

    /// React to a viewport size change.
    fn resize(&mut self, _width: u32, _height: u32) {}
}

/// Backend that draws nothing and only counts.
#[derive(Debug, Clone, Default)]
pub struct HeadlessBackend {
    frames: u64,
    size: (u32, u32),
    last: RenderInfo,
}

impl HeadlessBackend {
    /// Create a new headless backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames rendered so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Last size passed to `resize`.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Statistics of the last frame.
    #[inline]
    pub fn last_info(&self) -> RenderInfo {
        self.last
    }
}

impl Backend for HeadlessBackend {
    fn render(&mut self, stage: &Stage) -> Result<RenderInfo, BackendError> {
        let mut info = RenderInfo::default();
        for node in stage.nodes().iter().filter(|n| n.visible) {
            match node.kind() {
                NodeKind::Mesh { .. } => info.draw_calls += 1,
                NodeKind::Light(_) => info.lights += 1,
            }
        }
        self.frames += 1;
        info.frame = self.frames;
        self.last = info;
        log::trace!("headless frame {}: {:?}", self.frames, info);
        Ok(info)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Cube;
    use crate::light::AmbientLight;
    use crate::material::MaterialOptions;

    #[test]
    fn test_counts_visible_meshes_and_lights() {
        let mut stage = Stage::default();
        let a = stage.cube(Cube::default(), MaterialOptions::new()).unwrap();
        stage.cube(Cube::uniform(2.0), MaterialOptions::new()).unwrap();
        stage.light(AmbientLight::default());
        stage.set_visible(a, false).unwrap();

        let mut backend = HeadlessBackend::new();
        let info = backend.render(&stage).unwrap();
        assert_eq!(info, RenderInfo { draw_calls: 1, lights: 1, frame: 1 });
        assert_eq!(backend.frames(), 1);
        assert_eq!(backend.last_info(), info);
    }
}
