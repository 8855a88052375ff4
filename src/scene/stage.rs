//! The declarative stage.

use super::{Node, NodeKind, Transform};
use crate::animation::{Channel, Easing, Sample, Spin, Tween, TweenTarget};
use crate::camera::PerspectiveCamera;
use crate::controls::{OrbitError, OrbitState};
use crate::core::{IdAllocator, NodeId, StageConfig};
use crate::geometry::{Cube, Plane, Shape, ShapeError, Sphere, Text};
use crate::light::Light;
use crate::material::MaterialOptions;
use crate::math::{Color, Degrees, Euler, Vector3};
use thiserror::Error;

/// Errors from stage operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StageError {
    /// No node has this id (never added, or removed).
    #[error("no node with id {0}")]
    UnknownNode(NodeId),

    /// Shape parameters were rejected.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// The orbit could not be applied.
    #[error(transparent)]
    Orbit(#[from] OrbitError),
}

/// Nodes, camera and running animations.
#[derive(Debug, Clone)]
pub struct Stage {
    config: StageConfig,
    camera: PerspectiveCamera,
    nodes: Vec<Node>,
    ids: IdAllocator,
    tweens: Vec<Tween>,
    easing: Easing,
    spin: Option<Spin>,
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(StageConfig::default())
    }
}

impl Stage {
    /// Create an empty stage.
    pub fn new(config: StageConfig) -> Self {
        let camera = PerspectiveCamera::from_config(&config.camera, config.aspect());
        Self {
            config,
            camera,
            nodes: Vec::new(),
            ids: IdAllocator::new(),
            tweens: Vec::new(),
            easing: Easing::default(),
            spin: None,
        }
    }

    /// Start a builder.
    pub fn builder() -> StageBuilder {
        StageBuilder::new()
    }

    /// The configuration the stage was created with.
    #[inline]
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// Background color.
    #[inline]
    pub fn clear_color(&self) -> Color {
        self.config.clear_color
    }

    // --- Nodes ---------------------------------------------------------

    /// Add a node of any kind. Mesh shapes are validated first.
    pub fn add(&mut self, kind: NodeKind) -> Result<NodeId, StageError> {
        if let NodeKind::Mesh { shape, .. } = &kind {
            shape.validate()?;
        }
        let id = self.ids.next_id();
        let name = format!("{}_{}", kind.kind_name(), id.value());
        log::debug!("stage: added {name} ({id})");
        self.nodes.push(Node::new(id, name, kind));
        Ok(id)
    }

    /// Add a mesh with the given shape and material options.
    pub fn mesh(
        &mut self,
        shape: impl Into<Shape>,
        material: impl Into<MaterialOptions>,
    ) -> Result<NodeId, StageError> {
        self.add(NodeKind::Mesh {
            shape: shape.into(),
            material: material.into().resolve(),
        })
    }

    /// Add a plane.
    pub fn plane(
        &mut self,
        plane: Plane,
        material: impl Into<MaterialOptions>,
    ) -> Result<NodeId, StageError> {
        self.mesh(plane, material)
    }

    /// Add a cube.
    pub fn cube(
        &mut self,
        cube: Cube,
        material: impl Into<MaterialOptions>,
    ) -> Result<NodeId, StageError> {
        self.mesh(cube, material)
    }

    /// Add a sphere.
    pub fn sphere(
        &mut self,
        sphere: Sphere,
        material: impl Into<MaterialOptions>,
    ) -> Result<NodeId, StageError> {
        self.mesh(sphere, material)
    }

    /// Add a line of text.
    pub fn text(
        &mut self,
        text: Text,
        material: impl Into<MaterialOptions>,
    ) -> Result<NodeId, StageError> {
        self.mesh(text, material)
    }

    /// Add a light.
    pub fn light(&mut self, light: impl Into<Light>) -> NodeId {
        let id = self.ids.next_id();
        let light = light.into();
        let name = format!("{}_{}", light.kind_name(), id.value());
        log::debug!("stage: added {name} ({id})");
        self.nodes.push(Node::new(id, name, NodeKind::Light(light)));
        id
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Result<&Node, StageError> {
        self.nodes
            .iter()
            .find(|n| n.id() == id)
            .ok_or(StageError::UnknownNode(id))
    }

    /// Look up a node mutably.
    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, StageError> {
        self.nodes
            .iter_mut()
            .find(|n| n.id() == id)
            .ok_or(StageError::UnknownNode(id))
    }

    /// All nodes in insertion order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the stage has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node with this name.
    pub fn find(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name() == name)
    }

    /// Rename a node.
    pub fn rename(&mut self, id: NodeId, name: impl Into<String>) -> Result<(), StageError> {
        self.node_mut(id)?.set_name(name);
        Ok(())
    }

    /// Remove a node and any animation targeting it.
    pub fn remove(&mut self, id: NodeId) -> Result<Node, StageError> {
        let index = self
            .nodes
            .iter()
            .position(|n| n.id() == id)
            .ok_or(StageError::UnknownNode(id))?;
        self.tweens.retain(|t| t.target() != TweenTarget::Node(id));
        log::debug!("stage: removed {id}");
        Ok(self.nodes.remove(index))
    }

    /// Place a node, cancelling any running move.
    pub fn pos(&mut self, id: NodeId, position: impl Into<Vector3>) -> Result<(), StageError> {
        self.node_mut(id)?.transform.set_position(position);
        self.cancel_position(TweenTarget::Node(id));
        Ok(())
    }

    /// Move a node by an offset, cancelling any running move.
    pub fn translate(&mut self, id: NodeId, offset: impl Into<Vector3>) -> Result<(), StageError> {
        self.node_mut(id)?.transform.translate(offset);
        self.cancel_position(TweenTarget::Node(id));
        Ok(())
    }

    /// Set a node's rotation immediately, cancelling any running turn.
    pub fn rotate(&mut self, id: NodeId, rotation: Euler) -> Result<(), StageError> {
        self.node_mut(id)?.transform.set_rotation(rotation);
        self.cancel_rotation(TweenTarget::Node(id));
        Ok(())
    }

    /// Turn a node to `rotation` over `seconds`, the short way on every axis.
    pub fn rotate_to(
        &mut self,
        id: NodeId,
        rotation: Euler,
        seconds: f32,
    ) -> Result<(), StageError> {
        let from = self.node(id)?.transform.rotation;
        self.start(Tween::rotation(TweenTarget::Node(id), from, rotation, seconds));
        Ok(())
    }

    /// Move a node to `position` over `seconds`.
    pub fn move_to(
        &mut self,
        id: NodeId,
        position: impl Into<Vector3>,
        seconds: f32,
    ) -> Result<(), StageError> {
        let from = self.node(id)?.transform.position;
        self.start(Tween::position(TweenTarget::Node(id), from, position.into(), seconds));
        Ok(())
    }

    /// Set a node's scale.
    pub fn scale(&mut self, id: NodeId, scale: impl Into<Vector3>) -> Result<(), StageError> {
        self.node_mut(id)?.transform.set_scale(scale);
        Ok(())
    }

    /// Show or hide a node.
    pub fn set_visible(&mut self, id: NodeId, visible: bool) -> Result<(), StageError> {
        self.node_mut(id)?.visible = visible;
        Ok(())
    }

    // --- Camera --------------------------------------------------------

    /// The camera.
    #[inline]
    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    /// The camera, mutably.
    #[inline]
    pub fn camera_mut(&mut self) -> &mut PerspectiveCamera {
        &mut self.camera
    }

    /// Place the camera, cancelling any running camera move.
    pub fn move_camera(&mut self, position: impl Into<Vector3>) {
        self.camera.set_position(position);
        self.cancel_position(TweenTarget::Camera);
    }

    /// Move the camera to `position` over `seconds`.
    pub fn move_camera_to(&mut self, position: impl Into<Vector3>, seconds: f32) {
        let from = self.camera.position();
        self.start(Tween::position(TweenTarget::Camera, from, position.into(), seconds));
    }

    /// Set the camera rotation immediately, cancelling any running turn.
    pub fn rotate_camera(&mut self, rotation: Euler) {
        self.camera.set_rotation(rotation);
        self.cancel_rotation(TweenTarget::Camera);
    }

    /// Turn the camera to `rotation` over `seconds`, the short way on every
    /// axis.
    pub fn rotate_camera_to(&mut self, rotation: Euler, seconds: f32) {
        let from = self.camera.rotation();
        self.start(Tween::rotation(TweenTarget::Camera, from, rotation, seconds));
    }

    /// Aim the camera at a point.
    pub fn camera_look_at(&mut self, target: impl Into<Vector3>) {
        self.camera.look_at(target);
        self.cancel_rotation(TweenTarget::Camera);
    }

    /// Orbit the camera one step.
    pub fn orbit_camera(&mut self, orbit: &OrbitState, angle: Degrees) -> Result<(), StageError> {
        self.camera.orbit(orbit, angle)?;
        Ok(())
    }

    /// Orbit the camera continuously, `degrees_per_second` every second.
    ///
    /// Replaces any running spin. Unsupported axes are rejected up front.
    pub fn spin_camera(
        &mut self,
        orbit: OrbitState,
        degrees_per_second: f32,
    ) -> Result<(), StageError> {
        orbit.orbit_point(self.camera.position(), Degrees::ZERO)?;
        log::debug!("stage: camera spin at {degrees_per_second}°/s around {:?}", orbit.target);
        self.spin = Some(Spin::new(orbit, degrees_per_second));
        Ok(())
    }

    /// The running camera spin, if any.
    #[inline]
    pub fn camera_spin(&self) -> Option<&Spin> {
        self.spin.as_ref()
    }

    /// Stop the camera spin and every camera tween.
    pub fn stop_camera(&mut self) {
        self.spin = None;
        self.tweens.retain(|t| t.target() != TweenTarget::Camera);
    }

    // --- Animation -----------------------------------------------------

    /// Easing curve for tweens started from now on.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Easing curve used by new tweens.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Whether any tween or spin is running.
    pub fn is_animating(&self) -> bool {
        !self.tweens.is_empty() || self.spin.is_some()
    }

    /// Advance every animation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        for tween in &mut self.tweens {
            let finished = tween.advance(dt);
            let transform = match tween.target() {
                TweenTarget::Camera => Some(&mut self.camera.transform),
                TweenTarget::Node(id) => self
                    .nodes
                    .iter_mut()
                    .find(|n| n.id() == id)
                    .map(|n| &mut n.transform),
            };
            if let Some(transform) = transform {
                apply_sample(transform, tween.sample(), finished);
            }
        }
        self.tweens.retain(|t| !t.is_finished());

        if let Some(spin) = self.spin {
            let angle = Degrees(spin.degrees_per_second * dt);
            if let Err(e) = spin.orbit.step(&mut self.camera.transform, angle) {
                log::warn!("stage: dropping camera spin: {e}");
                self.spin = None;
            }
        }
    }

    fn start(&mut self, tween: Tween) {
        let tween = tween.with_easing(self.easing);
        log::debug!("stage: tween {:?} on {:?}", tween.channel(), tween.target());
        self.tweens.retain(|t| !t.overlaps(&tween));
        self.tweens.push(tween);
    }

    fn cancel_position(&mut self, target: TweenTarget) {
        self.tweens
            .retain(|t| !(t.target() == target && matches!(t.channel(), Channel::Position { .. })));
    }

    fn cancel_rotation(&mut self, target: TweenTarget) {
        self.tweens
            .retain(|t| !(t.target() == target && matches!(t.channel(), Channel::Rotation { .. })));
    }
}

fn apply_sample(transform: &mut Transform, sample: Sample, finished: bool) {
    match sample {
        Sample::Position(p) => transform.position = p,
        // Settle into the canonical range once the turn is complete.
        Sample::Rotation(r) if finished => transform.set_rotation(r),
        Sample::Rotation(r) => transform.rotation = r,
    }
}

/// Builder for configuring a stage.
#[derive(Debug, Clone, Default)]
pub struct StageBuilder {
    config: StageConfig,
}

impl StageBuilder {
    /// Create a new stage builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: StageConfig) -> Self {
        Self { config }
    }

    /// Set the viewport size.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    /// Set the background color.
    pub fn clear_color(mut self, color: impl Into<Color>) -> Self {
        self.config.clear_color = color.into();
        self
    }

    /// Set anti-aliasing.
    pub fn antialias(mut self, enabled: bool) -> Self {
        self.config.antialias = enabled;
        self
    }

    /// Set the camera field of view.
    pub fn fov(mut self, fov: Degrees) -> Self {
        self.config.camera.fov = fov;
        self
    }

    /// Set the camera start position.
    pub fn camera_position(mut self, position: impl Into<Vector3>) -> Self {
        self.config.camera.position = position.into();
        self
    }

    /// Set the point the camera starts facing.
    pub fn camera_look_at(mut self, target: impl Into<Vector3>) -> Self {
        self.config.camera.look_at = target.into();
        self
    }

    /// Build the stage.
    pub fn build(self) -> Stage {
        Stage::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{OrbitAxis, OrbitOptions};
    use crate::light::PointLight;
    use crate::material::MaterialKind;
    use crate::math::consts::TWO_PI;
    use approx::assert_abs_diff_eq;

    fn stage_with_cube() -> (Stage, NodeId) {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut stage = Stage::default();
        let id = stage.cube(Cube::default(), MaterialOptions::new()).unwrap();
        (stage, id)
    }

    #[test]
    fn test_constructors_assign_ids_and_names() {
        let mut stage = Stage::default();
        let plane = stage.plane(Plane::new(4.0, 4.0), Color::GRAY).unwrap();
        let sphere = stage.sphere(Sphere::new(0.5), MaterialOptions::new()).unwrap();
        let text = stage.text(Text::new("hi"), MaterialOptions::color(Color::RED)).unwrap();
        let light = stage.light(PointLight::default());

        assert_eq!(stage.len(), 4);
        assert!(plane < sphere && sphere < text && text < light);
        assert_eq!(stage.node(plane).unwrap().name(), "plane_0");
        assert_eq!(stage.find("point_3").map(Node::id), Some(light));
        assert_eq!(stage.node(plane).unwrap().material().unwrap().color, Color::GRAY);
        assert_eq!(stage.node(text).unwrap().material().unwrap().kind, MaterialKind::Standard);
        assert!(stage.node(light).unwrap().light().is_some());
    }

    #[test]
    fn test_invalid_shape_is_rejected() {
        let mut stage = Stage::default();
        let err = stage.cube(Cube::new(1.0, 0.0, 1.0), MaterialOptions::new()).unwrap_err();
        assert!(matches!(
            err,
            StageError::Shape(ShapeError::InvalidDimension { field: "height", .. })
        ));
        assert!(stage.is_empty());
    }

    #[test]
    fn test_ids_are_not_reused_after_remove() {
        let (mut stage, first) = stage_with_cube();
        stage.remove(first).unwrap();
        let second = stage.cube(Cube::default(), MaterialOptions::new()).unwrap();
        assert_ne!(first, second);
        assert_eq!(stage.node(first).unwrap_err(), StageError::UnknownNode(first));
        assert!(stage.remove(first).is_err());
    }

    #[test]
    fn test_pos_translate_scale() {
        let (mut stage, id) = stage_with_cube();
        stage.pos(id, [1.0, 2.0, 3.0]).unwrap();
        stage.translate(id, (0.0, -2.0, 0.0)).unwrap();
        stage.scale(id, Vector3::splat(2.0)).unwrap();
        let t = stage.node(id).unwrap().transform;
        assert_eq!(t.position, Vector3::new(1.0, 0.0, 3.0));
        assert_eq!(t.scale, Vector3::splat(2.0));
    }

    #[test]
    fn test_rotate_is_immediate_and_normalized() {
        let (mut stage, id) = stage_with_cube();
        stage.rotate(id, Euler::xyz(0.0, TWO_PI + 0.5, 0.0)).unwrap();
        assert_abs_diff_eq!(stage.node(id).unwrap().transform.rotation.y, 0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_rotate_to_takes_short_way_and_settles() {
        let (mut stage, id) = stage_with_cube();
        stage.rotate(id, Euler::xyz(0.0, 3.0, 0.0)).unwrap();
        stage.rotate_to(id, Euler::xyz(0.0, -3.0, 0.0), 1.0).unwrap();

        stage.update(0.5);
        let mid = stage.node(id).unwrap().transform.rotation.y;
        // Halfway along the short arc through π, not back through zero.
        assert_abs_diff_eq!(mid, (3.0 + (-3.0 + TWO_PI)) / 2.0, epsilon = 1e-5);
        assert!(mid > 3.0);

        stage.update(0.5);
        let end = stage.node(id).unwrap().transform.rotation.y;
        assert_abs_diff_eq!(end, -3.0 + TWO_PI, epsilon = 1e-5);
        assert!(!stage.is_animating());
    }

    #[test]
    fn test_pos_cancels_running_move() {
        let (mut stage, id) = stage_with_cube();
        stage.move_to(id, [10.0, 0.0, 0.0], 1.0).unwrap();
        stage.update(0.5);
        stage.pos(id, [0.0, 1.0, 0.0]).unwrap();
        stage.update(0.5);
        assert_eq!(stage.node(id).unwrap().transform.position, Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_translate_cancels_running_move() {
        let (mut stage, id) = stage_with_cube();
        stage.move_to(id, [10.0, 0.0, 0.0], 1.0).unwrap();
        stage.update(0.5);
        stage.translate(id, [0.0, 3.0, 0.0]).unwrap();
        assert!(!stage.is_animating());
        stage.update(0.5);
        let p = stage.node(id).unwrap().transform.position;
        assert!(p.approx_eq(&Vector3::new(5.0, 3.0, 0.0), 1e-5), "{p:?}");
    }

    #[test]
    fn test_easing_applies_to_new_tweens() {
        let (mut stage, id) = stage_with_cube();
        stage.set_easing(Easing::Step);
        assert_eq!(stage.easing(), Easing::Step);
        stage.move_to(id, [4.0, 0.0, 0.0], 1.0).unwrap();
        stage.update(0.5);
        assert_eq!(stage.node(id).unwrap().transform.position, Vector3::ZERO);
        stage.update(0.5);
        assert_eq!(stage.node(id).unwrap().transform.position, Vector3::new(4.0, 0.0, 0.0));

        stage.set_easing(Easing::SmoothStep);
        stage.move_to(id, [0.0, 0.0, 0.0], 1.0).unwrap();
        stage.update(0.25);
        let x = stage.node(id).unwrap().transform.position.x;
        assert_abs_diff_eq!(x, 4.0 - 4.0 * Easing::SmoothStep.apply(0.25), epsilon = 1e-5);
    }

    #[test]
    fn test_top_down_camera_keeps_finite_rotation() {
        let mut stage = Stage::builder().camera_position([0.0, 10.0, 0.0]).build();
        let finite = |e: Euler| e.x.is_finite() && e.y.is_finite() && e.z.is_finite();
        assert!(finite(stage.camera().rotation()), "{:?}", stage.camera().rotation());
        assert!(stage.camera().forward().approx_eq(&Vector3::new(0.0, -1.0, 0.0), 1e-4));

        stage.camera_look_at([0.0, 0.0, 0.0]);
        stage.spin_camera(OrbitState::default(), 90.0).unwrap();
        stage.update(1.0);
        assert!(finite(stage.camera().rotation()), "{:?}", stage.camera().rotation());
        assert!(stage.camera().position().approx_eq(&Vector3::new(0.0, 10.0, 0.0), 1e-4));
    }

    #[test]
    fn test_new_tween_replaces_overlapping_one() {
        let (mut stage, id) = stage_with_cube();
        stage.move_to(id, [10.0, 0.0, 0.0], 1.0).unwrap();
        stage.move_to(id, [0.0, 0.0, 4.0], 1.0).unwrap();
        stage.update(1.0);
        let p = stage.node(id).unwrap().transform.position;
        assert!(p.approx_eq(&Vector3::new(0.0, 0.0, 4.0), 1e-6));
    }

    #[test]
    fn test_remove_drops_tweens() {
        let (mut stage, id) = stage_with_cube();
        stage.move_to(id, [1.0, 0.0, 0.0], 1.0).unwrap();
        stage.remove(id).unwrap();
        assert!(!stage.is_animating());
    }

    #[test]
    fn test_unknown_node_errors() {
        let mut stage = Stage::default();
        let ghost = NodeId::from_raw(7);
        assert_eq!(stage.pos(ghost, [0.0, 0.0, 0.0]), Err(StageError::UnknownNode(ghost)));
        assert!(stage.rotate_to(ghost, Euler::ZERO, 1.0).is_err());
        assert!(stage.set_visible(ghost, false).is_err());
    }

    #[test]
    fn test_camera_rotate_to_short_way() {
        let mut stage = Stage::default();
        stage.rotate_camera(Euler::xyz(0.0, -3.0, 0.0));
        stage.rotate_camera_to(Euler::xyz(0.0, 3.0, 0.0), 2.0);
        stage.update(2.0);
        assert_abs_diff_eq!(stage.camera().rotation().y, 3.0 - TWO_PI, epsilon = 1e-5);
    }

    #[test]
    fn test_camera_move_and_look() {
        let mut stage = Stage::default();
        stage.move_camera_to([0.0, 10.0, 10.0], 1.0);
        stage.update(1.0);
        stage.camera_look_at([0.0, 0.0, 0.0]);
        let forward = stage.camera().forward();
        let expected = Vector3::new(0.0, -1.0, -1.0).normalized();
        assert!(forward.approx_eq(&expected, 1e-4), "{forward:?}");
    }

    #[test]
    fn test_orbit_camera_quarter_turn() {
        let mut stage = Stage::default();
        stage.orbit_camera(&OrbitState::default(), Degrees(90.0)).unwrap();
        assert!(stage.camera().position().approx_eq(&Vector3::new(5.0, 0.0, 0.0), 1e-4));
    }

    #[test]
    fn test_orbit_camera_unsupported_axis() {
        let mut stage = Stage::default();
        let before = stage.camera().position();
        let orbit = OrbitState::default().with_options(OrbitOptions::new().axis(OrbitAxis::Z));
        let err = stage.orbit_camera(&orbit, Degrees(30.0)).unwrap_err();
        assert_eq!(err, StageError::Orbit(OrbitError::UnsupportedAxis(OrbitAxis::Z)));
        assert_eq!(stage.camera().position(), before);
        assert!(stage.spin_camera(orbit, 10.0).is_err());
        assert!(stage.camera_spin().is_none());
    }

    #[test]
    fn test_spin_and_stop() {
        let mut stage = Stage::default();
        stage.spin_camera(OrbitState::default(), 180.0).unwrap();
        stage.update(1.0);
        assert!(stage.camera().position().approx_eq(&Vector3::new(0.0, 0.0, -5.0), 1e-3));
        stage.stop_camera();
        assert!(!stage.is_animating());
        stage.update(1.0);
        assert!(stage.camera().position().approx_eq(&Vector3::new(0.0, 0.0, -5.0), 1e-3));
    }

    #[test]
    fn test_builder() {
        let stage = Stage::builder()
            .size(400, 400)
            .clear_color(0x112233_u32)
            .fov(Degrees(60.0))
            .camera_position([0.0, 5.0, 0.0])
            .camera_look_at([0.0, 0.0, -5.0])
            .antialias(false)
            .build();
        assert_eq!(stage.camera().aspect, 1.0);
        assert_eq!(stage.camera().fov, Degrees(60.0));
        assert_eq!(stage.clear_color().to_hex(), 0x112233);
        assert!(!stage.config().antialias);
        let forward = stage.camera().forward();
        assert!(forward.approx_eq(&Vector3::new(0.0, -1.0, -1.0).normalized(), 1e-4));
    }
}
