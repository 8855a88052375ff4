//! Stage nodes.

use super::Transform;
use crate::core::NodeId;
use crate::geometry::Shape;
use crate::light::Light;
use crate::material::Material;

/// What a node is.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A drawable primitive.
    Mesh {
        /// Geometry parameters.
        shape: Shape,
        /// Resolved material.
        material: Material,
    },
    /// A light source.
    Light(Light),
}

impl NodeKind {
    /// Short lowercase name, e.g. `cube` or `point`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            NodeKind::Mesh { shape, .. } => shape.kind_name(),
            NodeKind::Light(light) => light.kind_name(),
        }
    }
}

/// An entry on the stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    name: String,
    kind: NodeKind,
    /// Position, rotation and scale.
    pub transform: Transform,
    /// Whether the backend should draw it.
    pub visible: bool,
}

impl Node {
    pub(crate) fn new(id: NodeId, name: String, kind: NodeKind) -> Self {
        Self {
            id,
            name,
            kind,
            transform: Transform::new(),
            visible: true,
        }
    }

    /// Get the unique ID.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Get the node name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the node name.
    #[inline]
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// What the node is.
    #[inline]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The shape, for meshes.
    pub fn shape(&self) -> Option<&Shape> {
        match &self.kind {
            NodeKind::Mesh { shape, .. } => Some(shape),
            NodeKind::Light(_) => None,
        }
    }

    /// The material, for meshes.
    pub fn material(&self) -> Option<&Material> {
        match &self.kind {
            NodeKind::Mesh { material, .. } => Some(material),
            NodeKind::Light(_) => None,
        }
    }

    /// Mutable material, for meshes.
    pub fn material_mut(&mut self) -> Option<&mut Material> {
        match &mut self.kind {
            NodeKind::Mesh { material, .. } => Some(material),
            NodeKind::Light(_) => None,
        }
    }

    /// The light, for light nodes.
    pub fn light(&self) -> Option<&Light> {
        match &self.kind {
            NodeKind::Light(light) => Some(light),
            NodeKind::Mesh { .. } => None,
        }
    }
}
