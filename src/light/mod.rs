//! Light descriptors.
//!
//! Positions live on the owning node's transform; the structs here only
//! carry the parameters the backend needs to build its light objects.

mod ambient;
mod directional;
mod hemisphere;
mod point;
mod spot;

pub use ambient::AmbientLight;
pub use directional::DirectionalLight;
pub use hemisphere::HemisphereLight;
pub use point::PointLight;
pub use spot::SpotLight;

use crate::math::Color;
use serde::{Deserialize, Serialize};

/// Any light the stage can hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Light {
    /// Uniform fill light.
    Ambient(AmbientLight),
    /// Parallel rays, sun-like.
    Directional(DirectionalLight),
    /// Omni-directional from a point.
    Point(PointLight),
    /// Cone from a point.
    Spot(SpotLight),
    /// Sky/ground gradient.
    Hemisphere(HemisphereLight),
}

impl Light {
    /// Main color of the light (sky color for hemisphere lights).
    pub fn color(&self) -> Color {
        match self {
            Light::Ambient(l) => l.color,
            Light::Directional(l) => l.color,
            Light::Point(l) => l.color,
            Light::Spot(l) => l.color,
            Light::Hemisphere(l) => l.sky_color,
        }
    }

    /// Intensity multiplier.
    pub fn intensity(&self) -> f32 {
        match self {
            Light::Ambient(l) => l.intensity,
            Light::Directional(l) => l.intensity,
            Light::Point(l) => l.intensity,
            Light::Spot(l) => l.intensity,
            Light::Hemisphere(l) => l.intensity,
        }
    }

    /// Whether the node position affects this light.
    pub fn is_positioned(&self) -> bool {
        matches!(self, Light::Directional(_) | Light::Point(_) | Light::Spot(_))
    }

    /// Short lowercase name of the light kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Light::Ambient(_) => "ambient",
            Light::Directional(_) => "directional",
            Light::Point(_) => "point",
            Light::Spot(_) => "spot",
            Light::Hemisphere(_) => "hemisphere",
        }
    }
}

impl From<AmbientLight> for Light {
    fn from(l: AmbientLight) -> Self {
        Light::Ambient(l)
    }
}

impl From<DirectionalLight> for Light {
    fn from(l: DirectionalLight) -> Self {
        Light::Directional(l)
    }
}

impl From<PointLight> for Light {
    fn from(l: PointLight) -> Self {
        Light::Point(l)
    }
}

impl From<SpotLight> for Light {
    fn from(l: SpotLight) -> Self {
        Light::Spot(l)
    }
}

impl From<HemisphereLight> for Light {
    fn from(l: HemisphereLight) -> Self {
        Light::Hemisphere(l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positioned_kinds() {
        assert!(!Light::from(AmbientLight::default()).is_positioned());
        assert!(!Light::from(HemisphereLight::default()).is_positioned());
        assert!(Light::from(PointLight::default()).is_positioned());
        assert!(Light::from(SpotLight::default()).is_positioned());
    }

    #[test]
    fn test_tagged_json() {
        let light: Light = serde_json::from_str(
            r#"{"type":"ambient","color":{"r":1.0,"g":0.0,"b":0.0},"intensity":0.5}"#,
        )
        .unwrap();
        assert_eq!(light.kind_name(), "ambient");
        assert_eq!(light.color(), Color::RED);
        assert_eq!(light.intensity(), 0.5);
    }
}
