//! Spring motion presets attached to elements
//!
//! Presets are declarative: they describe the transient animation a host
//! should run (for example on hover) and retain no animation state.

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Spring constant; higher values move faster
    pub stiffness: f32,
    /// Friction opposing the motion
    pub damping: f32,
    /// Mass of the animated value
    pub mass: f32,
}

impl SpringConfig {
    /// Create a new spring configuration
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// A spring with the given stiffness and the default damping and mass
    pub fn with_stiffness(stiffness: f32) -> Self {
        Self {
            stiffness,
            ..Self::default()
        }
    }

    /// A gentle, slow spring (good for page transitions)
    pub fn gentle() -> Self {
        Self::new(120.0, 14.0, 1.0)
    }

    /// A stiff, snappy spring (good for buttons)
    pub fn stiff() -> Self {
        Self::new(400.0, 30.0, 1.0)
    }

    /// Calculate critical damping for this spring's stiffness and mass
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Check if the spring is underdamped (will oscillate)
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(100.0, 10.0, 1.0)
    }
}

/// Transform applied while the pointer hovers an element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverMotion {
    /// Horizontal offset in pixels
    pub x: f32,
    /// Vertical offset in pixels (negative lifts the element)
    pub y: f32,
    /// Uniform scale factor
    pub scale: f32,
    /// Spring driving the transition in and out
    pub spring: SpringConfig,
}

impl HoverMotion {
    /// Move the element up by `offset` pixels on a spring of `stiffness`
    pub fn lift(offset: f32, stiffness: f32) -> Self {
        Self {
            x: 0.0,
            y: -offset,
            scale: 1.0,
            spring: SpringConfig::with_stiffness(stiffness),
        }
    }

    /// Scale the element on hover
    pub fn grow(scale: f32, spring: SpringConfig) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale,
            spring,
        }
    }

    /// `data-motion-*` attributes describing this preset
    pub fn data_attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::with_capacity(6);
        attrs.push(("data-motion", "hover".to_string()));
        if self.x != 0.0 {
            attrs.push(("data-motion-x", self.x.to_string()));
        }
        if self.y != 0.0 {
            attrs.push(("data-motion-y", self.y.to_string()));
        }
        if self.scale != 1.0 {
            attrs.push(("data-motion-scale", self.scale.to_string()));
        }
        attrs.push(("data-motion-stiffness", self.spring.stiffness.to_string()));
        attrs.push(("data-motion-damping", self.spring.damping.to_string()));
        attrs.push(("data-motion-mass", self.spring.mass.to_string()));
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lift_preset() {
        let motion = HoverMotion::lift(5.0, 300.0);
        assert_eq!(motion.y, -5.0);
        assert_eq!(motion.spring.stiffness, 300.0);
        assert_eq!(motion.spring.damping, 10.0);
        assert!(motion.spring.is_underdamped());
    }

    #[test]
    fn test_data_attributes() {
        let attrs = HoverMotion::lift(5.0, 300.0).data_attributes();
        assert_eq!(
            attrs,
            vec![
                ("data-motion", "hover".to_string()),
                ("data-motion-y", "-5".to_string()),
                ("data-motion-stiffness", "300".to_string()),
                ("data-motion-damping", "10".to_string()),
                ("data-motion-mass", "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_critical_damping() {
        let spring = SpringConfig::new(100.0, 20.0, 1.0);
        assert_eq!(spring.critical_damping(), 20.0);
        assert!(!spring.is_underdamped());
        assert!(SpringConfig::gentle().is_underdamped());
        assert!(SpringConfig::stiff().is_underdamped());
    }
}
