//! Components and the fixed per-entity component bundle.
//!
//! Components are plain data structs. Game logic lives in systems.
//! The component set is closed: every kind has exactly one `Option` slot in
//! [`ComponentBundle`], and typed access goes through the sealed
//! [`Component`] trait, so attaching a kind the bundle does not know about
//! does not compile.

use serde::{Deserialize, Serialize};

use crate::types::{Color, Vec2};

/// Position and motion. Angles are in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
    pub velocity: Vec2,
    pub angle: f32,
    /// Degrees per second.
    pub angular_velocity: f32,
}

impl Transform {
    pub fn new(position: Vec2, velocity: Vec2, angular_velocity: f32) -> Self {
        Self {
            position,
            velocity,
            angle: 0.0,
            angular_velocity,
        }
    }
}

/// Regular polygon used for drawing.
/// `vertex_count` doubles as the fan-out count when an enemy is destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub radius: f32,
    pub vertex_count: u32,
    pub fill: Color,
    pub outline: Color,
    pub outline_thickness: f32,
}

/// Circular hitbox, independent of the drawn radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collision {
    pub radius: f32,
}

/// Directional intent. Written by input capture, read by movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Accumulated points. Only the player carries one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub score: u32,
}

/// Frame countdown; `remaining / total` drives the fade-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifespan {
    pub remaining: u32,
    pub total: u32,
}

impl Lifespan {
    pub fn new(frames: u32) -> Self {
        Self {
            remaining: frames,
            total: frames,
        }
    }
}

/// One optional, value-embedded slot per component kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentBundle {
    pub transform: Option<Transform>,
    pub shape: Option<Shape>,
    pub collision: Option<Collision>,
    pub input: Option<Input>,
    pub score: Option<Score>,
    pub lifespan: Option<Lifespan>,
}

impl ComponentBundle {
    /// Attach (or replace) a component and return a reference to the stored value.
    pub fn add<T: Component>(&mut self, component: T) -> &mut T {
        T::slot_mut(self).insert(component)
    }

    pub fn get<T: Component>(&self) -> Option<&T> {
        T::slot(self).as_ref()
    }

    pub fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
        T::slot_mut(self).as_mut()
    }

    pub fn has<T: Component>(&self) -> bool {
        T::slot(self).is_some()
    }

    pub fn remove<T: Component>(&mut self) -> Option<T> {
        T::slot_mut(self).take()
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A kind that has a slot in [`ComponentBundle`].
pub trait Component: sealed::Sealed + Sized {
    fn slot(bundle: &ComponentBundle) -> &Option<Self>;
    fn slot_mut(bundle: &mut ComponentBundle) -> &mut Option<Self>;
}

macro_rules! bundle_slot {
    ($ty:ty, $field:ident) => {
        impl sealed::Sealed for $ty {}

        impl Component for $ty {
            fn slot(bundle: &ComponentBundle) -> &Option<Self> {
                &bundle.$field
            }

            fn slot_mut(bundle: &mut ComponentBundle) -> &mut Option<Self> {
                &mut bundle.$field
            }
        }
    };
}

bundle_slot!(Transform, transform);
bundle_slot!(Shape, shape);
bundle_slot!(Collision, collision);
bundle_slot!(Input, input);
bundle_slot!(Score, score);
bundle_slot!(Lifespan, lifespan);
