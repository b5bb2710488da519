//! ECS components for entities.
//!
//! Submodules overview:
//! - [`boundarybounce`] – keep an entity inside the canvas, bouncing off edges
//! - [`circleshape`] – filled circle used for drawing and edge tests
//! - [`inputcontrolled`] – velocity nudged by the held direction keys
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`rigidbody`] – kinematic body storing a clamped velocity

pub mod boundarybounce;
pub mod circleshape;
pub mod inputcontrolled;
pub mod mapposition;
pub mod rigidbody;
