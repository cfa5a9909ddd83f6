//! # Animation Primitives
//!
//! Pure functions of a frame index. Nothing here keeps state between frames,
//! so any frame can be evaluated in any order.
//!
//! - [`spring`] maps elapsed frames to a damped-oscillator progress curve
//! - [`interpolate`] maps progress onto an output range, optionally clamped
//! - [`typewriter`] maps elapsed frames to a revealed prefix of a string
//!
//! ```rust
//! use promo_reel::animation::{interpolate, spring, Extrapolate, SpringConfig};
//!
//! let progress = spring(12.0, 30.0, &SpringConfig::damped(200.0));
//! let scale = interpolate(progress, [0.0, 1.0], [0.8, 1.0], Extrapolate::CLAMP);
//! assert!(scale > 0.8 && scale <= 1.0);
//! ```

pub mod interpolate;
pub mod spring;
pub mod typewriter;

pub use interpolate::{interpolate, Extrapolate, ExtrapolateType, Interpolation};
pub use spring::{spring, Spring, SpringConfig};
pub use typewriter::{BlinkMode, Cursor, TextReveal, Typewriter};
