//! Throttle Gate Implementations
//!
//! | Gate | Description |
//! |------|-------------|
//! | [`SlidingWindowThrottle`] | At most `limit` starts within any `interval` |
//! | [`UnthrottledGate`] | Never waits |
//!
//! One gate is built per upstream and shared by every request to it.

pub mod sliding_window;
pub mod unthrottled;

pub use sliding_window::SlidingWindowThrottle;
pub use unthrottled::UnthrottledGate;
