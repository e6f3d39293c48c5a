//! Composition utilities for the `scroll-viewport` crate.
//!
//! The `scroll-viewport` crate provides the three viewport strategies. This crate picks and
//! owns one of them for a viewport declaration:
//!
//! - [`ViewportMode`]: the declared marker (`default` / `nested` / `window`)
//! - [`create_container`]: builds the matching strategy from [`ViewportOptions`]
//! - [`ViewportHost`]: owns the strategy and disposes it exactly once
//!
//! This crate is intentionally framework-agnostic (no DOM or GUI toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod factory;
mod host;
mod mode;
mod options;

#[cfg(test)]
mod tests;

pub use factory::create_container;
pub use host::ViewportHost;
pub use mode::ViewportMode;
pub use options::ViewportOptions;
