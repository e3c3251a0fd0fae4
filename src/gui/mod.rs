//! Screen-Space GUI System
//!
//! Widgets that render at fixed screen positions in logical canvas
//! coordinates: the menu button stack and the hotbar. Both draw themselves
//! by blitting sub-regions of the shared `widgets` texture.
//!
//! # Available Components
//!
//! - [`button::Button`] - labeled clickable region with hover/press/disabled states
//! - [`hotbar`] - hotbar background and slot selector overlay

pub mod button;
pub mod hotbar;

/// Registry name of the texture holding every widget sprite.
pub const WIDGETS_TEXTURE: &str = "widgets";
