// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each view
//! takes a `ViewContext` borrowing the state it renders and returns an
//! `Element` producing its own messages.
//!
//! # Views
//!
//! - [`preview`] - Cropped sample image with badges, and the angle panel
//! - [`controls`] - Sensor picker, focal slider, readout and quick grid
//!
//! # Shared Infrastructure
//!
//! - [`angle_diagram`] - Canvas program drawing the field-of-view wedge
//! - [`styles`] - Centralized styling (buttons, containers, sliders)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod angle_diagram;
pub mod controls;
pub mod design_tokens;
pub mod preview;
pub mod styles;
pub mod theming;
