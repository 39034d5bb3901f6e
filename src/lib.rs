// SPDX-License-Identifier: MPL-2.0
//! `focal_lens` is a focal length equivalence calculator built with the Iced
//! GUI framework.
//!
//! Pick a camera sensor and a physical focal length; the application shows the
//! full-frame equivalent, the angle of view and the lens category, and
//! simulates the framing on a sample image.
//!
//! The [`optics`] module holds the model and has no UI dependency.

#![doc(html_root_url = "https://docs.rs/focal_lens/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod optics;
pub mod preview;
pub mod ui;

#[cfg(test)]
mod test_utils;
