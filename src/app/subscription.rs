// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts.
//!
//! - Left / Right: move the focal slider by one step (ten with Shift)
//! - Ctrl/Cmd + O: open an image

use super::Message;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, Subscription};

/// Slider steps per arrow press with Shift held.
const FAST_NUDGE_STEPS: i32 = 10;

pub fn create_keyboard_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| {
        // Widgets with focus (e.g. an open pick list) keep their keys.
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                shortcut(&key, modifiers)
            }
            _ => None,
        }
    })
}

fn shortcut(key: &Key, modifiers: Modifiers) -> Option<Message> {
    let steps = if modifiers.shift() { FAST_NUDGE_STEPS } else { 1 };
    match key.as_ref() {
        Key::Named(Named::ArrowLeft) => Some(Message::NudgeSlider(-steps)),
        Key::Named(Named::ArrowRight) => Some(Message::NudgeSlider(steps)),
        Key::Character("o") if modifiers.command() => Some(Message::OpenImage),
        _ => None,
    }
}
