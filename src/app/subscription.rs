// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two sources: a one-second tick that runs only while something on screen
//! depends on wall-clock time (a running feed, a pending banner), and global
//! keyboard shortcuts for the theme toggles.

use super::{App, Message};
use crate::ui::navbar;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Builds the application's subscription set from the current state.
pub fn subscription(app: &App) -> Subscription<Message> {
    let mut subscriptions = vec![keyboard_shortcuts()];

    if app.needs_clock() {
        subscriptions.push(time::every(Duration::from_secs(1)).map(Message::Tick));
    }

    Subscription::batch(subscriptions)
}

/// Global shortcuts: `d` flips day/night, `n` toggles night-vision.
///
/// Only keys no widget claimed are considered, so typing "120" into the
/// bottle-size field never flips the theme.
fn keyboard_shortcuts() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }

        if let event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Character(ref c),
            modifiers,
            ..
        }) = event
        {
            if modifiers.command() || modifiers.alt() {
                return None;
            }
            match c.as_str() {
                "d" => return Some(Message::Navbar(navbar::Message::ToggleDayNight)),
                "n" => return Some(Message::Navbar(navbar::Message::ToggleNightVision)),
                _ => {}
            }
        }

        None
    })
}
