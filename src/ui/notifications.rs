// SPDX-License-Identifier: MPL-2.0
//! Transient warning banners for configuration and persistence problems.
//!
//! Warnings carry a Fluent key rather than rendered text, so banners follow
//! language changes. Entries expire after a fixed delay, checked on the tick
//! subscription, or can be dismissed by hand.

use crate::app::config::DEFAULT_NOTIFICATION_TIMEOUT_SECS;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, Column, Row, Text};
use iced::{Element, Length};
use std::time::{Duration, Instant};

/// One pending warning.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Fluent key for the banner text.
    pub key: String,
    expires_at: Instant,
}

impl Notification {
    pub fn warning(key: &str) -> Self {
        Self {
            key: key.to_string(),
            expires_at: Instant::now()
                + Duration::from_secs(u64::from(DEFAULT_NOTIFICATION_TIMEOUT_SECS)),
        }
    }
}

/// Messages emitted by the banner row.
#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(usize),
}

/// Holds pending warnings and drops expired ones.
#[derive(Debug, Default)]
pub struct Manager {
    entries: Vec<Notification>,
}

impl Manager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.entries.push(notification);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops entries whose timeout has passed.
    pub fn tick(&mut self, now: Instant) {
        self.entries.retain(|entry| entry.expires_at > now);
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss(index) => {
                if index < self.entries.len() {
                    self.entries.remove(index);
                }
            }
        }
    }

    /// Renders the pending banners, newest last.
    pub fn view<'a>(&'a self, i18n: &'a I18n, colors: &ColorScheme) -> Element<'a, Message> {
        let mut column = Column::new().spacing(spacing::XXS);

        for (index, entry) in self.entries.iter().enumerate() {
            let row = Row::new()
                .push(
                    Text::new(i18n.tr(&entry.key))
                        .size(typography::BODY)
                        .width(Length::Fill),
                )
                .push(button(Text::new("×")).on_press(Message::Dismiss(index)))
                .spacing(spacing::XS)
                .align_y(iced::alignment::Vertical::Center);

            column = column.push(
                container(row)
                    .padding(spacing::XS)
                    .width(Length::Fill)
                    .style(styles::banner(colors)),
            );
        }

        column.into()
    }
}
