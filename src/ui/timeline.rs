// SPDX-License-Identifier: MPL-2.0
//! Chronological feed history, newest first, grouped by day.

use crate::domain::feed_log::FeedLog;
use crate::domain::TimelineView;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use chrono::NaiveDate;
use iced::widget::{button, container, scrollable, Column, Row, Space, Text};
use iced::{Element, Length};

/// Feeds of one calendar day, newest feed first.
#[derive(Debug, Clone)]
pub struct DayGroup {
    pub day: NaiveDate,
    pub feeds: Vec<FeedLog>,
}

/// Cached timeline rows.
#[derive(Debug, Clone, Default)]
pub struct State {
    groups: Vec<DayGroup>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn groups(&self) -> &[DayGroup] {
        &self.groups
    }
}

impl TimelineView for State {
    fn update_timeline(&mut self, feeds: &[FeedLog]) {
        let mut groups: Vec<DayGroup> = Vec::new();
        // Input is ordered oldest-first; walk it backwards so both the day
        // groups and the feeds inside each group come out newest-first.
        for feed in feeds.iter().rev() {
            let day = feed.day();
            match groups.last_mut() {
                Some(group) if group.day == day => group.feeds.push(feed.clone()),
                _ => groups.push(DayGroup {
                    day,
                    feeds: vec![feed.clone()],
                }),
            }
        }
        self.groups = groups;
    }
}

/// Messages emitted by the timeline.
#[derive(Debug, Clone)]
pub enum Message {
    Delete(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    /// The feed with this id should be removed from the history.
    Delete(String),
}

/// Process a timeline message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Delete(id) => Event::Delete(id),
    }
}

/// Contextual data needed to render the timeline.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    pub state: &'a State,
}

/// Render the timeline panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("timeline-title")).size(typography::TITLE_SM);

    let body: Element<'a, Message> = if ctx.state.is_empty() {
        Text::new(ctx.i18n.tr("timeline-empty"))
            .size(typography::BODY)
            .into()
    } else {
        let mut column = Column::new().spacing(spacing::SM);
        for group in ctx.state.groups() {
            column = column.push(
                Text::new(group.day.format("%A %d %B").to_string())
                    .size(typography::BODY)
                    .color(ctx.colors.text_secondary),
            );
            for feed in &group.feeds {
                column = column.push(feed_row(feed, &ctx));
            }
        }
        scrollable(column).height(Length::Fill).into()
    };

    container(
        Column::new()
            .push(title)
            .push(body)
            .spacing(spacing::SM),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::panel(&ctx.colors))
    .into()
}

fn feed_row<'a>(feed: &'a FeedLog, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let times = format!(
        "{} – {}",
        feed.start.format("%H:%M"),
        feed.end.format("%H:%M")
    );
    let minutes = feed.duration().num_minutes();
    let details = match feed.milk_left_ml {
        Some(left) => format!(
            "{} min · {:.0} ml / {:.0} ml · {:.0} ml {}",
            minutes,
            feed.consumed_ml(),
            feed.bottle_size_ml,
            left,
            ctx.i18n.tr(feed.kind.i18n_key()).to_lowercase(),
        ),
        None => format!(
            "{} min · {:.0} ml · {}",
            minutes,
            feed.consumed_ml(),
            ctx.i18n.tr(feed.kind.i18n_key()).to_lowercase(),
        ),
    };

    let delete = button(
        Text::new(ctx.i18n.tr("timeline-delete-button")).size(typography::CAPTION),
    )
    .on_press(Message::Delete(feed.id.clone()))
    .style(styles::subtle_button(&ctx.colors));

    Row::new()
        .push(Text::new(times).size(typography::BODY))
        .push(
            Text::new(details)
                .size(typography::CAPTION)
                .color(ctx.colors.text_secondary),
        )
        .push(Space::new().width(Length::Fill))
        .push(delete)
        .spacing(spacing::SM)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FeedKind;
    use chrono::{Datelike, Duration, Local, TimeZone};

    fn feed_at(day: u32, hour: u32) -> FeedLog {
        let start = Local.with_ymd_and_hms(2026, 5, day, hour, 0, 0).unwrap();
        FeedLog::new(
            start,
            start + Duration::minutes(12),
            110.0,
            Some(15.0),
            FeedKind::Bottle,
        )
    }

    #[test]
    fn update_timeline_groups_by_day_newest_first() {
        let mut state = State::new();
        // Ordered oldest-first, as the store guarantees.
        state.update_timeline(&[feed_at(1, 3), feed_at(1, 22), feed_at(2, 6)]);

        let groups = state.groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].day.day(), 2);
        assert_eq!(groups[1].day.day(), 1);
    }

    #[test]
    fn feeds_within_a_day_are_newest_first() {
        let mut state = State::new();
        state.update_timeline(&[feed_at(1, 3), feed_at(1, 22)]);

        let feeds = &state.groups()[0].feeds;
        assert!(feeds[0].start > feeds[1].start);
    }

    #[test]
    fn update_timeline_with_no_feeds_clears_state() {
        let mut state = State::new();
        state.update_timeline(&[feed_at(1, 3)]);
        state.update_timeline(&[]);
        assert!(state.is_empty());
    }

    #[test]
    fn delete_message_maps_to_delete_event() {
        let Event::Delete(id) = update(Message::Delete("feed-42".to_string()));
        assert_eq!(id, "feed-42");
    }
}
