// SPDX-License-Identifier: MPL-2.0
//! Feed entry form: start a feed, watch the elapsed time, finish it with the
//! bottle size and what was left.
//!
//! Inputs are plain text fields parsed on finish. The bottle size falls back
//! to the configured default when unparseable; the leftover field is
//! genuinely optional (not every bottle gets weighed at 4 a.m.) and parses
//! to `None` when empty.

use crate::domain::feed_log::{FeedKind, FeedLog};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use chrono::{DateTime, Local};
use iced::widget::{button, container, text_input, Column, Row, Text};
use iced::{Element, Length};

/// Form state; `active` holds the start time of the feed in progress.
#[derive(Debug, Clone)]
pub struct State {
    active: Option<DateTime<Local>>,
    bottle_size_input: String,
    milk_left_input: String,
    kind: FeedKind,
    default_bottle_size_ml: f32,
    /// Refreshed by the tick subscription while a feed runs.
    now: DateTime<Local>,
}

impl State {
    pub fn new(default_bottle_size_ml: f32) -> Self {
        Self {
            active: None,
            bottle_size_input: format_ml(default_bottle_size_ml),
            milk_left_input: String::new(),
            kind: FeedKind::default(),
            default_bottle_size_ml,
            now: Local::now(),
        }
    }

    /// Whether a feed is currently running.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Seconds since the running feed started, zero when idle.
    pub fn elapsed_secs(&self) -> i64 {
        match self.active {
            Some(start) => (self.now - start).num_seconds().max(0),
            None => 0,
        }
    }
}

/// Messages emitted by the form.
#[derive(Debug, Clone)]
pub enum Message {
    Start,
    Finish,
    Cancel,
    BottleSizeChanged(String),
    MilkLeftChanged(String),
    KindSelected(FeedKind),
    /// Wall-clock refresh from the tick subscription.
    Now(DateTime<Local>),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// A feed was finished and should be appended to the history.
    Completed(FeedLog),
}

/// Process a form message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Start => {
            if state.active.is_none() {
                state.now = Local::now();
                state.active = Some(state.now);
            }
            Event::None
        }
        Message::Finish => {
            let Some(start) = state.active.take() else {
                return Event::None;
            };
            let end = Local::now();
            let bottle_size =
                parse_ml(&state.bottle_size_input).unwrap_or(state.default_bottle_size_ml);
            let milk_left = parse_optional_ml(&state.milk_left_input);

            // Reset for the next feed, keeping the chosen kind.
            state.bottle_size_input = format_ml(state.default_bottle_size_ml);
            state.milk_left_input = String::new();

            Event::Completed(FeedLog::new(start, end, bottle_size, milk_left, state.kind))
        }
        Message::Cancel => {
            state.active = None;
            state.milk_left_input = String::new();
            Event::None
        }
        Message::BottleSizeChanged(value) => {
            state.bottle_size_input = value;
            Event::None
        }
        Message::MilkLeftChanged(value) => {
            state.milk_left_input = value;
            Event::None
        }
        Message::KindSelected(kind) => {
            state.kind = kind;
            Event::None
        }
        Message::Now(now) => {
            state.now = now;
            Event::None
        }
    }
}

/// Parses a millilitre amount; negative and unparseable input is rejected.
fn parse_ml(input: &str) -> Option<f32> {
    let value: f32 = input.trim().replace(',', ".").parse().ok()?;
    (value >= 0.0 && value.is_finite()).then_some(value)
}

/// Empty input is an intentional "not weighed", not an error.
fn parse_optional_ml(input: &str) -> Option<f32> {
    if input.trim().is_empty() {
        return None;
    }
    parse_ml(input)
}

fn format_ml(value: f32) -> String {
    format!("{:.0}", value)
}

fn format_elapsed(total_secs: i64) -> String {
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    pub state: &'a State,
}

/// Render the feed form panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = if ctx.state.is_active() {
        active_view(&ctx)
    } else {
        idle_view(&ctx)
    };

    container(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::panel(&ctx.colors))
        .into()
}

fn idle_view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let start = button(Text::new(ctx.i18n.tr("feed-start-button")))
        .on_press(Message::Start)
        .style(styles::primary_button(&ctx.colors));

    Row::new()
        .push(start)
        .push(kind_picker(ctx))
        .spacing(spacing::SM)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}

fn active_view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let elapsed = Row::new()
        .push(
            Text::new(ctx.i18n.tr("feed-elapsed-label"))
                .size(typography::BODY)
                .color(ctx.colors.text_secondary),
        )
        .push(Text::new(format_elapsed(ctx.state.elapsed_secs())).size(typography::TITLE_SM))
        .spacing(spacing::XS)
        .align_y(iced::alignment::Vertical::Center);

    let bottle_size = labeled_input(
        ctx,
        "feed-bottle-size-label",
        &ctx.state.bottle_size_input,
        Message::BottleSizeChanged,
    );

    let milk_left = labeled_input_with_hint(
        ctx,
        "feed-milk-left-label",
        "feed-milk-left-hint",
        &ctx.state.milk_left_input,
        Message::MilkLeftChanged,
    );

    let actions = Row::new()
        .push(
            button(Text::new(ctx.i18n.tr("feed-finish-button")))
                .on_press(Message::Finish)
                .style(styles::primary_button(&ctx.colors)),
        )
        .push(
            button(Text::new(ctx.i18n.tr("feed-cancel-button")))
                .on_press(Message::Cancel)
                .style(styles::subtle_button(&ctx.colors)),
        )
        .spacing(spacing::SM);

    Column::new()
        .push(elapsed)
        .push(kind_picker(ctx))
        .push(bottle_size)
        .push(milk_left)
        .push(actions)
        .spacing(spacing::SM)
        .into()
}

fn kind_picker<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XXS);
    for kind in FeedKind::ALL {
        let label = Text::new(ctx.i18n.tr(kind.i18n_key())).size(typography::BODY);
        let styled = if kind == ctx.state.kind {
            button(label).style(styles::primary_button(&ctx.colors))
        } else {
            button(label).style(styles::subtle_button(&ctx.colors))
        };
        row = row.push(styled.on_press(Message::KindSelected(kind)));
    }
    row.into()
}

fn labeled_input<'a>(
    ctx: &ViewContext<'a>,
    label_key: &str,
    value: &str,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    Row::new()
        .push(
            Text::new(ctx.i18n.tr(label_key))
                .size(typography::BODY)
                .width(Length::Fixed(180.0)),
        )
        .push(
            text_input("", value)
                .on_input(on_input)
                .width(Length::Fixed(sizing::INPUT_WIDTH)),
        )
        .spacing(spacing::XS)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}

fn labeled_input_with_hint<'a>(
    ctx: &ViewContext<'a>,
    label_key: &str,
    hint_key: &str,
    value: &str,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    Row::new()
        .push(
            Text::new(ctx.i18n.tr(label_key))
                .size(typography::BODY)
                .width(Length::Fixed(180.0)),
        )
        .push(
            text_input(&ctx.i18n.tr(hint_key), value)
                .on_input(on_input)
                .width(Length::Fixed(sizing::INPUT_WIDTH)),
        )
        .spacing(spacing::XS)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_activates_the_form_once() {
        let mut state = State::new(120.0);
        assert!(!state.is_active());

        assert!(matches!(update(&mut state, Message::Start), Event::None));
        assert!(state.is_active());

        let first_start = state.active;
        update(&mut state, Message::Start);
        assert_eq!(state.active, first_start, "second start must not restart");
    }

    #[test]
    fn finish_without_start_is_a_no_op() {
        let mut state = State::new(120.0);
        assert!(matches!(update(&mut state, Message::Finish), Event::None));
    }

    #[test]
    fn finish_produces_a_completed_feed() {
        let mut state = State::new(120.0);
        update(&mut state, Message::Start);
        update(&mut state, Message::BottleSizeChanged("150".to_string()));
        update(&mut state, Message::MilkLeftChanged("30".to_string()));
        update(&mut state, Message::KindSelected(FeedKind::Nursing));

        let event = update(&mut state, Message::Finish);
        let Event::Completed(feed) = event else {
            panic!("expected Completed event");
        };
        assert_eq!(feed.bottle_size_ml, 150.0);
        assert_eq!(feed.milk_left_ml, Some(30.0));
        assert_eq!(feed.kind, FeedKind::Nursing);
        assert!(!state.is_active());
    }

    #[test]
    fn finish_falls_back_to_default_bottle_size_on_garbage() {
        let mut state = State::new(120.0);
        update(&mut state, Message::Start);
        update(&mut state, Message::BottleSizeChanged("not a number".to_string()));

        let Event::Completed(feed) = update(&mut state, Message::Finish) else {
            panic!("expected Completed event");
        };
        assert_eq!(feed.bottle_size_ml, 120.0);
    }

    #[test]
    fn empty_milk_left_means_not_weighed() {
        let mut state = State::new(120.0);
        update(&mut state, Message::Start);
        update(&mut state, Message::MilkLeftChanged("   ".to_string()));

        let Event::Completed(feed) = update(&mut state, Message::Finish) else {
            panic!("expected Completed event");
        };
        assert_eq!(feed.milk_left_ml, None);
    }

    #[test]
    fn cancel_discards_the_running_feed() {
        let mut state = State::new(120.0);
        update(&mut state, Message::Start);
        assert!(matches!(update(&mut state, Message::Cancel), Event::None));
        assert!(!state.is_active());
    }

    #[test]
    fn parse_ml_accepts_comma_decimals() {
        assert_eq!(parse_ml("12,5"), Some(12.5));
        assert_eq!(parse_ml(" 90 "), Some(90.0));
    }

    #[test]
    fn parse_ml_rejects_negative_and_garbage() {
        assert_eq!(parse_ml("-5"), None);
        assert_eq!(parse_ml("abc"), None);
        assert_eq!(parse_ml("inf"), None);
    }

    #[test]
    fn elapsed_is_zero_when_idle() {
        let state = State::new(120.0);
        assert_eq!(state.elapsed_secs(), 0);
    }

    #[test]
    fn format_elapsed_pads_seconds() {
        assert_eq!(format_elapsed(65), "1:05");
        assert_eq!(format_elapsed(0), "0:00");
        assert_eq!(format_elapsed(600), "10:00");
    }
}
