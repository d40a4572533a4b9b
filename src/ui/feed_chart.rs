// SPDX-License-Identifier: MPL-2.0
//! Per-day intake bar chart rendered on a canvas.
//!
//! The chart caches day buckets in its [`State`] and only recomputes them
//! when the parent pushes a new feed sequence through
//! [`FeedChartView::update_feed_chart`].

use crate::domain::feed_log::{daily_totals, FeedLog};
use crate::domain::FeedChartView;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use chrono::{Datelike, NaiveDate};
use iced::widget::canvas::{self, Canvas, Path, Text as CanvasText};
use iced::widget::{container, Column, Text};
use iced::{mouse, Element, Length, Point, Rectangle, Size, Theme};

/// Cached chart data: one bucket per day that had feeds.
#[derive(Debug, Clone, Default)]
pub struct State {
    buckets: Vec<(NaiveDate, f32)>,
    window_days: usize,
}

impl State {
    pub fn new(window_days: u32) -> Self {
        Self {
            buckets: Vec::new(),
            window_days: window_days.max(1) as usize,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// The buckets currently displayed (most recent `window_days` days).
    pub fn buckets(&self) -> &[(NaiveDate, f32)] {
        &self.buckets
    }
}

impl FeedChartView for State {
    fn update_feed_chart(&mut self, feeds: &[FeedLog]) {
        let mut buckets = daily_totals(feeds);
        if buckets.len() > self.window_days {
            buckets.drain(..buckets.len() - self.window_days);
        }
        self.buckets = buckets;
    }
}

/// Canvas program that draws the cached buckets as bars.
struct BarChart<'a> {
    state: &'a State,
    colors: ColorScheme,
}

impl<Message> canvas::Program<Message> for BarChart<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let buckets = self.state.buckets();
        if buckets.is_empty() {
            return vec![frame.into_geometry()];
        }

        let max_total = buckets
            .iter()
            .map(|(_, total)| *total)
            .fold(f32::MIN, f32::max)
            .max(1.0);

        let label_band = typography::CAPTION * 2.5;
        let plot_height = (bounds.height - label_band).max(1.0);
        let slot_width = bounds.width / buckets.len() as f32;
        let bar_width = (slot_width * 0.6).min(sizing::CHART_BAR_MAX_WIDTH);

        for (index, (day, total)) in buckets.iter().enumerate() {
            let bar_height = (total / max_total) * (plot_height - typography::CAPTION * 1.5);
            let x = index as f32 * slot_width + (slot_width - bar_width) / 2.0;
            let y = plot_height - bar_height;

            let bar = Path::rectangle(Point::new(x, y), Size::new(bar_width, bar_height));
            frame.fill(&bar, self.colors.brand_primary);

            // Total above the bar, rounded to whole millilitres.
            frame.fill_text(CanvasText {
                content: format!("{}", total.round() as i64),
                position: Point::new(x, (y - typography::CAPTION * 1.2).max(0.0)),
                color: self.colors.text_primary,
                size: typography::CAPTION.into(),
                ..CanvasText::default()
            });

            // Day-of-month label below the baseline.
            frame.fill_text(CanvasText {
                content: format!("{:02}/{:02}", day.day(), day.month()),
                position: Point::new(x, plot_height + spacing::XXS),
                color: self.colors.text_secondary,
                size: typography::CAPTION.into(),
                ..CanvasText::default()
            });
        }

        vec![frame.into_geometry()]
    }
}

/// Renders the chart panel: title, then the canvas or an empty hint.
pub fn view<'a, Message: 'a>(
    state: &'a State,
    i18n: &'a I18n,
    colors: ColorScheme,
) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("chart-title")).size(typography::TITLE_SM);

    let body: Element<'a, Message> = if state.is_empty() {
        Text::new(i18n.tr("chart-empty"))
            .size(typography::BODY)
            .into()
    } else {
        Canvas::new(BarChart { state, colors })
        .width(Length::Fill)
        .height(sizing::CHART_HEIGHT)
        .into()
    };

    container(
        Column::new()
            .push(title)
            .push(body)
            .spacing(spacing::SM),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::panel(&colors))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FeedKind;
    use chrono::{Duration, Local, TimeZone};

    fn feed_on(day: u32, bottle: f32) -> FeedLog {
        let start = Local.with_ymd_and_hms(2026, 5, day, 4, 0, 0).unwrap();
        FeedLog::new(
            start,
            start + Duration::minutes(10),
            bottle,
            None,
            FeedKind::Bottle,
        )
    }

    #[test]
    fn update_feed_chart_buckets_by_day() {
        let mut state = State::new(7);
        state.update_feed_chart(&[feed_on(1, 100.0), feed_on(1, 50.0), feed_on(2, 80.0)]);

        assert_eq!(state.buckets().len(), 2);
        assert!((state.buckets()[0].1 - 150.0).abs() < 0.001);
        assert!((state.buckets()[1].1 - 80.0).abs() < 0.001);
    }

    #[test]
    fn update_feed_chart_keeps_only_window_days() {
        let mut state = State::new(2);
        state.update_feed_chart(&[feed_on(1, 10.0), feed_on(2, 20.0), feed_on(3, 30.0)]);

        // Oldest day falls out of the window.
        assert_eq!(state.buckets().len(), 2);
        assert_eq!(state.buckets()[0].0.day(), 2);
        assert_eq!(state.buckets()[1].0.day(), 3);
    }

    #[test]
    fn update_feed_chart_with_no_feeds_clears_state() {
        let mut state = State::new(7);
        state.update_feed_chart(&[feed_on(1, 100.0)]);
        state.update_feed_chart(&[]);
        assert!(state.is_empty());
    }

    #[test]
    fn window_of_zero_days_is_clamped_to_one() {
        let state = State::new(0);
        assert_eq!(state.window_days, 1);
    }
}
