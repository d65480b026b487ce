use cosmic::iced::{Alignment, Length};
use cosmic::widget::{column, container, row, text};
use cosmic::{Element, theme};

use taskly::core::task::TaskStatus;
use taskly::dashboard::TaskCompletionChart;

use super::error_banner::error_banner;
use super::hex_color;
use crate::fl;
use crate::message::Message;

/// Widest bar in glyphs; everything else scales against the largest row.
const BAR_WIDTH: usize = 24;
const BAR_GLYPH: &str = "\u{2588}";

pub fn status_label(status: TaskStatus) -> String {
    match status {
        TaskStatus::Todo => fl!("status-todo"),
        TaskStatus::Doing => fl!("status-doing"),
        TaskStatus::Paused => fl!("status-paused"),
        TaskStatus::Done => fl!("status-done"),
        TaskStatus::Other => fl!("status-other"),
    }
}

/// Glyphs for `count` scaled so `max` fills [`BAR_WIDTH`]. Non-zero counts get at least one.
fn bar_len(count: usize, max: usize) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    (count * BAR_WIDTH / max).max(1)
}

/// Stacked horizontal bars, one row per status, one coloured segment per family.
pub fn completion_chart(chart: &TaskCompletionChart) -> Element<'static, Message> {
    let mut content = column()
        .spacing(8)
        .push(text::title4(fl!("chart-title")));

    if chart.is_loading() {
        content = content.push(text::body(fl!("chart-loading")));
        return container(content)
            .padding(16)
            .width(Length::Fill)
            .class(theme::Container::Card)
            .into();
    }

    if let Some(err) = chart.error() {
        content = content.push(error_banner(err));
    }

    let series = chart.series();
    let max = chart.max_total();

    for chart_row in chart.rows() {
        let mut bar = row().spacing(0);
        for (family_id, count) in &chart_row.counts {
            let len = bar_len(*count, max);
            if len == 0 {
                continue;
            }
            let color = series
                .iter()
                .find(|s| s.family_id == *family_id)
                .map(|s| hex_color(&s.color))
                .unwrap_or_else(|| hex_color(""));
            bar = bar.push(text::body(BAR_GLYPH.repeat(len)).class(theme::Text::Color(color)));
        }

        content = content.push(
            row()
                .spacing(8)
                .align_y(Alignment::Center)
                .push(text::body(status_label(chart_row.status)).width(Length::Fixed(72.0)))
                .push(bar)
                .push(text::caption(chart_row.total().to_string())),
        );
    }

    // Legend
    let mut legend = row().spacing(16);
    for entry in series {
        legend = legend.push(
            row()
                .spacing(4)
                .align_y(Alignment::Center)
                .push(text::caption("\u{25CF}").class(theme::Text::Color(hex_color(&entry.color))))
                .push(text::caption(entry.label)),
        );
    }
    content = content.push(legend);

    container(content)
        .padding(16)
        .width(Length::Fill)
        .class(theme::Container::Card)
        .into()
}
