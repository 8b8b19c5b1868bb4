//! "Programming Languages" section
//!
//! A bar chart ("Language Distribution") and a pie chart ("Language
//! Breakdown") over the same languages, side by side. Both charts color the
//! `i`-th language with [`language_color`], so the pie legend doubles as the
//! bar chart's key. Neither chart is drawn when there is no language data.

use std::f64::consts::TAU;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Bar, BarChart, BarGroup, Block, Borders, Paragraph, Widget,
    },
};

use crate::ui::theme::{language_color, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::view_state::LanguageCharts;

/// Message shown when the tally is empty.
pub const EMPTY_MESSAGE: &str = "No language data";

/// Height of the two chart boxes.
pub const CHART_HEIGHT: u16 = 16;

/// Rows needed for the section, including the title and a blank row.
pub fn height(has_charts: bool) -> u16 {
    if has_charts {
        CHART_HEIGHT + 2
    } else {
        3
    }
}

pub fn render(area: Rect, buf: &mut Buffer, charts: Option<&LanguageCharts>) {
    let [title_area, body_area, _] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    Line::styled(
        "💻 Programming Languages",
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )
    .render(title_area, buf);

    let Some(charts) = charts else {
        Line::styled(EMPTY_MESSAGE, Style::default().fg(COLOR_DIM)).render(body_area, buf);
        return;
    };

    let [bar_area, pie_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(body_area);

    render_bar_chart(bar_area, buf, charts);
    render_pie_chart(pie_area, buf, charts);
}

fn chart_block(title: &'static str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
}

// ============================================================================
// Bar chart
// ============================================================================

fn render_bar_chart(area: Rect, buf: &mut Buffer, charts: &LanguageCharts) {
    let block = chart_block("Language Distribution")
        .title_bottom(Line::styled(" Language ", Style::default().fg(COLOR_DIM)).centered());
    let inner = block.inner(area);
    block.render(area, buf);

    let [axis_area, chart_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

    Line::styled("Number of Repositories", Style::default().fg(COLOR_DIM)).render(axis_area, buf);

    let bars: Vec<Bar> = charts
        .slices
        .iter()
        .enumerate()
        .map(|(index, slice)| {
            let color = language_color(index);
            Bar::default()
                .value(u64::from(slice.count))
                .label(Line::from(slice.language.clone()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    const BAR_GAP: u16 = 1;
    let bar_width = bar_width(chart_area.width, bars.len() as u16, BAR_GAP);

    BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(BAR_GAP)
        .max(u64::from(charts.max_count()))
        .render(chart_area, buf);
}

/// Widest bar that fits `count` bars in `width` columns, between 1 and 9.
fn bar_width(width: u16, count: u16, gap: u16) -> u16 {
    if count == 0 {
        return 1;
    }
    let gaps = gap * count.saturating_sub(1);
    (width.saturating_sub(gaps) / count).clamp(1, 9)
}

// ============================================================================
// Pie chart
// ============================================================================

fn render_pie_chart(area: Rect, buf: &mut Buffer, charts: &LanguageCharts) {
    let block = chart_block("Language Breakdown");
    let inner = block.inner(area);
    block.render(area, buf);

    let [pie_area, legend_area] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(inner);

    let fractions: Vec<f64> = charts.slices.iter().map(|s| s.percent / 100.0).collect();
    let sectors = pie_points(&fractions, pie_area.width, pie_area.height);

    Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-1.0, 1.0])
        .y_bounds([-1.0, 1.0])
        .paint(|ctx| {
            for (index, coords) in sectors.iter().enumerate() {
                ctx.draw(&Points {
                    coords: coords.as_slice(),
                    color: language_color(index),
                });
            }
        })
        .render(pie_area, buf);

    let legend: Vec<Line> = charts
        .slices
        .iter()
        .enumerate()
        .map(|(index, slice)| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(language_color(index))),
                Span::raw(slice.language.clone()),
                Span::styled(
                    format!(" {:.1}% ({})", slice.percent, slice.count),
                    Style::default().fg(COLOR_DIM),
                ),
            ])
        })
        .collect();
    Paragraph::new(legend).render(legend_area, buf);
}

/// Braille dot coordinates of each pie sector, in canvas space `[-1, 1]²`.
///
/// Sectors start at twelve o'clock and run clockwise in slice order. The
/// ellipse radii compensate for terminal cells being about twice as tall as
/// they are wide, so the pie comes out round.
pub fn pie_points(fractions: &[f64], width: u16, height: u16) -> Vec<Vec<(f64, f64)>> {
    let mut sectors = vec![Vec::new(); fractions.len()];
    if width == 0 || height == 0 || fractions.is_empty() {
        return sectors;
    }

    let (w, h) = (f64::from(width), f64::from(height));
    let mut ry = 0.95;
    let mut rx = 2.0 * ry * h / w;
    if rx > 0.95 {
        ry *= 0.95 / rx;
        rx = 0.95;
    }

    // Cumulative upper bound of each sector as a fraction of the full turn
    let total: f64 = fractions.iter().sum();
    let bounds: Vec<f64> = fractions
        .iter()
        .scan(0.0, |acc, f| {
            *acc += f / total;
            Some(*acc)
        })
        .collect();

    // Braille cells are 2 dots wide and 4 dots tall
    let (cols, rows) = (width as usize * 2, height as usize * 4);
    for iy in 0..rows {
        let y = 1.0 - (iy as f64 + 0.5) * 2.0 / rows as f64;
        for ix in 0..cols {
            let x = -1.0 + (ix as f64 + 0.5) * 2.0 / cols as f64;
            let (nx, ny) = (x / rx, y / ry);
            if nx * nx + ny * ny > 1.0 {
                continue;
            }
            let angle = nx.atan2(ny).rem_euclid(TAU);
            let turn = angle / TAU;
            let sector = bounds
                .iter()
                .position(|bound| turn < *bound)
                .unwrap_or(fractions.len() - 1);
            sectors[sector].push((x, y));
        }
    }

    sectors
}
