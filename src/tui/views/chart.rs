use chrono::{DateTime, FixedOffset};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition};
use ratatui::Frame;

use crate::model::CumulativeSeries;
use crate::tui::state::Viewport;

/// Chart points for the visible window, x being the commit time in seconds.
pub struct ChartData {
    pub added: Vec<(f64, f64)>,
    pub removed: Vec<(f64, f64)>,
    pub total: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub x_labels: Vec<String>,
}

impl ChartData {
    pub fn new(series: &CumulativeSeries, viewport: Viewport, date_format: &str) -> Self {
        let range = viewport.start..viewport.end().min(series.len());
        let dates = &series.dates[range.clone()];
        let xs: Vec<f64> = dates.iter().map(|d| d.timestamp() as f64).collect();

        let points = |ys: Vec<f64>| -> Vec<(f64, f64)> { xs.iter().copied().zip(ys).collect() };
        let added = points(series.added[range.clone()].iter().map(|&v| v as f64).collect());
        let removed = points(series.removed[range.clone()].iter().map(|&v| v as f64).collect());
        let total = points(series.total[range].iter().map(|&v| v as f64).collect());

        let x_bounds = x_bounds(&xs);
        let x_labels = date_labels(dates, date_format);

        Self {
            added,
            removed,
            total,
            x_bounds,
            x_labels,
        }
    }
}

/// Widen a degenerate range so a single commit still gets an axis.
fn x_bounds(xs: &[f64]) -> [f64; 2] {
    let min = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    if max - min < 1.0 {
        const DAY: f64 = 86_400.0;
        return [min - DAY, max + DAY];
    }
    [min, max]
}

/// Padded bounds covering every y value plus zero.
pub fn y_bounds(sets: &[&[(f64, f64)]]) -> [f64; 2] {
    let (min, max) = sets
        .iter()
        .flat_map(|s| s.iter().map(|&(_, y)| y))
        .fold((0.0f64, 0.0f64), |(lo, hi), y| (lo.min(y), hi.max(y)));
    let pad = ((max - min) * 0.05).max(1.0);
    [if min < 0.0 { min - pad } else { 0.0 }, max + pad]
}

fn date_labels(dates: &[DateTime<FixedOffset>], date_format: &str) -> Vec<String> {
    let fmt = |d: &DateTime<FixedOffset>| d.format(date_format).to_string();
    match dates {
        [] => Vec::new(),
        [only] => vec![fmt(only)],
        [first, .., last] => vec![fmt(first), fmt(&dates[dates.len() / 2]), fmt(last)],
    }
}

fn y_labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], mid, bounds[1]]
        .iter()
        .map(|v| Span::raw(format!("{:.0}", v)))
        .collect()
}

fn x_axis(data: &ChartData) -> Axis<'_> {
    Axis::default()
        .title("Date")
        .style(Style::default().fg(Color::Gray))
        .bounds(data.x_bounds)
        .labels(data.x_labels.iter().map(|l| Span::raw(l.as_str())).collect())
}

fn panel(title: String) -> Block<'static> {
    Block::default().borders(Borders::ALL).title(Span::styled(
        title,
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))
}

/// Cumulative added (green) and removed (red).
pub fn draw_changes_panel(f: &mut Frame, area: Rect, data: &ChartData) {
    let datasets = vec![
        Dataset::default()
            .name("added")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&data.added),
        Dataset::default()
            .name("removed")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&data.removed),
    ];
    let y = y_bounds(&[&data.added, &data.removed]);

    let chart = Chart::new(datasets)
        .block(panel("Changes (Cumulative)".to_string()))
        .legend_position(Some(LegendPosition::TopLeft))
        .hidden_legend_constraints((
            ratatui::layout::Constraint::Ratio(1, 2),
            ratatui::layout::Constraint::Ratio(1, 2),
        ))
        .x_axis(x_axis(data))
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(y)
                .labels(y_labels(y)),
        );
    f.render_widget(chart, area);
}

/// Net lines of code.
pub fn draw_total_panel(f: &mut Frame, area: Rect, data: &ChartData) {
    let datasets = vec![Dataset::default()
        .name("total")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Blue))
        .data(&data.total)];
    let y = y_bounds(&[&data.total]);

    let current = data.total.last().map(|&(_, v)| v as i64).unwrap_or(0);
    let chart = Chart::new(datasets)
        .block(panel(format!("Lines of code ({current})")))
        .legend_position(Some(LegendPosition::TopLeft))
        .x_axis(x_axis(data))
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(y)
                .labels(y_labels(y)),
        );
    f.render_widget(chart, area);
}
