mod chart;
mod help;

pub use chart::{draw_changes_panel, draw_total_panel, y_bounds, ChartData};
pub use help::draw_help_overlay;
