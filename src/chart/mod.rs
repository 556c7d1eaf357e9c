//! Chart module
//!
//! Turns raw price history into a display-ready series

mod series;

pub use series::{format_label, transform, ChartSeries, CHART_WINDOW};
