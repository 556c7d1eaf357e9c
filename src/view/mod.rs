//! Terminal presentation of screen states

mod detail;
mod format;
mod list;

pub use detail::{render_chart, render_detail};
pub use list::{render_list, ATTRIBUTION};

use crate::screen::ScreenState;

/// Shared rendering for the non-ready states
fn render_pending_or_failed<T>(state: &ScreenState<T>) -> String {
    match state {
        ScreenState::Pending => "Loading...\n".to_string(),
        ScreenState::Failed(message) => format!("{}\n", message),
        ScreenState::Ready(_) => String::new(),
    }
}
