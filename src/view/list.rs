//! Ranked list rendering

use super::format::{dollars, fixed, grouped, percent};
use super::render_pending_or_failed;
use crate::market::{CoinSummary, Collection};
use crate::screen::ScreenState;
use std::fmt::Write;

/// Attribution shown under the list
pub const ATTRIBUTION: &str = "Powered by CoinGecko";

/// Render one collection entry
pub fn render_coin(rank: usize, coin: &CoinSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>3}. {} ({})", rank, coin.name, coin.display_symbol());
    let _ = writeln!(
        out,
        "     Current Price: {}",
        dollars(coin.current_price, |p| fixed(p, 5))
    );
    let _ = writeln!(out, "     Market Cap: {}", dollars(coin.market_cap, grouped));
    let _ = writeln!(
        out,
        "     24h Change: {}",
        percent(coin.price_change_percentage_24h, 2)
    );
    out
}

/// Render the list screen
pub fn render_list(state: &ScreenState<Collection>) -> String {
    let collection = match state {
        ScreenState::Ready(collection) => collection,
        other => return render_pending_or_failed(other),
    };

    let mut out = String::new();
    for (i, coin) in collection.iter().enumerate() {
        out.push_str(&render_coin(i + 1, coin));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", ATTRIBUTION);
    out
}
