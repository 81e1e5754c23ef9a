//! Per-view rendering.

mod daily;
mod decompose;
mod monthly;
mod seasons;

pub use daily::draw_daily_tab;
pub use decompose::draw_decompose_tab;
pub use monthly::draw_monthly_tab;
pub use seasons::draw_seasons_tab;
