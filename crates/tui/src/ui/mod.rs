//! UI rendering modules.

mod footer;
mod header;
mod layout;
mod tabs;

pub use layout::draw_ui;
