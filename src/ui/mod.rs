// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - theme: shared style tokens (colors, waterdrop icon)
// - layout: calculates screen layout (header, banner, list, legend)
// - render: main orchestration function that coordinates all rendering
// - header: renders the top header (title, plant count)
// - banner: renders the highlighted "next watering" banner
// - plant_list: renders the scrollable plant card list
// - dialogs: renders the remove confirmation dialog
// - alert: renders blocking alert notices
// - toast: renders toast notifications (brief pop-up messages)

pub mod alert;
pub mod banner;
pub mod dialogs;
pub mod header;
pub mod layout;
pub mod plant_list;
pub mod render;
pub mod theme;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
