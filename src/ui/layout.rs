use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top header area
    pub header_area: Rect,
    /// Highlighted "next watering" banner area
    pub banner_area: Rect,
    /// Scrollable plant list area
    pub list_area: Rect,
    /// Hotkey legend area
    pub legend_area: Rect,
}

/// Calculate the vertical screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect) -> LayoutInfo {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header (top border, text, bottom border)
            Constraint::Length(3), // Reminder banner
            Constraint::Min(3),    // Plant list
            Constraint::Length(1), // Hotkey legend
        ])
        .split(terminal_size);

    LayoutInfo {
        header_area: chunks[0],
        banner_area: chunks[1],
        list_area: chunks[2],
        legend_area: chunks[3],
    }
}
