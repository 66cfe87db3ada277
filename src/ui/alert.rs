use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a blocking alert notice. Stays up until dismissed with Enter/Esc.
pub fn render_alert(f: &mut Frame, message: &str) {
    let area = f.area();
    let alert_width = 56u16.min(area.width);
    let alert_height = 7u16.min(area.height);
    let alert_area = Rect {
        x: (area.width.saturating_sub(alert_width)) / 2,
        y: (area.height.saturating_sub(alert_height)) / 2,
        width: alert_width,
        height: alert_height,
    };

    let text = format!("{}\n\n(Enter to dismiss)", message);

    let alert = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Notice")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, alert_area);
    f.render_widget(alert, alert_area);
}
