use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::theme;

/// Render the remove confirmation dialog
pub fn render_remove_confirmation(f: &mut Frame, plant_name: &str) {
    let prompt_text = format!(
        "Remove {}?\n\n\
        The plant and its watering reminder will be forgotten.\n\n\
        Continue? (y/n)",
        plant_name
    );

    // Center the prompt
    let area = f.area();
    let prompt_width = 50u16.min(area.width);
    let prompt_height = 9u16.min(area.height);
    let prompt_area = Rect {
        x: (area.width.saturating_sub(prompt_width)) / 2,
        y: (area.height.saturating_sub(prompt_height)) / 2,
        width: prompt_width,
        height: prompt_height,
    };

    let prompt = Paragraph::new(prompt_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm Remove")
                .border_style(Style::default().fg(theme::RED)),
        )
        .style(Style::default())
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}
