use chrono::Utc;
use ratatui::{
    layout::Alignment,
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::logic::reminder::Locale;
use crate::model::Model;

use super::{alert, banner, dialogs, header, layout, plant_list, theme, toast};

/// Main render function - orchestrates all UI rendering.
/// Pure function of the model: no state changes besides list-selection sync.
pub fn render(f: &mut Frame, model: &mut Model, locale: Locale) {
    let size = f.area();

    // While the initial load is pending, only the loading indicator shows
    if model.plants.loading {
        let loading = Paragraph::new("\n\nLoading your plants...")
            .style(Style::default().fg(theme::GREEN))
            .alignment(Alignment::Center);
        f.render_widget(loading, size);
        return;
    }

    let layout_info = layout::calculate_layout(size);

    header::render_header(f, layout_info.header_area, model.plants.len());

    banner::render_banner(
        f,
        layout_info.banner_area,
        model.plants.next_watering.as_deref(),
    );

    // Create temporary ListState for rendering, then sync the selection back
    let mut list_state = ratatui::widgets::ListState::default();
    list_state.select(model.ui.selected);
    plant_list::render_plant_list(
        f,
        layout_info.list_area,
        &model.plants.plants,
        &mut list_state,
        locale,
        Utc::now(),
    );
    model.ui.selected = list_state.selected();

    let legend = Paragraph::new("↑/↓ select   d remove   q quit")
        .style(Style::default().fg(theme::BODY_LIGHT));
    f.render_widget(legend, layout_info.legend_area);

    // Modals render on top of everything else
    if let Some((_id, name)) = &model.ui.confirm_remove {
        dialogs::render_remove_confirmation(f, name);
    }

    if let Some(message) = &model.ui.alert {
        alert::render_alert(f, message);
    }

    if let Some((message, _timestamp)) = &model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
