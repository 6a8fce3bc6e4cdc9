use ratatui::{widgets::Block, Frame};
use tracing::debug;

use super::{
    document, drawer, hitbox::Hitboxes, layout, legend, links_panel, status_bar, theme, toast, top_bar,
};
use crate::content::PortfolioContent;
use crate::logic::layout::resolve_columns;
use crate::model::Model;

/// Main render function - orchestrates all UI rendering
///
/// Besides drawing, a frame resolves the layout mode for the current
/// width, feeds section heights to the viewport and records hitboxes for
/// the mouse handler.
pub fn render(
    f: &mut Frame,
    model: &mut Model,
    content: &PortfolioContent,
    cell_width_units: u32,
    hitboxes: &mut Hitboxes,
) {
    let size = f.area();
    hitboxes.clear();

    let mode = resolve_columns(size.width, cell_width_units);
    if mode != model.ui.layout_mode {
        debug!(?mode, width = size.width, "layout mode changed");
        model.ui.layout_mode = mode;
    }

    let palette = theme::palette(model.ui.theme);
    let has_resume = content.profile.resume_url.is_some();

    let plan = top_bar::plan_top_bar(
        top_bar::name_width(&content.profile),
        size.width.saturating_sub(2),
        mode,
        &palette,
    );
    model.ui.menu_collapsed = plan.collapsed;
    // The drawer only exists while the section links are collapsed
    if !plan.collapsed {
        model.ui.close_drawer();
    }
    let overlay = model.ui.overlay();

    f.render_widget(Block::default().style(palette.text()), size);

    let legend_height = legend::calculate_legend_height(
        size.width,
        model.ui.vim_mode,
        overlay,
        plan.collapsed,
        has_resume,
        &palette,
    );
    let layout_info = layout::calculate_layout(size, legend_height, cell_width_units);

    top_bar::render_top_bar(
        f,
        layout_info.top_bar_area,
        &content.profile,
        model.current_section(),
        plan,
        model.ui.theme,
        &palette,
        hitboxes,
    );

    document::render_document(
        f,
        layout_info.content_area,
        layout_info.scroll_area,
        &mut model.viewport,
        content,
        mode,
        &palette,
    );

    legend::render_legend(
        f,
        layout_info.legend_area,
        model.ui.vim_mode,
        overlay,
        plan.collapsed,
        has_resume,
        &palette,
    );

    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        model.current_section(),
        model.viewport.offset,
        model.viewport.max_offset(),
        mode,
        model.ui.theme,
        model.viewport.is_animating(),
        &palette,
    );

    if let Some(state) = &model.ui.drawer {
        drawer::render_drawer(
            f,
            size,
            state,
            model.current_section(),
            &content.profile.full_name(),
            &palette,
            hitboxes,
        );
    }

    if let Some(state) = &model.ui.links_panel {
        let links = content.links();
        links_panel::render_links_panel(f, size, state, &links, &palette, hitboxes);
    }

    // Render toast notification if active
    if let Some((message, _timestamp)) = &model.ui.toast_message {
        toast::render_toast(f, size, message, &palette);
    }
}
