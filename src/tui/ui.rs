use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::App;
use crate::core::view::{Banner, can_submit, char_count, current_banner};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ErrorBanner, Footer, ResultPanel, SubmitButton, TitleBar};

/// Screen regions for one frame.
struct ScreenLayout {
    title: Rect,
    input: Rect,
    button: Rect,
    main: Rect,
    footer: Rect,
}

fn screen_layout(area: Rect, input_height: u16) -> ScreenLayout {
    use Constraint::{Length, Min};
    let [title, _, input, button, _, main, footer] = Layout::vertical([
        Length(1),
        Length(1),
        Length(input_height),
        Length(1),
        Length(1),
        Min(0),
        Length(Footer::HEIGHT),
    ])
    .areas(area);

    ScreenLayout {
        title,
        input,
        button,
        main,
        footer,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let area = frame.area();
    let input_height = tui.input_box.calculate_height(area.width);
    let layout = screen_layout(area, input_height);

    TitleBar::new(app.endpoint.clone(), app.status_message.clone()).render(frame, layout.title);

    tui.input_box.char_count = char_count(&app.input);
    tui.input_box.dimmed = app.is_loading;
    tui.input_box.render(frame, layout.input);

    SubmitButton::new(can_submit(app), app.is_loading, spinner_frame)
        .render(frame, layout.button);
    tui.button_area = layout.button;

    draw_main(frame, app, layout.main);

    Footer.render(frame, layout.footer);
}

fn draw_main(frame: &mut Frame, app: &App, area: Rect) {
    match current_banner(app) {
        Banner::Error(message) => {
            let mut banner = ErrorBanner::new(message);
            let height = banner.height(area.width).min(area.height);
            banner.render(frame, Rect { height, ..area });
        }
        Banner::Result { translation } => {
            let mut panel = ResultPanel::new(translation, &app.keywords);
            let height = panel.height(area.width).min(area.height);
            panel.render(frame, Rect { height, ..area });
        }
        Banner::Loading | Banner::Empty => {}
    }
}
