use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::list::render_list;
use crate::ui::onboarding::render_onboarding;
use crate::ui::view::Screen;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.revision().label(), app.greetings().len());
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    let onboarding = match app.screen() {
        Screen::Onboarding(view) => {
            render_onboarding(frame, &view, body);
            true
        }
        Screen::List(view) => {
            render_list(frame, &view, body);
            false
        }
    };

    let footer_widget = Footer::new(onboarding);
    frame.render_widget(footer_widget.widget(footer), footer);
}
