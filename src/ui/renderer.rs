use crate::config::Config;
use crate::listing::ListingView;
use crate::logger::Logger;
use crate::routes::Route;
use crate::service::ClassroomService;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::sync::Arc;

/// Build the listing view from the `[ui]` settings
pub fn listing_view_from_config(config: &Config) -> anyhow::Result<ListingView> {
    let mut view = ListingView::new(config.ui.page_size);
    view.set_category(config.ui.default_category()?);
    Ok(view)
}

/// Async event loop with background task support
pub async fn run_app(
    service: Arc<dyn ClassroomService>,
    config: &Config,
    logger: Logger,
    start_route: Option<Route>,
) -> anyhow::Result<()> {
    let view = listing_view_from_config(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(service, view, logger);
    app.set_icon_theme(config.display.icon_theme);
    if let Some(route) = start_route {
        app.set_start_route(route);
    }
    let mut event_handler = EventHandler::new();

    app.trigger_initial_load();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        let event = event_handler.next_event().await?;
        match event {
            EventType::Key(_) | EventType::Resize(_, _) => {
                app.handle_event(event)?;
                needs_render = true;
            }
            EventType::Tick => {
                let was_busy = app.is_busy();
                app.handle_event(event)?;
                // Only redraw on ticks that finished background work
                needs_render = was_busy;
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
