//! Terminal setup and the main event loop

use crate::backend::factory::create_backend;
use crate::config::Config;
use crate::controller::Controller;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{EventHandler, EventType};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::Instant;

/// Run the todo list TUI until the user quits
pub async fn run_app(config: Config) -> anyhow::Result<()> {
    // Build services before touching the terminal so config errors print normally
    let logger = Logger::from_config(config.logging.enabled)?;
    let backend = create_backend(&config.api)?;
    logger.log(format!(
        "Startup: Using {} backend at {}",
        backend.backend_type(),
        config.api.base_url
    ));

    let controller = Controller::from_config(&config);
    let icons = IconService::new(config.ui.icon_theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(terminal_backend)?;

    let mut app = AppComponent::new(controller, backend, logger, icons);
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
        // Render when needed
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            EventType::Key(key) => {
                let action = app.handle_key_events(key);
                app.handle_action(action);
                needs_render = true;
            }
            EventType::Resize(_, _) => {
                needs_render = true;
            }
            EventType::Tick => {
                needs_render |= app.tick(Instant::now());
            }
            EventType::Other => {}
        }

        // Apply finished requests
        if app.process_background_actions() > 0 {
            needs_render = true;
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
