use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    path::Path,
    time::{Duration, Instant},
};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::info;

use foliotui::config::{get_config_path, Config};
use foliotui::content::PortfolioContent;
use foliotui::logic::navigation::check_section_map;
use foliotui::logic::platform::default_open_command;
use foliotui::logic::ui::parse_theme;
use foliotui::model::Model;
use foliotui::ui::{self, Hitboxes};
use foliotui::logging;

mod app;
mod handlers;
mod services;

use services::{LinkRequest, LinkResponse};

/// Frame interval while a scroll animation runs
const ANIMATION_FRAME: Duration = Duration::from_millis(16);

/// Poll timeout when nothing is moving
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Terminal portfolio
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging (see FOLIOTUI_LOG for finer filters)
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (j/k, ^D/U, gg/G)
    #[arg(long)]
    vim: bool,

    /// Start with the light theme
    #[arg(long)]
    light: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Portfolio content YAML (default: bundled sample)
    #[arg(long)]
    content: Option<String>,
}

pub struct App {
    pub model: Model,

    pub(crate) content: PortfolioContent,
    pub(crate) hitboxes: Hitboxes,
    cell_width_units: u32,
    pub(crate) link_tx: UnboundedSender<LinkRequest>,
    link_rx: UnboundedReceiver<LinkResponse>,
}

impl App {
    fn new(
        config: &Config,
        content: PortfolioContent,
        link_tx: UnboundedSender<LinkRequest>,
        link_rx: UnboundedReceiver<LinkResponse>,
    ) -> Self {
        let model = Model::new(
            config.vim_mode,
            parse_theme(&config.theme),
            Duration::from_millis(config.scroll_animation_ms),
            config.sync_during_animation,
        );

        Self {
            model,
            content,
            hitboxes: Hitboxes::default(),
            cell_width_units: config.cell_width_units.max(1),
            link_tx,
            link_rx,
        }
    }
}

/// Content from the configured file, or the bundled sample
fn load_content(config: &Config) -> Result<PortfolioContent> {
    match &config.content_path {
        Some(path) => PortfolioContent::load(Path::new(path))
            .with_context(|| format!("failed to load portfolio content from {}", path)),
        None => PortfolioContent::bundled().context("bundled portfolio content is invalid"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    logging::init(args.debug)?;

    check_section_map().context("section table is inconsistent")?;

    // Load configuration
    let mut config = match get_config_path(args.config)? {
        Some(path) => {
            info!("Loading config from: {}", path.display());
            Config::load(&path)?
        }
        None => Config::default(),
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if args.light {
        config.theme = "light".to_string();
    }
    if args.content.is_some() {
        config.content_path = args.content;
    }

    let content = load_content(&config)?;

    let open_command = config
        .open_command
        .clone()
        .unwrap_or_else(|| default_open_command().to_string());
    let (link_tx, link_rx) = services::spawn_link_service(open_command);

    // Initialize app
    let mut app = App::new(&config, content, link_tx, link_rx);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    info!("foliotui exiting");

    // Return result after cleanup
    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Advance the scroll animation and re-derive the highlight
        app.model.tick(Instant::now());

        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(
                f,
                &mut app.model,
                &app.content,
                app.cell_width_units,
                &mut app.hitboxes,
            );
        })?;

        // Auto-dismiss toast after 1.5 seconds
        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process link service responses (non-blocking)
        while let Ok(response) = app.link_rx.try_recv() {
            handlers::handle_link_response(app, response);
        }

        let timeout = if app.model.viewport.is_animating() {
            ANIMATION_FRAME
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => handlers::handle_key(app, key)?,
                Event::Mouse(mouse) => handlers::handle_mouse(app, mouse),
                // The next frame relayouts for the new size
                _ => {}
            }
        }
    }

    Ok(())
}

#[cfg(test)]
pub(crate) fn test_app_with_links() -> (App, UnboundedReceiver<LinkRequest>) {
    let (link_tx, link_requests) = tokio::sync::mpsc::unbounded_channel();
    let (_response_tx, link_rx) = tokio::sync::mpsc::unbounded_channel();
    let content = PortfolioContent::bundled().unwrap();
    let mut app = App::new(&Config::default(), content, link_tx, link_rx);
    // Seven 10-row sections in a 20-row viewport: starts 0, 12, ..., 72
    app.model.viewport.relayout(vec![10; 7], 20);
    (app, link_requests)
}

#[cfg(test)]
pub(crate) fn test_app() -> App {
    test_app_with_links().0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_uses_config() {
        let config = Config::from_yaml_str("vim_mode: true\ntheme: light\ncell_width_units: 0\n").unwrap();
        let (tx, _) = tokio::sync::mpsc::unbounded_channel();
        let (_, rx) = tokio::sync::mpsc::unbounded_channel();
        let app = App::new(&config, PortfolioContent::bundled().unwrap(), tx, rx);
        assert!(app.model.ui.vim_mode);
        assert_eq!(app.model.ui.theme, foliotui::model::ThemeMode::Light);
        assert_eq!(app.cell_width_units, 1);
    }

    #[test]
    fn test_load_content_reports_missing_file() {
        let config = Config {
            content_path: Some("/nonexistent/portfolio.yaml".to_string()),
            ..Config::default()
        };
        let err = load_content(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/portfolio.yaml"));
    }

    #[test]
    fn test_load_content_defaults_to_bundled() {
        let content = load_content(&Config::default()).unwrap();
        assert_eq!(content.profile.first_name, "Alex");
    }
}
