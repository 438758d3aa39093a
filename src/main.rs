use std::io;
use std::sync::Arc;
use std::time::Duration;
use anyhow::Result;
use tokio::sync::Mutex;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use book_finder::model::{AppModel, FavoritesStore, GoogleBooksClient};
use book_finder::{logging, AppController, AppView, Config};

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== Book Finder Starting ===");

    dotenvy::dotenv().ok();
    let config = Config::from_env();
    tracing::info!(
        api = %config.api_base_url,
        page_size = config.page_size,
        data_dir = %config.data_dir.display(),
        "Configuration loaded"
    );

    let catalog = GoogleBooksClient::new(config.api_base_url.clone(), config.request_timeout)?;
    let favorites = FavoritesStore::in_dir(&config.data_dir);

    let model = Arc::new(Mutex::new(AppModel::new(config.page_size)));
    let controller = AppController::new(
        model.clone(),
        Arc::new(catalog),
        Arc::new(favorites),
        config.page_size,
    );

    controller.load_favorites().await;

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Book Finder shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
) -> Result<()> {
    loop {
        let (state, ui_state, should_quit) = {
            let model_guard = model.lock().await;
            let (state, ui_state) = model_guard.snapshot();
            (state, ui_state, model_guard.should_quit())
        };

        if should_quit {
            break;
        }

        terminal.draw(|f| {
            AppView::render(f, &state, &ui_state);
        })?;

        // Short poll keeps the loading indicator responsive
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Err(e) = controller.handle_key_event(key).await {
                    tracing::warn!(error = %e, "Key handling failed");
                }
            }
        }
    }

    Ok(())
}
