use anyhow::Result;
use chrono::{Duration as ChronoDuration, Utc};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs, io,
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

use plantui::config::Config;
use plantui::handlers;
use plantui::logic::reminder::Locale;
use plantui::model::Model;
use plantui::services::store::spawn_store_service;
use plantui::services::{StoreRequest, StoreResponse};
use plantui::storage::{Plant, PlantStore};
use plantui::ui;

/// Plant watering reminder TUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp-dir log file
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (j/k)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: ~/.config/plantui/config.yaml)
    #[arg(short, long)]
    config: Option<String>,

    /// Override the plant store file
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Seed a few demo plants into the store and exit
    #[arg(long)]
    seed_demo: bool,
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

fn debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("plantui-debug.log");
    path
}

fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

pub struct App {
    pub model: Model,
    locale: Locale,
    store_tx: tokio::sync::mpsc::UnboundedSender<StoreRequest>,
    store_rx: tokio::sync::mpsc::UnboundedReceiver<StoreResponse>,
}

impl App {
    fn new(config: &Config, store: PlantStore) -> Self {
        let locale = Locale::from_str(&config.locale);

        // Spawn the store worker and queue the initial load before the
        // first frame; the screen shows the loading indicator until the
        // response lands.
        let (store_tx, store_rx) = spawn_store_service(store);
        let _ = store_tx.send(StoreRequest::ListPlants);

        App {
            model: Model::new(config.vim_mode),
            locale,
            store_tx,
            store_rx,
        }
    }

    /// Handle store worker responses
    /// Delegated to handlers::store module
    fn handle_store_response(&mut self, response: StoreResponse) {
        handlers::handle_store_response(&mut self.model, self.locale, response);
    }

    /// Handle keyboard input
    /// Delegated to handlers::keyboard module
    fn handle_key(&mut self, key: KeyEvent) {
        handlers::handle_key(&mut self.model, &self.store_tx, key);
    }
}

/// Determine the config file path with fallback logic
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, it must exist
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/plantui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("plantui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    // No config found - defaults cover everything
    Ok(None)
}

/// Write a handful of demo plants into the store
async fn seed_demo(store: &PlantStore) -> Result<()> {
    let now = Utc::now();
    let demo = [
        ("Fern", "Likes shade and moist soil", 1),
        ("Cactus", "Water sparingly", 48),
        ("Aloe", "Bright light, water when dry", 6),
    ];

    for (i, (name, tips, hours)) in demo.iter().enumerate() {
        store
            .save_plant(Plant {
                id: i as u64 + 1,
                name: name.to_string(),
                about: String::new(),
                water_tips: tips.to_string(),
                notification: now + ChronoDuration::hours(*hours),
            })
            .await?;
    }

    println!("Seeded {} demo plants into {}", demo.len(), store.path().display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set debug mode
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    // Load configuration (optional: defaults apply when no file exists)
    let mut config = match get_config_path(args.config)? {
        Some(path) => {
            log_debug(&format!("Loading config from: {:?}", path));
            let config_str = fs::read_to_string(&path)?;
            serde_yaml::from_str(&config_str)?
        }
        None => Config::default(),
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if args.data_file.is_some() {
        config.data_file = args.data_file;
    }

    let store_path = config
        .data_file
        .clone()
        .unwrap_or_else(PlantStore::default_path);
    log_debug(&format!("Plant store: {:?}", store_path));
    let store = PlantStore::new(store_path);

    if args.seed_demo {
        return seed_demo(&store).await;
    }

    // Initialize app
    let mut app = App::new(&config, store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (pure function of the model)
        terminal.draw(|f| {
            ui::render(f, &mut app.model, app.locale);
        })?;

        // Auto-dismiss toast after its duration
        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process store responses (non-blocking)
        while let Ok(response) = app.store_rx.try_recv() {
            if let StoreResponse::RemoveResult { id, result: Err(e) } = &response {
                log_debug(&format!("Remove failed for plant {}: {}", id, e));
            }
            app.handle_store_response(response);
        }

        // Poll for keyboard input; timeout keeps the loop draining responses
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}
