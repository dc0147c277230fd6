use chrono::Timelike;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use retrodesk::achievements::{clear_progress, AchievementEngine, Catalog};
use retrodesk::build_info;
use retrodesk::config::{Config, ENV_LOG};
use retrodesk::constants::LOG_FILE_NAME;
use retrodesk::input::{
    check_desktop_achievements, check_startup_achievements, handle_desktop_input, DesktopInput,
    DesktopOverlay, InputResult, KonamiTracker,
};
use retrodesk::storage::file_store::default_data_dir;
use retrodesk::storage::{FileStore, KeyValueStore};
use retrodesk::ui::achievement_grid_scene::AchievementGridState;
use retrodesk::ui::desktop_scene::DesktopScene;
use retrodesk::ui::draw_ui;
use retrodesk::ui::toast::ToastQueue;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let config = Config::from_env();

    if args.len() > 1 {
        match args[1].as_str() {
            "reset" => match reset_progress(&config) {
                Ok(path) => {
                    println!("Achievements reset ({})", path.display());
                    std::process::exit(0);
                }
                Err(e) => {
                    eprintln!("Could not reset achievements: {}", e);
                    std::process::exit(1);
                }
            },
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Retrodesk - a wireframe retro desktop for the terminal\n");
                println!("Usage: retrodesk [command]\n");
                println!("Commands:");
                println!("  reset      Erase all achievement progress");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                println!("\nEnvironment:");
                println!("  RETRODESK_ACHIEVEMENTS_ENABLED  0/false to disable unlocks");
                println!("  RETRODESK_DATA_DIR              Where progress and logs live");
                println!("  RETRODESK_TICK_MS               Frame interval in milliseconds");
                println!("  {}                   Log filter (default: warn)", ENV_LOG);
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'retrodesk --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let data_dir = resolve_data_dir(&config);
    if let Some(dir) = data_dir.as_deref() {
        init_logging(dir);
    }
    info!(version = %build_info::version_line(), "starting");

    let store: Option<Box<dyn KeyValueStore>> = match data_dir {
        Some(dir) => Some(Box::new(FileStore::new(dir))),
        None => None,
    };
    let mut engine = AchievementEngine::new(
        &Catalog::standard(),
        store,
        config.achievements_enabled,
    );

    let toasts = ToastQueue::new();
    let producer = toasts.clone();
    engine.on_achievement_unlocked(move |a| {
        producer.push(format!("{} Achievement unlocked: {}", a.icon, a.title));
    });

    check_startup_achievements(&mut engine, chrono::Local::now().hour());

    let mut desktop = DesktopScene::new();
    let mut grid_state = AchievementGridState::new();
    let mut overlay = DesktopOverlay::None;
    let mut konami = KonamiTracker::new();
    let mut rng = rand::thread_rng();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|frame| {
            draw_ui(frame, &desktop, &engine, &grid_state, overlay, &toasts);
        })?;

        if event::poll(config.tick_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let ctx = DesktopInput {
                        desktop: &mut desktop,
                        engine: &mut engine,
                        grid: &mut grid_state,
                        overlay: &mut overlay,
                        konami: &mut konami,
                        rng: &mut rng,
                    };
                    if handle_desktop_input(key, ctx) == InputResult::Quit {
                        break;
                    }
                }
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= config.tick_interval {
            last_tick = Instant::now();
            desktop.tick(elapsed);
            toasts.tick(elapsed);
            check_desktop_achievements(&desktop, &mut engine);
        }
    }

    desktop.cleanup();

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    println!(
        "Goodbye! {}/{} achievements unlocked.",
        engine.unlocked_count(),
        engine.total_count()
    );

    Ok(())
}

/// The configured data directory, or `~/.retrodesk/`. None means progress
/// stays in memory for this run.
fn resolve_data_dir(config: &Config) -> Option<PathBuf> {
    if let Some(dir) = &config.data_dir {
        return Some(dir.clone());
    }
    match default_data_dir() {
        Ok(dir) => Some(dir),
        Err(e) => {
            eprintln!("Warning: {}. Achievements will not be saved.", e);
            None
        }
    }
}

/// Logs go to a file so they never draw over the terminal UI.
fn init_logging(dir: &Path) {
    let file = fs::create_dir_all(dir).and_then(|_| {
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(LOG_FILE_NAME))
    });
    let file = match file {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: could not open log file: {}", e);
            return;
        }
    };

    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("warn"));
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    if let Err(e) = result {
        eprintln!("Warning: could not start logging: {}", e);
    }
}

fn reset_progress(config: &Config) -> Result<PathBuf, retrodesk::error::StoreError> {
    let mut store = match &config.data_dir {
        Some(dir) => FileStore::new(dir.clone()),
        None => FileStore::in_home()?,
    };
    clear_progress(&mut store)?;
    Ok(store.dir().to_path_buf())
}
