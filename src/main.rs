use clap::{Parser, Subcommand};
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

mod ai;
mod app;
mod clipboard;
mod config;
mod editor;
mod error;
mod help;
mod history;
mod notification;
mod output;
mod proxy;
mod scroll;
mod settings;
mod suggest;
#[cfg(test)]
mod test_utils;
mod theme;
mod widgets;

use app::App;
use error::RenkiError;

/// Terminal lyric-writing assistant
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Terminal lyric-writing assistant that suggests rhymes and lines while you write"
)]
struct Args {
    /// Lyrics file to start from (not written back)
    file: Option<PathBuf>,

    /// Start with automatic suggestions turned off
    #[arg(long)]
    no_auto: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the chat proxy that keeps the API key on the server
    Serve {
        /// Address to listen on (overrides [proxy].listen)
        #[arg(long)]
        listen: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(Command::Serve { listen }) = args.command {
        return run_proxy(listen);
    }

    // Writes to /tmp/renki-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        if let Ok(log_file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/renki-debug.log")
        {
            env_logger::Builder::new()
                .filter_level(log::LevelFilter::Debug)
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .format(|buf, record| {
                    use std::time::SystemTime;
                    let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                    writeln!(
                        buf,
                        "[{}] [{}] {}",
                        datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                        record.level(),
                        record.args()
                    )
                })
                .init();
        }

        log::debug!("=== RENKI DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let config_result = config::load_config();

    let mut user_settings = if settings::settings_path().exists() {
        settings::load_settings()
    } else {
        settings::Settings {
            auto_suggest: config_result.config.suggest.auto_suggest,
            ..settings::Settings::default()
        }
    };
    if args.no_auto {
        user_settings.auto_suggest = false;
    }

    // Read before touching the terminal so errors print normally
    let initial_lyrics = match &args.file {
        Some(path) => read_lyrics(path)?,
        None => String::new(),
    };

    let app = App::new(&config_result.config, user_settings, &initial_lyrics);

    let terminal = init_terminal()?;
    let result = run(terminal, app, config_result);
    restore_terminal()?;

    finish_session(result, &settings::settings_path())?;

    #[cfg(debug_assertions)]
    log::debug!("=== RENKI DEBUG SESSION ENDED ===");

    Ok(())
}

fn read_lyrics(path: &PathBuf) -> Result<String, RenkiError> {
    std::fs::read_to_string(path).map_err(|source| RenkiError::ReadLyrics {
        path: path.clone(),
        source,
    })
}

/// Proxy mode logs to stderr; there is no terminal UI to protect
fn run_proxy(listen: Option<String>) -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    color_eyre::install()?;

    let config_result = config::load_config();
    if let Some(warning) = &config_result.warning {
        log::warn!("{}", warning);
    }
    let config = config_result.config;
    let listen = listen.unwrap_or_else(|| config.proxy.listen.clone());

    proxy::serve(&listen, &config.ai)?;
    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

/// Settings are handed back even when the loop fails so they can be saved
struct RunResult {
    settings: settings::Settings,
    outcome: Result<()>,
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    config_result: config::ConfigResult,
) -> RunResult {
    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }

    setup_ai_worker(&mut app, &config_result.config);

    let outcome = event_loop(&mut terminal, &mut app);
    app.quit();

    RunResult {
        settings: app.settings,
        outcome,
    }
}

/// Writes the session's settings, then reports how the loop ended
fn finish_session(result: RunResult, settings_path: &std::path::Path) -> Result<()> {
    if let Err(e) = settings::save_settings_to(&result.settings, settings_path) {
        log::error!("{}", e);
    }
    result.outcome
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Set up the suggestion worker thread and channels
fn setup_ai_worker(app: &mut App, config: &config::Config) {
    if !app.ai.configured {
        app.notification.show_warning(
            "Suggestion backend not configured. Check the [ai] section of config.toml.",
        );
        return;
    }

    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();
    app.ai.set_channels(request_tx, response_rx);

    ai::worker::spawn_worker(&config.ai, request_rx, response_tx);
}
