mod events;
mod ui;

use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use notify::{Event as NotifyEvent, EventKind, RecursiveMode, Watcher};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use huelist::app::App;
use huelist::color::Rgb;
use huelist::decorate::decorate_all;
use huelist::items;
use huelist::palette::{JsonFormatter, PaletteFormatter, PaletteReport, TextFormatter};

use events::AppEvent;

#[derive(Parser, Debug)]
#[command(name = "huelist", about = "Render plain-text lists with gradient-tinted borders")]
struct Cli {
    /// List file to render: one item per line, blank lines separate groups.
    file: PathBuf,

    /// Gradient start color as a hex string.
    #[arg(long, default_value = "#00E1FF")]
    start: Rgb,

    /// Gradient end color as a hex string.
    #[arg(long, default_value = "#FF1E00")]
    end: Rgb,

    /// Print the palette to stdout instead of launching the TUI.
    #[arg(long)]
    dump: bool,

    /// Output format for --dump.
    #[arg(long, value_enum, default_value_t = DumpFormat::Text)]
    format: DumpFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum DumpFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let groups = items::load_file(&cli.file)?;

    if cli.dump {
        let decorated = decorate_all(&groups, cli.start, cli.end);
        let report = PaletteReport::from_decorated(
            &cli.file.display().to_string(),
            cli.start,
            cli.end,
            &decorated,
        );
        match cli.format {
            DumpFormat::Text => print!("{}", TextFormatter::default().format(&report)),
            DumpFormat::Json => println!("{}", JsonFormatter.format(&report)),
        }
        return Ok(());
    }

    // Launch TUI.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(groups, cli.file.display().to_string(), cli.start, cli.end);
    app.on_ready(|a| a.startup = false);

    let result = run_tui(&mut terminal, &mut app, &cli.file);

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_tui(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    list_file: &Path,
) -> Result<()> {
    let (tx, rx) = mpsc::channel::<AppEvent>();

    // Spawn key reader thread.
    events::spawn_key_reader(tx.clone());

    // Spawn tick timer (250ms).
    events::spawn_tick_timer(tx.clone(), Duration::from_millis(250));

    // Watch the list file's directory so edits reload the list, including
    // editors that replace the file on save.
    let watch_dir = list_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let watched_name = list_file.file_name().map(|n| n.to_os_string());
    let tx_file = tx.clone();
    let mut _watcher =
        notify::recommended_watcher(move |res: Result<NotifyEvent, notify::Error>| {
            if let Ok(event) = res {
                if matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                    for path in event.paths {
                        if path.file_name().map(|n| n.to_os_string()) == watched_name {
                            let _ = tx_file.send(AppEvent::FileChanged(path));
                        }
                    }
                }
            }
        })?;
    _watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        match rx.recv_timeout(Duration::from_millis(50)) {
            Ok(AppEvent::Key(key)) => app.handle_key(key),
            Ok(AppEvent::FileChanged(_)) => {
                // Re-read the list and re-size each group's gradient.
                match items::load_file(list_file) {
                    Ok(groups) => app.set_groups(groups),
                    Err(e) => {
                        eprintln!("Warning: failed to reload {}: {}", list_file.display(), e)
                    }
                }
            }
            Ok(AppEvent::Tick) => {
                // The first tick after the first draw is the ready signal.
                app.fire_ready();
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
