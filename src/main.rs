mod ui;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use gacha::PityConfig;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use ui::{draw_ui, App};

#[derive(Debug, Parser)]
#[command(name = "gacha", version, about = "Gacha Simulator - pity-aware pull simulator")]
struct Args {
    /// Seed the pull RNG for a reproducible session
    #[arg(short, long)]
    seed: Option<u64>,

    /// Pity config as JSON (missing fields use the standard banner)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    // Only log when RUST_LOG is set
    if std::env::var_os("RUST_LOG").is_some() {
        env_logger::init();
    }

    let config = match &args.config {
        Some(path) => match PityConfig::from_json_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(2);
            }
        },
        None => PityConfig::standard(),
    };
    log::info!("starting session: {}", config.summary());

    let mut app = App::new(config, args.seed);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result?;
    print!("{}", app.session.summary_text());
    println!("Goodbye!");

    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| draw_ui(f, app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    app.handle_key(key_event.code);
                }
            }
        }
    }
    Ok(())
}
