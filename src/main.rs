use std::io::stdout;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use tracing::{error, info};

use tally::app::default_user_dir;
use tally::events::ChangeOrigin;
use tally::{logging, App};

/// Type into a field and watch the word count and per-character display follow
#[derive(Parser, Debug)]
#[command(name = "tally", version, about, long_about = None)]
struct Cli {
    /// Start with this text in the input field
    #[arg(short, long, value_name = "TEXT")]
    text: Option<String>,

    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Append logs to this file instead of <config dir>/tally.log
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log at debug level unless TALLY_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,

    /// Render TEXT without starting the UI and print the result
    #[arg(long, requires = "text")]
    print: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let user_dir = cli.config_dir.clone().unwrap_or_else(default_user_dir);

    let log_path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| user_dir.join("tally.log"));
    logging::init(&log_path, cli.verbose)?;

    let mut app = App::load(user_dir).await?;
    if let Some(text) = &cli.text {
        app.dispatch(text.as_str(), ChangeOrigin::Programmatic);
    }

    if cli.print {
        println!("{}", app.summary());
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("starting ui");
    let result = app.run(&mut terminal).await;

    // Restore the terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        ratatui::crossterm::cursor::Show
    )?;

    if let Err(e) = &result {
        error!("exited with error: {:#}", e);
        eprintln!("Error: {:#}", e);
    }
    result
}
