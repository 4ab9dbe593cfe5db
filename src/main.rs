use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};

use peoplepick::app::{App, OutputFormat};
use peoplepick::config::load_config;
use peoplepick::filter::write_matches;
use peoplepick::picker::{NO_SUGGESTIONS_MESSAGE, PickerState};
use peoplepick::{PEOPLE, PickError, logging};

/// Interactive people picker with debounced substring search
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Quiet period in milliseconds before typed text filters the list
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the confirmed selection as JSON instead of its title
    #[arg(long)]
    json: bool,

    /// Print names matching QUERY and exit without starting the TUI
    #[arg(long, value_name = "QUERY")]
    filter: Option<String>,
}

fn main() -> Result<ExitCode> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    logging::init();

    let args = Args::parse();

    if let Some(query) = &args.filter {
        return Ok(print_matches(query)?);
    }

    let loaded = load_config(args.config.as_deref());
    let mut config = loaded.config;
    if let Some(ms) = args.debounce_ms {
        config.picker.debounce_ms = ms;
    }

    let picker = PickerState::with_config(PEOPLE, &config.picker).on_selected(Box::new(
        |person| match person {
            Some(person) => log::info!("Selection: {}", person.slug()),
            None => log::debug!("Selection cleared"),
        },
    ));
    let mut app = App::with_picker(picker, &config);
    app.notice = loaded.warning;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result?;

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Title
    };
    if let Some(output) = app.output(format)? {
        println!("{}", output);
    }

    Ok(ExitCode::SUCCESS)
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }
    Ok(())
}

fn print_matches(query: &str) -> Result<ExitCode, PickError> {
    let mut stdout = io::stdout().lock();
    if write_matches(&mut stdout, PEOPLE, query)? == 0 {
        eprintln!("{}", NO_SUGGESTIONS_MESSAGE);
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
