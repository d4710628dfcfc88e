use std::io::stdout;
use std::time::Instant;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use restpick::app::App;
use restpick::cli::{Cli, OutputFormat};
use restpick::config;
use restpick::http::RestClient;
use restpick::typeahead::TypeaheadState;

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    // Debug logging to stderr (RUST_LOG), debug builds only
    #[cfg(debug_assertions)]
    env_logger::init();

    let cli = Cli::parse();
    let config = config::load()?;

    let url = cli.validated_url()?.to_string();
    let knobs = cli.typeahead_config(&config);
    let client = RestClient::new(url)
        .with_timeout(cli.timeout(&config))
        .with_per_page(knobs.page_size)
        .with_params(cli.parsed_params()?)
        .with_headers(cli.parsed_headers()?)
        .with_label_fields(cli.label_fields(&config));

    let typeahead = TypeaheadState::with_provider(knobs, client);
    let mut app = App::new(typeahead, cli.stay);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture, EnableFocusChange)?;

    let result = run(terminal, &mut app);

    // Restore terminal before printing anything
    let _ = execute!(stdout(), DisableMouseCapture, DisableFocusChange);
    ratatui::restore();

    result?;

    if let Some(picked) = &app.picked {
        match cli.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&picked.record)?),
            OutputFormat::Id => println!("{}", picked.id),
            OutputFormat::Label => println!("{}", picked.label),
        }
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Wait for input no longer than the nearest typeahead deadline
        if event::poll(app.poll_timeout(Instant::now()))? {
            let event = event::read()?;
            app.handle_event(event, Instant::now());
        }

        // Fire due debounces, apply blur closes, drain worker responses
        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
