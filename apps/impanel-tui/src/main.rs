//! impanel - dataset search console
//!
//! Terminal UI over the explore search panel.

mod app;
mod keybindings;
mod mode;
mod views;
mod widgets;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use comfy_table::Table;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use impanel_core::{
    ExploreClient, HttpClient, PanelConfig, SearchBackend, SearchPanelController,
};

use app::App;

/// Search console for dataset exploration services
#[derive(Parser, Debug)]
#[command(name = "impanel", version, about)]
struct Args {
    /// Explore endpoint to search against
    #[arg(long)]
    endpoint: Option<String>,

    /// Pre-seed the query filter before the initial search
    #[arg(long)]
    query: Option<String>,

    /// Path to a configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSRF token to include in search requests
    #[arg(long)]
    csrf_token: Option<String>,

    /// Run a single search and print the results as a table
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => PanelConfig::load(path)?,
        None => PanelConfig::load_default()?,
    };
    if let Some(endpoint) = &args.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(token) = &args.csrf_token {
        config.csrf_token = token.clone();
    }
    config.validate()?;

    if args.once {
        run_once(build_controller(&config), args.query.as_deref()).await?;
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(build_controller(&config));
    app.initial_search(args.query.as_deref()).await;
    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn build_controller(config: &PanelConfig) -> SearchPanelController<ExploreClient> {
    let http = HttpClient::with_timeout(
        &config.http.user_agent,
        Duration::from_secs(config.http.timeout_secs),
    );
    let client = ExploreClient::with_http(http, config.endpoint.clone());
    SearchPanelController::new(client, config.csrf_token.clone())
}

/// One search, results on stdout, no terminal takeover
async fn run_once(
    mut controller: SearchPanelController<ExploreClient>,
    query: Option<&str>,
) -> impanel_core::Result<()> {
    controller.initial_search(query).await?;

    let Some(page) = controller.page() else {
        return Ok(());
    };
    println!("{}", page.count_label);
    if page.is_empty() {
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Title", "Type", "Created", "Authors", "Tags", "Size"]);
    for card in &page.cards {
        table.add_row(vec![
            card.title.clone(),
            card.type_badge.clone(),
            card.created.clone(),
            card.author_lines.join("; "),
            card.tag_badges.join(", "),
            card.size.clone(),
        ]);
    }
    println!("{table}");

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend, S: SearchBackend>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && app.handle_key(key.code, key.modifiers).await
                {
                    return Ok(());
                }
            }
        }
    }
}
