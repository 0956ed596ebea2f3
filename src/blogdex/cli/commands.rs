use super::print::{print_categories, print_items, print_messages};
use super::setup::{Cli, Commands, SessionCommand, SessionLine};
use blogdex::api::{BlogdexApi, SearchReport};
use blogdex::config::BlogdexConfig;
use blogdex::document::fs::FileDocument;
use blogdex::error::Result;
use clap::Parser;
use directories::ProjectDirs;
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "BLOGDEX_LOG";

struct AppContext {
    api: BlogdexApi<FileDocument>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Filter { category }) => handle_filter(&mut ctx, &category),
        Some(Commands::Search { terms }) => handle_search(&mut ctx, &terms.join(" ")),
        Some(Commands::More { times }) => handle_more(&mut ctx, times),
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::Subscribe { email }) => handle_subscribe(&ctx, &email),
        Some(Commands::Session) => handle_session(&mut ctx),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn config_dir(cli: &Cli) -> Option<PathBuf> {
    cli.config_dir.clone().or_else(|| {
        ProjectDirs::from("com", "blogdex", "blogdex").map(|dirs| dirs.config_dir().to_path_buf())
    })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = match config_dir(cli) {
        Some(dir) => BlogdexConfig::load(dir)?,
        None => BlogdexConfig::default(),
    };
    debug!(?config, page = %cli.page.display(), "starting");

    let document = FileDocument::open(&cli.page)?;
    let mut api = BlogdexApi::open(document, &config)?;

    if let Some(location) = &cli.location {
        let result = api.apply_initial_category_from_location(location)?;
        print_messages(&result.messages);
    }

    Ok(AppContext { api })
}

/// Prints the page as last rendered into the document.
fn handle_list(ctx: &AppContext) -> Result<()> {
    let page = ctx.api.document();
    print_items(&page.shown_posts(), page.rendered().load_more_visible);
    Ok(())
}

fn handle_filter(ctx: &mut AppContext, category: &str) -> Result<()> {
    let result = ctx.api.set_category_filter(category)?;
    print_messages(&result.messages);
    handle_list(ctx)
}

fn handle_search(ctx: &mut AppContext, query: &str) -> Result<()> {
    let result = ctx.api.search(query)?;
    if result.search == Some(SearchReport::MissingQuery) {
        print_messages(&result.messages);
        return Ok(());
    }
    handle_list(ctx)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear_search()?;
    print_messages(&result.messages);
    handle_list(ctx)
}

fn handle_more(ctx: &mut AppContext, times: usize) -> Result<()> {
    for _ in 0..times {
        let result = ctx.api.reveal_more()?;
        print_messages(&result.messages);
        if result.reveal.is_none_or(|r| r.all_loaded) {
            break;
        }
    }
    handle_list(ctx)
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    print_categories(
        ctx.api.categories(),
        &ctx.api.document().rendered().active_category,
    );
    Ok(())
}

fn handle_subscribe(ctx: &AppContext, email: &str) -> Result<()> {
    let result = ctx.api.subscribe(email)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_session(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();

    handle_list(ctx)?;
    prompt(interactive)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            prompt(interactive)?;
            continue;
        }

        let parsed = match SessionLine::try_parse_from(line.split_whitespace()) {
            Ok(parsed) => parsed,
            Err(e) => {
                let _ = e.print();
                prompt(interactive)?;
                continue;
            }
        };

        match parsed.command {
            SessionCommand::Filter { category } => handle_filter(ctx, &category)?,
            SessionCommand::Search { terms } => {
                let query = session_search_text(line);
                debug!(?terms, query, "session search");
                handle_search(ctx, query)?
            }
            SessionCommand::Clear => handle_clear(ctx)?,
            SessionCommand::More => handle_more(ctx, 1)?,
            SessionCommand::List => handle_list(ctx)?,
            SessionCommand::Categories => handle_categories(ctx)?,
            SessionCommand::Subscribe { email } => {
                // A bad address is a prompt in a session, not a fatal error.
                if let Err(e) = handle_subscribe(ctx, &email) {
                    eprintln!("Error: {}", e);
                }
            }
            SessionCommand::Quit => break,
        }
        prompt(interactive)?;
    }

    Ok(())
}

/// Everything after the command word of a session line, spacing intact.
/// One pair of enclosing quotes is removed.
fn session_search_text(line: &str) -> &str {
    let rest = line
        .split_once(char::is_whitespace)
        .map_or("", |(_, rest)| rest)
        .trim();
    for quote in ['"', '\''] {
        if let Some(inner) = rest
            .strip_prefix(quote)
            .and_then(|inner| inner.strip_suffix(quote))
        {
            return inner;
        }
    }
    rest
}

fn prompt(interactive: bool) -> Result<()> {
    if interactive {
        print!("> ");
        std::io::stdout().flush()?;
    }
    Ok(())
}
