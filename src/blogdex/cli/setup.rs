use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blogdex", bin_name = "blogdex", version)]
#[command(about = "Browse a blog index: filter by category, search, load more", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Page manifest (JSON with "categories" and "posts")
    #[arg(short, long, global = true, default_value = "blog.json")]
    pub page: PathBuf,

    /// Query string applied once at startup (e.g. "?category=food")
    #[arg(short, long, global = true)]
    pub location: Option<String>,

    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the visible articles
    #[command(alias = "ls")]
    List,

    /// Show one category only ("all" shows everything again)
    #[command(alias = "f")]
    Filter { category: String },

    /// Search article titles and descriptions
    #[command(alias = "s")]
    Search {
        /// Search terms, joined with spaces
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        terms: Vec<String>,
    },

    /// Load more articles
    #[command(alias = "m")]
    More {
        /// How many times to press "load more"
        #[arg(short = 'n', long, default_value_t = 1)]
        times: usize,
    },

    /// List the category controls
    Categories,

    /// Subscribe to the newsletter
    Subscribe { email: String },

    /// Read commands from stdin, one per line, against a single page load
    Session,
}

/// One line of a `session`, parsed with the first word as the command.
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Show one category only ("all" shows everything again)
    Filter { category: String },

    /// Search article titles and descriptions. The rest of the line is the
    /// query as typed; enclosing quotes are dropped.
    Search {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        terms: Vec<String>,
    },

    /// Leave search results and go back to browsing
    Clear,

    /// Load more articles
    More,

    /// List the visible articles
    List,

    /// List the category controls
    Categories,

    /// Subscribe to the newsletter
    Subscribe { email: String },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}
