use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "async-search-demos",
    version,
    about = "Concurrent image/article search and a deferred-fetch search header quiz"
)]
pub struct DemoCli {
    #[command(subcommand)]
    pub command: DemoCommand,
}

#[derive(Subcommand, Debug)]
pub enum DemoCommand {
    /// Search images and articles for each submitted keyword
    Search(SearchArgs),
    /// Show the `query` field of a JSON resource as the page header
    Quiz(QuizArgs),
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    #[arg(
        short,
        long = "query",
        value_name = "KEYWORD",
        help = "Keyword to submit; repeat for several searches (default: read lines from stdin)"
    )]
    pub queries: Vec<String>,
    #[arg(long, help = "Skip the image lookup that runs before any submission")]
    pub no_default_image: bool,
    #[arg(long, env = "UNSPLASH_APP_ID", hide_env_values = true)]
    pub unsplash_app_id: Option<String>,
    #[arg(long, env = "NYT_API_KEY", hide_env_values = true)]
    pub nyt_api_key: Option<String>,
    #[arg(short, long, value_name = "FILE", help = "Where to write the rendered page")]
    pub output: Option<PathBuf>,
    #[arg(long, help = "Open the rendered page in the default browser")]
    pub open: bool,
}

#[derive(Args, Debug)]
pub struct QuizArgs {
    #[arg(
        short,
        long,
        value_name = "PATH_OR_URL",
        help = "JSON resource holding a `query` field"
    )]
    pub source: Option<String>,
    #[arg(
        long,
        value_name = "DIR",
        help = "Directory relative sources resolve against (default: current directory)"
    )]
    pub base_dir: Option<PathBuf>,
    #[arg(short, long, value_name = "FILE", help = "Where to write the rendered page")]
    pub output: Option<PathBuf>,
    #[arg(long, help = "Open the rendered page in the default browser")]
    pub open: bool,
}
