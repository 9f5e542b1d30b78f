use clap::{Parser, ValueEnum};
use log::{info, warn};
use recipe_finder::{
    CategoryFilter, Controller, FinderConfig, FinderError, HtmlView, MealDbProvider, Recipe,
    RecipeProvider, TextView, View,
};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Html,
    Json,
}

/// Search TheMealDB recipes and filter them by category, time and text
#[derive(Debug, Parser)]
#[command(name = "recipe-finder", version)]
struct Cli {
    /// Free-text search; also sent to TheMealDB as the query
    #[arg(short, long)]
    search: Option<String>,

    /// Category to show, or "all"
    #[arg(short, long, default_value = "all")]
    category: String,

    /// Maximum preparation time in minutes
    #[arg(short = 't', long)]
    max_time: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Override the TheMealDB API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Read search/category/time commands from stdin and re-render after each
    #[arg(short, long, conflicts_with = "format")]
    interactive: bool,
}

/// One line of interactive input
#[derive(Debug, PartialEq)]
enum Command {
    Search(String),
    Category(CategoryFilter),
    MaxTime(Option<u32>),
    Categories,
    Help,
    Quit,
    Empty,
}

const HELP: &str = "commands: search <text> | category <name|all> | time <minutes|none> | categories | help | quit";

fn parse_category(config: &FinderConfig, value: &str) -> Result<CategoryFilter, FinderError> {
    match CategoryFilter::parse(value) {
        CategoryFilter::All => Ok(CategoryFilter::All),
        CategoryFilter::Named(name) => config
            .find_category(&name)
            .map(|c| CategoryFilter::Named(c.to_string()))
            .ok_or_else(|| {
                FinderError::InvalidInput(format!(
                    "unknown category '{}', expected one of: all, {}",
                    name,
                    config.categories.join(", ")
                ))
            }),
    }
}

fn parse_max_time(value: &str) -> Result<Option<u32>, FinderError> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| FinderError::InvalidInput(format!("'{}' is not a number of minutes", value)))
}

fn parse_command(config: &FinderConfig, line: &str) -> Result<Command, FinderError> {
    let line = line.trim();
    let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    match name.to_lowercase().as_str() {
        "" => Ok(Command::Empty),
        "search" | "s" => Ok(Command::Search(rest.trim().to_string())),
        "category" | "c" => parse_category(config, rest).map(Command::Category),
        "time" | "t" => parse_max_time(rest).map(Command::MaxTime),
        "categories" => Ok(Command::Categories),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(FinderError::InvalidInput(format!(
            "unknown command '{}'; {}",
            other, HELP
        ))),
    }
}

/// Shows nothing; used while the command-line events are replayed
struct QuietView;

impl View for QuietView {
    fn render(&mut self, _recipes: &[&Recipe]) {}
}

/// Initial load, then the events given on the command line, without output
async fn run_once(
    provider: Box<dyn RecipeProvider>,
    cli: &Cli,
    category: CategoryFilter,
) -> Controller<QuietView> {
    let mut controller = Controller::new(provider, QuietView);
    controller.initial_load().await;
    if let Some(text) = &cli.search {
        controller.on_search_text_changed(text).await;
    }
    controller.on_filter_criteria_changed(category, cli.max_time);
    controller
}

/// Write the recipes that passed the filters once, in `format`
fn write_output<W: Write>(
    controller: Controller<QuietView>,
    format: Format,
    mut out: W,
) -> Result<W, FinderError> {
    match format {
        Format::Text => {
            let mut controller = controller.with_view(TextView::new(out));
            controller.refresh();
            Ok(controller.into_view().into_inner())
        }
        Format::Html => {
            let mut controller = controller.with_view(HtmlView::new());
            controller.refresh();
            write!(out, "{}", controller.view().to_html())?;
            Ok(out)
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &controller.visible())?;
            writeln!(out)?;
            Ok(out)
        }
    }
}

async fn run_interactive(
    controller: &mut Controller<TextView<std::io::Stdout>>,
    config: &FinderConfig,
) -> Result<(), FinderError> {
    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match parse_command(config, &line) {
            Ok(Command::Search(text)) => controller.on_search_text_changed(&text).await,
            Ok(Command::Category(category)) => controller.on_category_changed(category),
            Ok(Command::MaxTime(max_time)) => controller.on_max_time_changed(max_time),
            Ok(Command::Categories) => println!("all, {}", config.categories.join(", ")),
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::Quit) => break,
            Ok(Command::Empty) => {}
            Err(e) => {
                warn!("{}", e);
                eprintln!("{}", e);
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), FinderError> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = FinderConfig::load()?;
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    info!("Using recipe service at {}", config.base_url);

    let category = parse_category(&config, &cli.category)?;
    let provider = Box::new(MealDbProvider::new(&config)?);
    let controller = run_once(provider, &cli, category).await;

    if cli.interactive {
        let mut controller = controller.with_view(TextView::new(std::io::stdout()));
        controller.refresh();
        return run_interactive(&mut controller, &config).await;
    }

    write_output(controller, cli.format, std::io::stdout())?;
    Ok(())
}
