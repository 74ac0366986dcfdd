use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use console::style;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use indicatif::{ProgressBar, ProgressStyle};
use podsum_config::{
    config_exists, load_config, open_in_editor, resolve_default_language, resolve_openai_key,
    resolve_simple_output, save_config, set_config_value,
};
use podsum_core::{Language, PodsumError, PodsumResult, SummaryResult, TextDirection};
use podsum_summary::SummaryGenerator;
use podsum_video::{MetadataFetcher, extract_video_id};

const DOWNLOAD_FILE: &str = "podcast_summary.txt";

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
    /// List all configuration values
    List,
    /// Open config file in editor
    Edit,
}

#[derive(Debug, Parser)]
#[command(name = "podsum")]
#[command(version, about = "YouTube podcast summarizer", long_about = None)]
struct Cli {
    /// Summary language: english or hebrew
    #[arg(long)]
    lang: Option<String>,
    #[arg(long)]
    input: Option<String>,
    /// Save the summary as podcast_summary.txt
    #[arg(long)]
    save: bool,
    /// Save the summary to this path instead of podcast_summary.txt
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
    /// Print the summary text only
    #[arg(long)]
    simple: bool,
    #[arg(value_name = "URL")]
    urls: Vec<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Handle config commands first
    if let Some(Commands::Config { action }) = cli.command {
        if let Err(err) = handle_config_command(action) {
            eprintln!("{} {err}", style("Error:").red());
            std::process::exit(1);
        }
        return;
    }

    let mut config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {err}", style("Error:").red());
            std::process::exit(1);
        }
    };

    let mut urls = gather_inputs(&cli).unwrap_or_else(|err| {
        eprintln!("{} {err}", style("Error:").red());
        std::process::exit(1);
    });

    if urls.is_empty() {
        eprintln!("{} no input URLs provided", style("Error:").red());
        std::process::exit(1);
    }

    let language = match resolve_language(&cli, &config) {
        Ok(language) => language,
        Err(err) => {
            eprintln!("{} {err}", style("Error:").red());
            std::process::exit(1);
        }
    };

    // A missing key is not fatal here: the provider rejects the call and the
    // failure surfaces through the generation error path, like any other.
    let api_key = resolve_or_prompt_openai_key(&mut config);

    let fetcher = MetadataFetcher::new();
    let generator = SummaryGenerator::new(api_key.unwrap_or_default());

    let simple = cli.simple || resolve_simple_output(&config).unwrap_or(false);
    let output_path = cli
        .output
        .clone()
        .or_else(|| cli.save.then(|| PathBuf::from(DOWNLOAD_FILE)));

    let mut success = 0usize;
    let mut failed = 0usize;

    // URLs run strictly sequentially; each pipeline starts only after the
    // previous one finished.
    for url in urls.drain(..) {
        match summarize_url(&fetcher, &generator, &url, language).await {
            Ok(result) => {
                success += 1;
                print_result(&result, simple);
                if let Some(path) = &output_path {
                    save_summary(&result, path);
                }
            }
            Err(err) => {
                failed += 1;
                eprintln!("{} {url}: {}", style("Failed").red(), user_message(&err));
            }
        }
    }

    print_summary(success + failed, success, failed);
}

/// Extract -> fetch -> generate for one URL, short-circuiting on the first
/// failure. The spinner covers the two network stages.
async fn summarize_url(
    fetcher: &MetadataFetcher,
    generator: &SummaryGenerator,
    url: &str,
    language: Language,
) -> PodsumResult<SummaryResult> {
    let Some(video_id) = extract_video_id(url) else {
        return Err(PodsumError::InvalidInput(format!(
            "unrecognized youtube url: {url}"
        )));
    };

    let spinner = create_spinner("Extracting valuable insights...");
    let result = run_pipeline(fetcher, generator, url, &video_id, language).await;
    spinner.finish_and_clear();
    result
}

async fn run_pipeline(
    fetcher: &MetadataFetcher,
    generator: &SummaryGenerator,
    url: &str,
    video_id: &str,
    language: Language,
) -> PodsumResult<SummaryResult> {
    let metadata = fetcher.fetch(video_id).await?;
    let summary = generator.generate(&metadata, language).await?;
    Ok(SummaryResult {
        source_url: url.to_string(),
        video_id: video_id.to_string(),
        metadata,
        language,
        summary,
    })
}

fn user_message(err: &PodsumError) -> String {
    match err {
        PodsumError::InvalidInput(_) | PodsumError::UnsupportedInput(_) => {
            "Invalid YouTube URL. Please enter a valid YouTube video URL.".to_string()
        }
        PodsumError::Network(_) | PodsumError::Api(_) | PodsumError::Parse(_) => {
            "Could not retrieve video information. Please try again.".to_string()
        }
        PodsumError::Generation(reason) => format!("Error generating summary: {reason}"),
        PodsumError::Config(_) => err.to_string(),
    }
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn gather_inputs(cli: &Cli) -> Result<Vec<String>, PodsumError> {
    let mut urls = cli.urls.clone();

    if let Some(path) = &cli.input {
        let content = fs::read_to_string(path)
            .map_err(|err| PodsumError::InvalidInput(format!("failed to read input file: {err}")))?;
        urls.extend(parse_lines(&content));
    }

    if urls.is_empty() && !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|err| PodsumError::InvalidInput(format!("failed to read stdin: {err}")))?;
        urls.extend(parse_lines(&buffer));
    }

    Ok(urls)
}

fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

fn resolve_language(cli: &Cli, config: &podsum_config::PodsumConfigData) -> PodsumResult<Language> {
    if let Some(lang) = &cli.lang {
        return Language::parse(lang)
            .ok_or_else(|| PodsumError::InvalidInput(format!("unknown language: {lang}")));
    }
    if let Some(language) = resolve_default_language(config) {
        return Ok(language);
    }
    if io::stdin().is_terminal() {
        return prompt_language();
    }
    Ok(Language::English)
}

fn prompt_language() -> PodsumResult<Language> {
    let options = [Language::English, Language::Hebrew];
    let labels: Vec<&str> = options.iter().map(|language| language.label()).collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Summary language")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|err| PodsumError::InvalidInput(format!("selection failed: {err}")))?;

    Ok(options[selection])
}

fn resolve_or_prompt_openai_key(config: &mut podsum_config::PodsumConfigData) -> Option<String> {
    // Environment first, then the config file
    if let Some(key) = resolve_openai_key(config) {
        return Some(key);
    }

    // If config file exists, never prompt
    if config_exists().unwrap_or(false) {
        return None;
    }

    // Config file doesn't exist - first time setup
    let theme = ColorfulTheme::default();
    println!(
        "{} {}",
        style("First-time setup:").bold().cyan(),
        "Let's configure your podsum settings"
    );

    let input: String = Input::with_theme(&theme)
        .with_prompt("OpenAI API key (optional, press Enter to skip)")
        .allow_empty(true)
        .interact_text()
        .unwrap_or_default();

    if !input.trim().is_empty() {
        config.api.openai_key = Some(input.clone());
    }

    // Always create config file on first run
    if let Err(err) = save_config(config) {
        eprintln!("{} {err}", style("Warning:").yellow());
    } else {
        println!(
            "{} Config file created at ~/.podsum/config.toml",
            style("✓").green()
        );
    }

    config.api.openai_key.clone()
}

fn handle_config_command(action: ConfigAction) -> PodsumResult<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = load_config()?;
            let value = get_nested_config_value(&config, &key);
            match value {
                Some(v) => println!("{} = {}", key, v),
                None => println!("{} = <null>", key),
            }
            Ok(())
        }
        ConfigAction::Set { key, value } => {
            set_config_value(&key, &value)?;
            println!("{} Set {} = {}", style("✓").green(), key, value);
            Ok(())
        }
        ConfigAction::List => {
            let config = load_config()?;
            println!("Current configuration:");
            println!("\n[api]");
            println!(
                "openai_key = {}",
                config.api.openai_key.as_deref().unwrap_or("<null>")
            );
            println!("\n[default]");
            println!(
                "language = {}",
                config.default.language.as_deref().unwrap_or("<null>")
            );
            println!("\n[output]");
            println!("simple = {}", config.output.simple.unwrap_or(false));
            Ok(())
        }
        ConfigAction::Edit => {
            open_in_editor()?;
            Ok(())
        }
    }
}

fn get_nested_config_value(
    config: &podsum_config::PodsumConfigData,
    key_path: &str,
) -> Option<String> {
    let parts: Vec<&str> = key_path.split('.').collect();

    match parts.as_slice() {
        ["api", "openai_key"] => config.api.openai_key.clone(),
        ["default", "language"] => config.default.language.clone(),
        ["output", "simple"] => config.output.simple.map(|b| b.to_string()),
        _ => None,
    }
}

fn print_result(result: &SummaryResult, simple: bool) {
    if simple {
        println!("{}", result.summary);
        return;
    }

    println!(
        "{} {} by {}",
        style("Video:").cyan(),
        result.metadata.title,
        result.metadata.author
    );
    if let Some(thumbnail) = &result.metadata.thumbnail_url {
        println!("  {} {}", style("Thumbnail:").dim(), thumbnail);
    }
    if result.language.direction() == TextDirection::RightToLeft {
        println!("  {} right-to-left", style("Direction:").dim());
    }

    println!();
    println!("{}", result.summary);
    println!();
}

fn save_summary(result: &SummaryResult, path: &Path) {
    match fs::write(path, &result.summary) {
        Ok(()) => println!(
            "{} Saved summary to {}",
            style("✓").green(),
            path.display()
        ),
        Err(err) => eprintln!(
            "{} failed to write {}: {err}",
            style("Warning:").yellow(),
            path.display()
        ),
    }
}

fn print_summary(total: usize, success: usize, failed: usize) {
    println!(
        "{} Total: {} | Success: {} | Failed: {}",
        style("Summary:").bold(),
        total,
        success,
        failed
    );
}
