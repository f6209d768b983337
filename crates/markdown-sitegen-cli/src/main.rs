use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use markdown_sitegen_config::SiteConfig;
use markdown_sitegen_engine::{convert_document, extract_title, io};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "markdown-sitegen")]
#[command(about = "Generate a static HTML site from a tree of Markdown files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the whole site: reset the output, copy static files, render pages
    Build {
        /// Config file (defaults to ./sitegen.toml; built-in defaults if missing)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Prefix for root-relative links, overrides the config file
        #[arg(short, long)]
        base_path: Option<String>,
    },
    /// Convert a single Markdown file to an HTML fragment
    Convert {
        /// Input Markdown file
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the title (first `# ` line) of a Markdown file
    Title {
        /// Input Markdown file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Build { config, base_path } => build(config.as_deref(), base_path.as_deref()),
        Command::Convert { input, output } => convert(&input, output.as_deref()),
        Command::Title { input } => title(&input),
    }
}

fn build(config_path: Option<&Path>, base_path: Option<&str>) -> Result<()> {
    log::info!("markdown-sitegen starting up!");

    let config = load_config(config_path)?;
    let config = match base_path {
        Some(base_path) => config.with_base_path(base_path),
        None => config,
    };

    io::validate_content_dir(&config.content_dir).with_context(|| {
        format!(
            "Content path '{}' is invalid",
            config.content_dir.display()
        )
    })?;

    io::reset_public_dir(&config.public_dir)?;
    io::copy_static(&config.static_dir, &config.public_dir)?;
    let pages = io::generate_pages_recursive(
        &config.content_dir,
        &config.template_path,
        &config.public_dir,
        &config.base_path,
    )?;

    log::info!(
        "Generated {} pages into {}",
        pages.len(),
        config.public_dir.display()
    );
    Ok(())
}

fn load_config(config_path: Option<&Path>) -> Result<SiteConfig> {
    match config_path {
        Some(path) => {
            log::info!("Config path: {}", path.display());
            SiteConfig::load_from_path(path)?
                .with_context(|| format!("Config file not found: {}", path.display()))
        }
        None => {
            log::info!("Config path: {}", SiteConfig::config_path().display());
            match SiteConfig::load()? {
                Some(config) => Ok(config),
                None => {
                    log::info!("No config file found, using defaults");
                    Ok(SiteConfig::default())
                }
            }
        }
    }
}

fn convert(input: &Path, output: Option<&Path>) -> Result<()> {
    let markdown = io::read_file(input)?;
    let html = convert_document(&markdown)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    match output {
        Some(output) => {
            io::write_file(output, &html)?;
            log::info!("Created {}", output.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}

fn title(input: &Path) -> Result<()> {
    let markdown = io::read_file(input)?;
    let title = extract_title(&markdown)
        .with_context(|| format!("Failed to read title of {}", input.display()))?;
    println!("{title}");
    Ok(())
}
