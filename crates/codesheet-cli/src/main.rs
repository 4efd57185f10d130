use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::builder::PossibleValuesParser;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use codesheet::{Codesheet, CodesheetProps, Config, Event, LanguageId, MemoryEditor};
use log::LevelFilter;
use strum::{IntoEnumIterator, VariantNames};

#[derive(Parser, Debug)]
#[clap(
    name = "codesheet",
    author,
    version = "0.1.0",
    about = "Run code snippets on a remote execution service"
)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    #[clap(
        long = "api-url",
        id = "api-url",
        global = true,
        env = "CODESHEET_API_URL",
        help = "Execution API url"
    )]
    api_url: Option<String>,

    #[clap(
        long = "api-key",
        id = "api-key",
        global = true,
        env = "CODESHEET_API_KEY",
        hide_env_values = true,
        help = "API key sent in the x-api-key header"
    )]
    api_key: Option<String>,

    #[clap(
        long = "config-file",
        id = "config-file",
        global = true,
        help = "Path to the config file"
    )]
    config_file: Option<String>,

    #[clap(
        long = "language",
        id = "language",
        global = true,
        value_parser = PossibleValuesParser::new(LanguageId::VARIANTS.iter().copied()),
        help = "Language selected when the session starts"
    )]
    language: Option<String>,

    #[clap(
        long = "mode-assets-url",
        id = "mode-assets-url",
        global = true,
        help = "Base url syntax modes are fetched from"
    )]
    mode_assets_url: Option<String>,

    #[clap(
        long = "viewport-width",
        id = "viewport-width",
        global = true,
        help = "Width used to place the run console"
    )]
    viewport_width: Option<String>,

    #[clap(long, short, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Submit code to the execution service and print its output
    Run {
        #[clap(long, short, help = "Source file to run instead of the language's sample")]
        file: Option<PathBuf>,

        #[clap(long, short, default_value = "", help = "Command line arguments passed to the program")]
        args: String,
    },
    /// List supported languages and their syntax modes
    Languages {
        #[clap(long, help = "Also print each language's sample code")]
        samples: bool,
    },
    /// Inspect configuration
    Config {
        #[clap(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Print a commented config file with default values
    Default,
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    let mut arg_matches = vec![&matches];
    if let Some((_, sub_matches)) = matches.subcommand() {
        arg_matches.push(sub_matches);
    }
    Config::load(Cli::command(), arg_matches).await?;

    match cli.command {
        Commands::Run { file, args } => run(file, args).await,
        Commands::Languages { samples } => {
            print_languages(samples);
            Ok(())
        }
        Commands::Config {
            action: ConfigCommands::Default,
        } => {
            println!("{}", Config::serialize_default(Cli::command()));
            Ok(())
        }
    }
}

async fn run(file: Option<PathBuf>, args: String) -> Result<()> {
    // The editor ships with the default language's mode; anything else is
    // fetched through the session like a language switch in the page.
    let editor = Arc::new(MemoryEditor::with_mode(&LanguageId::default().mode(), ""));
    let props = CodesheetProps {
        language: LanguageId::default(),
        ..CodesheetProps::from_config(editor)?
    };
    let codesheet = Codesheet::new(props);

    let language = Config::language();
    if let Err(err) = codesheet
        .handle_event(Event::LanguageChanged(language))
        .await
    {
        if file.is_none() {
            return Err(err.context(format!("Cannot show the {language} sample")));
        }
        log::warn!("{err:#}");
    }

    if let Some(path) = file {
        log::info!("Running {} as {}", path.display(), language);
        let code = tokio::fs::read_to_string(&path).await?;
        codesheet.handle_event(Event::EditorChanged(code)).await?;
    }

    codesheet.handle_event(Event::InputChanged(args)).await?;
    codesheet.handle_event(Event::ConsoleTriggerClicked).await?;
    codesheet.handle_event(Event::RunClicked).await?;

    println!("{}", console_output(&codesheet)?);
    Ok(())
}

/// The settled console output, or an error carrying it when the run failed.
fn console_output(codesheet: &Codesheet) -> Result<String> {
    let console = codesheet.console();
    if console.has_error() {
        bail!(console.output().to_string());
    }

    Ok(console.output().to_string())
}

fn print_languages(samples: bool) {
    for language in LanguageId::iter() {
        println!("{:<8} mode: {}", language.to_string(), language.mode());
        if samples {
            println!("\n{}\n", language.sample_code());
        }
    }
}
