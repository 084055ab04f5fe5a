use clap::{Parser, Subcommand};
use hearth::config;
use hearth::logger;
use hearth::platform::DesktopSignal;
use hearth::prefs::PreferenceStore;
use hearth::search::{self, SuggestionService};
use hearth::theme::scheme::{DerivedSchemeProvider, FileSchemeProvider, SchemeProvider};
use hearth::theme::{ThemeChoice, ThemeManager};
use hearth_core::provider;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "hearth",
    version,
    about = "Search providers, suggestions, and wallpaper-driven theming for the Hearth launcher"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve and print the active color palette
    Palette {
        /// Force dark mode for this resolution
        #[arg(long, conflicts_with = "light")]
        dark: bool,
        /// Force light mode for this resolution
        #[arg(long)]
        light: bool,
    },
    /// Fetch raw search suggestions for a query
    Suggest { query: String },
    /// List registered search providers
    Providers {
        /// Print the registry as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::setup_logger()?;
    let cfg = config::get_config_or_panic();
    let prefs = Arc::new(PreferenceStore::from_config(cfg));

    let scheme_provider: Box<dyn SchemeProvider> = match cfg.theme().scheme() {
        Some(name) => {
            let file_provider = FileSchemeProvider::new(cfg.scheme_directory(), name);
            match file_provider.load() {
                Ok(_) => Box::new(file_provider),
                Err(e) => {
                    log::warn!("Falling back to derived color scheme: {e}");
                    Box::new(DerivedSchemeProvider::default())
                }
            }
        }
        None => Box::new(DerivedSchemeProvider::default()),
    };

    ThemeManager::init_global(Arc::clone(&prefs), scheme_provider, Box::new(DesktopSignal))?;

    match cli.command {
        Command::Palette { dark, light } => {
            if dark {
                prefs.set_theme_choice(ThemeChoice::Dark);
            } else if light {
                prefs.set_theme_choice(ThemeChoice::Light);
            }

            let palette = ThemeManager::current_palette();
            let mode = if ThemeManager::is_dark() {
                "dark"
            } else {
                "light"
            };
            println!("mode:       {mode}");
            println!("primary:    {}", palette.primary);
            println!("secondary:  {}", palette.secondary);
            println!("background: {}", palette.background);
            println!("surface:    {}", palette.surface);
        }
        Command::Suggest { query } => {
            let provider = search::active_provider(&prefs);
            let service = SuggestionService::new(cfg, provider)?;
            log::info!(
                "Fetching suggestions from '{}' via {}",
                provider.id,
                service.base_url()
            );
            let body = service.fetch_raw(&query).await?;
            println!("{body}");
        }
        Command::Providers { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(provider::providers())?);
            } else {
                for p in provider::providers() {
                    let sponsored = if p.sponsored { " (sponsored)" } else { "" };
                    println!(
                        "{:<12} {:<12} {:?}{} {}",
                        p.id, p.display_name, p.kind, sponsored, p.website
                    );
                }
            }
        }
    }

    Ok(())
}
