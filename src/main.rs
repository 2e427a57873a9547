// Splash Palette
// Command line entry point

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use splash_palette::models::palette::Palette;
use splash_palette::models::settings::Settings;
use splash_palette::models::theme::{GlassLevel, ThemeName};
use splash_palette::services::contrast::{self, ComplianceLevel, ContrastPairResult};
use splash_palette::services::export::{self, ExportFormat};
use splash_palette::services::generator::{GenerationRequest, PaletteGenerator};
use splash_palette::services::palette::PaletteService;
use splash_palette::services::settings::SettingsService;
use splash_palette::services::storage::{open_store, KeyValueStore};
use splash_palette::services::theme::ThemeService;
use splash_palette::utils::date::format_palette_dates;

#[derive(Parser)]
#[command(name = "splash-palette")]
#[command(version, about = "Generate, check and export color palettes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check WCAG contrast between every pair of colors
    Check {
        /// Hex colors such as #0F172A
        #[arg(required_unless_present = "palette")]
        colors: Vec<String>,

        /// Check a saved palette instead
        #[arg(long, conflicts_with = "colors")]
        palette: Option<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a new random palette
    Generate {
        /// Describe the palette you want
        #[arg(long, conflicts_with = "image")]
        prompt: Option<String>,

        /// Image to base the palette on
        #[arg(long)]
        image: Option<PathBuf>,

        /// Add the palette to the saved list
        #[arg(long)]
        save: bool,

        /// RNG seed (overrides the configured seed)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List saved palettes
    List {
        /// Only palettes whose name contains this text
        #[arg(long)]
        search: Option<String>,
    },

    /// Show a saved palette's colors
    Show { id: String },

    /// Delete a saved palette
    Delete { id: String },

    /// Export a saved palette
    Export {
        id: String,

        /// tailwind, mui, css, json, codes or png
        #[arg(short, long, default_value = "tailwind")]
        format: ExportFormat,

        /// Output file (printed to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or change theme preferences
    Theme {
        #[arg(long)]
        set: Option<ThemeName>,

        #[arg(long)]
        glass: Option<GlassLevel>,
    },

    /// Delete all saved palettes and preferences
    Clear {
        /// Confirm the wipe
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    log::info!("Splash Palette v{}", env!("CARGO_PKG_VERSION"));

    let settings_service = match &cli.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::at_default_location(),
    };
    let settings = settings_service.load()?;

    match cli.command {
        Commands::Check {
            colors,
            palette,
            json,
        } => {
            let colors = match palette {
                Some(id) => {
                    let service = open_palettes(&settings)?;
                    let palette = find_palette(&service, &id)?;
                    palette.hex_list().into_iter().map(String::from).collect()
                }
                None => colors,
            };
            let results = contrast::evaluate(&colors)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print_contrast_report(&results);
            }
        }

        Commands::Generate {
            prompt,
            image,
            save,
            seed,
        } => {
            let request = match (prompt, image) {
                (Some(prompt), _) => GenerationRequest::Text(prompt),
                (None, Some(path)) => GenerationRequest::Image(path),
                (None, None) => GenerationRequest::Random,
            };
            let mut generator = match seed.or(settings.seed) {
                Some(seed) => PaletteGenerator::seeded(seed, settings.palette_size),
                None => PaletteGenerator::from_entropy(settings.palette_size),
            };
            let palette = generator.generate(&request)?;
            print_palette(&palette);

            if save {
                let mut service = open_palettes(&settings)?;
                let stored = service.save_palette(palette)?;
                println!("Saved as {}", stored.id);
            }
        }

        Commands::List { search } => {
            let service = open_palettes(&settings)?;
            let palettes = service.search(search.as_deref().unwrap_or(""));
            if palettes.is_empty() {
                println!("No saved palettes yet");
            }
            for palette in palettes {
                println!(
                    "{:<38} {:<28} {}  {}",
                    palette.id,
                    palette.display_name(),
                    format_palette_dates(palette.created_at, palette.updated_at),
                    palette.hex_codes()
                );
            }
        }

        Commands::Show { id } => {
            let service = open_palettes(&settings)?;
            print_palette(find_palette(&service, &id)?);
        }

        Commands::Delete { id } => {
            let mut service = open_palettes(&settings)?;
            if !service.delete_palette(&id)? {
                bail!("No saved palette with id {}", id);
            }
            println!("Deleted {}", id);
        }

        Commands::Export { id, format, output } => {
            let service = open_palettes(&settings)?;
            let palette = find_palette(&service, &id)?;
            match output {
                Some(path) => {
                    export::write_export(palette, format, &path)?;
                    println!("Wrote {}", path.display());
                }
                None if format.is_binary() => {
                    bail!(
                        "{} export needs --output (e.g. --output \"{}\")",
                        format,
                        export::file_name(palette, format)
                    );
                }
                None => println!("{}", export::render_text(palette, format)?),
            }
        }

        Commands::Theme { set, glass } => {
            let mut store = open_store(settings.storage, &SettingsService::data_dir(&settings))?;
            let mut themes = ThemeService::new(store.as_mut());
            if let Some(theme) = set {
                themes.set_theme(theme)?;
            }
            if let Some(level) = glass {
                themes.set_glass_level(level)?;
            }
            println!(
                "Theme: {} ({}), glassmorphism: {}",
                themes.theme()?.label(),
                themes.css_classes()?,
                themes.glass_level()?
            );
        }

        Commands::Clear { yes } => {
            if !yes {
                bail!("This deletes every saved palette and preference; rerun with --yes");
            }
            let mut service = open_palettes(&settings)?;
            service.clear_all()?;
            println!("Storage cleared; sample palettes restored");
        }
    }

    Ok(())
}

fn open_palettes(settings: &Settings) -> Result<PaletteService<Box<dyn KeyValueStore>>> {
    let data_dir = SettingsService::data_dir(settings);
    let store = open_store(settings.storage, &data_dir)
        .with_context(|| format!("Failed to open store in {}", data_dir.display()))?;
    PaletteService::load(store)
}

fn find_palette<'a>(
    service: &'a PaletteService<Box<dyn KeyValueStore>>,
    id: &str,
) -> Result<&'a Palette> {
    service
        .get(id)
        .with_context(|| format!("No saved palette with id {}", id))
}

fn print_palette(palette: &Palette) {
    println!("{}  [{}]", palette.display_name(), palette.id);
    for color in &palette.colors {
        println!(
            "  {:<8} {:<18} hsl({})",
            color.hex,
            format!("rgb({})", color.rgb),
            color.hsl
        );
    }
}

fn print_contrast_report(results: &[ContrastPairResult]) {
    if results.is_empty() {
        println!("Need at least two colors to compare");
        return;
    }

    let mark = |pass: bool| if pass { "✓" } else { "✗" };
    for result in results {
        let badge = match result.level() {
            ComplianceLevel::Aaa => "PASS",
            ComplianceLevel::Aa => "OK  ",
            ComplianceLevel::Fail => "FAIL",
        };
        println!(
            "{} {} + {}  Ratio: {:.2}:1  WCAG AA {}  WCAG AAA {}",
            badge,
            result.color1,
            result.color2,
            result.ratio,
            mark(result.passes_aa),
            mark(result.passes_aaa)
        );
        if let Some(advice) = result.recommendation() {
            println!("     {}", advice);
        }
    }
}
