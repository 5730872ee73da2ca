use address_labels::layout::{render_labels, FontStyles, LabelRenderer};
use address_labels::{load_records_file, Config, FontState, Info, PdfCanvas};
use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn, LevelFilter};
use std::path::PathBuf;

/// Generate a PDF to print on address sticker sheets
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// The configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// A local configuration file merged over the main one [default: config.local.toml
    /// next to the configuration file, if it exists]
    #[arg(short, long)]
    local: Option<PathBuf>,

    /// The CSV file to read addresses from, instead of the configured one
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// The PDF file to write, instead of the configured one
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Record the current time as the document's creation date
    #[arg(long)]
    timestamp: bool,
}

fn main() -> Result<()> {
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let config = Config::load(&args.config, args.local.as_deref())
        .with_context(|| format!("Failed to load configuration from {}", args.config.display()))?;
    let geometry = config
        .geometry()
        .context("Failed to work out the label sheet geometry")?;
    let input = args.input.unwrap_or_else(|| config.labels.input.clone());
    let output = args.output.unwrap_or_else(|| config.labels.output.clone());

    let mut canvas = PdfCanvas::new((geometry.page_width, geometry.page_height));
    let fonts = &config.fonts;
    let name_face = canvas
        .install_font(&fonts.name.face, &fonts.directory)
        .context("Failed to install the name font")?;
    let address_face = canvas
        .install_font(&fonts.address.face, &fonts.directory)
        .context("Failed to install the address font")?;

    info!("Reading {}", input.display());
    let records = load_records_file(&input, &config.labels.ignore_prefix)
        .with_context(|| format!("Failed to read addresses from {}", input.display()))?;

    let renderer = LabelRenderer::new(
        geometry,
        FontStyles {
            name: FontState::new(name_face, fonts.name.size()),
            address: FontState::new(address_face, fonts.address.size()),
        },
        config.labels.extra_line_spacing,
        config.labels.draw_borders,
    );
    let summary = render_labels(&mut canvas, &renderer, &records.records);
    info!(
        "Laid out {} labels on {} pages ({} per page)",
        summary.labels,
        summary.pages,
        geometry.capacity()
    );
    if !summary.overflowing.is_empty() {
        warn!(
            "{} labels have more text than fits; try smaller fonts or less line spacing",
            summary.overflowing.len()
        );
    }

    let mut info = Info::new();
    info.title("Address labels")
        .author("address-labels")
        .subject("Just some addresses in boxes...")
        .keywords(["address", "addresses", "label", "labels", "sticker", "stickers"]);
    if args.timestamp {
        info.creation_date(chrono::Local::now().fixed_offset());
    }
    canvas.set_info(info);

    let pdf = canvas
        .finish()
        .render()
        .context("Failed to render PDF")?;

    info!("Writing {}", output.display());
    std::fs::write(&output, pdf)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(())
}
