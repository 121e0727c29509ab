use anyhow::{Context, Result};
use book_layout::{BookOptions, Document, DocumentHeader};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "bookt", about = "LookBook and Location Book generator", version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Location Book (landscape, three cards per page)
    LocationBook {
        /// JSON request file (header + entries)
        #[arg(short, long, required_unless_present = "csv")]
        input: Option<PathBuf>,

        /// CSV file (columns: scene, time_of_day, location_type, location_name, image URLs...)
        #[arg(long, conflicts_with = "input")]
        csv: Option<PathBuf>,

        #[command(flatten)]
        header: HeaderArgs,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Generate a LookBook (portrait, one card per role)
    LookBook {
        /// JSON request file (header + entries)
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        header: HeaderArgs,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Generate a single-page LookBook from two headed text sections
    Sections {
        /// JSON file with exactly two sections
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Write the default options to a JSON file
    InitConfig {
        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Header fields; each one given here replaces the request's value
#[derive(Args)]
struct HeaderArgs {
    /// Project name
    #[arg(long)]
    project: Option<String>,

    /// Crew name
    #[arg(long)]
    crew: Option<String>,

    /// Director name
    #[arg(long)]
    director: Option<String>,

    /// Date, printed verbatim
    #[arg(long)]
    date: Option<String>,
}

#[derive(Args)]
struct RenderArgs {
    /// Output PDF file
    #[arg(short, long, required_unless_present = "stats_only")]
    output: Option<PathBuf>,

    /// Options JSON file (see init-config)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Paper size, overriding the config file
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// TrueType font used for all text (needed for CJK)
    #[arg(long)]
    font: Option<PathBuf>,

    /// Show statistics only, don't generate PDF
    #[arg(long)]
    stats_only: bool,

    /// Write the assembled page tree as JSON
    #[arg(long)]
    dump_layout: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
}

impl From<PaperArg> for book_layout::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
        }
    }
}

impl HeaderArgs {
    fn apply(self, header: &mut DocumentHeader) {
        if self.project.is_some() {
            header.project_name = self.project;
        }
        if self.crew.is_some() {
            header.crew_name = self.crew;
        }
        if self.director.is_some() {
            header.director_name = self.director;
        }
        if self.date.is_some() {
            header.date = self.date;
        }
    }
}

impl RenderArgs {
    async fn options(&self) -> Result<BookOptions> {
        let mut options = match &self.config {
            Some(path) => BookOptions::load(path)
                .await
                .with_context(|| format!("loading {}", path.display()))?,
            None => BookOptions::default(),
        };
        if let Some(paper) = self.paper {
            options.paper_size = paper.into();
        }
        if let Some(font) = &self.font {
            options.font_path = Some(font.clone());
        }
        Ok(options)
    }

    /// Print statistics, then dump and render as requested
    async fn finish(&self, document: &Document) -> Result<()> {
        let stats = book_layout::calculate_statistics(document);
        println!("{} Statistics:", document.kind.title());
        println!("  Pages: {}", stats.pages);
        println!("  Content pages: {}", stats.content_pages);
        println!("  Cards: {}", stats.filled_cards);
        if stats.empty_cards > 0 {
            println!("  Empty card slots: {}", stats.empty_cards);
        }
        println!(
            "  Image slots: {} filled, {} placeholders",
            stats.filled_image_slots, stats.empty_image_slots
        );
        if stats.strip_images > 0 {
            println!("  Strip images: {}", stats.strip_images);
        }

        if let Some(path) = &self.dump_layout {
            dump_layout(document, path).await?;
            println!("Layout → {}", path.display());
        }

        if self.stats_only {
            return Ok(());
        }

        let Some(output) = &self.output else {
            anyhow::bail!("--output is required unless --stats-only is given");
        };
        let options = self.options().await?;
        book_layout::generate_pdf(document, &options, output).await?;
        println!("Generated {} → {}", document.kind.title(), output.display());
        Ok(())
    }
}

async fn dump_layout(document: &Document, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(document)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::LocationBook {
            input,
            csv,
            header,
            render,
        } => {
            let mut request = match (input, csv) {
                (Some(input), _) => book_layout::load_location_request(&input).await?,
                (None, Some(csv)) => book_layout::LocationBookRequest {
                    header: DocumentHeader::default(),
                    entries: book_layout::load_locations_from_csv(&csv).await?,
                },
                (None, None) => anyhow::bail!("either --input or --csv is required"),
            };
            header.apply(&mut request.header);

            let document =
                book_layout::LocationBookDocument::assemble(&request.header, &request.entries)?;
            render.finish(&document).await?;
        }

        Commands::LookBook {
            input,
            header,
            render,
        } => {
            let mut request = book_layout::load_look_request(&input).await?;
            header.apply(&mut request.header);

            let document =
                book_layout::LookBookDocument::assemble(&request.header, &request.entries)?;
            render.finish(&document).await?;
        }

        Commands::Sections { input, render } => {
            let request = book_layout::load_sections_request(&input).await?;
            let document = book_layout::LookBookDocument::assemble_sections(&request.sections);
            render.finish(&document).await?;
        }

        Commands::InitConfig { output } => {
            BookOptions::default().save(&output).await?;
            println!("Default options → {}", output.display());
        }
    }

    Ok(())
}
