use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ytmusic_browser::{render, App, HeadlessMedia, HtmlBuffer, MediaElement, MusicApi, Route};

#[derive(Parser)]
#[command(name = "ytmusic-browser")]
#[command(about = "Browse YouTube Music charts, search, songs, albums and artists as HTML", long_about = None)]
struct Cli {
    /// Catalog backend base URL
    #[arg(long, env = "YTMUSIC_API_BASE", default_value = ytmusic_browser::api::DEFAULT_API_BASE)]
    api_base: String,

    /// Request timeout in seconds
    #[arg(long, env = "YTMUSIC_TIMEOUT", default_value_t = 30)]
    timeout: u64,

    /// Wrap the page in the full HTML document
    #[arg(long)]
    document: bool,

    /// Write the HTML to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open any fragment, e.g. "#album/MPREb_..." or "#search?q=abba"
    Open {
        /// URL fragment (the leading '#' is optional)
        fragment: String,
    },
    /// Top charts
    Charts,
    /// Search the catalog
    Search {
        /// Search query
        query: String,
    },
    /// Song detail by video ID
    Song { id: String },
    /// Album detail by browse ID
    Album { id: String },
    /// Artist detail by channel ID
    Artist { id: String },
    /// Lyrics by video ID
    Lyrics { id: String },
}

impl Commands {
    fn fragment(&self) -> String {
        match self {
            Commands::Open { fragment } => fragment.clone(),
            Commands::Charts => Route::Home.to_fragment(),
            Commands::Search { query } => Route::Search {
                query: query.clone(),
            }
            .to_fragment(),
            Commands::Song { id } => Route::Song(id.clone()).to_fragment(),
            Commands::Album { id } => Route::Album(id.clone()).to_fragment(),
            Commands::Artist { id } => Route::Artist(id.clone()).to_fragment(),
            Commands::Lyrics { id } => Route::Lyrics(id.clone()).to_fragment(),
        }
    }
}

/// Page markup as written out: bare content plus a newline, or the full
/// document with the player button showing `button_label`.
fn page_output(content: &str, document: bool, button_label: &str) -> String {
    if document {
        render::render_document(content, button_label)
    } else {
        format!("{}\n", content)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let api = MusicApi::builder()
        .base_url(&cli.api_base)
        .timeout(Duration::from_secs(cli.timeout))
        .build()?;
    let mut app = App::new(api, HtmlBuffer::new(), HeadlessMedia::new());

    let fragment = cli.command.fragment();
    let route = app.navigate(&fragment).await;
    info!("Rendered {}", route);

    if let Some(source) = app.player().media().source() {
        info!("Audio stream: {}", source);
    }

    let html = page_output(app.view().html(), cli.document, app.player().button_label());

    match &cli.output {
        Some(path) => {
            std::fs::write(path, html)?;
            println!("✅ Wrote {} to {}", route, path.display());
        }
        None => print!("{}", html),
    }

    Ok(())
}
