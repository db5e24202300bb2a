/// Hearth - focused podcast listening from the terminal
use clap::{Parser, Subcommand};
use hearth_cli::{
    commands::{self, format_view},
    storage::open_listening_log,
    AppConfig, Host,
};
use hearth_core::{EpisodeId, InMemoryCatalog};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hearth")]
#[command(about = "Hearth podcast client", long_about = None)]
struct Cli {
    /// Configuration file path (default: ./hearth.toml)
    #[arg(short, long, global = true, env = "HEARTH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single episode
    Play {
        /// Episode id
        episode_id: String,
        /// Sleep timer in minutes
        #[arg(long)]
        sleep: Option<u32>,
    },
    /// Focused listening over an area or theme
    Focus {
        /// Area to listen through
        #[arg(short, long)]
        area: String,
        /// Restrict to one theme within the area
        #[arg(short, long)]
        theme: Option<String>,
        /// Shuffle once before starting
        #[arg(long)]
        shuffle: bool,
        /// Index to start at
        #[arg(long, default_value_t = 0)]
        start: usize,
        /// Sleep timer in minutes
        #[arg(long)]
        sleep: Option<u32>,
    },
    /// Show saved progress for an episode
    Progress {
        /// Episode id
        episode_id: String,
    },
    /// Toggle an episode's favorite flag
    Favorite {
        /// Episode id
        episode_id: String,
    },
    /// Show the local listener id
    Whoami,
    /// List an area with progress and favorites
    List {
        /// Area to list
        #[arg(short, long)]
        area: String,
        /// Print JSON instead of one line per episode
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hearth=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;

    let log = open_listening_log(&config);
    let catalog = InMemoryCatalog::from_json_file(&config.catalog.path)?;
    tracing::debug!(
        "Catalog {} with {} episodes",
        config.catalog.path.display(),
        catalog.episodes().len()
    );

    match cli.command {
        Commands::Play { episode_id, sleep } => {
            let episode = commands::resolve_episode(&catalog, &episode_id).await?;
            if sleep.is_some() {
                config.playback.sleep_minutes = sleep;
            }

            let mut host = Host::new(&config, &log, catalog.episodes());
            host.play(episode);
            host.run().await?;
            report_position(&host);
        }
        Commands::Focus {
            area,
            theme,
            shuffle,
            start,
            sleep,
        } => {
            let episodes = commands::focus_selection(&catalog, &area, theme.as_deref()).await?;
            if sleep.is_some() {
                config.playback.sleep_minutes = sleep;
            }

            let mut host = Host::new(&config, &log, catalog.episodes());
            host.focus(episodes, start, shuffle);
            host.run().await?;
            report_position(&host);
        }
        Commands::Progress { episode_id } => {
            match log.get_progress(&EpisodeId::new(episode_id.as_str())) {
                Some(record) => println!(
                    "{}: {:.0}% ({:.0}s)",
                    episode_id, record.progress_percent, record.last_position_seconds
                ),
                None => println!("{}: not started", episode_id),
            }
        }
        Commands::Favorite { episode_id } => {
            let is_favorite = log.toggle_favorite(&EpisodeId::new(episode_id.as_str()));
            let state = if is_favorite { "added to" } else { "removed from" };
            println!("{} {} favorites", episode_id, state);
        }
        Commands::Whoami => {
            println!("{}", log.listener_id());
        }
        Commands::List { area, json } => {
            let views = commands::list_area(&catalog, &log, &area).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else {
                for view in &views {
                    println!("{}", format_view(view));
                }
            }
        }
    }

    Ok(())
}

fn report_position(host: &Host) {
    let engine = host.session().engine();
    if let Some(episode) = engine.current_episode() {
        println!(
            "Stopped at {:.0}s of {} ({:.0}%)",
            engine.device().position(),
            episode.title,
            engine.progress_percent()
        );
    }
}
