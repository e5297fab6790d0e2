mod export;
mod palette;
mod serve;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use mindmap_core::config::PROJECT_CONFIG_FILE;
use mindmap_core::{
    Category, Config, Connection, FileStorage, GraphError, LoggingConfig, MindMap, MindMapSession,
    SessionError, Storage, TopicRole, TopicView,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mindmap")]
#[command(about = "Build, annotate and visualize a topic mind map", long_about = None)]
struct Cli {
    /// Mind map file (overrides config and MINDMAP_FILE)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default mindmap.toml and an empty mind map file
    Init,
    /// Add a topic
    Add {
        /// Topic name (no spaces)
        name: String,
        /// Category label, e.g. "Language" or "Database Type"
        #[arg(short, long, default_value = "Other")]
        category: String,
    },
    /// Connect a parent topic to a child topic
    Connect { parent: String, child: String },
    /// Rename a topic, keeping its connections and note
    Rename { old: String, new: String },
    /// Delete a topic and its connections
    Delete { name: String },
    /// Replace a topic's note (no text clears it)
    Note {
        name: String,
        text: Vec<String>,
    },
    /// Change a topic's category
    Category { name: String, category: String },
    /// Show a topic's category, note and connections
    Show { name: String },
    /// List all topics
    List,
    /// List all connections
    Edges,
    /// Show the category palette and which categories are in use
    Categories,
    /// Find topics by name
    Search { query: String },
    /// Remove every topic
    Reset,
    /// Export the map as a Graphviz DOT document
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Start the browser-based mind map editor
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Do not open a browser tab
        #[arg(long)]
        no_open: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let mut config = Config::load().wrap_err("Failed to load configuration")?;
    if let Some(file) = &cli.file {
        config.storage.file = file.to_string_lossy().into_owned();
    }

    init_logging(&config.logging);

    run(cli.command, config).await
}

/// Log to stderr so command output on stdout stays clean.
fn init_logging(logging: &LoggingConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn open_session(config: &Config) -> Result<MindMapSession<FileStorage>, SessionError> {
    MindMapSession::open(FileStorage::with_config(&config.storage))
}

async fn run(command: Commands, config: Config) -> color_eyre::Result<()> {
    match command {
        Commands::Init => {
            if Path::new(PROJECT_CONFIG_FILE).exists() {
                println!("{} already exists, leaving it alone.", PROJECT_CONFIG_FILE);
            } else {
                std::fs::write(PROJECT_CONFIG_FILE, Config::default_config_string())
                    .wrap_err_with(|| format!("Failed to write {}", PROJECT_CONFIG_FILE))?;
                println!("Wrote {}", PROJECT_CONFIG_FILE);
            }

            let mut session = open_session(&config)?;
            if session.storage().path().exists() {
                println!("Mind map: {} ({} topics)", session.storage().location(), session.map().topic_count());
            } else {
                session.save()?;
                println!("Created empty mind map: {}", session.storage().location());
            }
        }
        Commands::Add { name, category } => {
            let mut session = open_session(&config)?;
            let category = Category::from_label(&category);
            session.add_topic(&name, category)?;
            session.save()?;
            println!("Topic '{}' added with category '{}'.", name.trim(), category);
        }
        Commands::Connect { parent, child } => {
            let mut session = open_session(&config)?;
            match session.connect(&parent, &child)? {
                Connection::Connected => {
                    session.save()?;
                    println!("Connected '{}' to '{}'.", parent.trim(), child.trim());
                }
                Connection::AlreadyConnected => {
                    println!("'{}' is already connected to '{}'.", parent.trim(), child.trim());
                }
            }
        }
        Commands::Rename { old, new } => {
            let mut session = open_session(&config)?;
            session.rename_topic(&old, &new)?;
            session.save()?;
            println!("Topic '{}' renamed to '{}'.", old.trim(), new.trim());
        }
        Commands::Delete { name } => {
            let mut session = open_session(&config)?;
            session.delete_topic(&name)?;
            session.save()?;
            println!("Topic '{}' deleted.", name.trim());
        }
        Commands::Note { name, text } => {
            let mut session = open_session(&config)?;
            session.set_note(&name, &text.join(" "))?;
            session.save()?;
            println!("Note saved for '{}'.", name.trim());
        }
        Commands::Category { name, category } => {
            let mut session = open_session(&config)?;
            let category = Category::from_label(&category);
            session.set_category(&name, category)?;
            session.save()?;
            println!("Topic '{}' is now '{}'.", name.trim(), category);
        }
        Commands::Show { name } => {
            let session = open_session(&config)?;
            let topic = find_topic(session.map(), &name)?;
            println!("Topic:    {}", topic.name);
            println!("Category: {}", topic.category);
            println!("Leads to: {}", join_or_dash(&topic.successors));
            println!("From:     {}", join_or_dash(&topic.predecessors));
            if topic.note.is_empty() {
                println!("Note:     -");
            } else {
                println!("Note:");
                for line in topic.note.lines() {
                    println!("  {}", line);
                }
            }
        }
        Commands::List => {
            let session = open_session(&config)?;
            let map = session.map();
            if map.is_empty() {
                println!("Mind map is empty. Use 'mindmap add <name>' to start.");
                return Ok(());
            }
            for name in map.all_topics() {
                let category = map.category_of(name).unwrap_or_default();
                let marker = if map.note_of(name).is_some_and(|n| !n.is_empty()) { " *" } else { "" };
                println!("{:<24} {}{}", name, category, marker);
            }
            println!("\n{} topics, {} connections", map.topic_count(), map.edge_count());
        }
        Commands::Edges => {
            let session = open_session(&config)?;
            for (parent, child) in session.map().edges() {
                println!("{} -> {}", parent, child);
            }
        }
        Commands::Categories => {
            let session = open_session(&config)?;
            let used = session.map().used_categories();
            for category in Category::ALL {
                let marker = if used.contains(&category) { "*" } else { " " };
                println!("{} {:<16} {}", marker, category.display_name(), palette::category_color(category));
            }
            println!("\n* in use");
        }
        Commands::Search { query } => {
            let session = open_session(&config)?;
            let hits = session.map().search(&query);
            if hits.is_empty() {
                println!("Topic '{}' not found.", query.trim());
            }
            for name in hits {
                println!("{}", name);
            }
        }
        Commands::Reset => {
            let mut session = open_session(&config)?;
            session.reset();
            session.save()?;
            println!("Mind map cleared.");
        }
        Commands::Export { out } => {
            let session = open_session(&config)?;
            let dot = export::to_dot(session.map());
            match out {
                Some(path) => {
                    std::fs::write(&path, dot)
                        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
                    println!("Mind map exported to {}", path.display());
                }
                None => print!("{}", dot),
            }
        }
        Commands::Serve { port, no_open } => {
            let mut serve_config = config.serve.clone();
            if let Some(port) = port {
                serve_config.port = port;
            }
            if no_open {
                serve_config.open_browser = false;
            }
            let session = open_session(&config)?;
            serve::start_server(&serve_config, session).await?;
        }
    }

    Ok(())
}

/// Pick details for `show`; a missing topic is an error so the exit status
/// is non-zero.
fn find_topic(map: &MindMap, name: &str) -> Result<TopicView, GraphError> {
    map.topic(name).ok_or_else(|| GraphError::TopicNotFound {
        role: TopicRole::Target,
        name: name.trim().to_string(),
    })
}

fn join_or_dash(names: &[String]) -> String {
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}
