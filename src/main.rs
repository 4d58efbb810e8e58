use anyhow::Context;
use clap::{Parser, Subcommand};
use std::{path::PathBuf, time::Duration};
use tokio::runtime::Runtime;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use folio::core::detail::{self, DetailState, DetailView, LinkAction, ProjectStats};
use folio::core::store::rehydrate_catalog;
use folio::{Catalog, Config, MemoryStore, ProjectId, Route, SessionStore, SqliteStore, Store};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Personal portfolio: intro, project showcase and contact page")]
struct Cli {
    /// Path to the session database
    #[arg(long, value_name = "PATH")]
    store: Option<PathBuf>,

    /// Keep session state in memory only
    #[arg(long, conflicts_with = "store")]
    ephemeral: bool,

    /// Load projects from a JSON catalog instead of the built-in table
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Path the window opens on, e.g. /project/2
    #[arg(long, value_name = "PATH", default_value = "/")]
    route: String,

    /// Prefix stripped from routes before matching
    #[arg(long, value_name = "PREFIX")]
    base_path: Option<String>,

    /// Minutes of inactivity after which a new session starts
    #[arg(long, value_name = "MINUTES")]
    session_timeout: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the catalog in display order
    List,
    /// Print one project
    Show {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Print which view a path selects
    Route {
        #[arg(value_name = "PATH")]
        path: String,
    },
    /// End the current session, clearing session-scoped state
    Reset,
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::default();
        if let Some(path) = &self.store {
            config.store_path = path.clone();
        }
        if let Some(base_path) = &self.base_path {
            config.base_path = base_path.clone();
        }
        if let Some(minutes) = self.session_timeout {
            config.session_idle_timeout = Duration::from_secs(minutes * 60);
        }
        config
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "folio=debug,info" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn open_store(cli: &Cli, config: &Config) -> anyhow::Result<Store> {
    if cli.ephemeral {
        tracing::debug!("Using in-memory session store");
        return Ok(Store::Memory(MemoryStore::default()));
    }
    let store = SqliteStore::open(&config.store_path, config.session_idle_timeout).await?;
    Ok(Store::Sqlite(store))
}

/// `--catalog` wins. A view opened directly on a project falls back to the
/// mirror left by an earlier run before the built-in table.
async fn load_catalog(cli: &Cli, store: &Store, from_mirror: bool) -> anyhow::Result<Catalog> {
    if let Some(path) = &cli.catalog {
        let catalog = Catalog::load(path)?;
        tracing::info!(path = %path.display(), projects = catalog.len(), "Loaded catalog file");
        return Ok(catalog);
    }
    if from_mirror {
        if let Some(catalog) = rehydrate_catalog(store).await? {
            tracing::debug!(projects = catalog.len(), "Rehydrated catalog mirror");
            return Ok(catalog);
        }
    }
    Ok(Catalog::builtin())
}

fn describe_link(action: &LinkAction) -> String {
    match action {
        LinkAction::Open(url) => url.clone(),
        LinkAction::Notice(notice) => notice.body.to_string(),
        LinkAction::Disabled => "not available".to_string(),
    }
}

fn print_route(path: &str, config: &Config) -> anyhow::Result<()> {
    match Route::parse(path, &config.base_path)? {
        Route::Landing => println!("landing"),
        Route::ProjectDetail(id) => println!("project detail (id {id})"),
    }
    Ok(())
}

fn print_list(catalog: &Catalog) {
    println!("=== Projects ({}) ===", catalog.len());
    for project in catalog.projects() {
        println!("  {:>3}  {}", project.id, project.title);
    }
}

fn print_detail(catalog: &Catalog, id: &str) {
    let view = DetailView::resolve(catalog, ProjectId::new(id));
    let project = match view.state() {
        DetailState::Found(project) => project,
        DetailState::NotFound => {
            println!("Project {id:?} not found");
            return;
        }
    };
    let stats = ProjectStats::of(project);
    println!("=== {} ===", project.title);
    println!("{}\n", project.description);
    println!(
        "Technologies ({}): {}",
        stats.technologies,
        project.tech_stack.join(", ")
    );
    println!("Fonctionnalités ({}):", stats.features);
    for feature in &project.features {
        println!("  - {feature}");
    }
    println!("Demo:   {}", describe_link(&detail::demo_action(project)));
    println!("Source: {}", describe_link(&detail::source_action(project)));
}

#[cfg(feature = "gui")]
fn launch(runtime: &Runtime, cli: &Cli, config: Config) -> anyhow::Result<()> {
    use folio::SessionSnapshot;
    use folio::gui::{AppState, FolioApp};

    let route = match Route::parse(&cli.route, &config.base_path) {
        Ok(route) => route,
        Err(err) => {
            tracing::warn!(error = %err, "Falling back to the landing view");
            Route::Landing
        }
    };
    let deep_link = matches!(route, Route::ProjectDetail(_));

    // the pool is bound to this runtime, which stays alive until the window closes
    let (store, catalog, session) = runtime.block_on(async {
        let store = open_store(cli, &config).await?;
        let catalog = load_catalog(cli, &store, deep_link).await?;
        let session = SessionSnapshot::load(&store).await?;
        anyhow::Ok((store, catalog, session))
    })?;
    tracing::debug!(?session, "Loaded session");

    let state = AppState::new(catalog, store, config, session, route);
    FolioApp::run(state).map_err(|err| anyhow::anyhow!("Window failed: {err}"))
}

#[cfg(not(feature = "gui"))]
fn launch(_runtime: &Runtime, _cli: &Cli, _config: Config) -> anyhow::Result<()> {
    anyhow::bail!("Built without the `gui` feature; use a subcommand such as `folio list`")
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = cli.config();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    match &cli.command {
        None => launch(&runtime, &cli, config),
        Some(Command::Route { path }) => print_route(path, &config),
        Some(Command::List) => runtime.block_on(async {
            let store = open_store(&cli, &config).await?;
            print_list(&load_catalog(&cli, &store, false).await?);
            anyhow::Ok(())
        }),
        Some(Command::Show { id }) => runtime.block_on(async {
            let store = open_store(&cli, &config).await?;
            print_detail(&load_catalog(&cli, &store, true).await?, id);
            anyhow::Ok(())
        }),
        Some(Command::Reset) => runtime.block_on(async {
            let store = open_store(&cli, &config).await?;
            store.end_session().await?;
            println!("Session reset");
            anyhow::Ok(())
        }),
    }
}
