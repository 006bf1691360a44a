use crate::dispatcher::Dispatcher;
use crate::registry::HandlerRegistry;
use crate::runtime_config::DispatcherConfig;
use anyhow::{anyhow, Context};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

/// Command-line interface for brrtdispatch
#[derive(Parser)]
#[command(name = "brrtdispatch")]
#[command(about = "Discover, cache and resolve handler routes", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub source: SourceArgs,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Where handlers, routes and the cache live.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Handler manifest (YAML or JSON) declaring handler types and their routes
    #[arg(short, long, global = true)]
    pub registry: Option<PathBuf>,

    /// Dispatcher configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory of handler definition files
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Namespace root prepended to each handler file stem
    #[arg(long, global = true)]
    pub namespace: Option<String>,

    /// Route cache file; an empty value turns caching off
    #[arg(long, global = true)]
    pub cache: Option<String>,

    /// Extension of handler definition files (default: rs)
    #[arg(long, global = true)]
    pub ext: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover routes, reconcile the cache and print the route table
    Routes {
        /// Print the table as a JSON object
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Resolve a method and path to its handler
    Resolve {
        /// HTTP method, used verbatim
        #[arg(short, long)]
        method: String,

        /// Request path
        #[arg(short, long)]
        path: String,
    },
}

impl SourceArgs {
    fn dispatcher_config(&self) -> anyhow::Result<DispatcherConfig> {
        let mut config = match &self.config {
            Some(path) => DispatcherConfig::from_file(path)?,
            None => DispatcherConfig::default(),
        };
        config.apply_env();
        if let Some(store) = &self.store {
            config.store_path = store.clone();
        }
        if let Some(namespace) = &self.namespace {
            config.namespace_root = namespace.clone();
        }
        if let Some(cache) = &self.cache {
            config.cache_path = Some(PathBuf::from(cache));
        }
        if let Some(ext) = &self.ext {
            config.handler_extension = ext.trim_start_matches('.').to_string();
        }
        Ok(config)
    }

    fn handler_registry(&self) -> anyhow::Result<HandlerRegistry> {
        let path = self
            .registry
            .as_ref()
            .ok_or_else(|| anyhow!("a handler manifest is required (--registry <FILE>)"))?;
        Ok(HandlerRegistry::load_manifest(path)?)
    }
}

/// Run `cli`, writing command output to `out`.
pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let config = cli.source.dispatcher_config()?;
    let registry = cli.source.handler_registry()?;
    let mut dispatcher = Dispatcher::new(config, registry)?;

    match &cli.command {
        Commands::Routes { json } => {
            if *json {
                let map: std::collections::BTreeMap<_, _> =
                    dispatcher.routes().to_string_map().into_iter().collect();
                serde_json::to_writer_pretty(&mut *out, &map)?;
                writeln!(out)?;
            } else {
                for entry in dispatcher.routes().sorted() {
                    writeln!(out, "{} -> {}::{}", entry.key, entry.handler_type, entry.operation)?;
                }
                for skipped in dispatcher.skipped() {
                    writeln!(
                        out,
                        "skipped {} ({}): {}",
                        skipped.file.display(),
                        skipped.type_name,
                        skipped.reason
                    )?;
                }
                if let Some(outcome) = dispatcher.cache_outcome() {
                    writeln!(out, "cache: {outcome:?}")?;
                }
            }
        }
        Commands::Resolve { method, path } => {
            let reference = dispatcher.resolve(method, path)?;
            serde_json::to_writer_pretty(&mut *out, &reference)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Parse arguments from the process and run.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &mut out).context("brrtdispatch failed")
}
