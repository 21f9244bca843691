//! CLI for the address whitelist registry.
//!
//! The registry lives in a JSON state file. Every `exec` loads it, runs one
//! gated operation as `--caller`, and writes it back only if the call succeeds.

mod store;

use clap::{Parser, Subcommand};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use whitelist_core::{Address, Category, RegistryEvent, WhitelistError, WhitelistResult};
use whitelist_deploy::{labels, DeployConfig};
use whitelist_registry::reporter::Report;
use whitelist_registry::sink;
use whitelist_registry::sink::json_stream::JsonStreamSink;
use whitelist_registry::AccessRegistry;

#[derive(Parser, Debug)]
#[command(name = "whitelist", version, about = "Role-gated address whitelist registry")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new registry state file.
    Init {
        #[arg(short, long, env = "WHITELIST_STATE")]
        state: PathBuf,

        #[arg(long)]
        admin: Address,

        /// Initial operator; repeat for several.
        #[arg(long = "operator")]
        operators: Vec<Address>,

        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// Deploy the registry for one configured chain.
    Deploy {
        #[arg(short, long)]
        config: PathBuf,

        #[arg(long)]
        chain_id: u64,

        #[arg(short, long, env = "WHITELIST_STATE")]
        state: PathBuf,

        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// Deploy every configured chain into `<out-dir>/<chain>.json`.
    DeployAll {
        #[arg(short, long)]
        config: PathBuf,

        #[arg(long)]
        out_dir: PathBuf,

        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// Run one mutating operation as `caller`.
    Exec {
        #[arg(short, long, env = "WHITELIST_STATE")]
        state: PathBuf,

        #[arg(long)]
        caller: Address,

        /// Event output: "ndjson" writes NDJSON to stdout,
        /// "ndjson:/path/to/file" appends to file.
        #[arg(long)]
        events: Option<EventTarget>,

        #[command(subcommand)]
        op: Operation,
    },

    /// Read-only membership queries.
    Query {
        #[arg(short, long, env = "WHITELIST_STATE")]
        state: PathBuf,

        #[command(subcommand)]
        query: Query,
    },

    /// Print the whole registry.
    Show {
        #[arg(short, long, env = "WHITELIST_STATE")]
        state: PathBuf,

        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
enum Operation {
    AddOperators {
        #[arg(required = true)]
        accounts: Vec<Address>,
    },
    RemoveOperators {
        #[arg(required = true)]
        accounts: Vec<Address>,
    },
    /// Whitelist accounts under a category (dex, cross-chain, any-router).
    Add {
        category: Category,
        #[arg(required = true)]
        accounts: Vec<Address>,
    },
    Remove {
        category: Category,
        #[arg(required = true)]
        accounts: Vec<Address>,
    },
    AddToBlacklist {
        #[arg(required = true)]
        accounts: Vec<Address>,
    },
    RemoveFromBlacklist {
        #[arg(required = true)]
        accounts: Vec<Address>,
    },
    /// Nominate a new admin; takes effect when the nominee accepts.
    TransferAdmin { new_admin: Address },
    AcceptAdmin,
}

/// Where `exec` sends the events of a successful call.
#[derive(Debug, Clone, PartialEq, Eq)]
enum EventTarget {
    Stdout,
    File(PathBuf),
}

impl FromStr for EventTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "ndjson" {
            return Ok(EventTarget::Stdout);
        }
        match s.strip_prefix("ndjson:") {
            Some(path) if !path.is_empty() => Ok(EventTarget::File(PathBuf::from(path))),
            _ => Err(format!(
                "unknown event sink: {s}. Use 'ndjson' or 'ndjson:/path'"
            )),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Query {
    IsOperator { account: Address },
    IsWhitelisted { category: Category, account: Address },
    IsBlacklisted { account: Address },
    Admin,
    PendingAdmin,
    /// Members of a category, in insertion order.
    Members { category: Category },
    Operators,
    Blacklist,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            state,
            admin,
            operators,
            force,
        } => {
            let registry = AccessRegistry::new(&operators, admin)?;
            store::create(&state, &registry, force)?;
            tracing::info!(path = %state.display(), admin = %admin, "registry initialized");
        }

        Commands::Deploy {
            config,
            chain_id,
            state,
            force,
        } => {
            let config = DeployConfig::load(&config)?;
            let chain = config.chain(chain_id).ok_or_else(|| {
                WhitelistError::Config(format!("chain {chain_id} is not configured"))
            })?;
            let deployment = whitelist_deploy::deploy_chain(chain, &config.defaults)?;
            store::create(&state, &deployment.registry, force)?;
            tracing::info!(chain = %deployment.name, path = %state.display(), "deployed");
        }

        Commands::DeployAll {
            config,
            out_dir,
            force,
        } => {
            let config = DeployConfig::load(&config)?;
            deploy_all_to(&config, &out_dir, force)?;
        }

        Commands::Exec {
            state,
            caller,
            events,
            op,
        } => {
            run_exec(&state, caller, events.as_ref(), op)?;
        }

        Commands::Query { state, query } => {
            let registry = store::load(&state)?;
            run_query(&registry, query);
        }

        Commands::Show { state, json } => {
            let registry = store::load(&state)?;
            if json {
                println!("{}", registry.to_json()?);
            } else {
                print!("{}", Report::build(&registry, labels::describe).render());
            }
        }
    }

    Ok(())
}

fn apply(registry: &mut AccessRegistry, caller: &Address, op: Operation) -> WhitelistResult<()> {
    match op {
        Operation::AddOperators { accounts } => registry.add_operators(caller, &accounts)?,
        Operation::RemoveOperators { accounts } => registry.remove_operators(caller, &accounts)?,
        Operation::Add { category, accounts } => registry.add(caller, category, &accounts)?,
        Operation::Remove { category, accounts } => registry.remove(caller, category, &accounts)?,
        Operation::AddToBlacklist { accounts } => registry.add_to_blacklist(caller, &accounts)?,
        Operation::RemoveFromBlacklist { accounts } => {
            registry.remove_from_blacklist(caller, &accounts)?
        }
        Operation::TransferAdmin { new_admin } => registry.transfer_admin(caller, new_admin)?,
        Operation::AcceptAdmin => registry.accept_admin(caller)?,
    }
    Ok(())
}

fn run_query(registry: &AccessRegistry, query: Query) {
    let print_all = |members: &[Address]| {
        for member in members {
            println!("{member}");
        }
    };

    match query {
        Query::IsOperator { account } => println!("{}", registry.is_operator(&account)),
        Query::IsWhitelisted { category, account } => {
            println!("{}", registry.is_whitelisted(category, &account))
        }
        Query::IsBlacklisted { account } => println!("{}", registry.is_blacklisted(&account)),
        Query::Admin => println!("{}", registry.admin()),
        Query::PendingAdmin => match registry.pending_admin() {
            Some(nominee) => println!("{nominee}"),
            None => println!("none"),
        },
        Query::Members { category } => print_all(registry.members(category)),
        Query::Operators => print_all(registry.available_operators()),
        Query::Blacklist => print_all(registry.blacklist()),
    }
}

/// Deploys every configured chain and writes one state file per chain.
///
/// Fails if any chain failed to deploy or its state file could not be written.
fn deploy_all_to(config: &DeployConfig, out_dir: &Path, force: bool) -> WhitelistResult<usize> {
    let outcome = whitelist_deploy::deploy_all(config);

    let mut written = 0usize;
    let mut failures = outcome.failed.len();
    for deployment in &outcome.deployed {
        let path = out_dir.join(format!("{}.json", deployment.name));
        match store::create(&path, &deployment.registry, force) {
            Ok(()) => {
                println!(
                    "{}\t{}\t{}",
                    deployment.chain_id,
                    deployment.name,
                    path.display()
                );
                written += 1;
            }
            Err(e) => {
                tracing::error!(chain = %deployment.name, error = %e, "cannot write state");
                eprintln!("{}: cannot write state: {e}", deployment.name);
                failures += 1;
            }
        }
    }
    for (name, err) in &outcome.failed {
        eprintln!("{name}: {err}");
    }

    if failures > 0 {
        return Err(WhitelistError::Deploy(format!(
            "{failures} chain(s) failed to deploy"
        )));
    }
    Ok(written)
}

/// Loads the state, applies `op` as `caller`, and saves only on success.
fn exec(state: &Path, caller: Address, op: Operation) -> WhitelistResult<Vec<RegistryEvent>> {
    let mut registry = store::load(state)?;
    apply(&mut registry, &caller, op)?;
    store::save(state, &registry)?;
    Ok(registry.drain_events())
}

fn run_exec(
    state: &Path,
    caller: Address,
    target: Option<&EventTarget>,
    op: Operation,
) -> WhitelistResult<()> {
    let events = exec(state, caller, op)?;
    tracing::info!(events = events.len(), "operation applied");

    // The state is saved by now; a sink failure does not undo the call.
    if let Some(target) = target {
        if let Err(e) = write_events(target, caller, events) {
            tracing::error!(error = %e, "event sink failed after state was saved");
        }
    }
    Ok(())
}

fn write_events(
    target: &EventTarget,
    caller: Address,
    events: Vec<RegistryEvent>,
) -> WhitelistResult<usize> {
    match target {
        EventTarget::Stdout => {
            let rows = sink::to_rows(0, caller, events);
            let mut s = JsonStreamSink::stdout();
            s.write_events(&rows)?;
            Ok(s.finish()?)
        }
        EventTarget::File(path) => {
            let first_seq = existing_rows(path)?;
            let rows = sink::to_rows(first_seq, caller, events);
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let mut s = JsonStreamSink::new(file);
            s.write_events(&rows)?;
            let n = s.finish()?;
            tracing::info!(rows = n, first_seq, path = %path.display(), "ndjson sink: appended to file");
            Ok(n)
        }
    }
}

/// Rows already in an NDJSON file, so appended rows continue the sequence.
fn existing_rows(path: &Path) -> WhitelistResult<u64> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(raw.lines().filter(|l| !l.trim().is_empty()).count() as u64),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(0),
        Err(e) => Err(e.into()),
    }
}
