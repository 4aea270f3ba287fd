//! Waypath CLI — command-line driver for the Waypath graph store
//!
//! Loads a graph from an edge-list file, then answers path queries either
//! as one-shot subcommands or from an interactive shell.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use waypath::graph::GraphStore;
use waypath::search::{self, Path};

#[derive(Parser)]
#[command(name = "waypath", version, about = "Waypath graph store CLI")]
struct Cli {
    /// Edge list file, one `SOURCE LABEL DESTINATION` triple per line
    file: std::path::PathBuf,

    /// Output format
    #[arg(long, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Find all directed paths between two nodes
    Paths {
        /// Starting node label
        start: String,
        /// Ending node label
        end: String,
    },
    /// Find directed paths with an exact edge count
    Length {
        /// Starting node label
        start: String,
        /// Ending node label
        end: String,
        /// Required number of edges
        edges: usize,
    },
    /// Find the shortest directed path(s), ties included
    Shortest {
        /// Starting node label
        start: String,
        /// Ending node label
        end: String,
    },
    /// Start an interactive shell
    Shell,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut store = GraphStore::new();
    waypath::load_edges_from_path(&cli.file, &mut store)
        .with_context(|| format!("loading edge list {}", cli.file.display()))?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Paths { start, end } => {
            check_endpoints(&store, &start, &end)?;
            print_paths(&store, &search::all_paths(&store, &start, &end), &cli.format);
        }
        Commands::Length { start, end, edges } => {
            check_endpoints(&store, &start, &end)?;
            print_paths(
                &store,
                &search::paths_of_length(&store, &start, &end, edges),
                &cli.format,
            );
        }
        Commands::Shortest { start, end } => {
            check_endpoints(&store, &start, &end)?;
            print_paths(
                &store,
                &search::shortest_paths(&store, &start, &end),
                &cli.format,
            );
        }
        Commands::Shell => run_shell(&store, &cli.format)?,
    }

    Ok(())
}

/// Verify both query endpoints exist before invoking the search engine
fn check_endpoints(store: &GraphStore, start: &str, end: &str) -> Result<()> {
    if !store.contains(start) {
        bail!("starting node label {start:?} not found in the graph");
    }
    if !store.contains(end) {
        bail!("ending node label {end:?} not found in the graph");
    }
    Ok(())
}

fn run_shell(store: &GraphStore, format: &OutputFormat) -> Result<()> {
    println!(
        "Waypath shell v{} — {} node(s), {} edge(s) loaded.",
        waypath::version(),
        store.node_count(),
        store.edge_count()
    );
    println!("Type :help for commands. :quit to exit.\n");

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        eprint!("waypath> ");

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => continue,
            [":quit"] | [":exit"] | [":q"] => break,
            [":help"] | [":h"] => {
                println!("Commands:");
                println!("  paths <START> <END>            — All directed paths");
                println!("  length <START> <END> <EDGES>   — Paths with an exact edge count");
                println!("  shortest <START> <END>         — Shortest path(s), ties included");
                println!("  :quit                          — Exit shell");
            }
            ["paths", start, end] => {
                run_shell_query(store, start, end, format, |s| {
                    search::all_paths(s, start, end)
                });
            }
            ["length", start, end, edges] => match edges.parse::<usize>() {
                Ok(n) => {
                    run_shell_query(store, start, end, format, |s| {
                        search::paths_of_length(s, start, end, n)
                    });
                }
                Err(_) => eprintln!("Error: edge count {edges:?} is not a non-negative integer"),
            },
            ["shortest", start, end] => {
                run_shell_query(store, start, end, format, |s| {
                    search::shortest_paths(s, start, end)
                });
            }
            _ => eprintln!("Invalid command. Type :help for usage."),
        }
    }

    println!("Bye!");
    Ok(())
}

fn run_shell_query<F>(store: &GraphStore, start: &str, end: &str, format: &OutputFormat, query: F)
where
    F: FnOnce(&GraphStore) -> Vec<Path>,
{
    if let Err(e) = check_endpoints(store, start, end) {
        eprintln!("Error: {e}");
        return;
    }
    print_paths(store, &query(store), format);
}

fn print_paths(store: &GraphStore, paths: &[Path], format: &OutputFormat) {
    match format {
        OutputFormat::Json => {
            let rendered: Vec<serde_json::Value> = paths
                .iter()
                .map(|p| {
                    serde_json::json!({
                        "nodes": p.labels(store),
                        "edges": p.edge_labels(store),
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&rendered).unwrap_or_default()
            );
        }
        OutputFormat::Text => {
            if paths.is_empty() {
                println!("[Error] No paths found.");
                return;
            }
            for path in paths {
                println!("{}", format_path(store, path));
            }
            println!("{} path(s)", paths.len());
        }
    }
}

/// Render a path as `A --- label ---> B --- label ---> C`
fn format_path(store: &GraphStore, path: &Path) -> String {
    let mut out = String::new();
    for pair in path.nodes.windows(2) {
        let node = store.label(pair[0]).unwrap_or("?");
        let edge = store.edge_label_between(pair[0], pair[1]).unwrap_or("?");
        out.push_str(node);
        out.push_str(" --- ");
        out.push_str(edge);
        out.push_str(" ---> ");
    }
    if let Some(&last) = path.nodes.last() {
        out.push_str(store.label(last).unwrap_or("?"));
    }
    out
}
