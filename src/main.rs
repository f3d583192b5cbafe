use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use grid_traversal::request::{handle_request, ErrorResponse, PathfindingRequest};
use grid_traversal::{Error, PathingGrid};

#[derive(Parser, Debug)]
#[command(author, version, about = "Find a path on an obstacle grid with BFS, DFS or Dijkstra")]
struct Cli {
    /// JSON request file with `grid`, `start`, `end` and `algorithm`. Reads stdin when omitted.
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Use this algorithm instead of the one named in the request.
    #[arg(long, short)]
    algorithm: Option<String>,

    /// Pretty-print the JSON reply.
    #[arg(long)]
    pretty: bool,

    /// Print the parsed grid to stderr before searching.
    #[arg(long)]
    show_grid: bool,
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let body = read_input(cli.input.as_deref())?;
    let outcome = serde_json::from_str::<PathfindingRequest>(&body)
        .map_err(Error::from)
        .and_then(|mut request| {
            if let Some(algorithm) = &cli.algorithm {
                request.algorithm = algorithm.clone();
            }
            if cli.show_grid {
                show_grid(&request);
            }
            handle_request(&request)
        });

    match outcome {
        Ok(response) => {
            println!("{}", to_json(&response, cli.pretty)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("error: {err}");
            println!("{}", to_json(&ErrorResponse::from_error(&err), cli.pretty)?);
            Ok(if err.is_client_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read request from {}", path.display())),
        None => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .context("failed to read request from stdin")?;
            Ok(body)
        }
    }
}

fn show_grid(request: &PathfindingRequest) {
    if let Ok(grid) = PathingGrid::from_rows(&request.grid) {
        eprint!("{}", grid);
        if grid.reachable(&request.start, &request.end) {
            info!("{} is reachable from {}", request.end, request.start);
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("failed to encode reply")
}
