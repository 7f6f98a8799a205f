//! Command-line interface for the Homeward shelter-network engines.
//!
//! Each command loads a JSON snapshot of the network (the bundled sample by
//! default), runs one engine over it, and prints a JSON result. Infeasible
//! queries come back in the output as `"found": false` or empty plans; only
//! malformed input is an error.

#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use homeward_matching::{
    AdopterMatch, MatchConfig, SortAlgorithm, SortCriteria, assign_all, assign_greedy,
    plan_transport, sort_dogs,
};
use homeward_routing::{MstAlgorithm, shortest_path, solve_tour};
use serde_json::json;

mod error;
mod snapshot;

pub use error::CliError;
pub use snapshot::{Snapshot, SnapshotError};

/// Run the Homeward CLI with the current process arguments.
///
/// # Errors
/// Returns [`CliError`] when the arguments or the snapshot are malformed,
/// or when the output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let snapshot = Snapshot::load(cli.snapshot.as_deref())?;
    let output = match cli.command {
        Command::Route(args) => route(&snapshot, &args),
        Command::Network(args) => network(&snapshot, &args),
        Command::Tour(args) => tour(&snapshot, &args),
        Command::Transport(args) => transport(&snapshot, &args),
        Command::Adopt(args) => adopt(&snapshot, &args)?,
        Command::Sort(args) => sort(&snapshot, &args),
    };
    emit(&output)
}

#[derive(Debug, Parser)]
#[command(
    name = "homeward",
    about = "Route planning and adoption matching for the Homeward shelter network",
    version
)]
struct Cli {
    /// Path to a JSON network snapshot; the bundled sample when omitted.
    #[arg(long, global = true, value_name = "path")]
    snapshot: Option<Utf8PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Cheapest transfer route between two shelters.
    Route(RouteArgs),
    /// Minimum spanning transport network over a shelter subset.
    Network(NetworkArgs),
    /// Round trip visiting each requested shelter exactly once.
    Tour(TourArgs),
    /// Load the transport van by dog priority within a weight limit.
    Transport(TransportArgs),
    /// Match dogs with adopters.
    Adopt(AdoptArgs),
    /// Order the herd for intake lists.
    Sort(SortArgs),
}

#[derive(Debug, Args)]
struct RouteArgs {
    /// Shelter to start from.
    from: String,
    /// Shelter to reach.
    to: String,
}

#[derive(Debug, Args)]
struct NetworkArgs {
    /// Spanning-tree algorithm to run.
    #[arg(long, default_value = "kruskal")]
    algorithm: MstAlgorithm,
    /// Shelters to span; every shelter in the snapshot when omitted.
    nodes: Vec<String>,
}

#[derive(Debug, Args)]
struct TourArgs {
    /// Shelters to visit; every shelter in the snapshot when omitted.
    nodes: Vec<String>,
}

#[derive(Debug, Args)]
struct TransportArgs {
    /// Payload limit of the van in kilograms.
    #[arg(long = "capacity-kg", value_name = "kg")]
    capacity_kg: u32,
}

#[derive(Debug, Args)]
struct AdoptArgs {
    /// Match a single adopter greedily instead of the whole pool.
    #[arg(long, value_name = "id")]
    adopter: Option<String>,
}

#[derive(Debug, Args)]
struct SortArgs {
    /// Field to order by.
    #[arg(long, default_value = "priority")]
    criteria: SortCriteria,
    /// Sorting implementation to use.
    #[arg(long, default_value = "merge")]
    algorithm: SortAlgorithm,
}

fn route(snapshot: &Snapshot, args: &RouteArgs) -> serde_json::Value {
    let result = shortest_path(&snapshot.graph(), &args.from, &args.to);
    json!({
        "from": args.from,
        "to": args.to,
        "found": result.found(),
        "cost": result.found().then_some(result.cost),
        "path": result.path,
    })
}

fn network(snapshot: &Snapshot, args: &NetworkArgs) -> serde_json::Value {
    let nodes = if args.nodes.is_empty() {
        snapshot.shelter_ids()
    } else {
        args.nodes.clone()
    };
    let tree = args.algorithm.run(&snapshot.graph(), &nodes);
    json!({
        "algorithm": args.algorithm.as_str(),
        "spans": tree.spans(nodes.len()),
        "total_weight": tree.total_weight,
        "edges": tree.edges,
    })
}

fn tour(snapshot: &Snapshot, args: &TourArgs) -> serde_json::Value {
    let nodes = if args.nodes.is_empty() {
        snapshot.shelter_ids()
    } else {
        args.nodes.clone()
    };
    solve_tour(&snapshot.graph(), &nodes).map_or_else(
        || json!({ "found": false }),
        |tour| {
            json!({
                "found": true,
                "route": tour.route,
                "total_distance": tour.total_distance,
            })
        },
    )
}

fn transport(snapshot: &Snapshot, args: &TransportArgs) -> serde_json::Value {
    let plan = plan_transport(&snapshot.dogs, args.capacity_kg);
    json!({
        "capacity_kg": args.capacity_kg,
        "selected": plan.selected,
        "total_priority": plan.total_priority,
        "total_weight": plan.total_weight,
    })
}

fn adopt(snapshot: &Snapshot, args: &AdoptArgs) -> Result<serde_json::Value, CliError> {
    let config = MatchConfig::default();
    match &args.adopter {
        Some(id) => {
            let adopter = snapshot
                .adopters
                .iter()
                .find(|adopter| &adopter.id == id)
                .ok_or_else(|| CliError::UnknownAdopter { id: id.clone() })?;
            let matched = assign_greedy(&snapshot.dogs, adopter, &config);
            Ok(match_value(&matched))
        }
        None => {
            let plan = assign_all(&snapshot.dogs, &snapshot.adopters, &config);
            Ok(json!({
                "total_score": plan.total_score,
                "matches": plan.matches.iter().map(match_value).collect::<Vec<_>>(),
            }))
        }
    }
}

fn match_value(matched: &AdopterMatch) -> serde_json::Value {
    json!({
        "adopter_id": matched.adopter_id,
        "dogs": matched.dogs,
        "total_score": matched.total_score,
        "total_cost": matched.total_cost,
    })
}

fn sort(snapshot: &Snapshot, args: &SortArgs) -> serde_json::Value {
    let mut dogs = snapshot.dogs.clone();
    sort_dogs(&mut dogs, args.criteria, args.algorithm);
    json!({
        "criteria": args.criteria.as_str(),
        "algorithm": args.algorithm.as_str(),
        "dogs": dogs,
    })
}

#[expect(
    clippy::print_stdout,
    reason = "command results are written to stdout"
)]
fn emit(value: &serde_json::Value) -> Result<(), CliError> {
    let text = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    println!("{text}");
    Ok(())
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    clippy::indexing_slicing,
    reason = "tests use expect and JSON indexing for readable failures"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> Snapshot {
        Snapshot::load(None).expect("bundled sample is valid")
    }

    #[rstest]
    #[case(&["homeward", "route", "A", "D"])]
    #[case(&["homeward", "network", "--algorithm", "prim"])]
    #[case(&["homeward", "tour", "A", "B", "H"])]
    #[case(&["homeward", "transport", "--capacity-kg", "40"])]
    #[case(&["homeward", "adopt", "--adopter", "P1"])]
    #[case(&["homeward", "sort", "--criteria", "age", "--algorithm", "quick"])]
    fn arguments_parse(#[case] argv: &[&str]) {
        Cli::try_parse_from(argv).expect("arguments are valid");
    }

    #[rstest]
    fn unknown_selector_is_rejected() {
        let err = Cli::try_parse_from(["homeward", "network", "--algorithm", "boruvka"])
            .expect_err("unknown algorithm");
        assert!(err.to_string().contains("boruvka"));
    }

    #[rstest]
    fn route_across_the_sample_network_is_found() {
        let output = route(
            &sample(),
            &RouteArgs {
                from: "A".to_owned(),
                to: "O".to_owned(),
            },
        );
        assert_eq!(output["found"], true);
        assert!(output["cost"].as_f64().expect("cost is numeric") > 0.0);
    }

    #[rstest]
    fn network_spans_every_shelter_by_default() {
        let output = network(
            &sample(),
            &NetworkArgs {
                algorithm: MstAlgorithm::Kruskal,
                nodes: Vec::new(),
            },
        );
        assert_eq!(output["spans"], true);
        assert_eq!(
            output["edges"].as_array().expect("edge list").len(),
            14
        );
    }

    #[rstest]
    fn small_tour_closes_its_cycle() {
        let output = tour(
            &sample(),
            &TourArgs {
                nodes: vec!["A".to_owned(), "B".to_owned(), "H".to_owned()],
            },
        );
        assert_eq!(output["found"], true);
        let cycle = output["route"].as_array().expect("route array");
        assert_eq!(cycle.first(), cycle.last());
    }

    #[rstest]
    fn transport_respects_the_capacity() {
        let output = transport(&sample(), &TransportArgs { capacity_kg: 40 });
        assert!(output["total_weight"].as_u64().expect("weight") <= 40);
    }

    #[rstest]
    fn adopting_for_an_unknown_adopter_fails() {
        let err = adopt(
            &sample(),
            &AdoptArgs {
                adopter: Some("P99".to_owned()),
            },
        )
        .expect_err("unknown adopter");
        assert!(err.to_string().contains("P99"));
    }

    #[rstest]
    fn greedy_adoption_reports_the_adopter() {
        let output = adopt(
            &sample(),
            &AdoptArgs {
                adopter: Some("P1".to_owned()),
            },
        )
        .expect("P1 is part of the sample");
        assert_eq!(output["adopter_id"], "P1");
    }

    #[rstest]
    fn sorting_by_priority_puts_the_most_urgent_first() {
        let output = sort(
            &sample(),
            &SortArgs {
                criteria: SortCriteria::Priority,
                algorithm: SortAlgorithm::Merge,
            },
        );
        let dogs = output["dogs"].as_array().expect("dog list");
        let first = dogs.first().and_then(|dog| dog["priority"].as_u64());
        assert_eq!(first, Some(8));
    }
}
