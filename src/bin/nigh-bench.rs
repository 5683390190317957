//! Benchmark and diversification harness.
//!
//! Search mode sweeps a fixed ladder of search budgets over a query file
//! and reports CSV `budget,qps,recall` lines; `diversify` mode rewrites a
//! raw k-NN graph file.

use std::process::ExitCode;

use nigh::benchmark::run_budget_sweep;
use nigh::io::{load_fvecs, load_ivecs, load_ivecs_fixed};
use nigh::{DiversifyParams, GraphDiversifier, GraphSearcher, NeighborGraph};

const TOPK: usize = 10;
const ROUNDS: usize = 5;

const BUDGETS: &[usize] = &[
    10, 11, 12, 13, 15, 18, 22, 26, 28, 35, 50, 60, 70, 80, 100, 128, 156, 192, 256, 298, 348,
    400, 456, 512,
];

fn help() {
    println!("nigh-bench -q queries.fvecs -i index.ivecs -gt gt.ivecs -c base.fvecs");
    println!("nigh-bench diversify -i knn.ivecs -c base.fvecs -o out.ivecs [-m max_degree]");
    println!();
    println!("Options:");
    println!("\t-q\tquery vectors in fvecs format");
    println!("\t-i\tgraph file in ivecs format");
    println!("\t-gt\tground-truth file in ivecs format");
    println!("\t-c\tbase vectors in fvecs format");
    println!("\t-o\toutput graph file in ivecs format (diversify mode)");
    println!("\t-m\tmaximum degree after diversification (default 64)");
}

struct Flags {
    query_path: Option<String>,
    index_path: Option<String>,
    gt_path: Option<String>,
    base_path: Option<String>,
    out_path: Option<String>,
    max_degree: usize,
}

fn parse_flags(args: &[String]) -> Result<Flags, String> {
    let mut flags = Flags {
        query_path: None,
        index_path: None,
        gt_path: None,
        base_path: None,
        out_path: None,
        max_degree: DiversifyParams::default().max_degree,
    };
    let mut i = 0;
    while i < args.len() {
        let value = args
            .get(i + 1)
            .ok_or_else(|| format!("option '{}' is missing its value", args[i]))?
            .clone();
        match args[i].as_str() {
            "-q" => flags.query_path = Some(value),
            "-i" => flags.index_path = Some(value),
            "-gt" => flags.gt_path = Some(value),
            "-c" => flags.base_path = Some(value),
            "-o" => flags.out_path = Some(value),
            "-m" => {
                flags.max_degree = value
                    .parse()
                    .map_err(|_| format!("'-m {value}' is not a degree"))?;
            }
            other => return Err(format!("unknown option '{other}'")),
        }
        i += 2;
    }
    Ok(flags)
}

fn require(flag: Option<String>, name: &str) -> Result<String, String> {
    flag.ok_or_else(|| format!("required option '{name}' is missing"))
}

fn run_diversify(flags: Flags) -> Result<(), String> {
    let knn_path = require(flags.index_path, "-i")?;
    let base_path = require(flags.base_path, "-c")?;
    let out_path = require(flags.out_path, "-o")?;

    let diversifier = GraphDiversifier::new(DiversifyParams {
        max_degree: flags.max_degree,
    });
    diversifier
        .diversify_files(&knn_path, &base_path, &out_path)
        .map_err(|e| e.to_string())?;
    println!("diversified graph written to {out_path}");
    Ok(())
}

fn run_search(flags: Flags) -> Result<(), String> {
    let query_path = require(flags.query_path, "-q")?;
    let index_path = require(flags.index_path, "-i")?;
    let gt_path = require(flags.gt_path, "-gt")?;
    let base_path = require(flags.base_path, "-c")?;

    let rows = load_ivecs(&index_path).map_err(|e| e.to_string())?;
    let graph = NeighborGraph::new(rows).map_err(|e| e.to_string())?;
    let store = load_fvecs(&base_path).map_err(|e| e.to_string())?;
    let mut searcher = GraphSearcher::new(graph, store).map_err(|e| e.to_string())?;

    let queries = load_fvecs(&query_path).map_err(|e| e.to_string())?;
    let ground_truth = load_ivecs_fixed(&gt_path).map_err(|e| e.to_string())?;

    println!(
        "data: {} x {}, queries: {} x {}",
        searcher.n_rows(),
        searcher.dim(),
        queries.n_rows(),
        queries.dim()
    );

    let points = run_budget_sweep(
        &mut searcher,
        &queries,
        &ground_truth,
        TOPK,
        BUDGETS,
        ROUNDS,
    )
    .map_err(|e| e.to_string())?;

    println!("budget,qps,recall_at_{TOPK}");
    for point in &points {
        println!("{},{:.1},{:.4}", point.budget, point.qps, point.recall);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        help();
        return ExitCode::SUCCESS;
    }

    let (diversify, rest) = match args[0].as_str() {
        "diversify" => (true, &args[1..]),
        _ => (false, &args[..]),
    };

    let result = parse_flags(rest).and_then(|flags| {
        if diversify {
            run_diversify(flags)
        } else {
            run_search(flags)
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("nigh-bench: {message}");
            ExitCode::FAILURE
        }
    }
}
