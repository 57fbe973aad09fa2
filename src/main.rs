use itertools::Itertools;
use rust_mst::algorithm::{kruskal::kruskal, prim::prim, SpanningTree};
use rust_mst::graph::{AdjacencyGraph, GraphView};
use rust_mst::import::{read_edge_list, ImportError};
use rust_mst::parameters::{get_and_check_options, MstAlgorithm, Parameters};
use std::io::{stdout, Write};
use std::time::Instant;

fn report_tree(tree: &SpanningTree, writer: &mut impl Write) -> std::io::Result<()> {
    writer.write_all(
        tree.edges()
            .iter()
            .map(|edge| format!("{}\n", edge))
            .join("")
            .as_bytes(),
    )?;
    writeln!(writer, "Total cost of MST: {}", tree.total_weight())
}

fn execute(name: &str, graph: &AdjacencyGraph, algorithm: impl Fn(&AdjacencyGraph) -> SpanningTree) {
    let start = Instant::now();
    let tree = algorithm(graph);
    let runtime = start.elapsed();

    if !tree.spans(graph.num_vertices()) {
        log::warn!(
            "graph is disconnected: {} selected {} of {} possible edges",
            name,
            tree.num_edges(),
            graph.num_vertices().saturating_sub(1)
        );
    }

    let stdout = stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}'s algorithm:", name).unwrap();
    report_tree(&tree, &mut out).unwrap();
    writeln!(out, "runtime_s:{}", runtime.as_secs_f64()).unwrap();
}

fn run(opt: &Parameters) -> Result<(), ImportError> {
    let graph = read_edge_list(&opt.input, opt.vertices.unwrap_or(0))?;
    log::info!(
        "loaded graph with {} vertices and {} edges",
        graph.num_vertices(),
        graph.all_edges().len()
    );

    if opt.print_matrix {
        print!("{}", graph);
    }

    if let Some(start) = opt.traverse_from {
        let order = graph.traverse(start)?;
        println!("DFS from {}: {}", start, order.iter().join(" "));
    }

    if opt.algorithm != MstAlgorithm::Kruskal {
        execute("Prim", &graph, |g| prim(g));
    }
    if opt.algorithm != MstAlgorithm::Prim {
        execute("Kruskal", &graph, |g| kruskal(g));
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let opt = get_and_check_options();

    if let Err(error) = run(&opt) {
        log::error!("{}", error);
        std::process::exit(1);
    }
}
