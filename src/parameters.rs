use std::path::PathBuf;
use std::str::FromStr;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "rust-mst",
    about = "Computes minimum spanning trees of a weighted undirected graph"
)]
pub struct Parameters {
    /// Edge-list file with one `source destination weight` triple per line.
    #[structopt(short = "i", long)]
    pub input: PathBuf,

    #[structopt(short = "a", long, default_value = "both")]
    pub algorithm: MstAlgorithm,

    /// Force at least this many vertices, for graphs with isolated vertices.
    #[structopt(short = "n", long)]
    pub vertices: Option<usize>,

    /// Print the adjacency matrix before running the algorithms.
    #[structopt(short = "m", long)]
    pub print_matrix: bool,

    /// Print a depth-first traversal from the given vertex.
    #[structopt(short = "t", long)]
    pub traverse_from: Option<usize>,
}

#[derive(Eq, Clone, Copy, PartialEq, Debug)]
pub enum MstAlgorithm {
    Prim,
    Kruskal,
    Both,
}

impl FromStr for MstAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prim" => Ok(MstAlgorithm::Prim),
            "kruskal" => Ok(MstAlgorithm::Kruskal),
            "both" => Ok(MstAlgorithm::Both),
            _ => Err(format!("Unknown algorithm type: {}", s)),
        }
    }
}

pub fn get_and_check_options() -> Parameters {
    let opt = Parameters::from_args();

    if let (Some(start), Some(vertices)) = (opt.traverse_from, opt.vertices) {
        assert!(
            start < vertices,
            "traversal start {} outside requested vertex range",
            start
        );
    }

    opt
}
