//! Binary that takes as standard in a graph as adjacency lists, computes the
//! minimum vertex cover size and writes it to standard out.

use std::error;
use std::io;

use exact_mvc::{graph::Graph, bounded_search::branch_and_reduce};

pub fn main() -> Result<(), Box<dyn error::Error>> {
    let stdin = io::stdin();
    let stdin = stdin.lock();
    let graph = Graph::read_adjacency(stdin)?;
    let size = branch_and_reduce(&graph)?;
    println!("{}", size);
    Ok(())
}
