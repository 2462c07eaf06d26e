pub mod graph;
pub mod cust_error;
pub mod generate;
pub mod reduction;
pub mod heuristics;
pub mod bounded_search;
