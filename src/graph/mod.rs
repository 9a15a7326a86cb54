pub mod undirected;

pub use undirected::WeightedGraph;
