mod adj_map;

pub use adj_map::AdjMap;
