pub mod connected;
pub mod cycle;
pub mod path;

pub use connected::connected_components;
pub use cycle::is_cyclic;
pub use path::{find_path, find_shortest_path, find_shortest_path_with};
