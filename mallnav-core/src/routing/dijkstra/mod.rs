mod state;
mod traced_dijkstra;

pub(crate) use traced_dijkstra::{WalkingPath, dijkstra_path};
