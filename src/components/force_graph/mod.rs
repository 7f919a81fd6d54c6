mod component;
pub mod curvature;
mod render;
pub mod scale;
mod state;
mod types;

pub use component::ForceGraphCanvas;
pub use types::{GraphData, GraphLink, GraphNode, LinkKind, LinkMeta, NodeKind};
