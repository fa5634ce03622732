pub mod color;
pub mod colorer;
pub mod config;
pub mod graph;
pub mod graph_builder;
pub mod include;
pub mod node;

pub use color::Color;
pub use colorer::color_of;
pub use config::{Config, Granularity};
pub use graph::{Graph, Node};
pub use graph_builder::{SourceFile, build_graph};
pub use incgraph_error::{Error, ErrorKind, ErrorStatus, Result};
