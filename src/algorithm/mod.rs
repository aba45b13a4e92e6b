//! 图算法模块
//!
//! 遍历与连通性、最短路径、距离度量、生成树、顶点覆盖与匹配

mod cover;
mod matching;
mod metrics;
mod shortest_path;
mod spanning;
mod traversal;

pub use cover::GreedyCover;
pub use matching::Matcher;
pub use metrics::Metrics;
pub use shortest_path::{DistanceMap, PathFinder, PathResult};
pub use spanning::{Prim, SpanningTree, TreeEdge};
pub use traversal::Traversal;
