//! MetricGraph - 加权无向图分析库
//!
//! 围绕邻接表存储的加权无向图，提供：
//! - 遍历与连通性分析（DFS/BFS、环检测）
//! - 单源最短路径（Bellman-Ford 负权环检测、Dijkstra）
//! - 距离度量（离心率、半径、直径、中心、紧密中心性）
//! - 最小生成树、顶点覆盖启发式、增广路径最大匹配
//! - 文本 / JSON 图文件的导入与互转

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod import;

// 重导出常用类型
pub use algorithm::{
    GreedyCover, Matcher, Metrics, PathFinder, PathResult, Prim, SpanningTree, Traversal, TreeEdge,
};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, VertexId};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
