//! 半边定义
//!
//! 无向边以两条半边存储，每个端点的邻接表各持有一条；
//! 两条半边携带相同的权重（权重对称不变式）

use crate::graph::vertex::VertexId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 半边：对端顶点 + 权重
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// 对端顶点 ID
    connected_vertex: VertexId,
    /// 边权重（允许为零；插入时不校验符号）
    weight: f64,
}

impl Edge {
    /// 创建半边
    pub fn new(connected_vertex: VertexId, weight: f64) -> Self {
        Self {
            connected_vertex,
            weight,
        }
    }

    /// 获取对端顶点 ID
    pub fn connected_vertex(&self) -> VertexId {
        self.connected_vertex
    }

    /// 获取边权重
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.connected_vertex, self.weight)
    }
}
