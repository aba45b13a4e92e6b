//! 顶点覆盖启发式
//!
//! 贪心近似：反复选取在剩余边中度数最高的顶点，
//! 移除其全部关联边，直到无边剩余。
//! 结果保证覆盖所有边，但不保证最小

use crate::graph::{Graph, VertexId};

/// 贪心顶点覆盖算法
pub struct GreedyCover<'a> {
    graph: &'a Graph,
}

impl<'a> GreedyCover<'a> {
    /// 创建算法实例
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 计算覆盖集（按选取顺序）
    ///
    /// 度数按剩余边实时统计，并列时取先被引用的顶点
    pub fn minimum_vertex_cover(&self) -> Vec<VertexId> {
        // 工作多重集：每条半边一个条目，平行边各自保留
        let mut remaining: Vec<(VertexId, VertexId)> = Vec::new();
        for (v, edges) in self.graph.iter() {
            for edge in edges {
                remaining.push((v, edge.connected_vertex()));
            }
        }

        let mut cover: Vec<VertexId> = Vec::new();
        while !remaining.is_empty() {
            let mut best: Option<(VertexId, usize)> = None;
            for v in self.graph.vertices() {
                if cover.contains(&v) {
                    continue;
                }
                let incident = remaining
                    .iter()
                    .filter(|&&(a, b)| a == v || b == v)
                    .count();
                if incident == 0 {
                    continue;
                }
                let higher = match best {
                    None => true,
                    Some((_, count)) => incident > count,
                };
                if higher {
                    best = Some((v, incident));
                }
            }

            match best {
                Some((v, _)) => {
                    cover.push(v);
                    remaining.retain(|&(a, b)| a != v && b != v);
                }
                None => break,
            }
        }

        cover
    }
}
