//! 单源最短路径算法
//!
//! 两种可互换的实现：
//! - Bellman-Ford（标签修正）：容忍负权，松弛后做整轮验证检测负权环
//! - Dijkstra（标签设定）：要求非负权，线性扫描选取最小距离顶点
//!
//! 两者都返回从源点到每个已知顶点的距离映射，不可达记为 +∞

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 距离映射：顶点 -> 最短距离（不可达为 +∞），按顶点插入顺序迭代
pub type DistanceMap = IndexMap<VertexId, f64>;

/// 路径结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathResult {
    /// 路径上的顶点序列（含两端）
    pub vertices: Vec<VertexId>,
    /// 路径长度（边数）
    pub length: usize,
    /// 路径总权重
    pub total_weight: f64,
}

/// 路径查找器
pub struct PathFinder<'a> {
    graph: &'a Graph,
}

impl<'a> PathFinder<'a> {
    /// 创建路径查找器
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    fn initial_distances(&self, source: VertexId) -> DistanceMap {
        let mut dist: DistanceMap = self
            .graph
            .vertices()
            .into_iter()
            .map(|v| (v, f64::INFINITY))
            .collect();
        dist.insert(source, 0.0);
        dist
    }

    /// Bellman-Ford 单源最短路径
    ///
    /// 对全部半边松弛 order-1 轮，再做一轮验证；
    /// 验证轮仍能松弛说明存在负权环
    pub fn bellman_ford(&self, source: VertexId) -> Result<DistanceMap> {
        self.graph.half_edges(source)?;
        let mut dist = self.initial_distances(source);

        let rounds = self.graph.order().saturating_sub(1);
        for _ in 0..rounds {
            for (v, edges) in self.graph.iter() {
                for edge in edges {
                    let candidate = dist[&v] + edge.weight();
                    if candidate < dist[&edge.connected_vertex()] {
                        dist[&edge.connected_vertex()] = candidate;
                    }
                }
            }
        }

        // 验证轮
        for (v, edges) in self.graph.iter() {
            for edge in edges {
                if dist[&v] + edge.weight() < dist[&edge.connected_vertex()] {
                    return Err(Error::NegativeCycleDetected);
                }
            }
        }

        Ok(dist)
    }

    /// Dijkstra 单源最短路径
    ///
    /// 线性扫描选取未访问的最小距离顶点。要求边权非负；
    /// 不可达顶点保持 +∞，不视为错误
    pub fn dijkstra(&self, source: VertexId) -> Result<DistanceMap> {
        self.graph.half_edges(source)?;
        let mut dist = self.initial_distances(source);
        let mut visited: HashSet<VertexId> = HashSet::new();

        loop {
            let mut nearest: Option<(VertexId, f64)> = None;
            for (&v, &d) in dist.iter() {
                if visited.contains(&v) || d.is_infinite() {
                    continue;
                }
                let closer = match nearest {
                    None => true,
                    Some((_, best)) => d < best,
                };
                if closer {
                    nearest = Some((v, d));
                }
            }

            let (v, d) = match nearest {
                Some(found) => found,
                None => break,
            };
            visited.insert(v);

            for edge in self.graph.half_edges(v)? {
                let candidate = d + edge.weight();
                if candidate < dist[&edge.connected_vertex()] {
                    dist[&edge.connected_vertex()] = candidate;
                }
            }
        }

        Ok(dist)
    }

    /// 重构 src 到 dest 的最短路径
    ///
    /// 距离由 Bellman-Ford 计算；从 dest 反向回溯，
    /// 每步取邻接表中第一个满足 dist[u] + w == dist[当前] 的邻居，
    /// 已在路径上的顶点跳过（防止零权边来回跳）。
    /// dest 不可达时返回 Ok(None)
    pub fn minimum_path(&self, src: VertexId, dest: VertexId) -> Result<Option<PathResult>> {
        self.graph.half_edges(dest)?;
        let dist = self.bellman_ford(src)?;

        if dist[&dest].is_infinite() {
            return Ok(None);
        }

        let mut path = vec![dest];
        let mut total_weight = 0.0;
        let mut current = dest;

        while current != src {
            let mut step: Option<(VertexId, f64)> = None;
            for edge in self.graph.half_edges(current)? {
                let u = edge.connected_vertex();
                if path.contains(&u) {
                    continue;
                }
                if dist[&u] + edge.weight() == dist[&current] {
                    step = Some((u, edge.weight()));
                    break;
                }
            }

            match step {
                Some((u, w)) => {
                    path.push(u);
                    total_weight += w;
                    current = u;
                }
                None => {
                    return Err(Error::InternalError(format!(
                        "路径回溯在顶点 {} 处中断",
                        current
                    )))
                }
            }
        }

        path.reverse();
        Ok(Some(PathResult {
            length: path.len() - 1,
            vertices: path,
            total_weight,
        }))
    }
}
