//! 最小生成树
//!
//! Prim 式贪心生长：每轮在树与其余顶点之间的割上
//! 线性扫描最小权重边（朴素实现，不用优先队列）

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// 生成树中的一条边
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TreeEdge {
    pub u: VertexId,
    pub v: VertexId,
    pub weight: f64,
}

/// 最小生成树结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpanningTree {
    /// 树覆盖的顶点数
    pub vertex_count: usize,
    /// 树边总权重
    pub total_weight: f64,
    /// 树边（按加入顺序）
    pub edges: Vec<TreeEdge>,
}

impl SpanningTree {
    /// 输出边表文本：首行顶点数，次行总权重，随后每行 "u v w"
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", self.vertex_count));
        out.push_str(&format!("{}\n", self.total_weight));
        for edge in &self.edges {
            out.push_str(&format!("{} {} {}\n", edge.u, edge.v, edge.weight));
        }
        out
    }
}

/// Prim 最小生成树算法
pub struct Prim<'a> {
    graph: &'a Graph,
}

impl<'a> Prim<'a> {
    /// 创建算法实例
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 计算最小生成树
    ///
    /// 从第一个被引用的顶点开始生长，直到覆盖全部已知顶点。
    /// 图不连通（包括声明顶点数大于实际被引用数）时返回
    /// GraphNotConnected
    pub fn minimum_spanning_tree(&self) -> Result<SpanningTree> {
        let vertices = self.graph.vertices();
        if vertices.is_empty() {
            if self.graph.order() == 0 {
                return Ok(SpanningTree {
                    vertex_count: 0,
                    total_weight: 0.0,
                    edges: Vec::new(),
                });
            }
            return Err(Error::GraphNotConnected);
        }
        if self.graph.order() > vertices.len() {
            return Err(Error::GraphNotConnected);
        }

        let mut in_tree: HashSet<VertexId> = HashSet::new();
        in_tree.insert(vertices[0]);
        let mut edges: Vec<TreeEdge> = Vec::new();
        let mut total_weight = 0.0;

        while in_tree.len() < vertices.len() {
            // 扫描割上的最小权重边
            let mut best: Option<TreeEdge> = None;
            for &u in &vertices {
                if !in_tree.contains(&u) {
                    continue;
                }
                for edge in self.graph.half_edges(u)? {
                    let v = edge.connected_vertex();
                    if in_tree.contains(&v) {
                        continue;
                    }
                    let lighter = match &best {
                        None => true,
                        Some(b) => edge.weight() < b.weight,
                    };
                    if lighter {
                        best = Some(TreeEdge {
                            u,
                            v,
                            weight: edge.weight(),
                        });
                    }
                }
            }

            match best {
                Some(edge) => {
                    debug!("加入树边 {} - {} ({})", edge.u, edge.v, edge.weight);
                    in_tree.insert(edge.v);
                    total_weight += edge.weight;
                    edges.push(edge);
                }
                None => return Err(Error::GraphNotConnected),
            }
        }

        Ok(SpanningTree {
            vertex_count: vertices.len(),
            total_weight,
            edges,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::traversal::Traversal;

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    fn create_weighted_graph() -> Graph {
        let mut g = Graph::new(5);
        g.add_edge(v(1), v(2), 1.2);
        g.add_edge(v(2), v(5), 2.3);
        g.add_edge(v(3), v(5), 8.4);
        g.add_edge(v(3), v(4), 0.3);
        g.add_edge(v(4), v(5), 4.6);
        g.add_edge(v(1), v(5), 0.1);
        g
    }

    #[test]
    fn test_mst_weighted_graph() {
        let g = create_weighted_graph();
        let tree = Prim::new(&g).minimum_spanning_tree().unwrap();

        assert_eq!(tree.vertex_count, 5);
        assert_eq!(tree.edges.len(), 4);
        // 0.1 + 1.2 + 4.6 + 0.3
        assert!((tree.total_weight - 6.2).abs() < 1e-9);

        let picked: Vec<(VertexId, VertexId)> =
            tree.edges.iter().map(|e| (e.u, e.v)).collect();
        assert_eq!(
            picked,
            vec![(v(1), v(5)), (v(1), v(2)), (v(5), v(4)), (v(4), v(3))]
        );
    }

    #[test]
    fn test_mst_triangle() {
        let mut g = Graph::new(3);
        g.add_edge(v(1), v(2), 1.0);
        g.add_edge(v(2), v(3), 1.0);
        g.add_edge(v(1), v(3), 1.0);

        let tree = Prim::new(&g).minimum_spanning_tree().unwrap();
        assert_eq!(tree.total_weight, 2.0);
        assert_eq!(tree.edges.len(), 2);
    }

    #[test]
    fn test_mst_is_acyclic() {
        let g = create_weighted_graph();
        let tree = Prim::new(&g).minimum_spanning_tree().unwrap();

        let mut rebuilt = Graph::new(tree.vertex_count);
        for edge in &tree.edges {
            rebuilt.add_edge(edge.u, edge.v, edge.weight);
        }
        assert!(!Traversal::new(&rebuilt).has_cycle());
    }

    #[test]
    fn test_mst_disconnected() {
        let mut g = Graph::new(4);
        g.add_edge(v(1), v(2), 1.0);
        g.add_edge(v(3), v(4), 1.0);

        assert!(matches!(
            Prim::new(&g).minimum_spanning_tree(),
            Err(Error::GraphNotConnected)
        ));
    }

    #[test]
    fn test_mst_declared_order_exceeds_known_vertices() {
        let mut g = Graph::new(5);
        g.add_edge(v(1), v(2), 1.0);

        assert!(matches!(
            Prim::new(&g).minimum_spanning_tree(),
            Err(Error::GraphNotConnected)
        ));
    }

    #[test]
    fn test_mst_empty_graph() {
        let g = Graph::new(0);
        let tree = Prim::new(&g).minimum_spanning_tree().unwrap();
        assert_eq!(tree.vertex_count, 0);
        assert_eq!(tree.total_weight, 0.0);
        assert!(tree.edges.is_empty());
    }

    #[test]
    fn test_mst_to_text() {
        let mut g = Graph::new(3);
        g.add_edge(v(1), v(2), 1.0);
        g.add_edge(v(2), v(3), 0.5);

        let tree = Prim::new(&g).minimum_spanning_tree().unwrap();
        assert_eq!(tree.to_text(), "3\n1.5\n1 2 1\n2 3 0.5\n");
    }
}
