//! 图数据结构
//!
//! 邻接表存储的加权无向图：每条边拆成两条半边，
//! 分别挂在两个端点的邻接表上，权重保持对称

use super::edge::Edge;
use super::vertex::VertexId;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use smallvec::SmallVec;

/// 单个顶点的半边列表（保持插入顺序，保留平行边）
pub type AdjacencyList = SmallVec<[Edge; 4]>;

/// 加权无向图
#[derive(Debug, Clone)]
pub struct Graph {
    /// 声明的顶点数（构造时给定，之后不变）
    v_number: usize,
    /// 邻接表：顶点 -> 半边序列（按首次引用顺序迭代）
    adj: IndexMap<VertexId, AdjacencyList>,
}

impl Graph {
    /// 创建图，声明顶点数
    ///
    /// 声明数只作为距离初始化和松弛轮数的上界，
    /// 不要求与实际被边引用的顶点数一致
    pub fn new(v_number: usize) -> Self {
        Self {
            v_number,
            adj: IndexMap::new(),
        }
    }

    // ==================== 边操作 ====================

    /// 添加无向边
    ///
    /// 两个端点不存在时自动创建；不校验权重符号
    pub fn add_edge(&mut self, a: VertexId, b: VertexId, weight: f64) {
        self.adj.entry(a).or_default().push(Edge::new(b, weight));
        self.adj.entry(b).or_default().push(Edge::new(a, weight));
    }

    /// 删除 a 与 b 之间的一条边（恰好一对半边）
    ///
    /// 存在平行边时只删除最先插入的那一条
    pub fn remove_edge(&mut self, a: VertexId, b: VertexId) -> Result<()> {
        if !self.adj.contains_key(&b) {
            return Err(Error::VertexNotFound(b));
        }
        let list_a = self.adj.get_mut(&a).ok_or(Error::VertexNotFound(a))?;
        let pos = list_a
            .iter()
            .position(|e| e.connected_vertex() == b)
            .ok_or(Error::EdgeNotFound(a, b))?;
        list_a.remove(pos);

        let list_b = self.adj.get_mut(&b).ok_or(Error::VertexNotFound(b))?;
        let pos = list_b
            .iter()
            .position(|e| e.connected_vertex() == a)
            .ok_or(Error::EdgeNotFound(b, a))?;
        list_b.remove(pos);
        Ok(())
    }

    /// 查找 a 到 b 的第一条半边
    pub fn find_edge(&self, a: VertexId, b: VertexId) -> Option<&Edge> {
        self.adj
            .get(&a)?
            .iter()
            .find(|e| e.connected_vertex() == b)
    }

    /// 判断 a 与 b 之间是否有边
    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.find_edge(a, b).is_some()
    }

    // ==================== 顶点查询 ====================

    /// 判断顶点是否被引用过
    pub fn has_vertex(&self, v: VertexId) -> bool {
        self.adj.contains_key(&v)
    }

    /// 获取顶点的邻居序列（按插入顺序）
    pub fn neighbours(&self, v: VertexId) -> Result<Vec<VertexId>> {
        Ok(self
            .half_edges(v)?
            .iter()
            .map(|e| e.connected_vertex())
            .collect())
    }

    /// 获取顶点的半边列表
    pub fn half_edges(&self, v: VertexId) -> Result<&[Edge]> {
        self.adj
            .get(&v)
            .map(|list| list.as_slice())
            .ok_or(Error::VertexNotFound(v))
    }

    /// 获取顶点的度
    pub fn degree(&self, v: VertexId) -> Result<usize> {
        Ok(self.half_edges(v)?.len())
    }

    /// 获取度序列（降序）
    pub fn degree_sequence(&self) -> Vec<usize> {
        let mut degrees: Vec<usize> = self.adj.values().map(|list| list.len()).collect();
        degrees.sort_unstable_by(|a, b| b.cmp(a));
        degrees
    }

    // ==================== 全局查询 ====================

    /// 获取声明的顶点数（阶）
    pub fn order(&self) -> usize {
        self.v_number
    }

    /// 获取边数（半边总数的一半，向下取整）
    pub fn size(&self) -> usize {
        let half_edges: usize = self.adj.values().map(|list| list.len()).sum();
        half_edges / 2
    }

    /// 实际被引用的顶点数
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// 获取所有顶点（按首次引用顺序）
    pub fn vertices(&self) -> Vec<VertexId> {
        self.adj.keys().copied().collect()
    }

    /// 获取第一个被引用的顶点
    pub fn first_vertex(&self) -> Option<VertexId> {
        self.adj.keys().next().copied()
    }

    /// 遍历邻接表（按首次引用顺序）
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &[Edge])> {
        self.adj.iter().map(|(v, list)| (*v, list.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    #[test]
    fn test_add_edge_symmetry() {
        let mut g = Graph::new(3);
        g.add_edge(v(1), v(2), 2.5);

        assert_eq!(g.neighbours(v(1)).unwrap(), vec![v(2)]);
        assert_eq!(g.neighbours(v(2)).unwrap(), vec![v(1)]);
        assert_eq!(g.find_edge(v(1), v(2)).unwrap().weight(), 2.5);
        assert_eq!(g.find_edge(v(2), v(1)).unwrap().weight(), 2.5);
    }

    #[test]
    fn test_size_counts_parallel_edges() {
        let mut g = Graph::new(2);
        g.add_edge(v(1), v(2), 1.0);
        g.add_edge(v(1), v(2), 3.0);

        assert_eq!(g.size(), 2);
        assert_eq!(g.degree(v(1)).unwrap(), 2);
        assert_eq!(g.degree(v(2)).unwrap(), 2);
    }

    #[test]
    fn test_degree_sum_is_twice_size() {
        let mut g = Graph::new(4);
        g.add_edge(v(1), v(2), 1.0);
        g.add_edge(v(2), v(3), 1.0);
        g.add_edge(v(3), v(4), 1.0);
        g.add_edge(v(4), v(1), 1.0);
        g.add_edge(v(1), v(3), 1.0);

        let degree_sum: usize = g
            .vertices()
            .iter()
            .map(|&u| g.degree(u).unwrap())
            .sum();
        assert_eq!(degree_sum, 2 * g.size());
    }

    #[test]
    fn test_order_independent_of_adjacency() {
        let mut g = Graph::new(10);
        g.add_edge(v(1), v(2), 1.0);

        assert_eq!(g.order(), 10);
        assert_eq!(g.vertex_count(), 2);
    }

    #[test]
    fn test_vertices_insertion_order() {
        let mut g = Graph::new(4);
        g.add_edge(v(3), v(1), 1.0);
        g.add_edge(v(2), v(3), 1.0);

        assert_eq!(g.vertices(), vec![v(3), v(1), v(2)]);
        assert_eq!(g.first_vertex(), Some(v(3)));
    }

    #[test]
    fn test_unknown_vertex() {
        let g = Graph::new(2);
        assert!(matches!(
            g.neighbours(v(9)),
            Err(Error::VertexNotFound(x)) if x == v(9)
        ));
        assert!(matches!(g.degree(v(9)), Err(Error::VertexNotFound(_))));
        assert!(!g.has_vertex(v(9)));
    }

    #[test]
    fn test_remove_edge() {
        let mut g = Graph::new(2);
        g.add_edge(v(1), v(2), 1.0);
        g.add_edge(v(1), v(2), 3.0);

        g.remove_edge(v(1), v(2)).unwrap();
        assert_eq!(g.size(), 1);
        // 删除的是最先插入的半边，留下权重 3.0 的那条
        assert_eq!(g.find_edge(v(1), v(2)).unwrap().weight(), 3.0);
        assert_eq!(g.find_edge(v(2), v(1)).unwrap().weight(), 3.0);

        g.remove_edge(v(1), v(2)).unwrap();
        assert_eq!(g.size(), 0);
        assert!(matches!(
            g.remove_edge(v(1), v(2)),
            Err(Error::EdgeNotFound(_, _))
        ));
    }

    #[test]
    fn test_remove_edge_unknown_vertex() {
        let mut g = Graph::new(2);
        g.add_edge(v(1), v(2), 1.0);
        assert!(matches!(
            g.remove_edge(v(1), v(9)),
            Err(Error::VertexNotFound(_))
        ));
        assert_eq!(g.size(), 1);
    }

    #[test]
    fn test_degree_sequence_descending() {
        let mut g = Graph::new(4);
        g.add_edge(v(1), v(2), 1.0);
        g.add_edge(v(1), v(3), 1.0);
        g.add_edge(v(1), v(4), 1.0);
        g.add_edge(v(2), v(3), 1.0);

        assert_eq!(g.degree_sequence(), vec![3, 2, 2, 1]);
    }

    #[test]
    fn test_zero_weight_edge_allowed() {
        let mut g = Graph::new(2);
        g.add_edge(v(1), v(2), 0.0);
        assert_eq!(g.find_edge(v(1), v(2)).unwrap().weight(), 0.0);
    }
}
