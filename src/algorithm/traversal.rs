//! 遍历算法
//!
//! DFS/BFS 访问序列、可达性判定、未访问顶点集与环检测。
//! 所有遍历都在调用内部持有自己的 visited 集合，
//! 访问顺序由邻接表的插入顺序决定

use crate::error::Result;
use crate::graph::{Graph, VertexId};
use std::collections::{HashSet, VecDeque};

/// 遍历器
pub struct Traversal<'a> {
    graph: &'a Graph,
}

impl<'a> Traversal<'a> {
    /// 创建遍历器
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// DFS 访问序列（显式栈实现）
    ///
    /// 邻居按邻接表顺序展开；不可达顶点不出现在结果中
    pub fn depth_first(&self, start: VertexId) -> Result<Vec<VertexId>> {
        self.graph.half_edges(start)?;

        let mut visited = HashSet::new();
        let mut sequence = Vec::new();
        let mut stack = vec![start];

        while let Some(v) = stack.pop() {
            if visited.contains(&v) {
                continue;
            }
            visited.insert(v);
            sequence.push(v);

            // 反向压栈，使邻接表靠前的邻居先被访问
            for edge in self.graph.half_edges(v)?.iter().rev() {
                let u = edge.connected_vertex();
                if !visited.contains(&u) {
                    stack.push(u);
                }
            }
        }

        Ok(sequence)
    }

    /// BFS 层序访问序列
    pub fn breadth_first(&self, start: VertexId) -> Result<Vec<VertexId>> {
        self.graph.half_edges(start)?;

        let mut visited = HashSet::new();
        let mut sequence = Vec::new();
        let mut queue = VecDeque::new();

        visited.insert(start);
        queue.push_back(start);

        while let Some(v) = queue.pop_front() {
            sequence.push(v);
            for edge in self.graph.half_edges(v)? {
                let u = edge.connected_vertex();
                if !visited.contains(&u) {
                    visited.insert(u);
                    queue.push_back(u);
                }
            }
        }

        Ok(sequence)
    }

    /// 判断 dest 是否从 src 可达（BFS，找到即返回）
    pub fn reachable(&self, src: VertexId, dest: VertexId) -> Result<bool> {
        self.graph.half_edges(dest)?;
        if src == dest {
            self.graph.half_edges(src)?;
            return Ok(true);
        }

        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();

        visited.insert(src);
        queue.push_back(src);

        while let Some(v) = queue.pop_front() {
            for edge in self.graph.half_edges(v)? {
                let u = edge.connected_vertex();
                if u == dest {
                    return Ok(true);
                }
                if !visited.contains(&u) {
                    visited.insert(u);
                    queue.push_back(u);
                }
            }
        }

        Ok(false)
    }

    /// 从 start 的 DFS 到不了的顶点（按插入顺序）
    ///
    /// 结果非空说明图不连通
    pub fn unvisited_from(&self, start: VertexId) -> Result<Vec<VertexId>> {
        let reached: HashSet<VertexId> = self.depth_first(start)?.into_iter().collect();
        Ok(self
            .graph
            .vertices()
            .into_iter()
            .filter(|v| !reached.contains(v))
            .collect())
    }

    /// 判断图中是否存在环
    ///
    /// 对每个未访问顶点做带父结点记录的 DFS，
    /// 遇到已访问且不是直接父结点的邻居即为环。O(V+E)
    pub fn has_cycle(&self) -> bool {
        let mut visited: HashSet<VertexId> = HashSet::new();

        for root in self.graph.vertices() {
            if visited.contains(&root) {
                continue;
            }
            // 根以自身为父结点启动
            let mut stack = vec![(root, root)];

            while let Some((v, parent)) = stack.pop() {
                if visited.contains(&v) {
                    continue;
                }
                visited.insert(v);

                for edge in self.graph.half_edges(v).unwrap_or(&[]) {
                    let u = edge.connected_vertex();
                    if !visited.contains(&u) {
                        stack.push((u, v));
                    } else if u != parent {
                        return true;
                    }
                }
            }
        }

        false
    }
}
