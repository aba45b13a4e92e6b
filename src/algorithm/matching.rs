//! 最大匹配
//!
//! 交替树增广路径启发式：从每个自由顶点做 BFS 生长交替树，
//! 经非匹配边到达另一个自由顶点即得增广路径，
//! 将路径上的间隔边翻转进匹配，直到找不到增广路径为止。
//!
//! 不做花收缩，因此在含奇环的图上不保证真正的最大基数

use crate::graph::{Graph, VertexId};
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet, VecDeque};

/// 增广路径匹配算法
pub struct Matcher<'a> {
    graph: &'a Graph,
}

impl<'a> Matcher<'a> {
    /// 创建算法实例
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 计算匹配，返回顶点对列表（每对只出现一次）
    pub fn maximum_matching(&self) -> Vec<(VertexId, VertexId)> {
        // mate 双向记录配对关系
        let mut mate: IndexMap<VertexId, VertexId> = IndexMap::new();

        while let Some(path) = self.find_augmenting_path(&mate) {
            // 翻转：路径上第 0-1、2-3、… 条边进入匹配
            let mut i = 0;
            while i + 1 < path.len() {
                mate.insert(path[i], path[i + 1]);
                mate.insert(path[i + 1], path[i]);
                i += 2;
            }
        }

        let mut pairs = Vec::new();
        let mut seen: HashSet<VertexId> = HashSet::new();
        for (&a, &b) in mate.iter() {
            if seen.contains(&a) || seen.contains(&b) {
                continue;
            }
            seen.insert(a);
            seen.insert(b);
            pairs.push((a, b));
        }
        pairs
    }

    /// 依插入顺序从每个自由顶点尝试生长交替树
    fn find_augmenting_path(&self, mate: &IndexMap<VertexId, VertexId>) -> Option<Vec<VertexId>> {
        for root in self.graph.vertices() {
            if mate.contains_key(&root) {
                continue;
            }
            if let Some(path) = self.grow_alternating_tree(root, mate) {
                return Some(path);
            }
        }
        None
    }

    /// 以 root 为根做交替 BFS
    ///
    /// 偶数层顶点经非匹配边扩展；到达的顶点若自由即为路径终点，
    /// 否则沿其匹配边进入下一偶数层
    fn grow_alternating_tree(
        &self,
        root: VertexId,
        mate: &IndexMap<VertexId, VertexId>,
    ) -> Option<Vec<VertexId>> {
        let mut parent: HashMap<VertexId, VertexId> = HashMap::new();
        let mut visited: HashSet<VertexId> = HashSet::new();
        let mut queue: VecDeque<VertexId> = VecDeque::new();

        visited.insert(root);
        queue.push_back(root);

        while let Some(current) = queue.pop_front() {
            for edge in self.graph.half_edges(current).unwrap_or(&[]) {
                let u = edge.connected_vertex();
                if visited.contains(&u) {
                    continue;
                }
                visited.insert(u);
                parent.insert(u, current);

                match mate.get(&u) {
                    None => return self.backtrack(root, u, &parent),
                    Some(&partner) => {
                        if !visited.contains(&partner) {
                            visited.insert(partner);
                            parent.insert(partner, u);
                            queue.push_back(partner);
                        }
                    }
                }
            }
        }

        None
    }

    /// 沿父结点指针回溯，得到 root 到终点的增广路径
    fn backtrack(
        &self,
        root: VertexId,
        end: VertexId,
        parent: &HashMap<VertexId, VertexId>,
    ) -> Option<Vec<VertexId>> {
        let mut path = vec![end];
        let mut current = end;
        while current != root {
            current = *parent.get(&current)?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    /// 匹配合法性：每个顶点至多出现一次，且每对之间确有边
    fn assert_valid_matching(graph: &Graph, pairs: &[(VertexId, VertexId)]) {
        let mut seen = HashSet::new();
        for &(a, b) in pairs {
            assert!(seen.insert(a), "顶点 {} 重复匹配", a);
            assert!(seen.insert(b), "顶点 {} 重复匹配", b);
            assert!(graph.has_edge(a, b), "配对 {} - {} 之间没有边", a, b);
        }
    }

    #[test]
    fn test_matching_single_edge() {
        let mut g = Graph::new(2);
        g.add_edge(v(1), v(2), 1.0);

        let pairs = Matcher::new(&g).maximum_matching();
        assert_eq!(pairs, vec![(v(1), v(2))]);
    }

    #[test]
    fn test_matching_even_path_is_perfect() {
        // 1 - 2 - 3 - 4：完美匹配 {1-2, 3-4}
        let mut g = Graph::new(4);
        g.add_edge(v(1), v(2), 1.0);
        g.add_edge(v(2), v(3), 1.0);
        g.add_edge(v(3), v(4), 1.0);

        let pairs = Matcher::new(&g).maximum_matching();
        assert_eq!(pairs.len(), 2);
        assert_valid_matching(&g, &pairs);
    }

    #[test]
    fn test_matching_augments_greedy_start() {
        // 先插入 2-3，贪心起手会先配上 2-3，
        // 之后必须沿 1-2-3-4 增广才能到完美匹配
        let mut g = Graph::new(4);
        g.add_edge(v(2), v(3), 1.0);
        g.add_edge(v(1), v(2), 1.0);
        g.add_edge(v(3), v(4), 1.0);

        let pairs = Matcher::new(&g).maximum_matching();
        assert_eq!(pairs.len(), 2);
        assert_valid_matching(&g, &pairs);
    }

    #[test]
    fn test_matching_odd_path() {
        // 1 - 2 - 3：最大匹配只有一条边
        let mut g = Graph::new(3);
        g.add_edge(v(1), v(2), 1.0);
        g.add_edge(v(2), v(3), 1.0);

        let pairs = Matcher::new(&g).maximum_matching();
        assert_eq!(pairs.len(), 1);
        assert_valid_matching(&g, &pairs);
    }

    #[test]
    fn test_matching_star() {
        let mut g = Graph::new(4);
        g.add_edge(v(1), v(2), 1.0);
        g.add_edge(v(1), v(3), 1.0);
        g.add_edge(v(1), v(4), 1.0);

        let pairs = Matcher::new(&g).maximum_matching();
        assert_eq!(pairs.len(), 1);
        assert_valid_matching(&g, &pairs);
    }

    #[test]
    fn test_matching_triangle() {
        let mut g = Graph::new(3);
        g.add_edge(v(1), v(2), 1.0);
        g.add_edge(v(2), v(3), 1.0);
        g.add_edge(v(1), v(3), 1.0);

        let pairs = Matcher::new(&g).maximum_matching();
        assert_eq!(pairs.len(), 1);
        assert_valid_matching(&g, &pairs);
    }

    #[test]
    fn test_matching_two_components() {
        let mut g = Graph::new(4);
        g.add_edge(v(1), v(2), 1.0);
        g.add_edge(v(3), v(4), 1.0);

        let pairs = Matcher::new(&g).maximum_matching();
        assert_eq!(pairs.len(), 2);
        assert_valid_matching(&g, &pairs);
    }

    #[test]
    fn test_matching_empty_graph() {
        let g = Graph::new(0);
        assert!(Matcher::new(&g).maximum_matching().is_empty());
    }
}
