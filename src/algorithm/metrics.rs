//! 距离度量
//!
//! 离心率、半径、直径、中心与紧密中心性，全部建立在
//! Bellman-Ford 距离之上。
//!
//! 非连通图的约定：不可达顶点使离心率为 +∞，不做剔除。
//! 此时半径与直径同为 +∞，中心退化为全体顶点

use crate::algorithm::shortest_path::PathFinder;
use crate::error::Result;
use crate::graph::{Graph, VertexId};

/// 度量引擎
pub struct Metrics<'a> {
    graph: &'a Graph,
}

impl<'a> Metrics<'a> {
    /// 创建度量引擎
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 顶点的离心率：到所有已知顶点的最大最短距离
    pub fn eccentricity(&self, v: VertexId) -> Result<f64> {
        let dist = PathFinder::new(self.graph).bellman_ford(v)?;

        let mut max = 0.0;
        for (_, &d) in dist.iter() {
            if d > max {
                max = d;
            }
        }
        Ok(max)
    }

    /// 半径：最小离心率
    pub fn radius(&self) -> Result<f64> {
        let mut radius = f64::INFINITY;
        for v in self.graph.vertices() {
            let e = self.eccentricity(v)?;
            if e < radius {
                radius = e;
            }
        }
        Ok(radius)
    }

    /// 直径：最大离心率
    pub fn diameter(&self) -> Result<f64> {
        let mut diameter = 0.0;
        for v in self.graph.vertices() {
            let e = self.eccentricity(v)?;
            if e > diameter {
                diameter = e;
            }
        }
        Ok(diameter)
    }

    /// 中心：离心率等于半径的全部顶点
    pub fn center(&self) -> Result<Vec<VertexId>> {
        // 每个顶点只计算一次离心率
        let mut eccentricities = Vec::new();
        for v in self.graph.vertices() {
            eccentricities.push((v, self.eccentricity(v)?));
        }

        let radius = eccentricities
            .iter()
            .map(|&(_, e)| e)
            .fold(f64::INFINITY, f64::min);

        Ok(eccentricities
            .into_iter()
            .filter(|&(_, e)| e == radius)
            .map(|(v, _)| v)
            .collect())
    }

    /// 紧密中心性：(order - 1) / 距离和
    ///
    /// 距离和为零时定义为 0；存在不可达顶点时和为 +∞，结果自然为 0
    pub fn closeness_centrality(&self, v: VertexId) -> Result<f64> {
        let dist = PathFinder::new(self.graph).bellman_ford(v)?;

        let sum: f64 = dist.values().sum();
        if sum == 0.0 {
            return Ok(0.0);
        }
        Ok((self.graph.order() as f64 - 1.0) / sum)
    }
}
