//! 数据导入与转换
//!
//! 支持两种图文件格式：
//! - 文本：首行为顶点数，随后每行 "a b w" 描述一条边
//! - JSON：nodes 携带标签，edges 以节点下标（从 1 起）引用端点并携带权重
//!
//! 另外提供两种格式的互转和随机图生成

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// JSON 图文档
#[derive(Debug, Serialize, Deserialize)]
pub struct GraphDocument {
    pub graph: GraphBody,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GraphBody {
    pub nodes: Vec<NodeSpec>,
    pub edges: Vec<EdgeSpec>,
}

/// JSON 节点：标签即顶点编号
#[derive(Debug, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: String,
    pub label: String,
}

/// JSON 边：from/to 是节点列表的下标（从 1 起）
#[derive(Debug, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

// ==================== 文本格式 ====================

/// 从文本内容解析图
pub fn from_text_str(text: &str) -> Result<Graph> {
    let mut lines = text.lines();
    let header = lines
        .next()
        .ok_or_else(|| Error::ParseError("文件为空".to_string()))?;
    let v_number: usize = header
        .trim()
        .parse()
        .map_err(|_| Error::ParseError(format!("顶点数无效: {}", header.trim())))?;

    let mut graph = Graph::new(v_number);
    for (index, line) in lines.enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(Error::ParseError(format!(
                "第 {} 行格式错误: {}",
                index + 2,
                line
            )));
        }
        let a: u64 = parts[0]
            .parse()
            .map_err(|_| Error::ParseError(format!("顶点编号无效: {}", parts[0])))?;
        let b: u64 = parts[1]
            .parse()
            .map_err(|_| Error::ParseError(format!("顶点编号无效: {}", parts[1])))?;
        let w: f64 = parts[2]
            .parse()
            .map_err(|_| Error::ParseError(format!("权重无效: {}", parts[2])))?;
        graph.add_edge(VertexId::new(a), VertexId::new(b), w);
    }

    Ok(graph)
}

/// 从文本文件加载图
pub fn load_text<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let graph = from_text_str(&fs::read_to_string(path)?)?;
    info!("加载文本图: {} 顶点 {} 条边", graph.order(), graph.size());
    Ok(graph)
}

/// 输出文本内容（每条无向边一行，平行边各自保留）
pub fn to_text_string(graph: &Graph) -> String {
    let mut out = format!("{}\n", graph.order());
    for (a, edges) in graph.iter() {
        for edge in edges {
            let b = edge.connected_vertex();
            if a < b {
                out.push_str(&format!("{} {} {}\n", a, b, edge.weight()));
            }
        }
    }
    out
}

// ==================== JSON 格式 ====================

/// 从 JSON 内容解析图
pub fn from_json_str(json: &str) -> Result<Graph> {
    let doc: GraphDocument = serde_json::from_str(json)
        .map_err(|e| Error::ParseError(format!("JSON 解析失败: {}", e)))?;

    let nodes = &doc.graph.nodes;
    let mut graph = Graph::new(nodes.len());
    for edge in &doc.graph.edges {
        let a = vertex_at(nodes, edge.from)?;
        let b = vertex_at(nodes, edge.to)?;
        graph.add_edge(a, b, edge.weight);
    }

    Ok(graph)
}

/// 按下标（从 1 起）取节点，标签解析为顶点编号
fn vertex_at(nodes: &[NodeSpec], index: usize) -> Result<VertexId> {
    let node = index
        .checked_sub(1)
        .and_then(|i| nodes.get(i))
        .ok_or_else(|| Error::ParseError(format!("边引用了不存在的节点下标: {}", index)))?;
    node.label
        .trim()
        .parse::<u64>()
        .map(VertexId::new)
        .map_err(|_| Error::ParseError(format!("节点标签不是顶点编号: {}", node.label)))
}

/// 从 JSON 文件加载图
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let graph = from_json_str(&fs::read_to_string(path)?)?;
    info!("加载 JSON 图: {} 顶点 {} 条边", graph.order(), graph.size());
    Ok(graph)
}

/// 输出 JSON 文档内容
pub fn to_json_string(graph: &Graph) -> Result<String> {
    let vertices = graph.vertices();
    let nodes: Vec<NodeSpec> = vertices
        .iter()
        .enumerate()
        .map(|(i, v)| NodeSpec {
            id: (i + 1).to_string(),
            label: v.to_string(),
        })
        .collect();

    let mut edges = Vec::new();
    for (a, list) in graph.iter() {
        for edge in list {
            let b = edge.connected_vertex();
            if a < b {
                let from = vertices.iter().position(|&x| x == a);
                let to = vertices.iter().position(|&x| x == b);
                if let (Some(from), Some(to)) = (from, to) {
                    edges.push(EdgeSpec {
                        from: from + 1,
                        to: to + 1,
                        weight: edge.weight(),
                    });
                }
            }
        }
    }

    let doc = GraphDocument {
        graph: GraphBody { nodes, edges },
    };
    serde_json::to_string_pretty(&doc)
        .map_err(|e| Error::InternalError(format!("JSON 序列化失败: {}", e)))
}

// ==================== 加载入口与互转 ====================

/// 按扩展名加载图文件（.json 之外都按文本处理）
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        _ => load_text(path),
    }
}

/// JSON 文件转文本文件
pub fn json_to_text<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<()> {
    let graph = load_json(src)?;
    fs::write(&dst, to_text_string(&graph))?;
    info!("已写出文本图: {}", dst.as_ref().display());
    Ok(())
}

/// 文本文件转 JSON 文件
pub fn text_to_json<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<()> {
    let graph = load_text(src)?;
    fs::write(&dst, to_json_string(&graph)?)?;
    info!("已写出 JSON 图: {}", dst.as_ref().display());
    Ok(())
}

// ==================== 随机图生成 ====================

/// 生成随机图文本：n 个顶点，每对顶点以概率 p 连边，权重取 1..=100 的整数
pub fn generate_text<R: Rng>(n: usize, p: f64, rng: &mut R) -> String {
    let mut out = format!("{}\n", n);
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen::<f64>() < p {
                out.push_str(&format!("{} {} {}\n", i, j, rng.gen_range(1..=100)));
            }
        }
    }
    out
}
