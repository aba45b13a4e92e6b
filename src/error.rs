//! 错误类型定义

use crate::graph::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(VertexId),

    #[error("边不存在: {0} - {1}")]
    EdgeNotFound(VertexId, VertexId),

    #[error("检测到负权环，无法计算最短路径")]
    NegativeCycleDetected,

    #[error("图不连通，生成树不完整")]
    GraphNotConnected,

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("内部错误: {0}")]
    InternalError(String),
}
