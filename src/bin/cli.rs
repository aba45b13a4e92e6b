//! MetricGraph 命令行工具
//!
//! 读取文本 / JSON 图文件，输出结构与度量分析报告

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use metricgraph::algorithm::{GreedyCover, Matcher, Metrics, PathFinder, Prim, Traversal};
use metricgraph::import;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "metricgraph-cli")]
#[command(about = "MetricGraph 加权图分析工具", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 输出图的度量分析报告
    Analyze {
        /// 图文件（文本或 JSON）
        file: PathBuf,
    },
    /// 输出环检测、顶点覆盖与最大匹配报告
    Structure {
        /// 图文件（文本或 JSON）
        file: PathBuf,
    },
    /// 计算最小生成树并写出边表文件
    Mst {
        /// 图文件（文本或 JSON）
        file: PathBuf,
        /// 输出文件，缺省为 <输入名>MST.txt
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// 文本与 JSON 格式互转（按输入扩展名决定方向）
    Convert {
        /// 输入文件
        file: PathBuf,
        /// 输出文件
        #[arg(short, long)]
        output: PathBuf,
    },
    /// 生成随机图文本文件
    Generate {
        /// 顶点数
        #[arg(short = 'n', long)]
        vertices: usize,
        /// 每对顶点的连边概率
        #[arg(short, long)]
        probability: f64,
        /// 输出文件
        #[arg(short, long)]
        output: PathBuf,
        /// 随机种子（缺省用系统熵）
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze { file } => analyze(&file),
        Command::Structure { file } => structure(&file),
        Command::Mst { file, output } => mst(&file, output),
        Command::Convert { file, output } => convert(&file, &output),
        Command::Generate {
            vertices,
            probability,
            output,
            seed,
        } => generate(vertices, probability, &output, seed),
    }
}

fn analyze(file: &Path) -> Result<()> {
    let graph = import::load_graph(file)?;
    let vertices = graph.vertices();

    println!("{}", "基本信息".bold());
    println!("阶（声明顶点数）: {}", graph.order());
    println!("边数: {}", graph.size());

    println!("\n{}", "邻居".bold());
    for &v in &vertices {
        let names: Vec<String> = graph
            .neighbours(v)?
            .iter()
            .map(|u| u.to_string())
            .collect();
        println!("顶点 {} 的邻居: [{}]", v, names.join(", "));
    }

    println!("\n{}", "度数".bold());
    for &v in &vertices {
        println!("顶点 {} 的度: {}", v, graph.degree(v)?);
    }
    let seq: Vec<String> = graph
        .degree_sequence()
        .iter()
        .map(|d| d.to_string())
        .collect();
    println!("度序列: [{}]", seq.join(", "));

    let metrics = Metrics::new(&graph);
    println!("\n{}", "离心率".bold());
    for &v in &vertices {
        println!("顶点 {} 的离心率: {}", v, metrics.eccentricity(v)?);
    }
    println!("半径: {}", metrics.radius()?);
    let center: Vec<String> = metrics.center()?.iter().map(|c| c.to_string()).collect();
    println!("中心: [{}]", center.join(", "));
    println!("直径: {}", metrics.diameter()?);

    if let Some(first) = graph.first_vertex() {
        let traversal = Traversal::new(&graph);
        let dfs: Vec<String> = traversal
            .depth_first(first)?
            .iter()
            .map(|u| u.to_string())
            .collect();
        println!("\n{}", "遍历".bold());
        println!("从 {} 出发的 DFS: [{}]", first, dfs.join(", "));
        let unvisited: Vec<String> = traversal
            .unvisited_from(first)?
            .iter()
            .map(|u| u.to_string())
            .collect();
        println!("DFS 未到达: [{}]", unvisited.join(", "));

        let finder = PathFinder::new(&graph);
        let dist = finder.bellman_ford(first)?;
        println!("\n{}", "最短距离".bold());
        for &v in &vertices {
            println!("{} 到 {} 的距离: {}", first, v, dist[&v]);
        }

        println!("\n{}", "最短路径".bold());
        for &v in &vertices {
            match finder.minimum_path(first, v)? {
                Some(path) => {
                    let hops: Vec<String> =
                        path.vertices.iter().map(|u| u.to_string()).collect();
                    println!(
                        "{} 到 {} 的最短路径: {} (权重 {})",
                        first,
                        v,
                        hops.join(" -> "),
                        path.total_weight
                    );
                }
                None => println!("{} 到 {} 不可达", first, v),
            }
        }
    }

    println!("\n{}", "紧密中心性".bold());
    for &v in &vertices {
        println!("顶点 {}: {}", v, metrics.closeness_centrality(v)?);
    }

    Ok(())
}

fn structure(file: &Path) -> Result<()> {
    let graph = import::load_graph(file)?;

    println!("{}", "环检测".bold());
    println!("存在环: {}", Traversal::new(&graph).has_cycle());

    println!("\n{}", "顶点覆盖（贪心启发式）".bold());
    let cover = GreedyCover::new(&graph).minimum_vertex_cover();
    let names: Vec<String> = cover.iter().map(|v| v.to_string()).collect();
    println!("覆盖集: [{}]，共 {} 个顶点", names.join(", "), cover.len());

    println!("\n{}", "最大匹配（增广路径启发式）".bold());
    let pairs = Matcher::new(&graph).maximum_matching();
    for (a, b) in &pairs {
        println!("{} - {}", a, b);
    }
    println!("共 {} 对", pairs.len());

    Ok(())
}

fn mst(file: &Path, output: Option<PathBuf>) -> Result<()> {
    let graph = import::load_graph(file)?;
    let tree = Prim::new(&graph).minimum_spanning_tree()?;

    let output = output.unwrap_or_else(|| {
        let stem = file
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "graph".to_string());
        file.with_file_name(format!("{}MST.txt", stem))
    });
    std::fs::write(&output, tree.to_text())?;

    println!("{}", "最小生成树".bold());
    println!("总权重: {}", tree.total_weight);
    for edge in &tree.edges {
        println!("{} {} {}", edge.u, edge.v, edge.weight);
    }
    println!("已写出: {}", output.display());

    Ok(())
}

fn convert(file: &Path, output: &Path) -> Result<()> {
    match file.extension().and_then(|e| e.to_str()) {
        Some("json") => import::json_to_text(file, output)?,
        _ => import::text_to_json(file, output)?,
    }
    println!("已写出: {}", output.display());
    Ok(())
}

fn generate(vertices: usize, probability: f64, output: &Path, seed: Option<u64>) -> Result<()> {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let text = match seed {
        Some(seed) => import::generate_text(vertices, probability, &mut StdRng::seed_from_u64(seed)),
        None => import::generate_text(vertices, probability, &mut rand::thread_rng()),
    };
    std::fs::write(output, &text)?;
    println!("已生成随机图: {}", output.display());
    Ok(())
}
