//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `generate`: 展开作业矩阵，生成作业目录，可选提交到 Slurm
//! - `validate`: 只校验场景文件（查找表完整性 + 作业码冲突）
//! - `list`: 打印展开后的矩阵，不落盘
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: generate, validate, list

pub mod generate;
pub mod list;
pub mod validate;

use clap::{Parser, Subcommand};

/// Gridsweep - 岛屿能源场景作业矩阵生成器
#[derive(Parser)]
#[command(name = "gridsweep")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Generate island energy scenario job matrices and submit them to Slurm", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Expand the scenario matrix into job directories and optionally submit them
    Generate(generate::GenerateArgs),

    /// Validate the scenarios file without touching the filesystem
    Validate(validate::ValidateArgs),

    /// Print the expanded job matrix without materializing anything
    List(list::ListArgs),
}
