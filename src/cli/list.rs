//! # list 子命令 CLI 定义
//!
//! 打印展开后的作业矩阵，不落盘。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/list.rs`

use clap::Args;
use std::path::PathBuf;

/// list 子命令参数
#[derive(Args, Debug)]
pub struct ListArgs {
    /// YAML with islands, years, scenarios, cleans, island_params, co2_limits
    #[arg(short = 's', long, default_value = "scenarios.yml")]
    pub scenarios_file: PathBuf,
}
