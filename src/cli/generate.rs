//! # generate 子命令 CLI 定义
//!
//! 展开作业矩阵并生成作业目录，可选提交到 Slurm。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/generate.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Slurm 日志路径布局
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum LogLayout {
    /// Per-job logs under <job_dir>/slurm_logs/%x.{out,err}
    JobDir,
    /// All logs collected under <output_root>/slurm_logs/<name>.{out,err}
    Shared,
}

/// config.json 字段集
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ConfigFields {
    /// The seven solver-facing fields only
    Standard,
    /// Additionally record the job name and Slurm job code
    Extended,
}

/// generate 子命令参数
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// YAML with islands, years, scenarios, cleans, island_params, co2_limits
    #[arg(short = 's', long, default_value = "scenarios.yml")]
    pub scenarios_file: PathBuf,

    /// Slurm submit script template to link into each job directory
    #[arg(short = 'b', long, default_value = "submit_test.sb")]
    pub submit_script: PathBuf,

    /// Root directory for per-scenario job folders
    #[arg(short = 'o', long, default_value = "jobs")]
    pub output_root: PathBuf,

    // ─────────────────────────────────────────────────────────────
    // Layout options
    // ─────────────────────────────────────────────────────────────
    /// Where Slurm stdout/stderr logs go
    #[arg(long, value_enum, default_value = "job-dir")]
    pub log_layout: LogLayout,

    /// Which fields to write into config.json
    #[arg(long, value_enum, default_value = "standard")]
    pub config_fields: ConfigFields,

    // ─────────────────────────────────────────────────────────────
    // Execution control
    // ─────────────────────────────────────────────────────────────
    /// Call sbatch on each generated job directory
    #[arg(long, default_value_t = false)]
    pub submit: bool,
}
