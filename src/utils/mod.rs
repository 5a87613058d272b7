//! # 工具模块
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `commands/` 使用
//! - 子模块: output (终端输出), progress (进度条), slurm (sbatch 调用)

pub mod output;
pub mod progress;
pub mod slurm;
