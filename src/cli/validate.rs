//! # validate 子命令 CLI 定义
//!
//! 只校验场景文件，不做任何文件系统变更。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/validate.rs`

use clap::Args;
use std::path::PathBuf;

/// validate 子命令参数
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// YAML with islands, years, scenarios, cleans, island_params, co2_limits
    #[arg(short = 's', long, default_value = "scenarios.yml")]
    pub scenarios_file: PathBuf,
}
