//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `matrix/`, `utils/`
//! - 子模块: generate, validate, list

pub mod generate;
pub mod list;
pub mod validate;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Generate(args) => generate::execute(args),
        Commands::Validate(args) => validate::execute(args),
        Commands::List(args) => list::execute(args),
    }
}
