//! # Gridsweep - 岛屿能源场景作业矩阵生成器
//!
//! 把声明式的 YAML 场景描述展开成一组命名的 Slurm 作业目录，
//! 作业码冲突在提交之前强制检出。
//!
//! ## 子命令
//! - `generate` - 展开矩阵、生成作业目录、可选 sbatch 提交
//! - `validate` - 只校验场景文件（查找表 + 作业码冲突）
//! - `list`     - 打印展开后的矩阵，不落盘
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── matrix/ (轴集合、作业规格、矩阵展开)
//!   ├── utils/      (终端输出、进度条、sbatch 调用)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod matrix;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
