//! # list 命令实现
//!
//! 打印展开后的作业矩阵（目录名、作业码、CO2 上限），
//! 便于在真正生成之前人工检查，不落盘。
//!
//! ## 依赖关系
//! - 使用 `cli/list.rs` 定义的参数
//! - 使用 `matrix/`, `utils/output.rs`

use crate::cli::list::ListArgs;
use crate::error::{GridsweepError, Result};
use crate::matrix::{expander, AxisSet};
use crate::utils::output;

/// 执行 list 命令
pub fn execute(args: ListArgs) -> Result<()> {
    output::print_header("Job Matrix");

    if !args.scenarios_file.exists() {
        return Err(GridsweepError::FileNotFound {
            path: args.scenarios_file.display().to_string(),
        });
    }

    let axes = AxisSet::from_yaml_file(&args.scenarios_file)?;
    axes.validate()?;

    let specs = expander::expand_all(&axes)?;
    for spec in &specs {
        output::print_job(&spec.name, &spec.short_code);
        println!(
            "      CO2_limit={}  CO235reduction={}",
            spec.config.co2_limit, spec.config.co2_35_reduction
        );
    }

    output::print_separator();
    output::print_done(&format!("{} job(s) in matrix", specs.len()));
    Ok(())
}
