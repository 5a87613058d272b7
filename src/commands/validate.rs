//! # validate 命令实现
//!
//! 加载场景文件，跑查找表完整性校验和整个矩阵的作业码冲突检测，
//! 不做任何文件系统变更。用于在真正生成之前发现配置错误。
//!
//! ## 依赖关系
//! - 使用 `cli/validate.rs` 定义的参数
//! - 使用 `matrix/`, `utils/output.rs`

use crate::cli::validate::ValidateArgs;
use crate::error::{GridsweepError, Result};
use crate::matrix::{expander, AxisSet};
use crate::utils::output;

/// 执行 validate 命令
pub fn execute(args: ValidateArgs) -> Result<()> {
    output::print_header("Scenario Validation");

    if !args.scenarios_file.exists() {
        return Err(GridsweepError::FileNotFound {
            path: args.scenarios_file.display().to_string(),
        });
    }

    let axes = AxisSet::from_yaml_file(&args.scenarios_file)?;
    axes.validate()?;
    output::print_success(&format!(
        "Lookup tables complete for {} island(s) x {} year(s)",
        axes.islands.len(),
        axes.years.len()
    ));

    let specs = expander::expand_all(&axes)?;
    output::print_success(&format!(
        "{} job(s), all Slurm job codes unambiguous",
        specs.len()
    ));

    output::print_done(&format!("'{}' is valid", args.scenarios_file.display()));
    Ok(())
}
