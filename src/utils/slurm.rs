//! # Slurm 提交工具
//!
//! 在作业目录内调用 sbatch 提交单个作业。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 使用
//! - 无外部模块依赖

use crate::error::{GridsweepError, Result};

use std::path::{Path, PathBuf};
use std::process::Command;

/// 一次 sbatch 调用的参数
///
/// 日志路径为 `None` 时不传 `--output`/`--error`，
/// 由提交脚本内部的 #SBATCH 指令决定。
pub struct SbatchRequest {
    /// ≤9 字符的 Slurm 作业名
    pub job_name: String,
    /// 作业目录内的脚本文件名
    pub script: String,
    pub stdout_path: Option<PathBuf>,
    pub stderr_path: Option<PathBuf>,
}

/// 以作业目录为工作目录执行 sbatch
///
/// 非零退出是整个运行的致命错误（已生成的目录保留在磁盘上，不回滚）。
/// 成功时返回 sbatch 的 stdout（"Submitted batch job N"）。
pub fn submit(job_dir: &Path, job_name_full: &str, req: &SbatchRequest) -> Result<String> {
    let mut cmd = Command::new("sbatch");
    cmd.arg("--job-name").arg(&req.job_name);

    if let Some(out) = &req.stdout_path {
        cmd.arg(format!("--output={}", out.display()));
    }
    if let Some(err) = &req.stderr_path {
        cmd.arg(format!("--error={}", err.display()));
    }

    let output = cmd
        .arg(&req.script)
        .current_dir(job_dir)
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GridsweepError::CommandNotFound {
                    command: "sbatch".to_string(),
                }
            } else {
                GridsweepError::SubmissionFailed {
                    job: job_name_full.to_string(),
                    code: req.job_name.clone(),
                    stderr: e.to_string(),
                }
            }
        })?;

    if !output.status.success() {
        return Err(GridsweepError::SubmissionFailed {
            job: job_name_full.to_string(),
            code: req.job_name.clone(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
