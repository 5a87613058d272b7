//! # 统一错误处理模块
//!
//! 定义 Gridsweep 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Gridsweep 统一错误类型
#[derive(Error, Debug)]
pub enum GridsweepError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to link submit script into job dir: {path}")]
    SymlinkError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 场景文件解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse scenarios file: {path}\nReason: {reason}")]
    ScenarioParseError { path: String, reason: String },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // 作业矩阵配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("No island_params entry for island '{island}'")]
    MissingIslandParam { island: String },

    #[error("No co2_limits entry for island '{island}' in year '{year}'")]
    MissingCo2Limit { year: String, island: String },

    #[error("Job code '{code}' is ambiguous: '{first}' and '{second}' both shorten to it")]
    ShortCodeCollision {
        code: String,
        first: String,
        second: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    #[error("sbatch failed for job '{job}' (code '{code}')\n{stderr}")]
    SubmissionFailed {
        job: String,
        code: String,
        stderr: String,
    },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, GridsweepError>;
