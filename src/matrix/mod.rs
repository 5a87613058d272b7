//! # 作业矩阵核心模块
//!
//! 把声明式的场景描述（四个枚举轴 + 查找表）展开成一组命名的、
//! 可提交的作业规格。纯逻辑，不做任何文件系统或进程 I/O。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 子模块: axes (轴集合), spec (作业规格), expander (矩阵展开)

pub mod axes;
pub mod expander;
pub mod spec;

pub use axes::AxisSet;
pub use expander::{expand, expand_all};
pub use spec::{JobConfig, JobSpec};
