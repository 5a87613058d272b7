//! # 作业规格构建
//!
//! 从矩阵中的单个元组 (岛屿, 年份, 场景, 清洁标志) 派生出完整解析的
//! 作业规格：目录名、≤9 字符的 Slurm 作业码、config.json 负载。
//! 纯函数，无副作用，相同输入总是产生相同输出。
//!
//! ## 依赖关系
//! - 被 `matrix/expander.rs` 和 `commands/` 使用
//! - 使用 `matrix/axes.rs` 做查找表解析

use crate::error::Result;
use crate::matrix::axes::AxisSet;

use serde::Serialize;

/// config.json 负载，字段名与下游求解器约定保持一致
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobConfig {
    pub island: String,
    pub year: String,
    pub scenario: String,
    pub clean: String,

    /// 2035 清洁场景的减排政策是否生效
    #[serde(rename = "CO235reduction")]
    pub co2_35_reduction: bool,

    /// 政策生效时为该岛的 BAU 基准排放量，否则为 0
    #[serde(rename = "BAUCO2emissions")]
    pub bau_co2_emissions: f64,

    /// 该岛该年的 CO2 排放上限
    #[serde(rename = "CO2_limit")]
    pub co2_limit: f64,
}

/// 单个作业的完整规格
///
/// `name` 由完整元组拼接而成，在整个矩阵内全局唯一；
/// `short_code` 是有损截断，唯一性由展开器校验而非假设。
#[derive(Debug, Clone, PartialEq)]
pub struct JobSpec {
    pub island: String,
    pub year: String,
    pub scenario: String,
    pub clean: String,

    /// 作业目录名: "{scenario}_{island}_{year}_{clean}"
    pub name: String,

    /// ≤9 字符的 Slurm 作业名
    pub short_code: String,

    pub config: JobConfig,
}

impl JobSpec {
    /// 从一个矩阵元组构建作业规格
    ///
    /// 查找表缺项时返回 `MissingIslandParam` / `MissingCo2Limit`，
    /// 即使调用方没有先跑过 `AxisSet::validate`。
    pub fn build(
        island: &str,
        year: &str,
        scenario: &str,
        clean: &str,
        axes: &AxisSet,
    ) -> Result<Self> {
        let bau_val = axes.island_param(island)?;
        let co2_limit = axes.co2_limit(year, island)?;

        let active = reduction_active(year, clean);

        let config = JobConfig {
            island: island.to_string(),
            year: year.to_string(),
            scenario: scenario.to_string(),
            clean: clean.to_string(),
            co2_35_reduction: active,
            bau_co2_emissions: if active { bau_val } else { 0.0 },
            co2_limit,
        };

        Ok(JobSpec {
            island: island.to_string(),
            year: year.to_string(),
            scenario: scenario.to_string(),
            clean: clean.to_string(),
            name: format!("{}_{}_{}_{}", scenario, island, year, clean),
            short_code: short_code(scenario, island, year, clean),
            config,
        })
    }
}

/// 减排政策规则：字面匹配 year=="2035" 且 clean=="clean"
///
/// 这是上游约定的硬编码规则，不是通用公式；如需按"末年+清洁场景"
/// 推广，在这里换成可配置实现。
fn reduction_active(year: &str, clean: &str) -> bool {
    year == "2035" && clean == "clean"
}

/// 生成 ≤9 字符作业码:
/// upper(scenario[..3]) + upper(island[..2]) + year[-2..] + upper(clean[..1])
fn short_code(scenario: &str, island: &str, year: &str, clean: &str) -> String {
    format!(
        "{}{}{}{}",
        prefix_upper(scenario, 3),
        prefix_upper(island, 2),
        year_suffix(year),
        prefix_upper(clean, 1),
    )
}

/// 取前 n 个字符并转大写（短于 n 时取整个字符串）
fn prefix_upper(s: &str, n: usize) -> String {
    s.chars().take(n).collect::<String>().to_uppercase()
}

/// 取年份的后两个字符
fn year_suffix(year: &str) -> String {
    let chars: Vec<char> = year.chars().collect();
    let start = chars.len().saturating_sub(2);
    chars[start..].iter().collect()
}
