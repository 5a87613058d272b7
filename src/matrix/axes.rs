//! # 轴集合数据模型
//!
//! 作业矩阵的唯一数据来源：四个有序枚举轴（岛屿、年份、场景、清洁标志）
//! 加上两张查找表（岛屿基准排放、逐年逐岛 CO2 上限）。
//! 从 YAML 场景文件反序列化，加载后不可变。
//!
//! ## 依赖关系
//! - 被 `matrix/spec.rs` 和 `matrix/expander.rs` 使用
//! - 使用 `serde` / `serde_yaml`

use crate::error::{GridsweepError, Result};

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// 枚举轴集合 + 查找表
///
/// 轴列表的顺序有意义：它决定矩阵展开与输出的顺序。
/// 重复条目不会被拒绝（只是浪费），缺失的查找表条目是硬配置错误。
#[derive(Debug, Clone, Deserialize)]
pub struct AxisSet {
    /// 岛屿名称（最外层循环轴）
    pub islands: Vec<String>,

    /// 年份，作为字符串比较（如 "2035"）
    pub years: Vec<String>,

    /// 场景名称
    pub scenarios: Vec<String>,

    /// 清洁标志（最内层循环轴，如 "clean" / "dirty"）
    pub cleans: Vec<String>,

    /// 岛屿 -> BAU（business-as-usual）基准排放量
    pub island_params: HashMap<String, f64>,

    /// 年份 -> 岛屿 -> CO2 排放上限
    pub co2_limits: HashMap<String, HashMap<String, f64>>,
}

impl AxisSet {
    /// 从 YAML 场景文件加载
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| GridsweepError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        serde_yaml::from_str(&text).map_err(|e| GridsweepError::ScenarioParseError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// 校验查找表完整性（fail-fast，在创建任何作业目录之前调用）
    ///
    /// 每个岛屿必须在 `island_params` 中有条目；
    /// 每个 (年份, 岛屿) 组合必须在 `co2_limits` 中有条目。
    pub fn validate(&self) -> Result<()> {
        for island in &self.islands {
            self.island_param(island)?;
            for year in &self.years {
                self.co2_limit(year, island)?;
            }
        }
        Ok(())
    }

    /// 查找岛屿基准排放量
    pub fn island_param(&self, island: &str) -> Result<f64> {
        self.island_params
            .get(island)
            .copied()
            .ok_or_else(|| GridsweepError::MissingIslandParam {
                island: island.to_string(),
            })
    }

    /// 查找某年某岛的 CO2 上限
    pub fn co2_limit(&self, year: &str, island: &str) -> Result<f64> {
        self.co2_limits
            .get(year)
            .and_then(|year_map| year_map.get(island))
            .copied()
            .ok_or_else(|| GridsweepError::MissingCo2Limit {
                year: year.to_string(),
                island: island.to_string(),
            })
    }

    /// 矩阵总元组数 = 四轴长度之积
    pub fn matrix_len(&self) -> usize {
        self.islands.len() * self.years.len() * self.scenarios.len() * self.cleans.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_yaml() -> &'static str {
        r#"
islands: [Oahu, Maui]
years: ["2030", "2035"]
scenarios: [baseline]
cleans: [clean, dirty]
island_params:
  Oahu: 120.5
  Maui: 61.2
co2_limits:
  "2030":
    Oahu: 55.0
    Maui: 28.0
  "2035":
    Oahu: 40.0
    Maui: 20.0
"#
    }

    fn load(yaml: &str) -> AxisSet {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_yaml_roundtrip_preserves_axis_order() {
        let axes = load(sample_yaml());
        assert_eq!(axes.islands, vec!["Oahu", "Maui"]);
        assert_eq!(axes.years, vec!["2030", "2035"]);
        assert_eq!(axes.cleans, vec!["clean", "dirty"]);
        assert_eq!(axes.matrix_len(), 2 * 2 * 1 * 2);
    }

    #[test]
    fn test_validate_complete_config() {
        let axes = load(sample_yaml());
        assert!(axes.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_island_param() {
        let axes = AxisSet {
            islands: vec!["A".to_string()],
            years: vec!["2035".to_string()],
            scenarios: vec!["s".to_string()],
            cleans: vec!["clean".to_string()],
            island_params: HashMap::new(),
            co2_limits: HashMap::new(),
        };

        match axes.validate() {
            Err(GridsweepError::MissingIslandParam { island }) => assert_eq!(island, "A"),
            other => panic!("expected MissingIslandParam, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_missing_co2_limit_names_pair() {
        let mut axes = load(sample_yaml());
        axes.co2_limits.get_mut("2035").unwrap().remove("Maui");

        match axes.validate() {
            Err(GridsweepError::MissingCo2Limit { year, island }) => {
                assert_eq!(year, "2035");
                assert_eq!(island, "Maui");
            }
            other => panic!("expected MissingCo2Limit, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_accessors() {
        let axes = load(sample_yaml());
        assert!((axes.island_param("Oahu").unwrap() - 120.5).abs() < 1e-9);
        assert!((axes.co2_limit("2035", "Maui").unwrap() - 20.0).abs() < 1e-9);
        assert!(axes.co2_limit("2040", "Maui").is_err());
    }
}
