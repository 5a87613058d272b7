//! # 作业矩阵展开器
//!
//! 按固定顺序惰性迭代四轴的笛卡尔积（岛屿最外层，清洁标志最内层），
//! 每个元组产出一个 `JobSpec`，并在迭代过程中增量检测作业码冲突：
//! 作业码是有损截断，两个不同的场景/岛屿组合可能缩写成同一个码，
//! 必须在任何提交发生之前暴露这种歧义。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `matrix/axes.rs`, `matrix/spec.rs`

use crate::error::{GridsweepError, Result};
use crate::matrix::axes::AxisSet;
use crate::matrix::spec::JobSpec;

use std::collections::HashMap;

/// 惰性矩阵展开迭代器
///
/// 有限、可重启：对同一 `AxisSet` 重新调用 `expand` 总是产出
/// 完全相同的序列。遇到第一个错误后停止产出。
pub struct Expansion<'a> {
    axes: &'a AxisSet,
    next: usize,
    total: usize,
    /// 作业码 -> 首个使用它的作业名
    seen: HashMap<String, String>,
    halted: bool,
}

/// 展开作业矩阵，返回惰性序列
pub fn expand(axes: &AxisSet) -> Expansion<'_> {
    Expansion {
        axes,
        next: 0,
        total: axes.matrix_len(),
        seen: HashMap::new(),
        halted: false,
    }
}

/// 展开整个矩阵并收集，任何缺参或码冲突都在此处失败，
/// 调用方因此可以在创建任何目录之前拿到完整校验过的列表
pub fn expand_all(axes: &AxisSet) -> Result<Vec<JobSpec>> {
    expand(axes).collect()
}

impl Expansion<'_> {
    /// 把线性序号分解为四轴下标（cleans 变化最快）
    fn tuple_at(&self, idx: usize) -> (&str, &str, &str, &str) {
        let nc = self.axes.cleans.len();
        let ns = self.axes.scenarios.len();
        let ny = self.axes.years.len();

        let clean = &self.axes.cleans[idx % nc];
        let scenario = &self.axes.scenarios[(idx / nc) % ns];
        let year = &self.axes.years[(idx / (nc * ns)) % ny];
        let island = &self.axes.islands[idx / (nc * ns * ny)];

        (island, year, scenario, clean)
    }
}

impl Iterator for Expansion<'_> {
    type Item = Result<JobSpec>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted || self.next >= self.total {
            return None;
        }

        let idx = self.next;
        self.next += 1;

        let (island, year, scenario, clean) = self.tuple_at(idx);
        let spec = match JobSpec::build(island, year, scenario, clean, self.axes) {
            Ok(spec) => spec,
            Err(e) => {
                self.halted = true;
                return Some(Err(e));
            }
        };

        // 增量冲突检测：同码不同名即歧义；
        // 轴列表里的重复条目会产出同码同名，不算冲突
        if let Some(first) = self.seen.get(&spec.short_code).cloned() {
            if first != spec.name {
                self.halted = true;
                return Some(Err(GridsweepError::ShortCodeCollision {
                    code: spec.short_code.clone(),
                    first,
                    second: spec.name.clone(),
                }));
            }
        } else {
            self.seen
                .insert(spec.short_code.clone(), spec.name.clone());
        }

        Some(Ok(spec))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.halted {
            (0, Some(0))
        } else {
            let left = self.total - self.next;
            (0, Some(left))
        }
    }
}
