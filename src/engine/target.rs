// ==========================================
// 复合材料制造 ERP - 定额产量估算引擎
// ==========================================
// 职责: 工位定额 + 人力 + 工时 → 目标产量
// 公式: target = manpower × hours × 60 / 单件工时，保留两位小数
// 红线: 不做人力/工时范围校验（零或负数直接得出零或负产量）
// ==========================================

use crate::domain::norms::{normalize_station_key, NormsTable};
use crate::domain::types::TaskComplexity;
use crate::engine::math::round_dp;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 目标产量估算结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetEstimate {
    pub station: String,
    pub complexity: Option<TaskComplexity>,
    pub used_default_norm: bool,       // 未知工位回退默认定额
    pub minutes_per_unit: f64,
    pub available_minutes: f64,        // manpower × hours × 60
    pub target_qty: f64,
}

/// 按标准定额表估算目标产量
///
/// # 示例
/// ```
/// use composite_erp::engine::target::compute_target;
///
/// assert_eq!(compute_target("CURING", 2, 8.0), 8.0);
/// ```
pub fn compute_target(station: &str, manpower: i32, hours: f64) -> f64 {
    TargetEstimator::new(NormsTable::standard())
        .estimate(station, manpower, hours)
        .target_qty
}

// ==========================================
// TargetEstimator - 定额产量估算器
// ==========================================
#[derive(Debug, Clone)]
pub struct TargetEstimator {
    norms: NormsTable,
}

impl TargetEstimator {
    pub fn new(norms: NormsTable) -> Self {
        Self { norms }
    }

    pub fn norms(&self) -> &NormsTable {
        &self.norms
    }

    /// 按工位平均工时估算
    pub fn estimate(&self, station: &str, manpower: i32, hours: f64) -> TargetEstimate {
        let (minutes_per_unit, used_default_norm) = self.norms.avg_minutes_for(station);
        self.build(station, None, manpower, hours, minutes_per_unit, used_default_norm)
    }

    /// 按工位 + 复杂度估算
    pub fn estimate_for(
        &self,
        station: &str,
        complexity: TaskComplexity,
        manpower: i32,
        hours: f64,
    ) -> TargetEstimate {
        let (minutes_per_unit, used_default_norm) = self.norms.minutes_for(station, complexity);
        self.build(
            station,
            Some(complexity),
            manpower,
            hours,
            minutes_per_unit,
            used_default_norm,
        )
    }

    fn build(
        &self,
        station: &str,
        complexity: Option<TaskComplexity>,
        manpower: i32,
        hours: f64,
        minutes_per_unit: f64,
        used_default_norm: bool,
    ) -> TargetEstimate {
        let available_minutes = manpower as f64 * hours * 60.0;

        // 单件工时非正只可能来自错误配置，按 0 处理
        let target_qty = if minutes_per_unit > 0.0 {
            round_dp(available_minutes / minutes_per_unit, 2)
        } else {
            0.0
        };

        if used_default_norm {
            debug!(station, default_min = minutes_per_unit, "工位无定额，使用默认单件工时");
        }

        TargetEstimate {
            station: normalize_station_key(station),
            complexity,
            used_default_norm,
            minutes_per_unit,
            available_minutes,
            target_qty,
        }
    }
}

impl Default for TargetEstimator {
    fn default() -> Self {
        Self::new(NormsTable::standard())
    }
}
