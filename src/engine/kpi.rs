// ==========================================
// 复合材料制造 ERP - 效率看板指标
// ==========================================
// 职责: 一批任务 TEI 结果 → 总体/分工位汇总
// 空输入返回全零；工位按归一化键（去空白 + 大写）分组
// ==========================================

use crate::domain::norms::normalize_station_key;
use crate::domain::task::TaskEfficiency;
use crate::engine::math::round_dp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 标准效率（实际耗时等于标准耗时）
pub const STANDARD_EFFICIENCY_PCT: f64 = 100.0;

/// 单工位汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationEfficiency {
    pub task_count: usize,
    pub avg_efficiency_pct: f64,
}

/// 效率汇总指标
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyKpi {
    pub task_count: usize,
    pub avg_efficiency_pct: f64,
    pub max_efficiency_pct: f64,
    pub capped_count: usize,
    /// 按工位键排序
    pub by_station: BTreeMap<String, StationEfficiency>,
}

impl EfficiencyKpi {
    /// 汇总一批 TEI 结果，平均值保留一位小数
    pub fn calculate(results: &[TaskEfficiency]) -> Self {
        let mut total = 0.0;
        let mut max_efficiency_pct: f64 = 0.0;
        let mut capped_count = 0;
        let mut sums: BTreeMap<String, (usize, f64)> = BTreeMap::new();

        for result in results {
            total += result.efficiency_pct;
            max_efficiency_pct = max_efficiency_pct.max(result.efficiency_pct);
            if result.capped {
                capped_count += 1;
            }

            let entry = sums.entry(normalize_station_key(&result.station)).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += result.efficiency_pct;
        }

        let avg_efficiency_pct = if results.is_empty() {
            0.0
        } else {
            round_dp(total / results.len() as f64, 1)
        };

        let by_station = sums
            .into_iter()
            .map(|(station, (count, sum))| {
                (
                    station,
                    StationEfficiency {
                        task_count: count,
                        avg_efficiency_pct: round_dp(sum / count as f64, 1),
                    },
                )
            })
            .collect();

        Self {
            task_count: results.len(),
            avg_efficiency_pct,
            max_efficiency_pct,
            capped_count,
            by_station,
        }
    }

    /// 平均效率是否达到目标
    pub fn meets_target(&self, target_pct: f64) -> bool {
        self.task_count > 0 && self.avg_efficiency_pct >= target_pct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(station: &str, efficiency_pct: f64, capped: bool) -> TaskEfficiency {
        TaskEfficiency {
            task_id: format!("{}-{}", station, efficiency_pct),
            station: station.to_string(),
            elapsed_minutes: 60.0,
            standard_minutes: efficiency_pct * 0.6,
            efficiency_pct,
            capped,
        }
    }

    #[test]
    fn test_empty_input() {
        let kpi = EfficiencyKpi::calculate(&[]);
        assert_eq!(kpi.task_count, 0);
        assert_eq!(kpi.avg_efficiency_pct, 0.0);
        assert_eq!(kpi.max_efficiency_pct, 0.0);
        assert!(kpi.by_station.is_empty());
        assert!(!kpi.meets_target(0.0));
    }

    #[test]
    fn test_per_station_average() {
        let kpi = EfficiencyKpi::calculate(&[
            result("CURING", 80.0, false),
            result("CURING", 100.0, false),
            result("GELCOAT", 999.0, true),
        ]);

        assert_eq!(kpi.task_count, 3);
        assert_eq!(kpi.avg_efficiency_pct, 393.0);
        assert_eq!(kpi.max_efficiency_pct, 999.0);
        assert_eq!(kpi.capped_count, 1);
        assert_eq!(kpi.by_station["CURING"].task_count, 2);
        assert_eq!(kpi.by_station["CURING"].avg_efficiency_pct, 90.0);
        assert_eq!(kpi.by_station["GELCOAT"].avg_efficiency_pct, 999.0);
        assert!(kpi.meets_target(100.0));
    }

    #[test]
    fn test_station_case_merged_into_one_bucket() {
        let kpi = EfficiencyKpi::calculate(&[
            result("curing", 80.0, false),
            result(" CURING ", 100.0, false),
            result("Curing", 120.0, false),
        ]);

        let keys: Vec<&str> = kpi.by_station.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["CURING"]);
        assert_eq!(kpi.by_station["CURING"].task_count, 3);
        assert_eq!(kpi.by_station["CURING"].avg_efficiency_pct, 100.0);
    }
}
