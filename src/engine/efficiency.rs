// ==========================================
// 复合材料制造 ERP - 任务效率指数 (TEI) 引擎
// ==========================================
// 职责: 标准工时 / 实际耗时 × 100，封顶 999%
// 输入: TaskRecord（数量 + 单件标准工时 + 开工/完工钟点）
// 输出: TaskEfficiency
// 红线: 不抛错误；分母非正一律返回 0
// ==========================================

use crate::domain::task::{TaskEfficiency, TaskRecord};
use crate::engine::math::{floor_dp, round_dp};
use chrono::NaiveTime;
use tracing::{debug, instrument};

/// TEI 展示上限（%）
pub const MAX_EFFICIENCY_PCT: f64 = 999.0;

/// 一天的分钟数（跨零点修正量）
pub const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

/// 实际耗时（分钟）
///
/// 完工钟点早于开工钟点时视为跨零点，加 24 小时
pub fn elapsed_minutes(start_time: NaiveTime, end_time: NaiveTime) -> f64 {
    let minutes = end_time.signed_duration_since(start_time).num_seconds() as f64 / 60.0;
    if minutes < 0.0 {
        minutes + MINUTES_PER_DAY
    } else {
        minutes
    }
}

/// 按默认上限计算 TEI
///
/// # 示例
/// ```
/// use chrono::NaiveTime;
/// use composite_erp::engine::efficiency::compute_efficiency;
///
/// let start = NaiveTime::from_hms_opt(23, 30, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(0, 30, 0).unwrap();
/// assert_eq!(compute_efficiency(1, start, end, 30.0), 50.0);
/// ```
pub fn compute_efficiency(
    quantity: u32,
    start_time: NaiveTime,
    end_time: NaiveTime,
    standard_min_per_unit: f64,
) -> f64 {
    EfficiencyEngine::new().compute(quantity, start_time, end_time, standard_min_per_unit)
}

// ==========================================
// EfficiencyEngine - TEI 引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct EfficiencyEngine {
    cap_pct: f64,
}

impl EfficiencyEngine {
    /// 创建引擎（上限 999%）
    pub fn new() -> Self {
        Self {
            cap_pct: MAX_EFFICIENCY_PCT,
        }
    }

    /// 创建引擎并指定上限
    ///
    /// 非正或非有限的上限回退到 999%
    pub fn with_cap(cap_pct: f64) -> Self {
        if cap_pct.is_finite() && cap_pct > 0.0 {
            Self { cap_pct }
        } else {
            tracing::warn!(cap_pct, "TEI 上限配置无效，使用默认值 {}", MAX_EFFICIENCY_PCT);
            Self::new()
        }
    }

    pub fn cap_pct(&self) -> f64 {
        self.cap_pct
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算 TEI（%），保留一位小数
    pub fn compute(
        &self,
        quantity: u32,
        start_time: NaiveTime,
        end_time: NaiveTime,
        standard_min_per_unit: f64,
    ) -> f64 {
        let elapsed = elapsed_minutes(start_time, end_time);
        let standard = standard_min_per_unit * quantity as f64;
        self.ratio(standard, elapsed).0
    }

    /// 计算单条任务记录
    pub fn evaluate(&self, task: &TaskRecord) -> TaskEfficiency {
        let elapsed = elapsed_minutes(task.start_time, task.end_time);
        let standard = task.standard_min_per_unit * task.quantity as f64;
        let (efficiency_pct, capped) = self.ratio(standard, elapsed);

        debug!(
            task_id = %task.task_id,
            station = %task.station,
            elapsed_minutes = elapsed,
            standard_minutes = standard,
            efficiency_pct,
            capped,
            "TEI 计算完成"
        );

        TaskEfficiency {
            task_id: task.task_id.clone(),
            station: task.station.clone(),
            elapsed_minutes: elapsed,
            standard_minutes: standard,
            efficiency_pct,
            capped,
        }
    }

    /// 批量计算
    #[instrument(skip(self, tasks), fields(count = tasks.len()))]
    pub fn evaluate_batch(&self, tasks: &[TaskRecord]) -> Vec<TaskEfficiency> {
        tasks.iter().map(|task| self.evaluate(task)).collect()
    }

    /// 标准耗时 / 实际耗时
    ///
    /// 返回: (TEI, 是否封顶)
    fn ratio(&self, standard_minutes: f64, elapsed_minutes: f64) -> (f64, bool) {
        if elapsed_minutes.is_nan()
            || standard_minutes.is_nan()
            || elapsed_minutes <= 0.0
            || standard_minutes <= 0.0
        {
            return (0.0, false);
        }

        // 上限按一位小数向下取整，保证展示值不超过上限
        let raw = standard_minutes / elapsed_minutes * 100.0;
        let rounded = round_dp(raw, 1);
        if raw > self.cap_pct || rounded > self.cap_pct {
            (floor_dp(self.cap_pct, 1), true)
        } else {
            (rounded, false)
        }
    }
}

impl Default for EfficiencyEngine {
    fn default() -> Self {
        Self::new()
    }
}
