// ==========================================
// 复合材料制造 ERP - 生产任务领域模型
// ==========================================
// 职责: 任务效率指数 (TEI) 的输入记录与计算结果
// ==========================================

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

// ==========================================
// TaskRecord - 任务效率记录（输入）
// ==========================================
// 用途: 班组长填报的完工记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub task_id: String,               // 任务ID
    pub station: String,               // 工位
    pub operator: Option<String>,      // 操作员（可选）

    // ===== 产量与定额 =====
    pub quantity: u32,                 // 完工数量
    pub standard_min_per_unit: f64,    // 单件标准工时（分钟）

    // ===== 实际时间（钟点） =====
    pub start_time: NaiveTime,         // 开工时间
    pub end_time: NaiveTime,           // 完工时间（早于开工视为跨零点）
}

// ==========================================
// TaskEfficiency - 任务效率结果（输出）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskEfficiency {
    pub task_id: String,
    pub station: String,
    pub elapsed_minutes: f64,          // 实际耗时（已做跨零点修正）
    pub standard_minutes: f64,         // 标准耗时 = 单件工时 × 数量
    pub efficiency_pct: f64,           // TEI，保留一位小数
    pub capped: bool,                  // 是否触发上限封顶
}
