// ==========================================
// 复合材料制造 ERP - 引擎层
// ==========================================
// 职责: 纯计算规则，无 I/O、无共享可变状态
// 红线: 引擎不抛错误，非法分母一律降级为 0 / 封顶
// ==========================================

pub mod bom;
pub mod efficiency;
pub mod kpi;
pub mod math;
pub mod target;

// 重导出核心引擎
pub use bom::{generate_bom, BomAssembler};
pub use efficiency::{compute_efficiency, elapsed_minutes, EfficiencyEngine, MAX_EFFICIENCY_PCT};
pub use kpi::{EfficiencyKpi, StationEfficiency, STANDARD_EFFICIENCY_PCT};
pub use target::{compute_target, TargetEstimate, TargetEstimator};
