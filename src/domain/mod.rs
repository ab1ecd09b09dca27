// ==========================================
// 复合材料制造 ERP - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、静态定额表
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod bom;
pub mod norms;
pub mod task;
pub mod types;

// 重导出核心类型
pub use bom::{BomLine, BomSheet, InventorySnapshot, SpecSheet};
pub use norms::{normalize_station_key, NormsTable, StationNorm, DEFAULT_AVG_MINUTES_PER_UNIT};
pub use task::{TaskEfficiency, TaskRecord};
pub use types::{DeliverableKind, TaskComplexity};
