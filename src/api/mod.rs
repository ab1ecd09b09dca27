// ==========================================
// 复合材料制造 ERP - API 层
// ==========================================
// 职责: 提供业务 API 接口,供 CLI / 上层调用
// ==========================================

pub mod error;
pub mod production_api;
pub mod validator;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use production_api::{availability_label, EfficiencyForm, ProductionApi, TargetForm};
