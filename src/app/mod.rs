// ==========================================
// 复合材料制造 ERP - 应用层
// ==========================================
// 职责: 应用状态装配（配置 + API）
// ==========================================

pub mod state;

pub use state::{get_default_db_path, AppState, DB_PATH_ENV};
