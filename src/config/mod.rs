// ==========================================
// 复合材料制造 ERP - 配置层
// ==========================================
// 职责: 计算参数配置管理
// 存储: config_kv 表
// ==========================================

pub mod config_manager;
pub mod production_config_trait;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager};
pub use production_config_trait::ProductionConfigReader;
