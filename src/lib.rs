// ==========================================
// 复合材料制造 ERP - 计算核心库
// ==========================================
// 范围: 任务效率指数 (TEI)、工位定额产量、物料清单
// 系统定位: 看板/表单的计算后端（不含持久化与渲染）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 计算规则
pub mod engine;

// 配置层 - 计算参数
pub mod config;

// 数据库基础设施（仅配置表）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 表单入口
pub mod api;

// 应用层 - 状态装配
pub mod app;

// 命令行参数解析与执行
pub mod cli;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{
    BomLine, BomSheet, DeliverableKind, InventorySnapshot, NormsTable, SpecSheet, StationNorm,
    TaskComplexity, TaskEfficiency, TaskRecord,
};

pub use engine::{
    compute_efficiency, compute_target, generate_bom, BomAssembler, EfficiencyEngine,
    EfficiencyKpi, TargetEstimate, TargetEstimator,
};

pub use api::{ApiError, ApiResult, ProductionApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "复合材料制造 ERP 计算核心";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
