// ==========================================
// 复合材料制造 ERP - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 工序复杂度 (Task Complexity)
// ==========================================
// 每个工位定额有 简单/中等/复杂 三档工时估计
// 序列化格式: SCREAMING_SNAKE_CASE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskComplexity {
    Simple,  // 简单件
    Medium,  // 中等件
    Complex, // 复杂件
}

impl TaskComplexity {
    /// 从字符串解析（大小写不敏感）
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "SIMPLE" => Some(TaskComplexity::Simple),
            "MEDIUM" => Some(TaskComplexity::Medium),
            "COMPLEX" => Some(TaskComplexity::Complex),
            _ => None,
        }
    }
}

impl fmt::Display for TaskComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskComplexity::Simple => write!(f, "SIMPLE"),
            TaskComplexity::Medium => write!(f, "MEDIUM"),
            TaskComplexity::Complex => write!(f, "COMPLEX"),
        }
    }
}

// ==========================================
// 交付物类型 (Deliverable Kind)
// ==========================================
// 规格单 deliverables 字段的已知取值
// 红线: 精确匹配（区分大小写，不做模糊匹配）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliverableKind {
    MasterPattern,   // 母模
    ProductionMould, // 生产模具
}

impl DeliverableKind {
    pub const MASTER_PATTERN: &'static str = "Master Pattern";
    pub const PRODUCTION_MOULD: &'static str = "Production Mould";

    /// 按规格单原始取值识别交付物类型
    ///
    /// 未知取值返回 None（不追加额外物料行）
    pub fn from_deliverables(value: &str) -> Option<Self> {
        match value {
            Self::MASTER_PATTERN => Some(DeliverableKind::MasterPattern),
            Self::PRODUCTION_MOULD => Some(DeliverableKind::ProductionMould),
            _ => None,
        }
    }
}

impl fmt::Display for DeliverableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliverableKind::MasterPattern => write!(f, "{}", Self::MASTER_PATTERN),
            DeliverableKind::ProductionMould => write!(f, "{}", Self::PRODUCTION_MOULD),
        }
    }
}
