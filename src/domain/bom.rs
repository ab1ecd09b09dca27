// ==========================================
// 复合材料制造 ERP - 物料清单领域模型
// ==========================================
// 职责: 规格单、库存快照、BOM 行与 BOM 单
// 红线: 库存快照只做查询，不归属任何 BOM 行
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// SpecSheet - 规格单
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecSheet {
    pub spec_id: String,
    pub part_name: String,
    #[serde(default)]
    pub customer: Option<String>,
    pub deliverables: String,          // 交付物（决定是否追加物料行）
}

// ==========================================
// InventorySnapshot - 库存快照
// ==========================================
// 物料名称 → 在库数量；名称精确匹配
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventorySnapshot {
    items: HashMap<String, f64>,
}

impl InventorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加/覆盖一条库存
    pub fn with_item(mut self, material: &str, qty: f64) -> Self {
        self.items.insert(material.to_string(), qty);
        self
    }

    pub fn insert(&mut self, material: &str, qty: f64) {
        self.items.insert(material.to_string(), qty);
    }

    pub fn quantity_of(&self, material: &str) -> Option<f64> {
        self.items.get(material).copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<HashMap<String, f64>> for InventorySnapshot {
    fn from(items: HashMap<String, f64>) -> Self {
        Self { items }
    }
}

// ==========================================
// BomLine - 物料清单行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomLine {
    pub material: String,              // 物料名称
    pub required_qty: f64,             // 需求数量
    pub unit: String,                  // 单位
    pub on_hand_qty: f64,              // 在库数量（快照缺失记 0）
    pub available: bool,               // 在库 >= 需求
    pub shortage_qty: f64,             // 缺口 = max(需求 - 在库, 0)
}

// ==========================================
// BomSheet - 物料清单
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BomSheet {
    pub bom_id: String,
    pub spec_id: String,
    pub part_name: String,
    pub generated_at: DateTime<Utc>,
    pub lines: Vec<BomLine>,
    pub all_available: bool,
}

impl BomSheet {
    /// 缺料行
    pub fn shortages(&self) -> Vec<&BomLine> {
        self.lines.iter().filter(|line| !line.available).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_lookup_exact_name() {
        let inventory = InventorySnapshot::new().with_item("Gelcoat", 10.0);
        assert_eq!(inventory.quantity_of("Gelcoat"), Some(10.0));
        assert_eq!(inventory.quantity_of("gelcoat"), None);
        assert_eq!(inventory.len(), 1);
    }
}
