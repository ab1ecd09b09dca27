// ==========================================
// 复合材料制造 ERP - 物料清单生成引擎
// ==========================================
// 职责: 规格单 + 库存快照 → 带可用标记的物料清单
// 红线: 基础物料数量为固定常量，不由零件几何推导
// 红线: 物料名称精确匹配，无替代料/单位换算
// ==========================================

use crate::domain::bom::{BomLine, BomSheet, InventorySnapshot, SpecSheet};
use crate::domain::types::DeliverableKind;
use crate::engine::math::round_dp;
use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

/// 物料需求（名称, 数量, 单位）
pub type MaterialRequirement = (&'static str, f64, &'static str);

// 所有规格单共用的基础物料
const BASE_MATERIALS: &[MaterialRequirement] = &[
    ("Polyester Resin", 25.0, "kg"),
    ("Glass Fibre Mat", 15.0, "kg"),
    ("Gelcoat", 5.0, "kg"),
];

const TOOLING_BOARD: MaterialRequirement = ("Tooling Board", 4.0, "sheet");
const MOULD_RELEASE_WAX: MaterialRequirement = ("Mould Release Wax", 1.0, "kg");

/// 按交付物类型追加的物料
fn extra_material(kind: DeliverableKind) -> MaterialRequirement {
    match kind {
        DeliverableKind::MasterPattern => TOOLING_BOARD,
        DeliverableKind::ProductionMould => MOULD_RELEASE_WAX,
    }
}

/// 生成物料清单行
///
/// # 示例
/// ```
/// use composite_erp::domain::{InventorySnapshot, SpecSheet};
/// use composite_erp::engine::bom::generate_bom;
///
/// let spec = SpecSheet {
///     spec_id: "S-1".to_string(),
///     part_name: "Hull".to_string(),
///     customer: None,
///     deliverables: "Master Pattern".to_string(),
/// };
/// let lines = generate_bom(&spec, &InventorySnapshot::new());
/// assert!(lines.iter().any(|l| l.material == "Tooling Board"));
/// ```
pub fn generate_bom(spec: &SpecSheet, inventory: &InventorySnapshot) -> Vec<BomLine> {
    BomAssembler::new().generate(spec, inventory)
}

// ==========================================
// BomAssembler - 物料清单生成器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct BomAssembler;

impl BomAssembler {
    pub fn new() -> Self {
        Self
    }

    /// 规格单对应的物料需求（未做库存比对）
    pub fn requirements(&self, spec: &SpecSheet) -> Vec<MaterialRequirement> {
        let mut requirements = BASE_MATERIALS.to_vec();
        if let Some(kind) = DeliverableKind::from_deliverables(&spec.deliverables) {
            requirements.push(extra_material(kind));
        }
        requirements
    }

    /// 生成物料清单行并比对库存
    pub fn generate(&self, spec: &SpecSheet, inventory: &InventorySnapshot) -> Vec<BomLine> {
        self.requirements(spec)
            .into_iter()
            .map(|(material, required_qty, unit)| {
                Self::check_line(material, required_qty, unit, inventory)
            })
            .collect()
    }

    /// 生成完整物料清单（带 ID 与生成时间）
    #[instrument(skip(self, spec, inventory), fields(spec_id = %spec.spec_id))]
    pub fn assemble_sheet(&self, spec: &SpecSheet, inventory: &InventorySnapshot) -> BomSheet {
        let lines = self.generate(spec, inventory);
        let all_available = lines.iter().all(|line| line.available);
        let shortage_count = lines.iter().filter(|line| !line.available).count();

        info!(
            line_count = lines.len(),
            shortage_count,
            deliverables = %spec.deliverables,
            "物料清单生成完成"
        );

        BomSheet {
            bom_id: Uuid::new_v4().to_string(),
            spec_id: spec.spec_id.clone(),
            part_name: spec.part_name.clone(),
            generated_at: Utc::now(),
            lines,
            all_available,
        }
    }

    fn check_line(
        material: &str,
        required_qty: f64,
        unit: &str,
        inventory: &InventorySnapshot,
    ) -> BomLine {
        // 快照中不存在的物料一律视为不可用
        let (on_hand_qty, available) = match inventory.quantity_of(material) {
            Some(qty) => (qty, qty >= required_qty),
            None => (0.0, false),
        };

        BomLine {
            material: material.to_string(),
            required_qty,
            unit: unit.to_string(),
            on_hand_qty,
            available,
            // 缺口保留两位小数，避免浮点尾差
            shortage_qty: round_dp((required_qty - on_hand_qty).max(0.0), 2),
        }
    }
}
