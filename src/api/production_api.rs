// ==========================================
// 复合材料制造 ERP - 生产计算 API
// ==========================================
// 职责: 接收表单原始值，校验后调用计算引擎
// 调用方: CLI / 上层看板（渲染、持久化不在本层）
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::{
    parse_clock_time, parse_integer, parse_number, parse_positive_number,
    parse_positive_quantity, require_text,
};
use crate::config::ProductionConfigReader;
use crate::domain::bom::{BomLine, BomSheet, InventorySnapshot, SpecSheet};
use crate::domain::norms::StationNorm;
use crate::domain::task::{TaskEfficiency, TaskRecord};
use crate::domain::types::TaskComplexity;
use crate::engine::math::round_dp;
use crate::engine::{
    BomAssembler, EfficiencyEngine, EfficiencyKpi, TargetEstimate, TargetEstimator,
    STANDARD_EFFICIENCY_PCT,
};
use crate::i18n::{t, t_with_args};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

// ==========================================
// 表单 DTO（字段均为原始字符串）
// ==========================================

/// 完工填报表单
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EfficiencyForm {
    #[serde(default)]
    pub task_id: String,
    #[serde(default)]
    pub station: String,
    #[serde(default)]
    pub operator: Option<String>,
    pub quantity: String,
    pub start_time: String,
    pub end_time: String,
    pub standard_min_per_unit: String,
}

/// 目标产量表单
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetForm {
    pub station: String,
    #[serde(default)]
    pub complexity: Option<String>,
    pub manpower: String,
    pub hours: String,
}

// ==========================================
// ProductionApi - 生产计算 API
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ProductionApi {
    efficiency_engine: EfficiencyEngine,
    target_estimator: TargetEstimator,
    bom_assembler: BomAssembler,
}

impl ProductionApi {
    pub fn new(efficiency_engine: EfficiencyEngine, target_estimator: TargetEstimator) -> Self {
        Self {
            efficiency_engine,
            target_estimator,
            bom_assembler: BomAssembler::new(),
        }
    }

    /// 按配置构建（定额表在此一次性加载，之后不变）
    pub async fn from_config(reader: &dyn ProductionConfigReader) -> ApiResult<Self> {
        let cap_pct = reader.get_efficiency_cap_pct().await?;
        let norms = reader.load_norms_table().await?;

        info!(
            cap_pct,
            station_count = norms.len(),
            default_norm_min = norms.default_avg_min(),
            "生产计算 API 初始化完成"
        );

        Ok(Self::new(
            EfficiencyEngine::with_cap(cap_pct),
            TargetEstimator::new(norms),
        ))
    }

    // ==========================================
    // 任务效率
    // ==========================================

    /// 表单 → 任务记录
    pub fn parse_task(&self, form: &EfficiencyForm) -> ApiResult<TaskRecord> {
        Ok(TaskRecord {
            task_id: form.task_id.trim().to_string(),
            station: form.station.trim().to_string(),
            operator: form
                .operator
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            quantity: parse_positive_quantity("quantity", &form.quantity)?,
            standard_min_per_unit: parse_positive_number(
                "standard_min_per_unit",
                &form.standard_min_per_unit,
            )?,
            start_time: parse_clock_time("start_time", &form.start_time)?,
            end_time: parse_clock_time("end_time", &form.end_time)?,
        })
    }

    /// 计算单条任务效率
    pub fn compute_efficiency(&self, form: &EfficiencyForm) -> ApiResult<TaskEfficiency> {
        let task = self.parse_task(form)?;
        Ok(self.efficiency_engine.evaluate(&task))
    }

    /// 批量计算并汇总；任一表单非法即整体失败
    #[instrument(skip(self, forms), fields(count = forms.len()))]
    pub fn summarize_efficiency(
        &self,
        forms: &[EfficiencyForm],
    ) -> ApiResult<(Vec<TaskEfficiency>, EfficiencyKpi)> {
        let tasks = forms
            .iter()
            .map(|form| self.parse_task(form))
            .collect::<ApiResult<Vec<_>>>()?;

        let results = self.efficiency_engine.evaluate_batch(&tasks);
        let kpi = EfficiencyKpi::calculate(&results);

        info!(
            avg_efficiency_pct = kpi.avg_efficiency_pct,
            station_count = kpi.by_station.len(),
            capped_count = kpi.capped_count,
            meets_standard = kpi.meets_target(STANDARD_EFFICIENCY_PCT),
            "效率汇总完成"
        );
        Ok((results, kpi))
    }

    // ==========================================
    // 定额产量
    // ==========================================

    /// 计算目标产量（人力/工时不做范围校验）
    pub fn compute_target(&self, form: &TargetForm) -> ApiResult<TargetEstimate> {
        let station = require_text("station", &form.station)?;
        let manpower = parse_integer("manpower", &form.manpower)?;
        let hours = parse_number("hours", &form.hours)?;

        let complexity = match form.complexity.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(TaskComplexity::parse(raw).ok_or_else(|| {
                ApiError::invalid("complexity", format!("应为 SIMPLE/MEDIUM/COMPLEX，实际 {:?}", raw))
            })?),
        };

        let estimate = match complexity {
            Some(c) => self.target_estimator.estimate_for(station, c, manpower, hours),
            None => self.target_estimator.estimate(station, manpower, hours),
        };

        info!(
            station = %estimate.station,
            manpower,
            hours,
            target_qty = estimate.target_qty,
            used_default_norm = estimate.used_default_norm,
            "目标产量计算完成"
        );
        Ok(estimate)
    }

    /// 当前定额表（按工位排序）
    pub fn list_norms(&self) -> Vec<StationNorm> {
        self.target_estimator
            .norms()
            .stations()
            .into_iter()
            .cloned()
            .collect()
    }

    // ==========================================
    // 物料清单
    // ==========================================

    /// 生成物料清单（deliverables 原样参与匹配）
    pub fn generate_bom(
        &self,
        spec: &SpecSheet,
        inventory: &InventorySnapshot,
    ) -> ApiResult<BomSheet> {
        require_text("spec_id", &spec.spec_id)?;
        Ok(self.bom_assembler.assemble_sheet(spec, inventory))
    }
}

/// 物料行可用性的展示文本
pub fn availability_label(line: &BomLine) -> String {
    if line.available {
        t("bom.available")
    } else {
        let qty = round_dp(line.shortage_qty, 2).to_string();
        t_with_args("bom.shortage", &[("qty", qty.as_str()), ("unit", line.unit.as_str())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::set_locale;
    use crate::i18n::tests::LOCALE_TEST_LOCK;

    fn line(available: bool, shortage_qty: f64) -> BomLine {
        BomLine {
            material: "Gelcoat".to_string(),
            required_qty: 5.0,
            unit: "kg".to_string(),
            on_hand_qty: 5.0 - shortage_qty,
            available,
            shortage_qty,
        }
    }

    #[test]
    fn test_availability_label() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        assert_eq!(availability_label(&line(true, 0.0)), "In stock");
        assert_eq!(availability_label(&line(false, 2.5)), "Short by 2.5 kg");
        set_locale("zh-CN");
    }

    #[test]
    fn test_availability_label_formats_float_shortage() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        // 5 - 4.7 的浮点结果为 0.2999999999999998
        let mut gelcoat = line(false, 0.0);
        gelcoat.on_hand_qty = 4.7;
        gelcoat.shortage_qty = gelcoat.required_qty - gelcoat.on_hand_qty;
        assert_eq!(availability_label(&gelcoat), "Short by 0.3 kg");
        set_locale("zh-CN");
    }

    #[test]
    fn test_parse_task_trims_fields() {
        let api = ProductionApi::default();
        let form = EfficiencyForm {
            task_id: " T-9 ".to_string(),
            station: " CURING ".to_string(),
            operator: Some(" Lee ".to_string()),
            quantity: " 3 ".to_string(),
            start_time: "07:00".to_string(),
            end_time: "08:30".to_string(),
            standard_min_per_unit: "30".to_string(),
        };

        let task = api.parse_task(&form).unwrap();
        assert_eq!(task.task_id, "T-9");
        assert_eq!(task.station, "CURING");
        assert_eq!(task.operator.as_deref(), Some("Lee"));
        assert_eq!(task.quantity, 3);
        assert_eq!(api.compute_efficiency(&form).unwrap().efficiency_pct, 100.0);
    }
}
