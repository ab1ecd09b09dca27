// ==========================================
// 表单构建器 - 用于集成测试
// ==========================================

#![allow(dead_code)]

use composite_erp::api::{EfficiencyForm, TargetForm};

pub struct EfficiencyFormBuilder {
    form: EfficiencyForm,
}

impl EfficiencyFormBuilder {
    pub fn new(task_id: &str) -> Self {
        Self {
            form: EfficiencyForm {
                task_id: task_id.to_string(),
                station: "LAMINATION".to_string(),
                operator: None,
                quantity: "1".to_string(),
                start_time: "08:00".to_string(),
                end_time: "09:00".to_string(),
                standard_min_per_unit: "60".to_string(),
            },
        }
    }

    pub fn station(mut self, station: &str) -> Self {
        self.form.station = station.to_string();
        self
    }

    pub fn operator(mut self, operator: &str) -> Self {
        self.form.operator = Some(operator.to_string());
        self
    }

    pub fn quantity(mut self, quantity: &str) -> Self {
        self.form.quantity = quantity.to_string();
        self
    }

    pub fn times(mut self, start: &str, end: &str) -> Self {
        self.form.start_time = start.to_string();
        self.form.end_time = end.to_string();
        self
    }

    pub fn standard(mut self, minutes: &str) -> Self {
        self.form.standard_min_per_unit = minutes.to_string();
        self
    }

    pub fn build(self) -> EfficiencyForm {
        self.form
    }
}

pub fn target_form(station: &str, manpower: &str, hours: &str) -> TargetForm {
    TargetForm {
        station: station.to_string(),
        complexity: None,
        manpower: manpower.to_string(),
        hours: hours.to_string(),
    }
}
