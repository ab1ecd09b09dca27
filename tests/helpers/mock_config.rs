// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================

#![allow(dead_code)]

use async_trait::async_trait;
use composite_erp::config::ProductionConfigReader;
use composite_erp::domain::StationNorm;
use std::error::Error;

/// Mock 配置结构
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub efficiency_cap_pct: f64,
    pub default_norm_minutes: f64,
    pub overrides: Vec<StationNorm>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            efficiency_cap_pct: 999.0,
            default_norm_minutes: 60.0,
            overrides: Vec::new(),
        }
    }
}

impl MockConfig {
    /// 自定义 TEI 上限
    pub fn with_cap(cap: f64) -> Self {
        Self {
            efficiency_cap_pct: cap,
            ..Self::default()
        }
    }

    /// 追加工位定额覆写
    pub fn with_override(mut self, norm: StationNorm) -> Self {
        self.overrides.push(norm);
        self
    }
}

#[async_trait]
impl ProductionConfigReader for MockConfig {
    async fn get_efficiency_cap_pct(&self) -> Result<f64, Box<dyn Error>> {
        Ok(self.efficiency_cap_pct)
    }

    async fn get_default_norm_minutes(&self) -> Result<f64, Box<dyn Error>> {
        Ok(self.default_norm_minutes)
    }

    async fn get_station_norm_overrides(&self) -> Result<Vec<StationNorm>, Box<dyn Error>> {
        Ok(self.overrides.clone())
    }
}
