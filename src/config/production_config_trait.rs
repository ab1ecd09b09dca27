// ==========================================
// 复合材料制造 ERP - 生产计算配置读取 Trait
// ==========================================
// 职责: 定义计算引擎所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::domain::norms::{NormsTable, StationNorm};
use async_trait::async_trait;
use std::error::Error;

// ==========================================
// ProductionConfigReader Trait
// ==========================================
// 实现者: ConfigManager（从 config_kv 表读取）
#[async_trait]
pub trait ProductionConfigReader: Send + Sync {
    /// 获取 TEI 展示上限（%）
    ///
    /// # 默认值
    /// - 999
    async fn get_efficiency_cap_pct(&self) -> Result<f64, Box<dyn Error>>;

    /// 获取未知工位的默认单件工时（分钟）
    ///
    /// # 默认值
    /// - 60
    async fn get_default_norm_minutes(&self) -> Result<f64, Box<dyn Error>>;

    /// 获取工位定额覆写（同名工位替换标准定额）
    ///
    /// # 默认值
    /// - 空列表
    async fn get_station_norm_overrides(&self) -> Result<Vec<StationNorm>, Box<dyn Error>>;

    /// 组装定额表：标准定额 + 默认工时 + 覆写
    async fn load_norms_table(&self) -> Result<NormsTable, Box<dyn Error>> {
        let default_min = self.get_default_norm_minutes().await?;
        let overrides = self.get_station_norm_overrides().await?;

        Ok(NormsTable::standard()
            .with_default_avg(default_min)
            .with_overrides(overrides))
    }
}
