// ==========================================
// 复合材料制造 ERP - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::path::PathBuf;
use std::sync::Arc;

use crate::api::{ApiResult, ProductionApi};
use crate::config::config_manager::ConfigManager;

/// 数据库路径环境变量
pub const DB_PATH_ENV: &str = "COMPOSITE_ERP_DB_PATH";

/// 应用状态
///
/// 包含配置管理器与计算 API
pub struct AppState {
    /// 数据库路径
    pub db_path: String,

    /// 配置管理器
    pub config_manager: Arc<ConfigManager>,

    /// 生产计算 API
    pub production_api: Arc<ProductionApi>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - db_path: 配置数据库路径（不存在则新建）
    pub async fn new(db_path: String) -> ApiResult<Self> {
        tracing::info!("初始化AppState，数据库路径: {}", db_path);

        let config_manager = Arc::new(ConfigManager::new(&db_path)?);
        let production_api = Arc::new(ProductionApi::from_config(config_manager.as_ref()).await?);

        Ok(Self {
            db_path,
            config_manager,
            production_api,
        })
    }
}

/// 获取默认数据库路径
///
/// 优先级: 环境变量 > 用户数据目录 > 当前目录
pub fn get_default_db_path() -> String {
    if let Ok(path) = std::env::var(DB_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./composite_erp.db");

    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join("composite-erp");
        // 目录创建失败时保留当前目录回退值
        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join("composite_erp.db");
        }
    }

    path.to_string_lossy().to_string()
}
