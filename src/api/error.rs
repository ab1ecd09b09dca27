// ==========================================
// 复合材料制造 ERP - API层错误类型
// ==========================================
// 职责: 表单原始值解析失败、配置加载失败的统一错误
// 说明: 引擎本身不报错，错误只出现在 API 入口
// ==========================================

use thiserror::Error;

/// API层错误类型
/// 所有错误信息必须包含显式原因（字段名 + 原始值）
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入 (字段 {field}): {message}")]
    InvalidInput { field: String, message: String },

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置加载失败: {0}")]
    ConfigError(String),

    // ==========================================
    // 通用错误（输出序列化等）
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        ApiError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// 出错字段（仅输入错误）
    pub fn field(&self) -> Option<&str> {
        match self {
            ApiError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<Box<dyn std::error::Error>> for ApiError {
    fn from(err: Box<dyn std::error::Error>) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = ApiError::invalid("quantity", "必须为正整数: 0");
        assert_eq!(err.field(), Some("quantity"));
        assert!(err.to_string().contains("quantity"));
        assert!(err.to_string().contains("必须为正整数"));
    }

    #[test]
    fn test_config_error_conversion() {
        let boxed: Box<dyn std::error::Error> = "锁获取失败".into();
        let err: ApiError = boxed.into();
        match err {
            ApiError::ConfigError(msg) => assert!(msg.contains("锁获取失败")),
            _ => panic!("Expected ConfigError"),
        }
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let err: ApiError = anyhow::anyhow!("序列化失败").into();
        assert!(matches!(err, ApiError::Other(_)));
        assert_eq!(err.field(), None);
        assert_eq!(err.to_string(), "序列化失败");
    }
}
