// ==========================================
// 复合材料制造 ERP - 表单输入校验器
// ==========================================
// 职责: 表单原始字符串 → 引擎所需的数值/钟点类型
// 说明: 引擎不做校验，所有拒绝都在这里发生
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use chrono::NaiveTime;

/// 解析钟点（HH:MM 或 HH:MM:SS）
pub fn parse_clock_time(field: &str, raw: &str) -> ApiResult<NaiveTime> {
    let value = raw.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| ApiError::invalid(field, format!("钟点格式应为 HH:MM，实际 {:?}", raw)))
}

/// 解析正整数数量
pub fn parse_positive_quantity(field: &str, raw: &str) -> ApiResult<u32> {
    match raw.trim().parse::<u32>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(ApiError::invalid(field, format!("必须为正整数，实际 {:?}", raw))),
    }
}

/// 解析正数（分钟等）
pub fn parse_positive_number(field: &str, raw: &str) -> ApiResult<f64> {
    match parse_number(field, raw)? {
        v if v > 0.0 => Ok(v),
        _ => Err(ApiError::invalid(field, format!("必须为正数，实际 {:?}", raw))),
    }
}

/// 解析有限数值（允许零和负数）
pub fn parse_number(field: &str, raw: &str) -> ApiResult<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ApiError::invalid(field, format!("不是有效数值: {:?}", raw))),
    }
}

/// 解析整数（允许零和负数）
pub fn parse_integer(field: &str, raw: &str) -> ApiResult<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ApiError::invalid(field, format!("不是有效整数: {:?}", raw)))
}

/// 非空文本
pub fn require_text<'a>(field: &str, raw: &'a str) -> ApiResult<&'a str> {
    let value = raw.trim();
    if value.is_empty() {
        Err(ApiError::invalid(field, "不能为空"))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clock_time() {
        assert_eq!(
            parse_clock_time("start_time", " 23:30 ").unwrap(),
            NaiveTime::from_hms_opt(23, 30, 0).unwrap()
        );
        assert_eq!(
            parse_clock_time("start_time", "07:05:30").unwrap(),
            NaiveTime::from_hms_opt(7, 5, 30).unwrap()
        );
        assert!(parse_clock_time("start_time", "25:00").is_err());
        assert!(parse_clock_time("start_time", "").is_err());
        assert!(parse_clock_time("start_time", "8am").is_err());
    }

    #[test]
    fn test_parse_positive_quantity() {
        assert_eq!(parse_positive_quantity("quantity", "12").unwrap(), 12);
        assert!(parse_positive_quantity("quantity", "0").is_err());
        assert!(parse_positive_quantity("quantity", "-3").is_err());
        assert!(parse_positive_quantity("quantity", "2.5").is_err());
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_positive_number("std", "7.5").unwrap(), 7.5);
        assert!(parse_positive_number("std", "0").is_err());
        assert!(parse_positive_number("std", "NaN").is_err());
        assert_eq!(parse_number("hours", "-4").unwrap(), -4.0);
        assert_eq!(parse_integer("manpower", " -2 ").unwrap(), -2);
        assert!(parse_integer("manpower", "two").is_err());
    }

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("station", " CURING ").unwrap(), "CURING");
        let err = require_text("station", "   ").unwrap_err();
        assert_eq!(err.field(), Some("station"));
    }
}
