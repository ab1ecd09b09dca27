// ==========================================
// 复合材料制造 ERP - 数值工具
// ==========================================

/// 四舍五入到指定小数位
pub fn round_dp(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// 向下取整到指定小数位
pub fn floor_dp(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).floor() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_dp() {
        assert_eq!(round_dp(66.666_666, 1), 66.7);
        assert_eq!(round_dp(2.345, 2), 2.35);
        assert_eq!(round_dp(-1.26, 1), -1.3);
        assert_eq!(round_dp(8.0, 2), 8.0);
    }

    #[test]
    fn test_floor_dp() {
        assert_eq!(floor_dp(150.55, 1), 150.5);
        assert_eq!(floor_dp(999.0, 1), 999.0);
    }
}
