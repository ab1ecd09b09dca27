// ==========================================
// 复合材料制造 ERP - 工位定额领域模型
// ==========================================
// 职责: 工位 → 单件平均工时（分钟）静态定额表
// 红线: 定额表构建后不可变，运行期间不做增删
// ==========================================

use crate::domain::types::TaskComplexity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 未知工位的默认单件工时（分钟）
pub const DEFAULT_AVG_MINUTES_PER_UNIT: f64 = 60.0;

// 标准定额: (工位, 简单件, 中等件, 复杂件)，单位分钟
const STANDARD_NORMS: &[(&str, f64, f64, f64)] = &[
    ("MOULD_PREP", 20.0, 30.0, 40.0),
    ("GELCOAT", 30.0, 45.0, 60.0),
    ("LAMINATION", 60.0, 90.0, 120.0),
    ("CURING", 90.0, 120.0, 150.0),
    ("DEMOULDING", 15.0, 20.0, 25.0),
    ("TRIMMING", 20.0, 30.0, 40.0),
    ("FINISHING", 30.0, 40.0, 50.0),
    ("QUALITY_CHECK", 10.0, 15.0, 20.0),
];

/// 工位键归一化（去空白 + 大写）
pub fn normalize_station_key(station: &str) -> String {
    station.trim().to_uppercase()
}

// ==========================================
// StationNorm - 工位定额
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationNorm {
    pub station: String,  // 工位键
    pub simple_min: f64,  // 简单件工时
    pub medium_min: f64,  // 中等件工时
    pub complex_min: f64, // 复杂件工时

    /// 三档平均值；配置覆写时可省略，由 `normalized` 补算
    #[serde(default)]
    pub avg_min: f64,
}

impl StationNorm {
    /// 创建工位定额，平均值取三档算术平均
    pub fn new(station: &str, simple_min: f64, medium_min: f64, complex_min: f64) -> Self {
        Self {
            station: normalize_station_key(station),
            simple_min,
            medium_min,
            complex_min,
            avg_min: (simple_min + medium_min + complex_min) / 3.0,
        }
    }

    /// 归一化工位键，并在平均值缺失（<=0）时补算
    pub fn normalized(mut self) -> Self {
        self.station = normalize_station_key(&self.station);
        if self.avg_min <= 0.0 {
            self.avg_min = (self.simple_min + self.medium_min + self.complex_min) / 3.0;
        }
        self
    }

    /// 按复杂度取单件工时
    pub fn minutes_for(&self, complexity: TaskComplexity) -> f64 {
        match complexity {
            TaskComplexity::Simple => self.simple_min,
            TaskComplexity::Medium => self.medium_min,
            TaskComplexity::Complex => self.complex_min,
        }
    }
}

// ==========================================
// NormsTable - 定额表
// ==========================================
#[derive(Debug, Clone)]
pub struct NormsTable {
    norms: HashMap<String, StationNorm>,
    default_avg_min: f64,
}

impl NormsTable {
    /// 标准定额表（内置常量）
    pub fn standard() -> Self {
        let norms = STANDARD_NORMS
            .iter()
            .map(|(station, simple, medium, complex)| {
                let norm = StationNorm::new(station, *simple, *medium, *complex);
                (norm.station.clone(), norm)
            })
            .collect();

        Self {
            norms,
            default_avg_min: DEFAULT_AVG_MINUTES_PER_UNIT,
        }
    }

    /// 替换默认单件工时
    pub fn with_default_avg(mut self, default_avg_min: f64) -> Self {
        self.default_avg_min = default_avg_min;
        self
    }

    /// 合并覆写定额（同名工位整体替换，新工位追加）
    ///
    /// 消费 self，构建完成后表不再变化
    pub fn with_overrides(mut self, overrides: Vec<StationNorm>) -> Self {
        for norm in overrides {
            let norm = norm.normalized();
            self.norms.insert(norm.station.clone(), norm);
        }
        self
    }

    pub fn default_avg_min(&self) -> f64 {
        self.default_avg_min
    }

    pub fn get(&self, station: &str) -> Option<&StationNorm> {
        self.norms.get(&normalize_station_key(station))
    }

    /// 工位平均单件工时
    ///
    /// 返回: (分钟, 是否使用了默认值)
    pub fn avg_minutes_for(&self, station: &str) -> (f64, bool) {
        match self.get(station) {
            Some(norm) => (norm.avg_min, false),
            None => (self.default_avg_min, true),
        }
    }

    /// 按工位+复杂度取单件工时，未知工位回退默认值
    pub fn minutes_for(&self, station: &str, complexity: TaskComplexity) -> (f64, bool) {
        match self.get(station) {
            Some(norm) => (norm.minutes_for(complexity), false),
            None => (self.default_avg_min, true),
        }
    }

    /// 按工位键排序的全部定额
    pub fn stations(&self) -> Vec<&StationNorm> {
        let mut list: Vec<&StationNorm> = self.norms.values().collect();
        list.sort_by(|a, b| a.station.cmp(&b.station));
        list
    }

    pub fn len(&self) -> usize {
        self.norms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.norms.is_empty()
    }
}

impl Default for NormsTable {
    fn default() -> Self {
        Self::standard()
    }
}
