//! # 原子坐标数据模型
//!
//! 定义从 .xyz 坐标文件解析得到的原子记录与文件表示。
//!
//! ## 依赖关系
//! - 被 `parsers/xyz.rs` 和 `analysis/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

/// 单个原子记录（坐标文件中的一行数据）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomRecord {
    /// 元素符号
    pub symbol: String,

    /// 笛卡尔坐标 (Å)
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl AtomRecord {
    pub fn new(symbol: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        AtomRecord {
            symbol: symbol.into(),
            x,
            y,
            z,
        }
    }

    /// 从已切分的字段构造: `symbol x y z [...]`
    ///
    /// 字段不足 4 个或任一坐标无法解析时返回 `None`。
    pub fn from_fields(fields: &[&str]) -> Option<Self> {
        if fields.len() < 4 {
            return None;
        }
        let x = fields[1].parse::<f64>().ok()?;
        let y = fields[2].parse::<f64>().ok()?;
        let z = fields[3].parse::<f64>().ok()?;
        Some(AtomRecord::new(fields[0], x, y, z))
    }

    /// 与另一原子的欧氏距离 (Å)
    pub fn distance_to(&self, other: &AtomRecord) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// 坐标文件
///
/// `T` 为每行数据的解析结果：层间距只需要 Z 坐标 (`f64`)，
/// 原子间距需要完整的 [`AtomRecord`]。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordinateFile<T> {
    /// 首行声明的原子数（可能为负或与实际不符，由调用方校验）
    pub declared_atoms: i64,

    /// 按文件顺序解析成功的记录
    pub records: Vec<T>,

    /// 被跳过的非空数据行（1 起始行号）
    pub skipped_lines: Vec<usize>,
}

impl<T> CoordinateFile<T> {
    /// 实际解析到的记录数
    pub fn parsed_count(&self) -> usize {
        self.records.len()
    }

    /// 声明数与解析数是否一致
    pub fn is_consistent(&self) -> bool {
        usize::try_from(self.declared_atoms).map_or(false, |n| n == self.records.len())
    }
}
