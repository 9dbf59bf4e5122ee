//! # XYZ 坐标文件解析器
//!
//! ## .xyz 格式说明
//! ```text
//! 4                      # 原子数
//! MoS2 bilayer           # 注释行（忽略）
//! Mo  0.000 0.000 0.000  # symbol x y z [额外字段忽略]
//! S   1.590 0.918 1.560
//! ...
//! ```
//!
//! 数据行从第 3 行开始。不足 4 个字段的行、以及行解析函数拒绝的行
//! 都会被跳过而不中断解析；是否与声明的原子数一致由调用方判断。
//!
//! ## 依赖关系
//! - 被 `analysis/layers.rs`, `analysis/pairwise.rs` 使用
//! - 使用 `models/structure.rs`

use super::{read_text, split_fields};
use crate::error::{AnalysisError, AnalysisResult};
use crate::models::CoordinateFile;
use std::path::Path;

/// 数据行最少字段数: symbol x y z
pub const MIN_FIELDS: usize = 4;

/// 读取坐标文件，逐行用 `parse_row` 解析数据行
pub fn parse_xyz_file<T, F>(path: &Path, parse_row: F) -> AnalysisResult<CoordinateFile<T>>
where
    F: Fn(&[&str]) -> Option<T>,
{
    let content = read_text(path)?;
    parse_xyz_content(&content, parse_row)
}

/// 从字符串内容解析坐标文件
pub fn parse_xyz_content<T, F>(content: &str, parse_row: F) -> AnalysisResult<CoordinateFile<T>>
where
    F: Fn(&[&str]) -> Option<T>,
{
    let mut lines = content.lines();

    // Line 0: 原子数
    let declared_atoms = lines
        .next()
        .and_then(|l| l.trim().parse::<i64>().ok())
        .ok_or(AnalysisError::HeaderParseError {
            format: "xyz",
            expected: "number of atoms",
        })?;

    let mut records = Vec::new();
    let mut skipped_lines = Vec::new();

    // Line 1 为注释，数据从 Line 2 开始
    for (idx, line) in content.lines().enumerate().skip(2) {
        let fields = split_fields(line);
        if fields.is_empty() {
            continue;
        }
        if fields.len() < MIN_FIELDS {
            skipped_lines.push(idx + 1);
            continue;
        }
        match parse_row(&fields) {
            Some(record) => records.push(record),
            None => skipped_lines.push(idx + 1),
        }
    }

    Ok(CoordinateFile {
        declared_atoms,
        records,
        skipped_lines,
    })
}

/// 只取第 4 个字段作为 Z 坐标（X/Y 不做校验）
pub fn z_coordinate(fields: &[&str]) -> Option<f64> {
    fields.get(3)?.parse().ok()
}
