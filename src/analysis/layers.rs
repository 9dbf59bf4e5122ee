//! # 层间距计算
//!
//! 从 .xyz 坐标文件的 Z 坐标求两层之间的距离。
//!
//! ## 算法
//! 1. 前两个原子视为下层，取 Z 平均
//! 2. 第 `natoms-1`、`natoms` 个原子视为上层，取 Z 平均
//! 3. 距离 = 上层平均 - 下层平均，再换算为 bohr
//!
//! ## 已知限制
//! 层的划分完全依赖原子在文件中的顺序（下层在前、上层在后），
//! 不做任何几何聚类。原子未按层排序的文件会得到无意义的结果。
//!
//! ## 依赖关系
//! - 被 `commands/layers.rs`, `commands/report.rs`, `commands/shell.rs` 调用
//! - 使用 `parsers/xyz.rs`

use super::ANGSTROM_TO_BOHR;
use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{CoordinateFile, LayerDistance};
use crate::parsers::xyz;
use std::path::Path;

/// 最少原子数：上下层各两个
pub const MIN_ATOMS: i64 = 4;

/// 读取坐标文件并计算层间距
pub fn layer_distance_from_file(path: &Path) -> AnalysisResult<LayerDistance> {
    let file = xyz::parse_xyz_file(path, xyz::z_coordinate)?;
    layer_distance(&file)
}

/// 从已解析的 Z 坐标序列计算层间距
pub fn layer_distance(file: &CoordinateFile<f64>) -> AnalysisResult<LayerDistance> {
    let natoms = file.declared_atoms;
    if natoms < MIN_ATOMS {
        return Err(AnalysisError::InsufficientData {
            quantity: "the interlayer distance",
            found: natoms,
            required: MIN_ATOMS,
        });
    }

    if !file.is_consistent() {
        return Err(AnalysisError::CountMismatch {
            declared: natoms,
            parsed: file.parsed_count(),
        });
    }

    // 上层索引按声明原子数取（此时已与解析数一致）
    let z = &file.records;
    let n = natoms as usize;
    let bottom = (z[0] + z[1]) / 2.0;
    let top = (z[n - 1] + z[n - 2]) / 2.0;

    let angstrom = top - bottom;
    Ok(LayerDistance {
        angstrom,
        bohr: angstrom * ANGSTROM_TO_BOHR,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;

    fn from_content(content: &str) -> AnalysisResult<LayerDistance> {
        let file = xyz::parse_xyz_content(content, xyz::z_coordinate)?;
        layer_distance(&file)
    }

    #[test]
    fn test_layer_distance_bilayer() {
        let content = r#"6
MoS2 bilayer
S  0.0 0.0 1.0
S  1.0 0.0 3.0
Mo 0.5 0.5 2.0
Mo 0.5 0.5 8.0
S  0.0 0.0 7.0
S  1.0 0.0 9.0
"#;
        let d = from_content(content).unwrap();
        // 下层 (1+3)/2 = 2，上层 (7+9)/2 = 8
        assert!((d.angstrom - 6.0).abs() < 1e-12);
        assert!((d.bohr - d.angstrom * ANGSTROM_TO_BOHR).abs() < 1e-12);
    }

    #[test]
    fn test_layer_distance_uses_position_not_geometry() {
        // 未排序的文件：仍按位置取前两个、后两个
        let content = "4\n\nC 0 0 10.0\nC 0 0 10.0\nC 0 0 0.0\nC 0 0 0.0\n";
        let d = from_content(content).unwrap();
        assert!((d.angstrom + 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_layer_distance_insufficient_atoms() {
        let content = "3\n\nC 0 0 0\nC 0 0 1\nC 0 0 2\n";
        let err = from_content(content).unwrap_err();
        assert_eq!(err.kind(), FailureKind::InsufficientData);

        let err = from_content("-2\n").unwrap_err();
        assert_eq!(err.kind(), FailureKind::InsufficientData);
    }

    #[test]
    fn test_layer_distance_count_mismatch() {
        let content = "5\n\nC 0 0 0\nC 0 0 1\nC 0 0 2\nC 0 0 3\n";
        let err = from_content(content).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::CountMismatch {
                declared: 5,
                parsed: 4
            }
        ));
        assert_eq!(err.kind(), FailureKind::ReadError);
    }

    #[test]
    fn test_layer_distance_too_many_lines() {
        let content = "4\n\nC 0 0 0\nC 0 0 1\nC 0 0 2\nC 0 0 3\nC 0 0 4\n";
        let err = from_content(content).unwrap_err();
        assert!(matches!(err, AnalysisError::CountMismatch { .. }));
    }

    #[test]
    fn test_layer_distance_skips_bad_z_only() {
        // 第 4 字段非数值的行被跳过，补齐后数量一致
        let content = "4\n\nC 0 0 0\nC 0 0 zz\nC 0 0 1\nC bad bad 5\nC 0 0 7\n";
        let d = from_content(content).unwrap();
        // 下层 (0+1)/2，上层 (5+7)/2
        assert!((d.angstrom - 5.5).abs() < 1e-12);
    }
}
