//! # 原子对间距计算
//!
//! 对坐标文件中的每一对原子 (i < j) 计算三维欧氏距离。
//! 枚举顺序为 i 外层升序、j 内层升序，序号从 1 开始显示。
//!
//! ## 依赖关系
//! - 被 `commands/distances.rs`, `commands/report.rs`, `commands/shell.rs` 调用
//! - 使用 `parsers/xyz.rs`, `models/structure.rs`

use super::ANGSTROM_TO_BOHR;
use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{AtomRecord, CoordinateFile, PairDistance, PairwiseDistances};
use crate::parsers::xyz;
use std::path::Path;

/// 最少原子数
pub const MIN_ATOMS: i64 = 2;

/// 读取坐标文件并计算全部原子对间距
pub fn pairwise_distances_from_file(path: &Path) -> AnalysisResult<PairwiseDistances> {
    let file = xyz::parse_xyz_file(path, AtomRecord::from_fields)?;
    pairwise_distances(&file)
}

/// 从已解析的原子记录计算全部原子对间距
pub fn pairwise_distances(file: &CoordinateFile<AtomRecord>) -> AnalysisResult<PairwiseDistances> {
    if file.declared_atoms < MIN_ATOMS {
        return Err(AnalysisError::InsufficientData {
            quantity: "pair distances",
            found: file.declared_atoms,
            required: MIN_ATOMS,
        });
    }

    if !file.is_consistent() {
        return Err(AnalysisError::CountMismatch {
            declared: file.declared_atoms,
            parsed: file.parsed_count(),
        });
    }

    let atoms = &file.records;
    let n = atoms.len();
    let mut pairs = Vec::with_capacity(n * (n - 1) / 2);

    for (i, a) in atoms.iter().enumerate() {
        for (j, b) in atoms.iter().enumerate().skip(i + 1) {
            let angstrom = a.distance_to(b);
            pairs.push(PairDistance {
                first: i + 1,
                first_symbol: a.symbol.clone(),
                second: j + 1,
                second_symbol: b.symbol.clone(),
                angstrom,
                bohr: angstrom * ANGSTROM_TO_BOHR,
            });
        }
    }

    Ok(PairwiseDistances { pairs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;

    fn from_content(content: &str) -> AnalysisResult<PairwiseDistances> {
        let file = xyz::parse_xyz_content(content, AtomRecord::from_fields)?;
        pairwise_distances(&file)
    }

    const WATER: &str = r#"3
water
O  0.000  0.000  0.000
H  0.757  0.586  0.000
H -0.757  0.586  0.000
"#;

    #[test]
    fn test_pair_count_and_order() {
        let content = "5\n\nC 0 0 0\nC 1 0 0\nC 2 0 0\nC 3 0 0\nC 4 0 0\n";
        let result = from_content(content).unwrap();
        assert_eq!(result.pairs.len(), 5 * 4 / 2);

        let order: Vec<(usize, usize)> = result.pairs.iter().map(|p| (p.first, p.second)).collect();
        let mut expected = Vec::new();
        for i in 1..=5 {
            for j in (i + 1)..=5 {
                expected.push((i, j));
            }
        }
        assert_eq!(order, expected);

        // 直线上原子间距 = 序号差
        for p in &result.pairs {
            assert!((p.angstrom - (p.second - p.first) as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn test_water_distances() {
        let result = from_content(WATER).unwrap();
        assert_eq!(result.pairs.len(), 3);

        let oh = &result.pairs[0];
        assert_eq!((oh.first_symbol.as_str(), oh.second_symbol.as_str()), ("O", "H"));
        let expected = (0.757f64.powi(2) + 0.586f64.powi(2)).sqrt();
        assert!((oh.angstrom - expected).abs() < 1e-12);
        assert!((oh.bohr - expected * ANGSTROM_TO_BOHR).abs() < 1e-12);

        let hh = &result.pairs[2];
        assert!((hh.angstrom - 1.514).abs() < 1e-12);
    }

    #[test]
    fn test_rendered_values_reparse() {
        let result = from_content(WATER).unwrap();
        let text = result.to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(PairwiseDistances::HEADER));

        for (line, pair) in lines.zip(&result.pairs) {
            let (_, values) = line.split_once(':').unwrap();
            let numbers: Vec<f64> = values
                .split_whitespace()
                .filter_map(|s| s.parse().ok())
                .collect();
            assert_eq!(numbers.len(), 2);
            assert_eq!(format!("{:.4}", numbers[0]), format!("{:.4}", pair.angstrom));
            assert_eq!(format!("{:.4}", numbers[1]), format!("{:.4}", pair.bohr));
        }
    }

    #[test]
    fn test_insufficient_atoms() {
        let err = from_content("1\n\nH 0 0 0\n").unwrap_err();
        assert_eq!(err.kind(), FailureKind::InsufficientData);
        assert!(err.to_string().contains("minimum of 2"));
    }

    #[test]
    fn test_count_mismatch_names_both_counts() {
        let content = "3\n\nH 0 0 0\nH 0 0 x\nH 0 0 1\n";
        let err = from_content(content).unwrap_err();
        assert_eq!(err.kind(), FailureKind::ReadError);
        let msg = err.to_string();
        assert!(msg.contains("(2)") && msg.contains("(3)"));
    }

    #[test]
    fn test_two_atoms_single_pair() {
        let result = from_content("2\n\nH 0 0 0\nH 0 0 0.74\n").unwrap();
        assert_eq!(result.pairs.len(), 1);
        assert_eq!(result.shortest().map(|p| p.second), Some(2));
    }
}
