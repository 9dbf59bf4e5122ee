//! # 带隙计算
//!
//! ## 算法
//! 1. 一次扫描全部能量，记录不高于费米能级的最大值（价带顶）
//!    与高于费米能级的最小值（导带底）
//! 2. 带隙 = 导带底 - 价带顶
//! 3. 带隙不大于零判定为金属，报告费米能级
//!
//! 扫描中两个条件是 if / else-if 关系：一个能量只会更新其中一个边缘。
//! 若某一侧没有能量，该侧保持 ±∞，带隙为 +∞。
//!
//! ## 依赖关系
//! - 被 `commands/gap.rs`, `commands/report.rs`, `commands/shell.rs` 调用
//! - 使用 `parsers/bands.rs`

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{BandGap, EnergyFile};
use crate::parsers::bands;
use std::path::Path;

/// 读取 .bands 文件并计算带隙
pub fn band_gap_from_file(path: &Path) -> AnalysisResult<BandGap> {
    let file = bands::parse_bands_file(path)?;
    band_gap(&file)
}

/// 从已解析的能带文件计算带隙
pub fn band_gap(file: &EnergyFile) -> AnalysisResult<BandGap> {
    if file.energies.is_empty() {
        return Err(AnalysisError::NoValidData { format: "bands" });
    }

    let (highest_occupied, lowest_unoccupied) = band_edges(file.fermi_level, &file.energies);
    Ok(BandGap::classify(
        file.fermi_level,
        highest_occupied,
        lowest_unoccupied,
    ))
}

/// 求费米能级两侧的能带边缘: (价带顶, 导带底)
pub fn band_edges(fermi_level: f64, energies: &[f64]) -> (f64, f64) {
    let mut highest_occupied = f64::NEG_INFINITY;
    let mut lowest_unoccupied = f64::INFINITY;

    for &energy in energies {
        if energy <= fermi_level && energy > highest_occupied {
            highest_occupied = energy;
        } else if energy > fermi_level && energy < lowest_unoccupied {
            lowest_unoccupied = energy;
        }
    }

    (highest_occupied, lowest_unoccupied)
}
