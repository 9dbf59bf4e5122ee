//! # 哨兵数值边界
//!
//! 为需要纯数值输出的调用方（脚本、旧版流程）把失败类别映射成保留的
//! 负数哨兵值。哨兵值不是物理量，展示层不应把它当作结果显示。
//!
//! | 类别 | 层间距 | 带隙 |
//! |---|---|---|
//! | 文件不存在 / 读取失败 / 数量不符 | -999.99 | -999.99 |
//! | 首行解析失败 | -999.99 | -888.88 |
//! | 原子数不足 | -888.88 | - |
//! | 无有效数据 | - | -777.77 |
//!
//! ## 依赖关系
//! - 被 `commands/layers.rs`, `commands/gap.rs` 调用（`--raw`）
//! - 使用 `analysis/layers.rs`, `analysis/gap.rs`

use crate::error::{AnalysisResult, FailureKind};
use crate::models::{BandGap, LayerDistance};
use std::path::Path;

/// 文件无法打开/读取，或声明数与解析数不符
pub const READ_FAILURE: f64 = -999.99;

/// 数据不足（层间距）或首行无法解析（带隙）
pub const INSUFFICIENT: f64 = -888.88;

/// 没有任何有效能量值
pub const NO_VALID_DATA: f64 = -777.77;

/// 层间距失败类别对应的哨兵值
pub fn layer_sentinel(kind: FailureKind) -> f64 {
    match kind {
        FailureKind::InsufficientData => INSUFFICIENT,
        // 层间距的首行错误与读取错误同码
        FailureKind::FileNotFound
        | FailureKind::ReadError
        | FailureKind::HeaderParseError
        | FailureKind::NoValidData => READ_FAILURE,
    }
}

/// 带隙失败类别对应的哨兵值
pub fn gap_sentinel(kind: FailureKind) -> f64 {
    match kind {
        FailureKind::HeaderParseError | FailureKind::InsufficientData => INSUFFICIENT,
        FailureKind::NoValidData => NO_VALID_DATA,
        FailureKind::FileNotFound | FailureKind::ReadError => READ_FAILURE,
    }
}

/// 层间距结果 → (Å, bohr)，失败时两个值都是哨兵
pub fn layer_values(result: &AnalysisResult<LayerDistance>) -> (f64, f64) {
    match result {
        Ok(d) => (d.angstrom, d.bohr),
        Err(e) => {
            let s = layer_sentinel(e.kind());
            (s, s)
        }
    }
}

/// 带隙结果 → (值, 是否金属)，失败时为 (哨兵, false)
pub fn gap_values(result: &AnalysisResult<BandGap>) -> (f64, bool) {
    match result {
        Ok(gap) => (gap.value(), gap.is_metallic()),
        Err(e) => (gap_sentinel(e.kind()), false),
    }
}

/// 读取文件并以哨兵协议返回层间距
pub fn layer_distance_values(path: &Path) -> (f64, f64) {
    layer_values(&super::layer_distance_from_file(path))
}

/// 读取文件并以哨兵协议返回带隙
pub fn band_gap_values(path: &Path) -> (f64, bool) {
    gap_values(&super::band_gap_from_file(path))
}
