//! # 核心计算模块
//!
//! 三个彼此独立、无状态的计算：
//! - `layers`: 层间距（按文件位置划分上下层）
//! - `pairwise`: 全部原子对间距
//! - `gap`: 带隙 / 金属判定
//!
//! 以及 `sentinel`: 将失败类别映射为传统哨兵数值的边界层。
//!
//! 本模块只处理文件内容与数值，不涉及报告、用户信息或图片。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `parsers/`, `models/`

pub mod gap;
pub mod layers;
pub mod pairwise;
pub mod sentinel;

pub use gap::{band_gap, band_gap_from_file};
pub use layers::{layer_distance, layer_distance_from_file};
pub use pairwise::{pairwise_distances, pairwise_distances_from_file};

/// Å → bohr 换算系数
pub const ANGSTROM_TO_BOHR: f64 = 1.8897259886;
