//! # 数据模型模块
//!
//! 定义坐标文件、能带文件与三类计算结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `analysis/` 和 `commands/` 使用
//! - 子模块: structure, calculation

pub mod calculation;
pub mod structure;

pub use calculation::{BandGap, EnergyFile, LayerDistance, PairDistance, PairwiseDistances};
pub use structure::{AtomRecord, CoordinateFile};
