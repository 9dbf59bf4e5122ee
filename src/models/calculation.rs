//! # 计算结果数据模型
//!
//! 存储能带文件内容以及三个核心计算的结果：
//! 层间距、原子对间距、带隙。
//!
//! 每个结果都实现 `Display`，输出格式即终端与报告中使用的文本，
//! 数值统一保留 4 位小数。
//!
//! ## 依赖关系
//! - 被 `parsers/bands.rs`, `analysis/` 使用
//! - 被 `commands/`, `report/` 使用

use serde::{Deserialize, Serialize};
use std::fmt;

/// 能带文件 (.bands)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyFile {
    /// 首行的费米能级 (eV)
    pub fermi_level: f64,

    /// 后续各行的全部能量值 (eV)，顺序对带隙计算无影响
    pub energies: Vec<f64>,

    /// 因含非数值字段而整行丢弃的行号（1 起始）
    pub skipped_lines: Vec<usize>,
}

/// 层间距结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerDistance {
    pub angstrom: f64,
    pub bohr: f64,
}

impl fmt::Display for LayerDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Interlayer distance:")?;
        writeln!(f, " - In angstroms: {:.4} Å", self.angstrom)?;
        write!(f, " - In bohr: {:.4} bohr", self.bohr)
    }
}

/// 一对原子的间距
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairDistance {
    /// 第一个原子的序号（1 起始）
    pub first: usize,
    pub first_symbol: String,

    /// 第二个原子的序号（1 起始），总是大于 `first`
    pub second: usize,
    pub second_symbol: String,

    pub angstrom: f64,
    pub bohr: f64,
}

impl fmt::Display for PairDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>3} {:<2} - {:>3} {:<2}: {:>10.4} Å    {:>10.4} bohr",
            self.first,
            self.first_symbol,
            self.second,
            self.second_symbol,
            self.angstrom,
            self.bohr
        )
    }
}

/// 全部原子对间距
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PairwiseDistances {
    /// 按 (i, j) 字典序排列，i < j
    pub pairs: Vec<PairDistance>,
}

impl PairwiseDistances {
    pub const HEADER: &'static str = "Interatomic pair distances (Å and bohr):";

    /// 最短的原子对（键长分析常用）
    pub fn shortest(&self) -> Option<&PairDistance> {
        self.pairs
            .iter()
            .min_by(|a, b| a.angstrom.total_cmp(&b.angstrom))
    }
}

impl fmt::Display for PairwiseDistances {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::HEADER)?;
        for pair in &self.pairs {
            write!(f, "\n{}", pair)?;
        }
        Ok(())
    }
}

/// 带隙结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BandGap {
    /// 半导体/绝缘体：正带隙
    Gap { gap: f64, fermi_level: f64 },
    /// 金属：带隙不大于零，报告费米能级
    Metallic { fermi_level: f64 },
}

impl BandGap {
    /// 根据费米能级两侧的能带边缘分类
    ///
    /// `highest_occupied` 为不高于费米能级的最大能量，
    /// `lowest_unoccupied` 为高于费米能级的最小能量（缺失时分别为 ±∞）。
    pub fn classify(fermi_level: f64, highest_occupied: f64, lowest_unoccupied: f64) -> Self {
        let gap = lowest_unoccupied - highest_occupied;
        if gap <= 0.0 {
            BandGap::Metallic { fermi_level }
        } else {
            BandGap::Gap { gap, fermi_level }
        }
    }

    /// 显示值：带隙，或金属情况下的费米能级
    pub fn value(&self) -> f64 {
        match *self {
            BandGap::Gap { gap, .. } => gap,
            BandGap::Metallic { fermi_level } => fermi_level,
        }
    }

    pub fn is_metallic(&self) -> bool {
        matches!(self, BandGap::Metallic { .. })
    }

    pub fn fermi_level(&self) -> f64 {
        match *self {
            BandGap::Gap { fermi_level, .. } | BandGap::Metallic { fermi_level } => fermi_level,
        }
    }
}

impl fmt::Display for BandGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BandGap::Gap { gap, .. } => write!(f, "Energy gap (eV): {:.4}", gap),
            BandGap::Metallic { fermi_level } => {
                writeln!(f, "Fermi level read: {:.4} eV", fermi_level)?;
                write!(f, "Metallic material (no gap detected).")
            }
        }
    }
}
