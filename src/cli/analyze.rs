//! # 计算子命令 CLI 定义
//!
//! `layers`, `distances`, `gap` 三个单次计算命令的参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/layers.rs`, `commands/distances.rs`, `commands/gap.rs`

use clap::Args;
use std::path::PathBuf;

/// layers 子命令参数
#[derive(Args, Debug)]
pub struct LayersArgs {
    /// Coordinate file (.xyz): atom count, comment, then `symbol x y z` lines
    pub input: PathBuf,

    /// Print only the two numbers (Å, bohr); failures print sentinel codes
    #[arg(long, default_value_t = false)]
    pub raw: bool,

    /// Report skipped (malformed) data lines
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// distances 子命令参数
#[derive(Args, Debug)]
pub struct DistancesArgs {
    /// Coordinate file (.xyz): atom count, comment, then `symbol x y z` lines
    pub input: PathBuf,

    /// Print the plain text listing instead of a table
    #[arg(long, default_value_t = false)]
    pub plain: bool,

    /// Also write all pair distances to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Report skipped (malformed) data lines
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// gap 子命令参数
#[derive(Args, Debug)]
pub struct GapArgs {
    /// Energy file (.bands): Fermi level, then energies separated by whitespace
    pub input: PathBuf,

    /// Print only the value and the metallic flag; failures print sentinel codes
    #[arg(long, default_value_t = false)]
    pub raw: bool,

    /// Report discarded (non-numeric) lines
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
