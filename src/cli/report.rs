//! # report / shell 子命令 CLI 定义
//!
//! 报告导出与交互式会话共用用户信息和图标参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/report.rs`, `commands/shell.rs`

use crate::report::{ReportAssets, ReportIdentity};
use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────
// 共用参数
// ─────────────────────────────────────────────────────────────

/// 报告封面上的用户信息
#[derive(Args, Debug, Clone, Default)]
pub struct IdentityArgs {
    /// Name shown on the report cover
    #[arg(long, default_value = "")]
    pub name: String,

    /// Role shown on the report cover (e.g. undergraduate researcher, MSc, PhD)
    #[arg(long, default_value = "")]
    pub role: String,

    /// Advisor shown on the report cover
    #[arg(long, default_value = "")]
    pub advisor: String,
}

impl IdentityArgs {
    pub fn to_identity(&self) -> ReportIdentity {
        ReportIdentity::new(&self.name, &self.role, &self.advisor)
    }
}

/// 报告图标
#[derive(Args, Debug, Clone, Default)]
pub struct LogoArgs {
    /// Image placed at the top-left of the PDF report
    #[arg(long)]
    pub primary_logo: Option<PathBuf>,

    /// Image placed at the top-right of the PDF report
    #[arg(long)]
    pub secondary_logo: Option<PathBuf>,
}

impl LogoArgs {
    pub fn to_assets(&self) -> ReportAssets {
        ReportAssets {
            primary_logo: self.primary_logo.clone(),
            secondary_logo: self.secondary_logo.clone(),
        }
    }
}

/// 报告输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ReportFormat {
    /// Paginated PDF document
    Pdf,
    /// Plain UTF-8 text
    Text,
}

impl ReportFormat {
    /// 根据扩展名推断（.txt/.text → Text，其他 → Pdf）
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .as_deref()
        {
            Some("txt") | Some("text") => ReportFormat::Text,
            _ => ReportFormat::Pdf,
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Pdf => write!(f, "pdf"),
            ReportFormat::Text => write!(f, "text"),
        }
    }
}

// ─────────────────────────────────────────────────────────────
// report 子命令
// ─────────────────────────────────────────────────────────────

/// report 子命令参数
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Coordinate file (.xyz) for the interlayer distance section
    #[arg(long)]
    pub layers: Option<PathBuf>,

    /// Coordinate file (.xyz) for the pair distance section
    #[arg(long)]
    pub distances: Option<PathBuf>,

    /// Energy file (.bands) for the energy gap section
    #[arg(long)]
    pub gap: Option<PathBuf>,

    #[command(flatten)]
    pub identity: IdentityArgs,

    #[command(flatten)]
    pub logos: LogoArgs,

    /// Output report file
    #[arg(short, long, default_value = "nanocalc_report.pdf")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

// ─────────────────────────────────────────────────────────────
// shell 子命令
// ─────────────────────────────────────────────────────────────

/// shell 子命令参数
#[derive(Args, Debug)]
pub struct ShellArgs {
    #[command(flatten)]
    pub identity: IdentityArgs,

    #[command(flatten)]
    pub logos: LogoArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ReportFormat::from_path(Path::new("out.pdf")), ReportFormat::Pdf);
        assert_eq!(ReportFormat::from_path(Path::new("out.TXT")), ReportFormat::Text);
        assert_eq!(ReportFormat::from_path(Path::new("report")), ReportFormat::Pdf);
    }

    #[test]
    fn test_cli_parses_report() {
        use crate::cli::{Cli, Commands};
        use clap::Parser;

        let cli = Cli::try_parse_from([
            "nanocalc",
            "report",
            "--gap",
            "si.bands",
            "--name",
            "Ana",
            "-o",
            "out.txt",
        ])
        .unwrap();
        match cli.command {
            Commands::Report(args) => {
                assert_eq!(args.gap, Some(PathBuf::from("si.bands")));
                assert!(args.layers.is_none());
                assert_eq!(args.identity.to_identity().name, "Ana");
                assert_eq!(args.format, None);
            }
            _ => panic!("expected report command"),
        }
    }
}
