//! # 报告模块
//!
//! 展示层的结果缓存与报告导出。核心计算不依赖本模块。
//!
//! ## 子模块
//! - `store`: 三槽位最近结果存储
//! - `messages`: 失败类别 → 用户说明
//! - `document`: 报告内容组装（标题、用户信息、章节）
//! - `text`: 纯文本导出
//! - `pdf`: PDF 导出
//!
//! ## 依赖关系
//! - 被 `commands/report.rs`, `commands/shell.rs` 使用
//! - 使用 `models/`, `error.rs`

pub mod document;
pub mod messages;
pub mod pdf;
pub mod store;
pub mod text;

pub use document::{ReportDocument, ReportIdentity};
pub use store::{Category, ResultStore};

use std::path::PathBuf;

/// 报告中嵌入的两个可选图标
#[derive(Debug, Clone, Default)]
pub struct ReportAssets {
    /// 左上角（较大）
    pub primary_logo: Option<PathBuf>,
    /// 右上角（较小）
    pub secondary_logo: Option<PathBuf>,
}

/// 导出结果摘要
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub pages: usize,
    /// 非致命问题（如图标无法读取）
    pub warnings: Vec<String>,
}
