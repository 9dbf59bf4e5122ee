//! # 统一错误处理模块
//!
//! 定义 nanocalc 的所有错误类型，使用 `thiserror` 派生。
//!
//! - [`AnalysisError`]: 核心计算（层间距、原子间距、带隙）的失败
//! - [`NanocalcError`]: 命令行层的失败（写文件、CSV、PDF）
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// 稳定的失败类别
///
/// 三个计算共用同一套分类，哨兵值映射见 `analysis::sentinel`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    FileNotFound,
    ReadError,
    HeaderParseError,
    InsufficientData,
    NoValidData,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::FileNotFound => write!(f, "file-not-found"),
            FailureKind::ReadError => write!(f, "read-error"),
            FailureKind::HeaderParseError => write!(f, "header-parse-error"),
            FailureKind::InsufficientData => write!(f, "insufficient-data"),
            FailureKind::NoValidData => write!(f, "no-valid-data"),
        }
    }
}

/// 核心计算错误
#[derive(Error, Debug)]
pub enum AnalysisError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Could not read the {expected} from the first line of the {format} file")]
    HeaderParseError {
        format: &'static str,
        expected: &'static str,
    },

    #[error("Insufficient number of atoms to compute {quantity} (found {found}, minimum of {required})")]
    InsufficientData {
        quantity: &'static str,
        found: i64,
        required: i64,
    },

    #[error("The number of atoms read ({parsed}) does not match the declared count ({declared})")]
    CountMismatch { declared: i64, parsed: usize },

    #[error("No valid energy values could be read from the {format} file")]
    NoValidData { format: &'static str },
}

impl AnalysisError {
    /// 从 I/O 错误构造，区分 "文件不存在" 与其他读取失败
    pub fn from_io(source: std::io::Error, path: impl Into<String>) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            AnalysisError::FileNotFound { path }
        } else {
            AnalysisError::FileReadError { path, source }
        }
    }

    /// 失败类别
    pub fn kind(&self) -> FailureKind {
        match self {
            AnalysisError::FileNotFound { .. } => FailureKind::FileNotFound,
            AnalysisError::FileReadError { .. } => FailureKind::ReadError,
            AnalysisError::HeaderParseError { .. } => FailureKind::HeaderParseError,
            AnalysisError::InsufficientData { .. } => FailureKind::InsufficientData,
            // 声明数与解析数不符按读取错误处理
            AnalysisError::CountMismatch { .. } => FailureKind::ReadError,
            AnalysisError::NoValidData { .. } => FailureKind::NoValidData,
        }
    }
}

/// nanocalc 统一错误类型
#[derive(Error, Debug)]
pub enum NanocalcError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// 带用户说明的计算失败
    #[error("{message}")]
    Computation {
        message: String,
        #[source]
        source: AnalysisError,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("PDF export failed: {0}")]
    PdfError(String),

    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, NanocalcError>;

/// 核心计算的 Result 类型别名
pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;
