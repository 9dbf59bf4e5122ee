//! # 最近结果存储
//!
//! 展示层为三个计算类别各保留一个槽位，存放最近一次运行的格式化文本
//! （成功结果或错误说明）。每次运行覆盖对应槽位，不保留历史。
//!
//! ## 依赖关系
//! - 被 `commands/report.rs`, `commands/shell.rs` 使用
//! - 被 `report/document.rs` 读取
//! - 使用 `report/messages.rs` 生成错误说明

use super::messages;
use crate::error::AnalysisResult;
use crate::models::{BandGap, LayerDistance, PairwiseDistances};
use std::path::Path;

/// 计算类别（报告中的固定顺序即枚举顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Layers,
    Distances,
    Gap,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Layers, Category::Distances, Category::Gap];

    /// 报告章节标题
    pub fn title(&self) -> &'static str {
        match self {
            Category::Layers => "Interlayer Distance",
            Category::Distances => "Interatomic Pair Distances",
            Category::Gap => "Energy Gap",
        }
    }

    /// 未运行时的占位文本
    pub fn placeholder(&self) -> &'static str {
        match self {
            Category::Layers => "No interlayer distance calculation was performed.",
            Category::Distances => "No interatomic distance calculation was performed.",
            Category::Gap => "No energy gap calculation was performed.",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Layers => write!(f, "layers"),
            Category::Distances => write!(f, "distances"),
            Category::Gap => write!(f, "gap"),
        }
    }
}

/// 三槽位结果存储
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    layers: Option<String>,
    distances: Option<String>,
    gap: Option<String>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, category: Category) -> &mut Option<String> {
        match category {
            Category::Layers => &mut self.layers,
            Category::Distances => &mut self.distances,
            Category::Gap => &mut self.gap,
        }
    }

    /// 覆盖某一类别的文本，返回存入的文本
    pub fn record(&mut self, category: Category, text: impl Into<String>) -> &str {
        self.slot_mut(category).insert(text.into()).as_str()
    }

    pub fn get(&self, category: Category) -> Option<&str> {
        match category {
            Category::Layers => self.layers.as_deref(),
            Category::Distances => self.distances.as_deref(),
            Category::Gap => self.gap.as_deref(),
        }
    }

    /// 文本或占位文本
    pub fn text_or_placeholder(&self, category: Category) -> &str {
        self.get(category).unwrap_or_else(|| category.placeholder())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.get(*c).is_none())
    }

    /// 记录层间距运行结果
    pub fn record_layers(&mut self, path: &Path, result: &AnalysisResult<LayerDistance>) -> &str {
        let text = match result {
            Ok(d) => d.to_string(),
            Err(e) => format!("Error: {}", messages::layers_failure(e, path)),
        };
        self.record(Category::Layers, text)
    }

    /// 记录原子对间距运行结果
    pub fn record_distances(
        &mut self,
        path: &Path,
        result: &AnalysisResult<PairwiseDistances>,
    ) -> &str {
        let text = match result {
            Ok(d) => d.to_string(),
            Err(e) => format!("Error: {}", messages::distances_failure(e, path)),
        };
        self.record(Category::Distances, text)
    }

    /// 记录带隙运行结果
    pub fn record_gap(&mut self, path: &Path, result: &AnalysisResult<BandGap>) -> &str {
        let text = match result {
            Ok(g) => g.to_string(),
            Err(e) => format!("Error: {}", messages::gap_failure(e, path)),
        };
        self.record(Category::Gap, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;

    #[test]
    fn test_store_starts_empty() {
        let store = ResultStore::new();
        assert!(store.is_empty());
        assert_eq!(
            store.text_or_placeholder(Category::Gap),
            Category::Gap.placeholder()
        );
    }

    #[test]
    fn test_record_overwrites_slot() {
        let mut store = ResultStore::new();
        store.record(Category::Layers, "first");
        store.record(Category::Layers, "second");
        assert_eq!(store.get(Category::Layers), Some("second"));
        assert_eq!(store.get(Category::Distances), None);
        assert!(!store.is_empty());

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_record_success_and_failure_text() {
        let mut store = ResultStore::new();
        let path = Path::new("data/MoS2.xyz");

        let ok: AnalysisResult<LayerDistance> = Ok(LayerDistance {
            angstrom: 6.0,
            bohr: 6.0 * 1.8897259886,
        });
        assert!(store.record_layers(path, &ok).contains("6.0000 Å"));

        let failed: AnalysisResult<LayerDistance> = Err(AnalysisError::FileNotFound {
            path: path.display().to_string(),
        });
        let text = store.record_layers(path, &failed).to_string();
        assert!(text.starts_with("Error:"));
        assert!(text.contains("MoS2.xyz"));
        assert_eq!(store.get(Category::Layers), Some(text.as_str()));
    }
}
