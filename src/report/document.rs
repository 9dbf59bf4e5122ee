//! # 报告内容组装
//!
//! 从结果存储和用户信息组装报告：标题、身份信息、三个固定顺序的章节。
//! 组装结果与输出格式无关，由 `text` / `pdf` 导出。
//!
//! ## 依赖关系
//! - 被 `report/text.rs`, `report/pdf.rs` 使用
//! - 使用 `report/store.rs`

use super::store::{Category, ResultStore};

/// 报告标题
pub const REPORT_TITLE: &str = "Structure and Band Analysis Report";

/// 空字段的显示文本
pub const NOT_PROVIDED: &str = "[Not provided]";

/// 报告封面的用户信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportIdentity {
    pub name: String,
    /// 身份（本科科研、硕士、博士等）
    pub role: String,
    pub advisor: String,
}

impl ReportIdentity {
    pub fn new(name: impl Into<String>, role: impl Into<String>, advisor: impl Into<String>) -> Self {
        ReportIdentity {
            name: name.into().trim().to_string(),
            role: role.into().trim().to_string(),
            advisor: advisor.into().trim().to_string(),
        }
    }

    /// 封面行: "Name: ..." 等，空字段显示占位
    pub fn lines(&self) -> Vec<String> {
        let or_placeholder = |s: &str| {
            if s.is_empty() {
                NOT_PROVIDED.to_string()
            } else {
                s.to_string()
            }
        };
        vec![
            format!("Name: {}", or_placeholder(&self.name)),
            format!("Role: {}", or_placeholder(&self.role)),
            format!("Advisor: {}", or_placeholder(&self.advisor)),
        ]
    }
}

/// 报告章节
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub heading: String,
    pub body: String,
}

/// 组装好的报告
#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub title: String,
    pub identity_lines: Vec<String>,
    pub sections: Vec<ReportSection>,
}

impl ReportDocument {
    pub fn assemble(store: &ResultStore, identity: &ReportIdentity) -> Self {
        let sections = Category::ALL
            .iter()
            .enumerate()
            .map(|(i, category)| ReportSection {
                heading: format!("{}. {}", i + 1, category.title()),
                body: store.text_or_placeholder(*category).to_string(),
            })
            .collect();

        ReportDocument {
            title: REPORT_TITLE.to_string(),
            identity_lines: identity.lines(),
            sections,
        }
    }

    /// 渲染为纯文本
    pub fn to_text(&self) -> String {
        let rule = "=".repeat(self.title.chars().count());
        let mut out = format!("{}\n{}\n\n", self.title, rule);
        for line in &self.identity_lines {
            out.push_str(line);
            out.push('\n');
        }
        for section in &self.sections {
            out.push('\n');
            out.push_str(&section.heading);
            out.push('\n');
            out.push_str(&"-".repeat(section.heading.chars().count()));
            out.push('\n');
            out.push_str(&section.body);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_placeholders() {
        let identity = ReportIdentity::new("  Ana  ", "", "Dr. Silva");
        assert_eq!(
            identity.lines(),
            vec![
                "Name: Ana".to_string(),
                format!("Role: {}", NOT_PROVIDED),
                "Advisor: Dr. Silva".to_string(),
            ]
        );
    }

    #[test]
    fn test_sections_fixed_order() {
        let mut store = ResultStore::new();
        store.record(Category::Gap, "Energy gap (eV): 1.1000");

        let doc = ReportDocument::assemble(&store, &ReportIdentity::default());
        let headings: Vec<&str> = doc.sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(
            headings,
            vec![
                "1. Interlayer Distance",
                "2. Interatomic Pair Distances",
                "3. Energy Gap"
            ]
        );
        assert_eq!(doc.sections[0].body, Category::Layers.placeholder());
        assert_eq!(doc.sections[2].body, "Energy gap (eV): 1.1000");
    }

    #[test]
    fn test_to_text_contains_everything() {
        let mut store = ResultStore::new();
        store.record(Category::Layers, "Interlayer distance:\n - In angstroms: 6.0000 Å");
        let doc = ReportDocument::assemble(&store, &ReportIdentity::new("Ana", "MSc", ""));
        let text = doc.to_text();

        assert!(text.starts_with(REPORT_TITLE));
        assert!(text.contains("Role: MSc"));
        assert!(text.contains(" - In angstroms: 6.0000 Å"));
        assert!(text.contains(Category::Distances.placeholder()));
        let layers = text.find("1. Interlayer").unwrap();
        let gap = text.find("3. Energy Gap").unwrap();
        assert!(layers < gap);
    }
}
