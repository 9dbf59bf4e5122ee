//! # PDF 报告导出
//!
//! 使用 `printpdf` 生成 A4 报告。
//!
//! ## 版式
//! - 顶部左右两个可选图标（左 30 mm 宽、右 20 mm 宽）
//! - 居中标题与用户信息
//! - 三个固定顺序的章节：粗体标题 + 等宽正文（自动换行）
//! - 内容到达下边距时自动分页
//!
//! 图标无法读取时用文字占位并返回警告，不中断导出。
//! 内置字体只可靠地覆盖 ASCII，正文在写入前做转写（`Å` → `A`）。
//!
//! ## 依赖关系
//! - 被 `commands/report.rs`, `commands/shell.rs` 调用
//! - 使用 `report/document.rs` 的 ReportDocument
//! - 使用 `printpdf` 渲染

use super::document::ReportDocument;
use super::{ExportSummary, ReportAssets};
use crate::error::{NanocalcError, Result};

use printpdf::image_crate::{self, DynamicImage};
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

// ─────────────────────────────────────────────────────────────
// 版式常量 (mm)
// ─────────────────────────────────────────────────────────────
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 10.0;
const BOTTOM_MARGIN: f32 = 15.0;
const PT_TO_MM: f32 = 0.3528;

const LOGO_TOP: f32 = 10.0;
const PRIMARY_LOGO_X: f32 = 10.0;
const PRIMARY_LOGO_WIDTH: f32 = 30.0;
const SECONDARY_LOGO_X: f32 = 170.0;
const SECONDARY_LOGO_WIDTH: f32 = 20.0;
const LOGO_DPI: f32 = 300.0;
/// 无图标时正文的起始位置
const CONTENT_TOP: f32 = 30.0;

const TITLE_SIZE: f32 = 16.0;
const IDENTITY_SIZE: f32 = 10.0;
const HEADING_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 10.0;
const BODY_LINE: f32 = 5.5;

#[derive(Debug, Clone, Copy)]
enum Face {
    Regular,
    Bold,
    Mono,
}

impl Face {
    /// 平均字宽 / 字号（估算居中与换行用）
    fn width_factor(self) -> f32 {
        match self {
            Face::Regular => 0.5,
            Face::Bold => 0.55,
            Face::Mono => 0.6,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Align {
    Left,
    Center,
}

/// 导出 PDF 报告
pub fn export_pdf(
    document: &ReportDocument,
    assets: &ReportAssets,
    output_path: &Path,
) -> Result<ExportSummary> {
    let mut writer = PdfWriter::new(&document.title)?;
    let mut warnings = Vec::new();

    // 图标行
    let primary = writer.logo(
        assets.primary_logo.as_deref(),
        PRIMARY_LOGO_X,
        PRIMARY_LOGO_WIDTH,
        &mut warnings,
    );
    let secondary = writer.logo(
        assets.secondary_logo.as_deref(),
        SECONDARY_LOGO_X,
        SECONDARY_LOGO_WIDTH,
        &mut warnings,
    );
    writer.cursor = (LOGO_TOP + primary.max(secondary) + 5.0).max(CONTENT_TOP);

    // 标题与用户信息
    writer.line(&document.title, TITLE_SIZE, Face::Bold, Align::Center, 10.0);
    writer.skip(5.0);
    for line in &document.identity_lines {
        writer.line(line, IDENTITY_SIZE, Face::Regular, Align::Center, 7.0);
    }
    writer.skip(10.0);

    // 章节
    for section in &document.sections {
        // 标题不与正文首行分页
        writer.ensure_space(10.0 + BODY_LINE);
        writer.line(&section.heading, HEADING_SIZE, Face::Bold, Align::Left, 10.0);
        writer.paragraph(&section.body);
        writer.skip(5.0);
    }

    let pages = writer.pages;
    writer.save(output_path)?;

    Ok(ExportSummary {
        path: output_path.to_path_buf(),
        pages,
        warnings,
    })
}

/// 带光标的逐行写入器
struct PdfWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    mono: IndirectFontRef,
    /// 距页面顶部 (mm)
    cursor: f32,
    pages: usize,
}

impl PdfWriter {
    fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Page 1");
        let layer = doc.get_page(page).get_layer(layer);

        let font = |f: BuiltinFont| {
            doc.add_builtin_font(f)
                .map_err(|e| NanocalcError::PdfError(e.to_string()))
        };
        let regular = font(BuiltinFont::Helvetica)?;
        let bold = font(BuiltinFont::HelveticaBold)?;
        let mono = font(BuiltinFont::Courier)?;

        Ok(PdfWriter {
            doc,
            layer,
            regular,
            bold,
            mono,
            cursor: MARGIN,
            pages: 1,
        })
    }

    fn font(&self, face: Face) -> &IndirectFontRef {
        match face {
            Face::Regular => &self.regular,
            Face::Bold => &self.bold,
            Face::Mono => &self.mono,
        }
    }

    fn new_page(&mut self) {
        self.pages += 1;
        let (page, layer) = self.doc.add_page(
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            format!("Page {}", self.pages),
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.cursor = MARGIN;
    }

    fn ensure_space(&mut self, height: f32) {
        if self.cursor + height > PAGE_HEIGHT - BOTTOM_MARGIN {
            self.new_page();
        }
    }

    fn skip(&mut self, height: f32) {
        self.cursor += height;
    }

    fn line(&mut self, text: &str, size: f32, face: Face, align: Align, height: f32) {
        self.ensure_space(height);
        let text = pdf_safe(text);
        let x = match align {
            Align::Left => MARGIN,
            Align::Center => {
                let width = text.chars().count() as f32 * size * PT_TO_MM * face.width_factor();
                ((PAGE_WIDTH - width) / 2.0).max(MARGIN)
            }
        };
        // use_text 的 y 是基线位置，原点在左下角
        let y = PAGE_HEIGHT - self.cursor - height * 0.75;
        self.layer.use_text(text, size, Mm(x), Mm(y), self.font(face));
        self.cursor += height;
    }

    /// 等宽正文，按页宽换行
    fn paragraph(&mut self, body: &str) {
        let char_width = BODY_SIZE * PT_TO_MM * Face::Mono.width_factor();
        let max_chars = ((PAGE_WIDTH - 2.0 * MARGIN) / char_width).floor() as usize;
        for raw in body.lines() {
            for piece in wrap_line(&pdf_safe(raw), max_chars) {
                self.line(&piece, BODY_SIZE, Face::Mono, Align::Left, BODY_LINE);
            }
        }
    }

    /// 在页面顶部放置图标，返回占用高度
    fn logo(
        &self,
        path: Option<&Path>,
        x: f32,
        width: f32,
        warnings: &mut Vec<String>,
    ) -> f32 {
        let Some(path) = path else {
            return 0.0;
        };

        let image = match load_image(path) {
            Ok(image) => image,
            Err(reason) => {
                warnings.push(format!(
                    "Could not add image '{}' to the PDF: {}",
                    path.display(),
                    reason
                ));
                let label = format!(
                    "[{} missing]",
                    path.file_stem()
                        .map(|s| s.to_string_lossy().to_string())
                        .unwrap_or_else(|| "logo".to_string())
                );
                let y = PAGE_HEIGHT - LOGO_TOP - 7.0;
                self.layer
                    .use_text(pdf_safe(&label), 9.0, Mm(x), Mm(y), &self.regular);
                return 10.0;
            }
        };

        let px_width = image.image.width.0 as f32;
        let px_height = image.image.height.0 as f32;
        let natural_width = px_width / LOGO_DPI * 25.4;
        let scale = width / natural_width;
        let height = px_height / LOGO_DPI * 25.4 * scale;

        image.add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(x)),
                translate_y: Some(Mm(PAGE_HEIGHT - LOGO_TOP - height)),
                scale_x: Some(scale),
                scale_y: Some(scale),
                dpi: Some(LOGO_DPI),
                ..Default::default()
            },
        );
        height
    }

    fn save(self, output_path: &Path) -> Result<()> {
        let file = File::create(output_path).map_err(|e| NanocalcError::FileWriteError {
            path: output_path.display().to_string(),
            source: e,
        })?;
        self.doc
            .save(&mut BufWriter::new(file))
            .map_err(|e| NanocalcError::PdfError(e.to_string()))
    }
}

/// 读取图片并转为不带透明通道的 RGB
fn load_image(path: &Path) -> std::result::Result<Image, String> {
    let decoded = image_crate::open(path).map_err(|e| e.to_string())?;
    let rgb = DynamicImage::ImageRgb8(decoded.to_rgb8());
    Ok(Image::from_dynamic_image(&rgb))
}

/// 转写为内置字体可显示的 ASCII
fn pdf_safe(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'Å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' => 'A',
            'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
            'É' | 'È' | 'Ê' | 'Ë' => 'E',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'Ç' => 'C',
            'ç' => 'c',
            'Ñ' => 'N',
            'ñ' => 'n',
            '\t' => ' ',
            c if c.is_ascii() => c,
            _ => '?',
        })
        .collect()
}

/// 按最大字符数换行，优先在空白处断开
fn wrap_line(line: &str, max_chars: usize) -> Vec<String> {
    let chars: Vec<char> = line.trim_end().chars().collect();
    if chars.len() <= max_chars || max_chars == 0 {
        return vec![chars.into_iter().collect()];
    }

    let mut pieces = Vec::new();
    let mut start = 0;
    while chars.len() - start > max_chars {
        let window = &chars[start..start + max_chars];
        let cut = window
            .iter()
            .rposition(|c| c.is_whitespace())
            .filter(|&p| p > 0)
            .unwrap_or(max_chars);
        pieces.push(chars[start..start + cut].iter().collect::<String>());
        start += cut;
        // 续行不以空白开头
        while start < chars.len() && chars[start].is_whitespace() {
            start += 1;
        }
    }
    if start < chars.len() {
        pieces.push(chars[start..].iter().collect());
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Category, ReportIdentity, ResultStore};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_pdf_safe() {
        assert_eq!(pdf_safe("1.2345 Å"), "1.2345 A");
        assert_eq!(pdf_safe("João Conceição"), "Joao Conceicao");
        assert_eq!(pdf_safe("λ"), "?");
    }

    #[test]
    fn test_wrap_line() {
        assert_eq!(wrap_line("short", 10), vec!["short".to_string()]);
        assert_eq!(
            wrap_line("aaaa bbbb cccc", 9),
            vec!["aaaa".to_string(), "bbbb cccc".to_string()]
        );
        assert_eq!(
            wrap_line("abcdefghij", 4),
            vec!["abcd".to_string(), "efgh".to_string(), "ij".to_string()]
        );
        // 行首缩进保留
        assert_eq!(wrap_line("  1 C", 10), vec!["  1 C".to_string()]);
    }

    #[test]
    fn test_export_pdf_without_logos() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.pdf");

        let mut store = ResultStore::new();
        store.record(Category::Gap, "Energy gap (eV): 1.1200");
        let doc = ReportDocument::assemble(&store, &ReportIdentity::new("Ana", "PhD", ""));

        let summary = export_pdf(&doc, &ReportAssets::default(), &path).unwrap();
        assert_eq!(summary.pages, 1);
        assert!(summary.warnings.is_empty());

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_export_pdf_bad_logo_warns() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.pdf");
        let broken = dir.path().join("broken.png");
        fs::write(&broken, b"not an image").unwrap();

        let assets = ReportAssets {
            primary_logo: Some(dir.path().join("missing.png")),
            secondary_logo: Some(broken),
        };
        let doc = ReportDocument::assemble(&ResultStore::new(), &ReportIdentity::default());

        let summary = export_pdf(&doc, &assets, &path).unwrap();
        assert_eq!(summary.warnings.len(), 2);
        assert!(path.exists());
    }

    #[test]
    fn test_export_pdf_paginates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("long.pdf");

        let body: Vec<String> = (1..=200)
            .map(|i| format!("{:>3} C  - {:>3} C :     1.0000 Å        1.8897 bohr", i, i + 1))
            .collect();
        let mut store = ResultStore::new();
        store.record(Category::Distances, body.join("\n"));
        let doc = ReportDocument::assemble(&store, &ReportIdentity::default());

        let summary = export_pdf(&doc, &ReportAssets::default(), &path).unwrap();
        assert!(summary.pages >= 4);
    }
}
