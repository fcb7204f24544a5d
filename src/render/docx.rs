//! WordprocessingML rendering and `.docx` packaging.

use chrono::SecondsFormat;

use crate::error::Result;
use crate::model::{Document, Metadata, Paragraph, Run, RunStyle};

use super::package::PackageWriter;
use super::{PageSize, RenderOptions};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const NS_MAIN: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
    r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#,
    r#"</Types>"#
);

const PACKAGE_RELS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>"#,
    r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>"#,
    r#"</Relationships>"#
);

/// MIME type of a `.docx` package.
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Encode a document as a `.docx` package.
pub fn to_docx(doc: &Document, options: &RenderOptions) -> Result<Vec<u8>> {
    let document_xml = to_document_xml(doc, options);
    let core_xml = to_core_xml(&doc.metadata);

    let mut writer = PackageWriter::new(options.compression, doc.metadata.created);
    writer.add("[Content_Types].xml", CONTENT_TYPES.as_bytes())?;
    writer.add("_rels/.rels", PACKAGE_RELS.as_bytes())?;
    writer.add("docProps/core.xml", core_xml.as_bytes())?;
    writer.add("word/document.xml", document_xml.as_bytes())?;
    let bytes = writer.finish()?;

    log::debug!(
        "Encoded {} paragraphs into {} byte package",
        doc.paragraph_count(),
        bytes.len()
    );
    Ok(bytes)
}

/// Render the `word/document.xml` part.
pub fn to_document_xml(doc: &Document, options: &RenderOptions) -> String {
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECLARATION);
    xml.push_str(&format!(r#"<w:document xmlns:w="{}"><w:body>"#, NS_MAIN));

    for paragraph in doc.paragraphs() {
        write_paragraph(&mut xml, paragraph);
    }

    write_section_properties(&mut xml, options.page_size);
    xml.push_str("</w:body></w:document>");
    xml
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph) {
    xml.push_str("<w:p><w:pPr>");
    xml.push_str(&format!(
        r#"<w:jc w:val="{}"/>"#,
        paragraph.alignment.as_wordml()
    ));
    xml.push_str("</w:pPr>");
    for run in &paragraph.runs {
        write_run(xml, run);
    }
    xml.push_str("</w:p>");
}

fn write_run(xml: &mut String, run: &Run) {
    xml.push_str("<w:r>");
    write_run_properties(xml, &run.style);
    if run.text.starts_with(char::is_whitespace) || run.text.ends_with(char::is_whitespace) {
        xml.push_str(r#"<w:t xml:space="preserve">"#);
    } else {
        xml.push_str("<w:t>");
    }
    xml.push_str(&escape_xml(&run.text));
    xml.push_str("</w:t></w:r>");
}

// Element order follows CT_RPr.
fn write_run_properties(xml: &mut String, style: &RunStyle) {
    xml.push_str("<w:rPr>");

    let font = escape_xml(&style.font);
    xml.push_str(&format!(
        r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:cs="{0}"/>"#,
        font
    ));
    if style.bold {
        xml.push_str("<w:b/>");
    }
    if style.italic {
        xml.push_str("<w:i/>");
    }
    if style.strike {
        xml.push_str("<w:strike/>");
    }
    if let Some(ref color) = style.color {
        if is_hex_color(color) {
            xml.push_str(&format!(r#"<w:color w:val="{}"/>"#, color));
        } else {
            log::warn!("Skipping non-hex color {:?}", color);
        }
    }
    if let Some(size) = style.size {
        xml.push_str(&format!(
            r#"<w:sz w:val="{0}"/><w:szCs w:val="{0}"/>"#,
            size
        ));
    }
    if let Some(underline) = style.underline {
        xml.push_str(&format!(r#"<w:u w:val="{}"/>"#, underline.as_wordml()));
    }

    xml.push_str("</w:rPr>");
}

fn write_section_properties(xml: &mut String, page_size: PageSize) {
    let (width, height) = page_size.twips();
    xml.push_str(&format!(
        concat!(
            r#"<w:sectPr><w:pgSz w:w="{}" w:h="{}"/>"#,
            r#"<w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" "#,
            r#"w:header="720" w:footer="720" w:gutter="0"/></w:sectPr>"#
        ),
        width, height
    ));
}

/// Render the `docProps/core.xml` part.
pub fn to_core_xml(metadata: &Metadata) -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(concat!(
        r#"<cp:coreProperties "#,
        r#"xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/" "#,
        r#"xmlns:dcterms="http://purl.org/dc/terms/" "#,
        r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#
    ));

    if let Some(ref title) = metadata.title {
        xml.push_str(&format!("<dc:title>{}</dc:title>", escape_xml(title)));
    }
    if let Some(ref author) = metadata.author {
        xml.push_str(&format!("<dc:creator>{}</dc:creator>", escape_xml(author)));
    }
    if let Some(ref created) = metadata.created {
        xml.push_str(&format!(
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
            created.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
    }

    xml.push_str("</cp:coreProperties>");
    xml
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 6 && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Escape XML special characters.
fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Alignment, Underline};
    use chrono::{TimeZone, Utc};

    fn styled_doc() -> Document {
        let mut p = Paragraph::new().aligned(Alignment::Justified);
        p.add_run(Run::new(" lead"));
        p.add_run(Run::styled(
            "B&W <tag>",
            RunStyle {
                bold: true,
                italic: true,
                strike: true,
                underline: Some(Underline::Single),
                color: Some("e60000".to_string()),
                size: Some(36),
                font: "Georgia".to_string(),
            },
        ));
        Document::from_paragraphs(vec![p])
    }

    #[test]
    fn test_document_xml_paragraph() {
        let xml = to_document_xml(&styled_doc(), &RenderOptions::default());

        assert!(xml.starts_with(XML_DECLARATION));
        assert!(xml.contains(r#"<w:jc w:val="both"/>"#));
        assert!(xml.contains(r#"<w:t xml:space="preserve"> lead</w:t>"#));
        assert!(xml.contains("<w:t>B&amp;W &lt;tag&gt;</w:t>"));
        assert!(xml.contains(r#"<w:rFonts w:ascii="Georgia" w:hAnsi="Georgia" w:cs="Georgia"/>"#));
        assert!(xml.contains(
            r#"<w:b/><w:i/><w:strike/><w:color w:val="e60000"/><w:sz w:val="36"/><w:szCs w:val="36"/><w:u w:val="single"/>"#
        ));
        assert!(xml.ends_with("</w:sectPr></w:body></w:document>"));
    }

    #[test]
    fn test_invalid_color_skipped() {
        let doc = Document::from_paragraphs(vec![Paragraph::from_runs(
            vec![Run::styled(
                "x",
                RunStyle {
                    color: Some("rgb(1,2,3)".to_string()),
                    ..Default::default()
                },
            )],
            Alignment::Left,
        )]);

        let xml = to_document_xml(&doc, &RenderOptions::default());
        assert!(!xml.contains("w:color"));
    }

    #[test]
    fn test_page_size() {
        let doc = Document::from_paragraphs(vec![Paragraph::blank()]);
        let letter = to_document_xml(&doc, &RenderOptions::default());
        assert!(letter.contains(r#"<w:pgSz w:w="12240" w:h="15840"/>"#));

        let a4 = to_document_xml(&doc, &RenderOptions::new().with_page_size(PageSize::A4));
        assert!(a4.contains(r#"<w:pgSz w:w="11906" w:h="16838"/>"#));
    }

    #[test]
    fn test_core_xml() {
        let metadata = Metadata {
            title: Some("Q&A".to_string()),
            author: Some("Ops".to_string()),
            created: Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
            ..Default::default()
        };

        let xml = to_core_xml(&metadata);
        assert!(xml.contains("<dc:title>Q&amp;A</dc:title>"));
        assert!(xml.contains("<dc:creator>Ops</dc:creator>"));
        assert!(xml.contains(">2024-05-01T12:00:00Z</dcterms:created>"));
    }

    #[test]
    fn test_to_docx_magic() {
        let bytes = to_docx(&styled_doc(), &RenderOptions::default()).unwrap();
        assert!(bytes.starts_with(b"PK\x03\x04"));
        // First entry name follows the 30 byte local header
        assert_eq!(&bytes[30..49], b"[Content_Types].xml");
    }
}
