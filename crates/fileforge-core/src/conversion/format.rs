//! Target Formats

use std::fmt;

/// Output kind a conversion produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetFormat {
    Word,
    Excel,
    PowerPoint,
    Html,
    Jpeg,
    Png,
    Text,
    /// Anything not listed above
    Generic,
}

/// Whole-word keywords per format, checked in order
const KEYWORDS: &[(TargetFormat, &[&str])] = &[
    (TargetFormat::Word, &["word", "docx", "doc"]),
    (TargetFormat::Excel, &["excel", "xlsx", "xls"]),
    (TargetFormat::PowerPoint, &["powerpoint", "ppt", "pptx"]),
    (TargetFormat::Html, &["html", "htm"]),
    (TargetFormat::Jpeg, &["jpeg", "jpg"]),
    (TargetFormat::Png, &["png"]),
    (TargetFormat::Text, &["text", "txt"]),
];

impl TargetFormat {
    /// Classify a free-text label such as "PDF to Word".
    ///
    /// Only whole words count, so "Wordsmith Export" is `Generic`.
    pub fn classify(label: &str) -> Self {
        let words: Vec<String> = label
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(str::to_ascii_lowercase)
            .collect();

        KEYWORDS
            .iter()
            .find(|(_, keys)| words.iter().any(|w| keys.contains(&w.as_str())))
            .map(|(format, _)| *format)
            .unwrap_or(TargetFormat::Generic)
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            TargetFormat::Word => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            TargetFormat::Excel => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            TargetFormat::PowerPoint => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
            TargetFormat::Html => "text/html",
            TargetFormat::Jpeg => "image/jpeg",
            TargetFormat::Png => "image/png",
            TargetFormat::Text => "text/plain",
            TargetFormat::Generic => "application/pdf",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            TargetFormat::Word => "docx",
            TargetFormat::Excel => "xlsx",
            TargetFormat::PowerPoint => "pptx",
            TargetFormat::Html => "html",
            TargetFormat::Jpeg => "jpg",
            TargetFormat::Png => "png",
            TargetFormat::Text => "txt",
            TargetFormat::Generic => "pdf",
        }
    }

    /// Formats whose placeholder can be the real thing (markup or plain text)
    pub fn is_textual(self) -> bool {
        matches!(self, TargetFormat::Html | TargetFormat::Text)
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetFormat::Word => "Word",
            TargetFormat::Excel => "Excel",
            TargetFormat::PowerPoint => "PowerPoint",
            TargetFormat::Html => "HTML",
            TargetFormat::Jpeg => "JPEG",
            TargetFormat::Png => "PNG",
            TargetFormat::Text => "Text",
            TargetFormat::Generic => "Document",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_catalog_titles() {
        assert_eq!(TargetFormat::classify("PDF to Word"), TargetFormat::Word);
        assert_eq!(TargetFormat::classify("PDF to Excel"), TargetFormat::Excel);
        assert_eq!(TargetFormat::classify("PDF to PowerPoint"), TargetFormat::PowerPoint);
        assert_eq!(TargetFormat::classify("PDF to HTML"), TargetFormat::Html);
        assert_eq!(TargetFormat::classify("PDF to JPEG"), TargetFormat::Jpeg);
        assert_eq!(TargetFormat::classify("PDF to PNG"), TargetFormat::Png);
        assert_eq!(TargetFormat::classify("PDF to Text"), TargetFormat::Text);
        assert_eq!(TargetFormat::classify("Word"), TargetFormat::Word);
    }

    #[test]
    fn test_partial_words_do_not_match() {
        assert_eq!(TargetFormat::classify("Wordsmith Export"), TargetFormat::Generic);
        assert_eq!(TargetFormat::classify("Textile"), TargetFormat::Generic);
        assert_eq!(TargetFormat::classify("PDF to Markdown"), TargetFormat::Generic);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(TargetFormat::classify("pdf-to-word"), TargetFormat::Word);
        assert_eq!(TargetFormat::classify("JPG image"), TargetFormat::Jpeg);
    }

    #[test]
    fn test_only_markup_and_text_are_textual() {
        assert!(TargetFormat::Html.is_textual());
        assert!(TargetFormat::Text.is_textual());
        for format in [
            TargetFormat::Word,
            TargetFormat::Excel,
            TargetFormat::PowerPoint,
            TargetFormat::Jpeg,
            TargetFormat::Png,
            TargetFormat::Generic,
        ] {
            assert!(!format.is_textual(), "{format} should get a text note");
        }
    }
}
