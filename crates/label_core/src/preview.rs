use crate::{LabelImage, PreviewPairView, PreviewResponse};

pub const FULL_LABEL_ALT: &str = "Full Label Preview";
pub const SMALL_LABEL_ALT: &str = "Small Label Preview";
pub const MISSING_LABEL_ALT: &str = "N/A";

/// Builds one preview pair per non-blank line of `submitted_text`.
///
/// URLs are looked up by the raw line index, so blank lines are skipped but
/// still consume a slot. Headings count rendered pairs only.
pub fn render_preview(response: &PreviewResponse, submitted_text: &str) -> Vec<PreviewPairView> {
    submitted_text
        .split('\n')
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .enumerate()
        .map(|(position, (line_index, _))| PreviewPairView {
            heading: format!("Label {}", position + 1),
            line_index,
            full: label_image(&response.full_label_urls, line_index, FULL_LABEL_ALT),
            small: label_image(&response.small_label_urls, line_index, SMALL_LABEL_ALT),
        })
        .collect()
}

fn label_image(urls: &[Option<String>], index: usize, alt: &'static str) -> LabelImage {
    let src = urls
        .get(index)
        .and_then(|url| url.as_deref())
        .unwrap_or_default();
    LabelImage {
        src: src.to_string(),
        alt: if src.is_empty() { MISSING_LABEL_ALT } else { alt },
    }
}

#[cfg(test)]
mod tests {
    use super::{render_preview, MISSING_LABEL_ALT};
    use crate::PreviewResponse;

    fn urls(items: &[&str]) -> Vec<Option<String>> {
        items.iter().map(|item| Some(item.to_string())).collect()
    }

    #[test]
    fn blank_line_consumes_index_but_not_heading() {
        let response = PreviewResponse {
            full_label_urls: urls(&["f0", "f1", "f2"]),
            small_label_urls: urls(&["s0", "s1", "s2"]),
            error: None,
        };
        let pairs = render_preview(&response, "A\n   \nB");

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].heading, "Label 2");
        assert_eq!(pairs[1].line_index, 2);
        assert_eq!(pairs[1].full.src, "f2");
        assert_eq!(pairs[1].small.src, "s2");
    }

    #[test]
    fn missing_urls_render_placeholders() {
        let response = PreviewResponse {
            full_label_urls: vec![Some("f0".to_string()), None, Some(String::new())],
            small_label_urls: Vec::new(),
            error: None,
        };
        let pairs = render_preview(&response, "A\nB\nC\nD");

        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[0].full.alt, "Full Label Preview");
        assert_eq!(pairs[0].small.src, "");
        assert_eq!(pairs[0].small.alt, MISSING_LABEL_ALT);
        for pair in &pairs[1..] {
            assert_eq!(pair.full.src, "");
            assert_eq!(pair.full.alt, MISSING_LABEL_ALT);
        }
    }

    #[test]
    fn empty_text_renders_nothing() {
        let response = PreviewResponse {
            full_label_urls: urls(&["f0"]),
            small_label_urls: urls(&["s0"]),
            error: None,
        };
        assert!(render_preview(&response, "").is_empty());
        assert!(render_preview(&response, "\n \n\t").is_empty());
    }

    #[test]
    fn carriage_returns_count_as_whitespace() {
        let response = PreviewResponse::default();
        let pairs = render_preview(&response, "A\r\n\r\nB\r\n");

        let indices: Vec<_> = pairs.iter().map(|p| p.line_index).collect();
        assert_eq!(indices, vec![0, 2]);
    }
}
