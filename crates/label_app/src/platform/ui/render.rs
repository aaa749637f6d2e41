use label_core::{AppViewModel, LabelImage, PreviewPairView};

use super::constants::MAX_SRC_CHARS;

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    let line_count = if view.text.is_empty() {
        0
    } else {
        view.text.split('\n').count()
    };
    lines.push(format!(
        "== Labels | lines: {} | full: {} | small: {} ==",
        line_count,
        on_off(view.include_full_label),
        on_off(view.include_small_label)
    ));

    if view.pairs.is_empty() {
        lines.push("(no previews)".to_string());
    }
    for pair in &view.pairs {
        lines.extend(format_pair(pair));
    }

    if let Some(status) = &view.status {
        lines.push(format!("status: {status}"));
    }
    if !view.waiting.is_empty() {
        lines.push(format!("print: {}", view.waiting));
    }

    if !view.print_log.is_empty() {
        lines.push("-- print log --".to_string());
        lines.extend(view.print_log.iter().map(|entry| entry.display_line()));
    }

    lines
}

fn format_pair(pair: &PreviewPairView) -> [String; 3] {
    [
        format!("{} (line {})", pair.heading, pair.line_index + 1),
        format!("  full:  {}", format_image(&pair.full)),
        format!("  small: {}", format_image(&pair.small)),
    ]
}

fn format_image(image: &LabelImage) -> String {
    if image.src.is_empty() {
        return format!("[{}]", image.alt);
    }
    format!("[{}] {}", image.alt, abbreviate(&image.src, MAX_SRC_CHARS))
}

/// Inline data URIs run to kilobytes; keep the head and the length.
fn abbreviate(src: &str, max_chars: usize) -> String {
    match src.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}... ({} bytes)", &src[..end], src.len()),
        None => src.to_string(),
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}
