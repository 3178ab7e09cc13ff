//! Text measurement and truncation for legend boxes.

/// Heuristic: estimate pixel width of text (plotters has no built-in text measuring).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Truncate to fit `max_px`, ending in a single ellipsis when anything was cut.
pub fn truncate_to_width(text: &str, font_px: u32, max_px: u32) -> String {
    if estimate_text_width_px(text, font_px) <= max_px {
        return text.to_string();
    }
    let mut out: String = String::new();
    for ch in text.chars() {
        out.push(ch);
        let with_ellipsis =
            estimate_text_width_px(&out, font_px).saturating_add(estimate_text_width_px("…", font_px));
        if with_ellipsis > max_px {
            out.pop();
            break;
        }
    }
    out.push('…');
    out
}
