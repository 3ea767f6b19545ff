use ratatui::layout::Rect;

/// Rectangle of `percent_x` by `percent_y` centred inside `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let h = area.height.saturating_mul(percent_y.min(100)) / 100;
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

/// Number of rows `text` takes when wrapped to `width` columns.
pub fn wrapped_height(text: &str, width: u16) -> usize {
    if width == 0 {
        return 0;
    }
    text.split('\n')
        .map(|line| textwrap::wrap(line, width as usize).len().max(1))
        .sum()
}
