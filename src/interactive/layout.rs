use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level layout regions
pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub notifications: Rect,
    pub footer: Rect,
}

pub fn app_layout(area: Rect, has_notice: bool) -> AppLayout {
    let notice_height = if has_notice { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(notice_height),
            Constraint::Length(1),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        notifications: chunks[2],
        footer: chunks[3],
    }
}

/// Split the admin manage view into a record list and a detail pane.
/// Narrow terminals (<100 cols) get the list only.
pub fn manage_layout(area: Rect) -> (Rect, Rect) {
    if area.width < 100 {
        return (area, Rect::default());
    }
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Center a popup of given width/height in the area
pub fn centered_popup(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_is_centered_and_clipped() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_popup(60, 20, area), Rect::new(20, 10, 60, 20));
        let small = Rect::new(0, 0, 30, 10);
        assert_eq!(centered_popup(60, 20, small), Rect::new(0, 0, 30, 10));
    }

    #[test]
    fn notice_row_only_when_needed() {
        let area = Rect::new(0, 0, 120, 40);
        assert_eq!(app_layout(area, false).notifications.height, 0);
        assert_eq!(app_layout(area, true).notifications.height, 3);
    }
}
