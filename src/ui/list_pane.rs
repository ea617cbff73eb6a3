use crate::app::Application;
use crate::domain::{Task, UiMode};
use crate::ui::rows::RowView;
use crate::ui::styles::{
    border_style, checkbox_style, cursor_style, date_style, selected_style, text_field_style,
    title_style, window_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Columns taken by everything except the text field:
/// marker (2) + date label (12) + checkbox (4)
const FIXED_COLUMNS: usize = 18;

/// Render the task list pane
pub fn render_list_pane(f: &mut Frame, app: &Application, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Gestor de Tareas ", title_style()))
        .style(window_style());

    if app.rows.is_empty() {
        let empty = Paragraph::new(Line::raw(" No tasks yet. Press 'a' to add one."))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let field_width = (area.width as usize)
        .saturating_sub(2 + FIXED_COLUMNS)
        .max(1);

    let items: Vec<ListItem> = app
        .rows
        .iter()
        .enumerate()
        .filter_map(|(idx, row)| {
            let task = app.store.get(row.handle)?;
            let selected = idx == app.selected_index;
            let cursor = (selected && app.ui_mode == UiMode::EditingText).then_some(app.cursor);
            Some(ListItem::new(create_task_line(task, row, selected, cursor, field_width)))
        })
        .collect();

    let list = List::new(items).block(block);
    let mut state = ListState::default().with_selected(Some(app.selected_index));
    f.render_stateful_widget(list, area, &mut state);
}

/// Create a single row: marker, text field, date label, checkbox
/// Format: > Buy milk________________ 05/04/2025 [x]
fn create_task_line(
    task: &Task,
    row: &RowView,
    selected: bool,
    cursor: Option<usize>,
    field_width: usize,
) -> Line<'static> {
    let mut spans = Vec::new();

    if selected {
        spans.push(Span::styled("> ".to_string(), selected_style()));
    } else {
        spans.push(Span::styled("  ".to_string(), window_style()));
    }

    let field_style = text_field_style(row.treatment);
    let chars: Vec<char> = task.text.chars().collect();

    // Scroll the field so the cursor stays visible
    let start = match cursor {
        Some(pos) if pos >= field_width => pos + 1 - field_width,
        _ => 0,
    };
    let visible: Vec<char> = chars
        .iter()
        .copied()
        .chain(std::iter::repeat(' '))
        .skip(start)
        .take(field_width)
        .collect();

    match cursor {
        Some(pos) => {
            let at = pos - start;
            let before: String = visible[..at].iter().collect();
            let under: String = visible[at..=at.min(visible.len() - 1)].iter().collect();
            let after: String = visible[(at + 1).min(visible.len())..].iter().collect();
            spans.push(Span::styled(before, field_style));
            spans.push(Span::styled(under, field_style.patch(cursor_style())));
            spans.push(Span::styled(after, field_style));
        }
        None => {
            spans.push(Span::styled(visible.into_iter().collect::<String>(), field_style));
        }
    }

    spans.push(Span::styled(format!(" {:^10} ", task.created_at), date_style()));

    let checkbox = if task.done { "[x] " } else { "[ ] " };
    spans.push(Span::styled(checkbox.to_string(), checkbox_style()));

    Line::from(spans)
}
