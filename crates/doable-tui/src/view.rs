//! The renderer — pure functions from the todo list to terminal rows.
//!
//! Everything here is a deterministic function of its inputs: the same
//! list always yields the same rows, and the app repaints the whole list
//! region every frame rather than diffing. Alongside the rows, the view
//! produces the row→id lookup the delete handler uses, so ids never have
//! to be scraped back out of rendered text.

use doable_core::{Todo, TodoId};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::theme;

/// Rendered instead of rows when the list is empty.
pub const EMPTY_PLACEHOLDER: &str = "no task to display";

/// The clickable delete control at the right edge of every row.
pub const DELETE_LABEL: &str = "[remove]";

#[allow(clippy::cast_possible_truncation)]
const DELETE_LABEL_WIDTH: u16 = DELETE_LABEL.len() as u16;

/// Build one line per todo (title left, delete control right-aligned),
/// or the single placeholder line for an empty list.
///
/// `width` is the inner width of the list region; `selected` highlights
/// that row. Pure and idempotent — calling this twice with the same
/// inputs yields identical lines.
pub fn todo_lines(todos: &[Todo], width: u16, selected: Option<usize>) -> Vec<Line<'static>> {
    if todos.is_empty() {
        return vec![Line::styled(EMPTY_PLACEHOLDER, theme::placeholder())];
    }

    let title_width = usize::from(width.saturating_sub(DELETE_LABEL_WIDTH + 1));

    todos
        .iter()
        .enumerate()
        .map(|(i, todo)| {
            let title: String = todo.title.chars().take(title_width).collect();
            let pad = title_width.saturating_sub(title.chars().count());

            let row_style = if selected == Some(i) {
                theme::list_selected()
            } else {
                theme::list_row()
            };

            Line::from(vec![
                Span::styled(title, row_style),
                Span::raw(" ".repeat(pad + 1)),
                Span::styled(DELETE_LABEL, theme::delete_control()),
            ])
        })
        .collect()
}

/// Geometry of each visible row's delete control, paired with the id of
/// the todo it came from.
///
/// Built at render time so a click resolves to a [`TodoId`] by hit-test,
/// never by parsing text. `scroll` is the index of the first visible row.
pub fn delete_zones(todos: &[Todo], inner: Rect, scroll: usize) -> Vec<(Rect, TodoId)> {
    if inner.width < DELETE_LABEL_WIDTH {
        return Vec::new();
    }
    let visible = usize::from(inner.height);
    let x = inner.x + inner.width - DELETE_LABEL_WIDTH;

    todos
        .iter()
        .enumerate()
        .skip(scroll)
        .take(visible)
        .map(|(i, todo)| {
            #[allow(clippy::cast_possible_truncation)]
            let y = inner.y + (i - scroll) as u16;
            (Rect::new(x, y, DELETE_LABEL_WIDTH, 1), todo.id)
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn todo(id: i64, title: &str) -> Todo {
        Todo {
            id: TodoId::new(id),
            title: title.to_owned(),
        }
    }

    #[test]
    fn rendering_twice_yields_identical_rows() {
        let todos = vec![todo(1, "a"), todo(2, "b")];
        let first = todo_lines(&todos, 40, Some(1));
        let second = todo_lines(&todos, 40, Some(1));
        assert_eq!(first, second);
    }

    #[test]
    fn empty_list_renders_exactly_the_placeholder() {
        let lines = todo_lines(&[], 40, None);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].to_string(), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn one_row_per_item_in_list_order() {
        let todos = vec![todo(1, "a"), todo(2, "b")];
        let lines = todo_lines(&todos, 40, None);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].to_string().starts_with('a'));
        assert!(lines[1].to_string().starts_with('b'));
    }

    #[test]
    fn every_row_carries_the_delete_control() {
        let todos = vec![todo(1, "buy milk")];
        let lines = todo_lines(&todos, 40, None);
        assert!(lines[0].to_string().ends_with(DELETE_LABEL));
    }

    #[test]
    fn long_titles_are_truncated_not_wrapped() {
        let todos = vec![todo(1, &"x".repeat(100))];
        let lines = todo_lines(&todos, 30, None);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].to_string().ends_with(DELETE_LABEL));
    }

    #[test]
    fn zones_pair_row_geometry_with_source_id() {
        let todos = vec![todo(10, "a"), todo(20, "b")];
        let inner = Rect::new(2, 5, 40, 10);
        let zones = delete_zones(&todos, inner, 0);

        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].1, TodoId::new(10));
        assert_eq!(zones[1].1, TodoId::new(20));
        // Both zones hug the right edge, one terminal row each.
        assert_eq!(zones[0].0.right(), inner.right());
        assert_eq!(zones[0].0.y, 5);
        assert_eq!(zones[1].0.y, 6);
        assert_eq!(zones[0].0.height, 1);
    }

    #[test]
    fn zones_respect_scroll_offset() {
        let todos = vec![todo(1, "a"), todo(2, "b"), todo(3, "c")];
        let inner = Rect::new(0, 0, 40, 2);
        let zones = delete_zones(&todos, inner, 1);

        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].1, TodoId::new(2));
        assert_eq!(zones[0].0.y, 0);
    }
}
