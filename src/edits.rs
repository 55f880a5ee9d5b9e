//! Collection Edit Helpers
//!
//! Pure functions producing updated todo collections. The UI never
//! mutates the shared collection in place; every edit builds the full
//! replacement value here and hands it to the owner's write signal.

use crate::models::Todo;

/// Flip `completed` on the todo with the given id.
pub fn toggle_completed(todos: &[Todo], id: u32) -> Vec<Todo> {
    todos
        .iter()
        .map(|todo| {
            if todo.id == id {
                Todo {
                    completed: !todo.completed,
                    ..todo.clone()
                }
            } else {
                todo.clone()
            }
        })
        .collect()
}

/// Replace the title on the todo with the given id.
pub fn rename(todos: &[Todo], id: u32, title: &str) -> Vec<Todo> {
    todos
        .iter()
        .map(|todo| {
            if todo.id == id {
                Todo {
                    title: title.to_string(),
                    ..todo.clone()
                }
            } else {
                todo.clone()
            }
        })
        .collect()
}

/// Splice out the todo with the given id.
///
/// Returns `None` when the id is not present so the caller can skip
/// replacing the collection.
pub fn remove(todos: &[Todo], id: u32) -> Option<Vec<Todo>> {
    let index = todos.iter().position(|todo| todo.id == id)?;
    let mut next = todos.to_vec();
    next.remove(index);
    Some(next)
}

/// Collapse whitespace-only edit input to empty; keep anything else raw.
pub fn normalize_draft(input: &str) -> String {
    if input.trim().is_empty() {
        String::new()
    } else {
        input.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Todo;

    fn make_todo(id: u32, title: &str, completed: bool) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            completed,
        }
    }

    #[test]
    fn test_toggle_flips_only_matching_todo() {
        let todos = vec![make_todo(1, "A", false), make_todo(2, "B", true)];

        let toggled = toggle_completed(&todos, 1);

        assert_eq!(toggled.len(), 2);
        assert_eq!(toggled[0], make_todo(1, "A", true));
        assert_eq!(toggled[1], make_todo(2, "B", true));
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let todos = vec![make_todo(1, "A", false), make_todo(2, "B", true)];

        let twice = toggle_completed(&toggle_completed(&todos, 2), 2);

        assert_eq!(twice, todos);
    }

    #[test]
    fn test_toggle_unknown_id_changes_nothing() {
        let todos = vec![make_todo(1, "A", false)];

        assert_eq!(toggle_completed(&todos, 9), todos);
    }

    #[test]
    fn test_rename_replaces_only_title() {
        let todos = vec![make_todo(1, "A", false), make_todo(2, "B", true)];

        let renamed = rename(&todos, 2, "Bee");

        assert_eq!(renamed[0], make_todo(1, "A", false));
        assert_eq!(renamed[1], make_todo(2, "Bee", true));
    }

    #[test]
    fn test_rename_keeps_raw_padding() {
        let todos = vec![make_todo(1, "A", false)];

        let renamed = rename(&todos, 1, "  padded  ");

        assert_eq!(renamed[0].title, "  padded  ");
    }

    #[test]
    fn test_remove_splices_out_matching_todo() {
        let todos = vec![make_todo(1, "A", false), make_todo(2, "B", true)];

        let removed = remove(&todos, 1).unwrap();

        assert_eq!(removed, vec![make_todo(2, "B", true)]);
    }

    #[test]
    fn test_remove_keeps_display_order() {
        let todos = vec![
            make_todo(1, "A", false),
            make_todo(2, "B", true),
            make_todo(3, "C", false),
        ];

        let removed = remove(&todos, 2).unwrap();

        assert_eq!(removed, vec![make_todo(1, "A", false), make_todo(3, "C", false)]);
    }

    #[test]
    fn test_remove_unknown_id_is_none() {
        let todos = vec![make_todo(1, "A", false)];

        assert!(remove(&todos, 9).is_none());
    }

    #[test]
    fn test_normalize_draft_collapses_whitespace_only() {
        assert_eq!(normalize_draft(""), "");
        assert_eq!(normalize_draft("   "), "");
        assert_eq!(normalize_draft("\t\n"), "");
    }

    #[test]
    fn test_normalize_draft_keeps_raw_text() {
        assert_eq!(normalize_draft("buy milk"), "buy milk");
        assert_eq!(normalize_draft("  buy milk  "), "  buy milk  ");
    }
}
