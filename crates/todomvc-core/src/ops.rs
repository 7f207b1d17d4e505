//! List Transforms
//!
//! Pure `&[TodoItem] -> Vec<TodoItem>` functions behind each handler.
//! Unknown ids leave the list unchanged.

use crate::item::{TodoId, TodoItem};

pub(crate) fn append(list: &[TodoItem], item: TodoItem) -> Vec<TodoItem> {
    let mut next = list.to_vec();
    next.push(item);
    next
}

/// Apply `f` to the item with `id`, cloning everything else as-is
fn map_item(list: &[TodoItem], id: TodoId, f: impl Fn(&mut TodoItem)) -> Vec<TodoItem> {
    list.iter()
        .cloned()
        .map(|mut item| {
            if item.id == id {
                f(&mut item);
            }
            item
        })
        .collect()
}

pub(crate) fn rename(list: &[TodoItem], id: TodoId, content: &str) -> Vec<TodoItem> {
    map_item(list, id, |item| {
        item.content = content.to_string();
        item.editing = false;
    })
}

pub(crate) fn remove(list: &[TodoItem], id: TodoId) -> Vec<TodoItem> {
    list.iter().filter(|item| item.id != id).cloned().collect()
}

pub(crate) fn toggle(list: &[TodoItem], id: TodoId) -> Vec<TodoItem> {
    map_item(list, id, |item| item.complete = !item.complete)
}

pub(crate) fn begin_edit(list: &[TodoItem], id: TodoId) -> Vec<TodoItem> {
    map_item(list, id, |item| item.editing = true)
}

pub(crate) fn set_all_complete(list: &[TodoItem], complete: bool) -> Vec<TodoItem> {
    list.iter()
        .cloned()
        .map(|item| TodoItem { complete, ..item })
        .collect()
}

pub(crate) fn remove_completed(list: &[TodoItem]) -> Vec<TodoItem> {
    list.iter().filter(|item| !item.complete).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: i64, complete: bool) -> TodoItem {
        TodoItem {
            complete,
            ..TodoItem::new(TodoId::new(id), format!("Item {}", id))
        }
    }

    #[test]
    fn test_rename_clears_editing() {
        let mut item = make_item(1, false);
        item.editing = true;
        let next = rename(&[item, make_item(2, false)], TodoId::new(1), "renamed");
        assert_eq!(next[0].content, "renamed");
        assert!(!next[0].editing);
        assert_eq!(next[1].content, "Item 2");
    }

    #[test]
    fn test_unknown_id_is_identity() {
        let list = vec![make_item(1, false), make_item(2, true)];
        let missing = TodoId::new(99);
        assert_eq!(rename(&list, missing, "x"), list);
        assert_eq!(remove(&list, missing), list);
        assert_eq!(toggle(&list, missing), list);
        assert_eq!(begin_edit(&list, missing), list);
    }

    #[test]
    fn test_remove_keeps_order() {
        let list = vec![make_item(1, false), make_item(2, false), make_item(3, false)];
        let ids: Vec<_> = remove(&list, TodoId::new(2)).iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn test_set_all_complete() {
        let list = vec![make_item(1, false), make_item(2, true)];
        assert!(set_all_complete(&list, true).iter().all(|i| i.complete));
        assert!(set_all_complete(&list, false).iter().all(|i| !i.complete));
    }

    #[test]
    fn test_remove_completed() {
        let list = vec![make_item(1, true), make_item(2, false), make_item(3, true)];
        let next = remove_completed(&list);
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].id, TodoId::new(2));
    }
}
