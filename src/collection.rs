//! Collection Merge Operations
//!
//! Pure operations applied to the in-memory item collection after a
//! successful mutation. The server's returned representation is trusted
//! as the new source of truth for that single element; the collection is
//! never re-fetched wholesale after a mutation.

use crate::models::{CommentReply, RegistryItem};

/// Front-insert a freshly created item.
pub fn prepend_item(items: &mut Vec<RegistryItem>, item: RegistryItem) {
    items.insert(0, item);
}

/// Replace the matching-id element in place, preserving its position.
/// No-op when the id is not present.
pub fn replace_item(items: &mut [RegistryItem], updated: RegistryItem) {
    if let Some(slot) = items.iter_mut().find(|i| i.id == updated.id) {
        *slot = updated;
    }
}

/// Drop the element with the given id, leaving the rest untouched.
pub fn remove_item(items: &mut Vec<RegistryItem>, id: u32) {
    items.retain(|i| i.id != id);
}

/// Merge a comment-endpoint reply into the active detail item: a full-item
/// reply replaces the detail wholesale, a bare comment is prepended to the
/// existing comment sequence.
pub fn merge_comment_reply(detail: &mut RegistryItem, reply: CommentReply) {
    match reply {
        CommentReply::Item(item) => *detail = item,
        CommentReply::Comment(comment) => detail.comments.insert(0, comment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Comment;

    fn make_item(id: u32, name: &str) -> RegistryItem {
        serde_json::from_value(serde_json::json!({ "id": id, "item_name": name })).unwrap()
    }

    fn make_comment(id: u32, text: &str) -> Comment {
        Comment {
            comment_id: id,
            comment_text: text.to_string(),
            comment_author_username: "ana".to_string(),
            comment_created_at: String::new(),
        }
    }

    #[test]
    fn test_prepend_puts_new_item_first() {
        let mut items = vec![make_item(1, "Crib"), make_item(2, "Stroller")];
        prepend_item(&mut items, make_item(3, "Monitor"));
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id, 3);
        assert_eq!(items[1].id, 1);
        assert_eq!(items[2].id, 2);
    }

    #[test]
    fn test_replace_preserves_position_and_neighbors() {
        let mut items = vec![make_item(1, "Crib"), make_item(2, "Stroller"), make_item(3, "Monitor")];
        replace_item(&mut items, make_item(2, "Jogging Stroller"));
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].item_name, "Crib");
        assert_eq!(items[1].item_name, "Jogging Stroller");
        assert_eq!(items[2].item_name, "Monitor");
    }

    #[test]
    fn test_replace_with_unknown_id_is_noop() {
        let mut items = vec![make_item(1, "Crib")];
        let before = items.clone();
        replace_item(&mut items, make_item(9999, "Ghost"));
        assert_eq!(items, before);
    }

    #[test]
    fn test_remove_filters_only_the_matching_id() {
        let mut items = vec![make_item(1, "Crib"), make_item(2, "Stroller"), make_item(3, "Monitor")];
        remove_item(&mut items, 2);
        assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3]);
        assert!(!items.iter().any(|i| i.id == 2));
    }

    #[test]
    fn test_full_item_reply_replaces_detail() {
        let mut detail = make_item(5, "Crib");
        let mut updated = make_item(5, "Crib");
        updated.comments = vec![make_comment(1, "love it")];
        merge_comment_reply(&mut detail, CommentReply::Item(updated.clone()));
        assert_eq!(detail, updated);
    }

    #[test]
    fn test_bare_comment_reply_prepends() {
        let mut detail = make_item(5, "Crib");
        detail.comments = vec![make_comment(1, "older")];
        merge_comment_reply(&mut detail, CommentReply::Comment(make_comment(2, "newer")));
        assert_eq!(detail.comments.len(), 2);
        assert_eq!(detail.comments[0].comment_id, 2);
        assert_eq!(detail.comments[1].comment_id, 1);
    }

    #[test]
    fn test_comment_merge_paths_converge() {
        // Full-item reply and bare-comment merge must reach the same state
        // for equivalent server data.
        let mut base = make_item(5, "Crib");
        base.comments = vec![make_comment(1, "older")];

        let mut via_comment = base.clone();
        merge_comment_reply(&mut via_comment, CommentReply::Comment(make_comment(2, "newer")));

        let mut full = base.clone();
        full.comments = vec![make_comment(2, "newer"), make_comment(1, "older")];
        let mut via_item = base.clone();
        merge_comment_reply(&mut via_item, CommentReply::Item(full));

        assert_eq!(via_comment, via_item);
    }
}
