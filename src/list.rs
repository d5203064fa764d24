use crate::block::ListKind;
use crate::node::{ListType, Node};

/// Read the numbering scheme of a list node.
///
/// An ordered node without a start number counts from 0, matching what
/// cmark reports for nodes it does not consider lists.
pub fn kind_of<N: Node>(node: &N) -> ListKind {
    match node.list_type() {
        ListType::Ordered => ListKind::Ordered {
            start: node.list_start().unwrap_or(0),
        },
        ListType::Bullet | ListType::None => ListKind::Unordered,
    }
}

/// Marker text for the item at `index` (0-based). The trailing tab separates
/// the marker from the item content and lines up with the list's tab stop.
pub fn prefix_for(kind: ListKind, index: usize) -> String {
    match kind {
        ListKind::Ordered { start } => format!("{}.\t", start + index as u64),
        ListKind::Unordered => "•\t".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::node::NodeType;
    use crate::parser::MarkdownNode;

    #[rstest]
    #[case(1, 0, "1.\t")]
    #[case(1, 4, "5.\t")]
    #[case(0, 0, "0.\t")]
    #[case(98, 1, "99.\t")]
    #[case(7, 93, "100.\t")]
    fn ordered_prefix(#[case] start: u64, #[case] index: usize, #[case] expected: &str) {
        assert_eq!(prefix_for(ListKind::Ordered { start }, index), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(42)]
    fn unordered_prefix(#[case] index: usize) {
        assert_eq!(prefix_for(ListKind::Unordered, index), "•\t");
    }

    #[test]
    fn kind_of_ordered_list() {
        let node = MarkdownNode::ordered_list(Some(3));
        assert_eq!(kind_of(&node), ListKind::Ordered { start: 3 });
    }

    #[test]
    fn kind_of_ordered_without_start_counts_from_zero() {
        let node = MarkdownNode::ordered_list(None);
        assert_eq!(kind_of(&node), ListKind::Ordered { start: 0 });
    }

    #[test]
    fn kind_of_bullet_and_non_list() {
        assert_eq!(kind_of(&MarkdownNode::bullet_list()), ListKind::Unordered);
        assert_eq!(
            kind_of(&MarkdownNode::new(NodeType::Paragraph)),
            ListKind::Unordered
        );
    }
}
