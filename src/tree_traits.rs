//! Rendering of boards as indented terminal trees.

use termtree::Tree;

use crate::domain::{Board, Entry, Group};

pub trait ToTermTree {
    fn to_term_tree(&self) -> Tree<String>;
}

impl ToTermTree for Group {
    fn to_term_tree(&self) -> Tree<String> {
        let leaves: Vec<_> = self
            .entries()
            .iter()
            .map(|entry| match entry {
                Entry::Leaf(leaf) => Tree::new(leaf.text.clone()),
                Entry::Group(group) => group.to_term_tree(),
            })
            .collect();
        Tree::new(format!("[{}]", self.name())).with_leaves(leaves)
    }
}

impl ToTermTree for Board {
    fn to_term_tree(&self) -> Tree<String> {
        if self.is_empty() {
            return Tree::new("Empty board".to_string());
        }
        let columns: Vec<_> = self.columns().iter().map(ToTermTree::to_term_tree).collect();
        Tree::new("board".to_string()).with_leaves(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BoardBuilder;

    #[test]
    fn given_nested_board_when_rendering_then_groups_are_bracketed() {
        let board = BoardBuilder::new()
            .column("A", |c| c.leaf("x").group("B", |g| g.leaf("p")))
            .build();
        let rendered = board.to_term_tree().to_string();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines[0], "board");
        assert!(lines[1].ends_with("[A]"));
        assert!(lines[2].ends_with("x"));
        assert!(lines[3].ends_with("[B]"));
        assert!(lines[4].ends_with("p"));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn given_empty_board_when_rendering_then_says_so() {
        assert_eq!(Board::default().to_term_tree().to_string().trim(), "Empty board");
    }
}
