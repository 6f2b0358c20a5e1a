//! Step-tree flattening and turn counting.

use crate::models::{Instruction, Step};

/// Flatten a forest of steps into its leaf instructions, depth-first and
/// left to right. Internal nodes are discarded.
///
/// Uses an explicit work stack so arbitrarily deep nesting cannot overflow
/// the host call stack.
pub fn flatten_steps(steps: &[Step]) -> Vec<&Instruction> {
    let mut leaves = Vec::new();
    let mut stack: Vec<&Step> = steps.iter().rev().collect();

    while let Some(step) = stack.pop() {
        match step {
            Step::Leaf(instruction) => leaves.push(instruction),
            Step::Group(children) => stack.extend(children.iter().rev()),
        }
    }

    leaves
}

/// Count instructions that mention a turn, as a proxy for route complexity.
pub fn count_turns(leaves: &[&Instruction]) -> usize {
    leaves
        .iter()
        .filter(|instruction| instruction.text.to_lowercase().contains("turn"))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(text: &str) -> Step {
        Step::Leaf(Instruction {
            text: text.to_string(),
            distance_m: 0.0,
            duration_s: 0.0,
            start: None,
            end: None,
        })
    }

    #[test]
    fn flat_list_passes_through_in_order() {
        let steps = vec![leaf("a"), leaf("b"), leaf("c")];
        let leaves = flatten_steps(&steps);
        let texts: Vec<&str> = leaves.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn nested_groups_flatten_preorder() {
        let steps = vec![
            leaf("a"),
            Step::Group(vec![leaf("b"), Step::Group(vec![leaf("c"), leaf("d")]), leaf("e")]),
            leaf("f"),
        ];
        let leaves = flatten_steps(&steps);
        let texts: Vec<&str> = leaves.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn deep_nesting_does_not_overflow() {
        let mut step = leaf("bottom");
        for _ in 0..1_000 {
            step = Step::Group(vec![step]);
        }
        let steps = vec![step];
        let leaves = flatten_steps(&steps);
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].text, "bottom");
    }

    #[test]
    fn empty_groups_contribute_nothing() {
        let steps = vec![Step::Group(Vec::new()), leaf("a"), Step::Group(Vec::new())];
        assert_eq!(flatten_steps(&steps).len(), 1);
    }

    #[test]
    fn turn_counting_is_case_insensitive() {
        let steps = vec![
            leaf("Turn left onto Queen's Road"),
            leaf("Continue straight"),
            leaf("Make a sharp TURN right"),
            leaf("Arrive at destination"),
        ];
        let leaves = flatten_steps(&steps);
        assert_eq!(count_turns(&leaves), 2);
    }
}
