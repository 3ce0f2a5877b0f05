#![no_main]

use libfuzzer_sys::fuzz_target;
use treenav::{BoundaryPolicy, Command, Navigator, NavigatorOptions, NodeId, TabBehavior, TreeNode};

/// Build a tree from the leading bytes: each byte picks the parent of the
/// next node among the nodes created so far.
fn build_tree(shape: &[u8]) -> TreeNode {
    let mut children: Vec<Vec<usize>> = vec![Vec::new()];
    for (i, b) in shape.iter().enumerate() {
        let parent = usize::from(*b) % (i + 1);
        children[parent].push(i + 1);
        children.push(Vec::new());
    }

    fn node(id: usize, children: &[Vec<usize>]) -> TreeNode {
        TreeNode::new(id as u64, format!("n{id}"))
            .with_children(children[id].iter().map(|&child| node(child, children)))
    }
    node(0, &children)
}

fn command(b: u8, nodes: u64) -> Command {
    let id = NodeId(u64::from(b >> 4) % (nodes + 2));
    match b % 10 {
        0 => Command::MoveNext,
        1 => Command::MovePrevious,
        2 => Command::MoveFirst,
        3 => Command::MoveLast,
        4 => Command::Toggle,
        5 => Command::Activate(id),
        6 => Command::Focus(id),
        7 => Command::ExpandOrDescend,
        8 => Command::CollapseOrAscend,
        _ => Command::ExpandSiblings,
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&header, rest)) = data.split_first() else {
        return;
    };
    let split = usize::from(header % 32).min(rest.len());
    let (shape, commands) = rest.split_at(split);

    let tree = build_tree(shape);
    let nodes = tree.total_count() as u64;
    let options = NavigatorOptions {
        boundary: if header & 0x40 != 0 { BoundaryPolicy::Wrap } else { BoundaryPolicy::Clamp },
        tab: if header & 0x80 != 0 { TabBehavior::Navigate } else { TabBehavior::Exit },
        ..NavigatorOptions::default()
    };
    let mut nav = Navigator::new(tree, options);

    for &b in commands {
        if b == 0xff {
            let _ = nav.tab(true);
            continue;
        }
        nav.apply(command(b, nodes));
        if let Some(focused) = nav.focused_id() {
            assert!(nav.visible_nodes().contains(&focused), "focus must stay visible");
        }
    }
});
