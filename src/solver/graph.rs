use std::borrow::Cow;
use std::fs;
use std::io;
use std::process::Command;

use dot::{self, Edges, GraphWalk, Id, LabelText, Labeller, Nodes, Style};
use fnv::FnvHashMap;

use crate::state::PuzzleState;

use super::a_star::SearchNode;
use super::store::StateId;

type Nd = usize;
type Ed = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Type {
    Queued,
    Duplicate,
    Unique,
}

#[derive(Debug)]
struct Node {
    dist: u32,
    h: u32,
    board: String,
    node_type: Type,
}

/// Explored part of the state space, one node per interned state.
#[derive(Debug, Default)]
pub(crate) struct Graph {
    state_to_index: FnvHashMap<StateId, usize>,
    nodes: Vec<Node>,
    edges: Vec<Ed>,
}

impl Graph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A shorter path to the node's state was found (or it's the first one).
    pub(crate) fn relaxed(&mut self, node: SearchNode, state: &PuzzleState, prev: Option<StateId>) {
        let index = match self.state_to_index.get(&node.state) {
            Some(&index) => {
                let existing = &mut self.nodes[index];
                existing.dist = node.dist;
                existing.h = node.h();
                existing.node_type = Type::Queued;
                index
            }
            None => {
                let index = self.nodes.len();
                self.state_to_index.insert(node.state, index);
                self.nodes.push(Node {
                    dist: node.dist,
                    h: node.h(),
                    board: state.to_string(),
                    node_type: Type::Queued,
                });
                index
            }
        };

        if let Some(prev) = prev {
            let prev_index = self.state_to_index[&prev];
            self.edges.push((prev_index, index));
        }
    }

    pub(crate) fn mark_duplicate(&mut self, node: SearchNode) {
        let index = self.state_to_index[&node.state];
        if self.nodes[index].node_type == Type::Queued {
            self.nodes[index].node_type = Type::Duplicate;
        }
    }

    pub(crate) fn mark_unique(&mut self, node: SearchNode) {
        let index = self.state_to_index[&node.state];
        self.nodes[index].node_type = Type::Unique;
    }

    /// Writes `state-space.dot` and tries to render it to svg.
    pub(crate) fn draw(&self) -> io::Result<()> {
        let mut writer = Vec::new();
        dot::render(self, &mut writer)?;
        let s = String::from_utf8_lossy(&writer).replace(
            "digraph G {",
            "digraph G {\n    graph [fontname = \"hack\"];\n    node [fontname = \"hack\"];\n    edge [fontname = \"hack\"];",
        );
        fs::write("state-space.dot", &s)?;

        let status = Command::new("dot")
            .args(&["-Tsvg", "-O", "state-space.dot"])
            .status()?;
        if !status.success() {
            return Err(io::Error::new(io::ErrorKind::Other, "dot failed"));
        }
        Ok(())
    }

    pub(crate) fn draw_logged(&self) {
        debug!("Drawing {} states", self.nodes.len());
        if let Err(err) = self.draw() {
            warn!("Failed to draw the state space: {}", err);
        }
    }
}

impl<'a> GraphWalk<'a, Nd, Ed> for Graph {
    fn nodes(&'a self) -> Nodes<'a, Nd> {
        (0..self.nodes.len()).collect()
    }

    fn edges(&'a self) -> Edges<'a, Ed> {
        Cow::from(&self.edges)
    }

    fn source(&'a self, e: &Ed) -> Nd {
        e.0
    }

    fn target(&'a self, e: &Ed) -> Nd {
        e.1
    }
}

impl<'a> Labeller<'a, Nd, Ed> for Graph {
    fn graph_id(&'a self) -> Id<'a> {
        Id::new("G").unwrap()
    }

    fn node_id(&'a self, n: &Nd) -> Id<'a> {
        Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&'a self, n: &Nd) -> LabelText<'a> {
        let node = &self.nodes[*n];
        LabelText::EscStr(
            format!(
                "g: {}, h: {}\\lcost: {}\\l{}",
                node.dist,
                node.h,
                node.dist + node.h,
                node.board.replace('\n', "\\l")
            )
            .into(),
        )
    }

    fn node_style(&'a self, n: &Nd) -> Style {
        if self.nodes[*n].node_type == Type::Queued {
            Style::Solid
        } else {
            Style::Filled
        }
    }

    fn node_color(&'a self, n: &Nd) -> Option<LabelText<'a>> {
        Some(LabelText::LabelStr(
            match self.nodes[*n].node_type {
                Type::Unique => "red",
                Type::Duplicate => "gray",
                Type::Queued => return None,
            }
            .into(),
        ))
    }
}
