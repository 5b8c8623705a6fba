use std::io::{self, Read, Write};

use crate::error::ModelError;
use crate::node::Node;

#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    root: Node,
}

impl DecisionTree {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn predict(&self, xs: &[f64]) -> Result<f64, ModelError> {
        self.root.predict(xs)
    }

    pub fn serialize<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.root.serialize(writer)
    }

    pub fn deserialize<R: Read>(reader: &mut R) -> Result<Self, ModelError> {
        Ok(Self { root: Node::deserialize(reader)? })
    }
}
