use std::io::{self, Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::error::ModelError;

const LEAF_TAG: u8 = 0;
const SPLIT_TAG: u8 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct SplitPoint {
    pub column: usize,
    pub value: f64,
}

impl SplitPoint {
    pub fn serialize<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let column = u16::try_from(self.column).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Split column {} does not fit the model format", self.column),
            )
        })?;
        writer.write_u16::<BigEndian>(column)?;
        writer.write_f64::<BigEndian>(self.value)?;

        Ok(())
    }

    pub fn deserialize<R: Read>(reader: &mut R) -> io::Result<Self> {
        let column = reader.read_u16::<BigEndian>()? as usize;
        let value = reader.read_f64::<BigEndian>()?;

        Ok(Self { column, value })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf(f64),
    Children {
        split: SplitPoint,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn split(column: usize, value: f64, left: Node, right: Node) -> Self {
        Node::Children {
            split: SplitPoint { column, value },
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn predict(&self, xs: &[f64]) -> Result<f64, ModelError> {
        let mut node = self;
        loop {
            match node {
                Node::Leaf(value) => return Ok(*value),
                Node::Children { split, left, right } => {
                    let x = xs.get(split.column).ok_or(ModelError::FeatureOutOfRange {
                        column: split.column,
                        len: xs.len(),
                    })?;
                    node = if *x < split.value { left } else { right };
                }
            }
        }
    }

    /// Number of features the subtree reads, i.e. the highest split column plus one.
    pub fn feature_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Children { split, left, right } => (split.column + 1)
                .max(left.feature_count())
                .max(right.feature_count()),
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Children { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    pub fn serialize<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        match self {
            Node::Leaf(value) => {
                writer.write_u8(LEAF_TAG)?;
                writer.write_f64::<BigEndian>(*value)?;
            }
            Node::Children { split, left, right } => {
                writer.write_u8(SPLIT_TAG)?;
                split.serialize(writer)?;
                left.serialize(writer)?;
                right.serialize(writer)?;
            }
        }

        Ok(())
    }

    pub fn deserialize<R: Read>(reader: &mut R) -> Result<Self, ModelError> {
        match reader.read_u8()? {
            LEAF_TAG => Ok(Node::Leaf(reader.read_f64::<BigEndian>()?)),
            SPLIT_TAG => {
                let split = SplitPoint::deserialize(reader)?;
                let left = Box::new(Node::deserialize(reader)?);
                let right = Box::new(Node::deserialize(reader)?);

                Ok(Node::Children { split, left, right })
            }
            tag => Err(ModelError::UnknownNodeType(tag)),
        }
    }
}
