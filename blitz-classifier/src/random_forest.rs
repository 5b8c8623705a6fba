use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::decision_tree::DecisionTree;
use crate::error::ModelError;
use crate::{Classifier, mean, most_frequent};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u16)]
pub enum RandomForestType {
    #[default]
    Regressor = 0,
    Classifier = 1,
}

impl TryFrom<u16> for RandomForestType {
    type Error = ModelError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RandomForestType::Regressor),
            1 => Ok(RandomForestType::Classifier),
            _ => Err(ModelError::UnknownForestType(value)),
        }
    }
}

/// Model file layout, all big endian:
/// `u16 forest type, u16 tree count, tree...`
#[derive(Debug, Clone, PartialEq)]
pub struct RandomForest {
    pub forest_type: RandomForestType,
    pub forest: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn new(forest_type: RandomForestType, forest: Vec<DecisionTree>) -> Result<Self, ModelError> {
        if forest.is_empty() {
            return Err(ModelError::EmptyForest);
        }

        Ok(Self { forest_type, forest })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let file = File::open(path)?;
        Self::deserialize(BufReader::new(file))
    }

    pub fn predict(&self, xs: &[f64]) -> Result<f64, ModelError> {
        let predictions = self
            .predict_individuals(xs)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(match self.forest_type {
            RandomForestType::Regressor => mean(predictions.into_iter()),
            RandomForestType::Classifier => most_frequent(predictions.into_iter()),
        })
    }

    pub fn predict_individuals<'a>(
        &'a self,
        xs: &'a [f64],
    ) -> impl 'a + Iterator<Item = Result<f64, ModelError>> {
        self.forest.iter().map(move |tree| tree.predict(xs))
    }

    /// Width of the feature row the forest expects.
    pub fn feature_count(&self) -> usize {
        self.forest
            .iter()
            .map(|tree| tree.root().feature_count())
            .max()
            .unwrap_or(0)
    }

    pub fn serialize<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_u16::<BigEndian>(self.forest_type as u16)?;
        let forest_len = u16::try_from(self.forest.len()).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} trees do not fit the model format", self.forest.len()),
            )
        })?;
        writer.write_u16::<BigEndian>(forest_len)?;
        for tree in &self.forest {
            tree.serialize(&mut writer)?;
        }

        Ok(())
    }

    pub fn deserialize<R: Read>(mut reader: R) -> Result<Self, ModelError> {
        let forest_type = RandomForestType::try_from(reader.read_u16::<BigEndian>()?)?;
        let forest_len = reader.read_u16::<BigEndian>()?;
        let forest = (0..forest_len)
            .map(|_| DecisionTree::deserialize(&mut reader))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(forest_type, forest)
    }
}

impl Classifier for RandomForest {
    fn classify(&self, features: &[f64]) -> Result<f64, ModelError> {
        self.predict(features)
    }
}
