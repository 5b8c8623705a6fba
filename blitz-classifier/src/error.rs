use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Failed to read model: {0}")]
    Io(#[from] io::Error),

    #[error("Value {0} is out of range for RandomForestType")]
    UnknownForestType(u16),

    #[error("Unknown node type {0}")]
    UnknownNodeType(u8),

    #[error("Model contains no trees")]
    EmptyForest,

    #[error("Split on feature {column} but only {len} features were given")]
    FeatureOutOfRange { column: usize, len: usize },
}
