use std::env;
use std::error::Error;

use blitz_classifier::random_forest::RandomForest;

/// Prints the shape of one or more model files, e.g. `inspect models/load1_status.rf`.
fn main() -> Result<(), Box<dyn Error>> {
    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        Err("usage: inspect <model.rf>...")?
    }

    for path in paths {
        let forest = RandomForest::load(&path)?;
        let depth = forest
            .forest
            .iter()
            .map(|tree| tree.root().depth())
            .max()
            .unwrap_or(0);

        println!(
            "{path}: {:?}, {} trees, {} features, max depth {depth}",
            forest.forest_type,
            forest.forest.len(),
            forest.feature_count(),
        );
    }

    Ok(())
}
