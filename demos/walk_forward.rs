//! Walk-forward example: build samples from a synthetic series, split them,
//! and score a naive moving-average forecast on every fold.
//!
//! Run with: RUST_LOG=debug cargo run --example walk_forward

use ndarray::{Array1, Array2, Axis};
use tscv::{Sequencer, SequencerConfig};

fn main() -> Result<(), tscv::Error> {
    env_logger::init();

    // Two columns: a price-like random walk and its first difference
    let n = 2_500;
    let mut level = 100.0_f64;
    let mut x = Array2::<f64>::zeros((n, 2));
    for t in 0..n {
        let shock = ((t * 7_919) % 13) as f64 / 13.0 - 0.5;
        level += shock;
        x[[t, 0]] = level;
        x[[t, 1]] = shock;
    }
    let y: Array1<f64> = x.column(0).to_owned();

    let config = SequencerConfig {
        lookback: 5,
        lookforward: 1,
        delay: 0,
        ..Default::default()
    };
    let seq = Sequencer::try_new(n, config)?;
    println!(
        "=== {} samples, required rows {} ===\n",
        seq.len(),
        seq.required_rows()
    );

    for (fold, split) in seq.split(250, 250).enumerate() {
        let (_, x_test) = seq.features_array(&split, &x)?;
        let (_, y_test) = seq.targets_array(&split, &y)?;
        let (_, idx_test) = seq.indices(&split);

        // Forecast: mean level over the feature window
        let forecast = x_test
            .index_axis(Axis(2), 0)
            .mean_axis(Axis(1))
            .expect("feature windows are non-empty");
        let mae = (&forecast - &y_test).mapv(f64::abs).mean().unwrap_or(f64::NAN);

        println!(
            "fold {fold:>2}  {split}  anchors {:>4}..={:<4}  MAE {mae:.4}",
            idx_test[0],
            idx_test[idx_test.len() - 1]
        );
    }

    Ok(())
}
