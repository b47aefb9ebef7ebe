//! End-to-end scenarios: build tables, split, resolve.

use tscv::{Samples, Sequencer, SequencerConfig, Split, WindowShape};

// ============================================================================
// Table construction
// ============================================================================

#[test]
fn lookback_two_over_ten_steps() {
    let seq = Sequencer::new(
        10,
        SequencerConfig {
            lookback: 2,
            lookforward: 1,
            delay: 0,
            step: 1,
            squeeze: true,
        },
    );

    assert_eq!(seq.anchors(), &[2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(seq.feature_windows().to_vecs()[0], vec![0, 1]);
    assert_eq!(seq.target_windows().shape(), WindowShape::Scalar);
    assert_eq!(seq.target_windows().scalars().unwrap()[0], 2);
}

#[test]
fn no_sample_fits() {
    let seq = Sequencer::new(
        5,
        SequencerConfig {
            lookback: 3,
            lookforward: 3,
            ..Default::default()
        },
    );

    assert!(seq.anchors().is_empty());
    assert!(seq.feature_windows().is_empty());
    assert!(seq.target_windows().is_empty());
    assert_eq!(seq.split(1, 1).count(), 0);
    assert_eq!(seq.expanding_split(0, 1).count(), 0);
}

#[test]
fn windows_follow_anchors() {
    let config = SequencerConfig {
        lookback: 4,
        lookforward: 3,
        delay: 2,
        step: 3,
        squeeze: true,
    };
    let seq = Sequencer::new(50, config);

    for (k, &i) in seq.anchors().iter().enumerate() {
        let features: Vec<usize> = seq.feature_windows().get(k).unwrap().collect();
        let targets: Vec<usize> = seq.target_windows().get(k).unwrap().collect();
        assert_eq!(features, (i - 4..i).collect::<Vec<_>>());
        assert_eq!(targets, (i + 2..i + 5).collect::<Vec<_>>());
    }
    // end = 50 + 1 - 2 - 3 = 46: anchors 4, 7, ..., 43
    assert_eq!(seq.anchors().first(), Some(&4));
    assert_eq!(seq.anchors().last(), Some(&43));
    assert_eq!(seq.required_rows(), 48);
}

// ============================================================================
// Splitting
// ============================================================================

#[test]
fn rolling_split_over_twenty_steps() {
    let seq = Sequencer::with_defaults(20);
    let mut cv = seq.split(5, 3);

    let first = cv.next().unwrap();
    assert_eq!(first.train.clone().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    assert_eq!(first.test.clone().collect::<Vec<_>>(), vec![5, 6, 7]);

    let second = cv.next().unwrap();
    assert_eq!(second.train.clone().collect::<Vec<_>>(), vec![3, 4, 5, 6, 7]);
    assert_eq!(second.test.clone().collect::<Vec<_>>(), vec![8, 9, 10]);

    // 19 samples: folds start at 5, 8, 11, 14, 17
    let rest: Vec<Split> = cv.collect();
    assert_eq!(rest.len(), 3);
    assert_eq!(rest[2].test, 17..19);
}

#[test]
fn each_call_restarts() {
    let seq = Sequencer::with_defaults(40);
    let mut first = seq.split(10, 5);
    first.next();
    first.next();

    let fresh: Vec<Split> = seq.split(10, 5).collect();
    assert_eq!(fresh[0].train, 0..10);
    assert_eq!(fresh.len(), first.len() + 2);
}

#[test]
fn expanding_split_grows_training() {
    let seq = Sequencer::with_defaults(31);
    let splits: Vec<Split> = seq.expanding_split(10, 5).collect();

    // 30 samples: folds start at 10, 15, 20, 25
    assert_eq!(splits.len(), 4);
    for (k, split) in splits.iter().enumerate() {
        assert_eq!(split.train, 0..10 + 5 * k);
        assert_eq!(split.test_len(), 5);
    }
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn indices_agree_with_anchor_slices() {
    let seq = Sequencer::new(
        200,
        SequencerConfig {
            lookback: 7,
            step: 2,
            ..Default::default()
        },
    );
    for split in seq.split(30, 11) {
        let (train, test) = seq.indices(&split);
        assert_eq!(train, &seq.anchors()[split.train.clone()]);
        assert_eq!(test, &seq.anchors()[split.test.clone()]);
        assert!(train.last() < test.first());
    }
}

#[test]
fn features_and_targets_from_rows() {
    let prices: Vec<f64> = (0..30).map(|t| 100.0 + t as f64).collect();
    let seq = Sequencer::new(
        prices.len(),
        SequencerConfig {
            lookback: 3,
            lookforward: 2,
            ..Default::default()
        },
    );
    let split = seq.split(10, 5).next().unwrap();

    let (x_train, x_test) = seq.features(&split, &prices);
    let (y_train, y_test) = seq.targets(&split, &prices);
    assert_eq!(x_train.len(), 10);
    assert_eq!(x_test.len(), 5);
    assert_eq!(y_train.len(), 10);
    assert_eq!(y_test.len(), 5);

    // First sample anchored at 3: features rows 0..3, targets rows 3..5
    let Samples::Windows(x_train) = x_train else {
        panic!("lookback 3 must not be squeezed");
    };
    let Samples::Windows(y_train) = y_train else {
        panic!("lookforward 2 must not be squeezed");
    };
    assert_eq!(x_train[0], &[100.0, 101.0, 102.0]);
    assert_eq!(y_train[0], &[103.0, 104.0]);

    // Features of any sample end right before its targets begin
    for (x, y) in x_train.iter().zip(&y_train) {
        assert_eq!(x.last().unwrap() + 1.0, y[0]);
    }
}

#[cfg(feature = "ndarray")]
#[test]
fn arrays_of_samples() {
    use ndarray::{Array1, Array2};

    let x = Array2::from_shape_fn((120, 4), |(t, c)| (t * 4 + c) as f32);
    let y: Array1<f32> = Array1::from_iter((0..120).map(|t| t as f32));
    let seq = Sequencer::new(
        x.nrows(),
        SequencerConfig {
            lookback: 8,
            ..Default::default()
        },
    );

    let folds: Vec<Split> = seq.split(60, 20).collect();
    // 112 samples: folds start at 60, 80, 100
    assert_eq!(folds.len(), 3);

    for split in &folds {
        let (x_train, x_test) = seq.features_array(split, &x).unwrap();
        let (y_train, y_test) = seq.targets_array(split, &y).unwrap();
        assert_eq!(x_train.shape(), &[60, 8, 4]);
        assert_eq!(y_train.shape(), &[60]);
        assert_eq!(x_test.shape()[0], y_test.shape()[0]);
    }
    let (_, y_last) = seq.targets_array(&folds[2], &y).unwrap();
    assert_eq!(y_last.len(), 12);
}

#[cfg(feature = "serde")]
#[test]
fn config_and_split_serialize() {
    let config = SequencerConfig {
        lookback: 5,
        delay: -1,
        ..Default::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: SequencerConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);

    let split = Split {
        train: 0..5,
        test: 5..8,
    };
    let json = serde_json::to_string(&split).unwrap();
    let back: Split = serde_json::from_str(&json).unwrap();
    assert_eq!(back, split);
}
