use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

use glyph_nn::data::demo_samples;
use glyph_nn::{NetworkConfig, TrainConfig, TrainingSession};

fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

#[test]
fn session_learns_the_demo_glyphs() {
    let net = NetworkConfig::default().build().unwrap();
    let mut session = TrainingSession::new(net, 100);
    let samples = demo_samples();

    let (tx, rx) = mpsc::channel();
    let config = TrainConfig { progress_tx: Some(tx), ..TrainConfig::default() };
    let last = session.run(&samples, &config).unwrap();
    drop(config);

    let reports: Vec<_> = rx.iter().collect();
    assert_eq!(reports.len(), 40);
    assert_eq!(reports.last().map(|s| s.epoch), Some(200));
    assert!(reports.iter().all(|s| s.total_epochs == 200));

    assert_eq!(session.epochs_trained(), 200);
    assert_eq!(session.history().len(), 100);
    assert_eq!(session.history().latest(), Some(last));

    let first_logged = session.history().iter().next().unwrap();
    assert!(last < first_logged);

    for (digit, sample) in samples.iter().enumerate() {
        let probs = session.predict(&sample.input).unwrap();
        assert_eq!(argmax(&probs), digit, "digit {digit} predicted as {probs:?}");
    }
}

#[test]
fn stop_flag_from_another_thread_halts_training() {
    let net = NetworkConfig { hidden_size: 8, ..NetworkConfig::default() }.build().unwrap();
    let mut session = TrainingSession::new(net, 100);

    let stop = Arc::new(AtomicBool::new(false));
    let (tx, rx) = mpsc::channel();
    let config = TrainConfig {
        progress_tx: Some(tx),
        stop_flag: Some(stop.clone()),
        ..TrainConfig::new(10_000, 5)
    };

    // Raise the flag as soon as the first report arrives.
    let watcher = thread::spawn(move || {
        if rx.recv().is_ok() {
            stop.store(true, Ordering::Relaxed);
        }
        rx.iter().count()
    });

    session.run(&demo_samples(), &config).unwrap();
    drop(config);
    let later_reports = watcher.join().unwrap();

    assert!(session.epochs_trained() < 10_000);
    assert_eq!(session.epochs_trained() % 5, 0);
    assert_eq!(session.epochs_trained(), 5 * (later_reports + 1));
}

#[test]
fn weights_are_readable_for_rendering() {
    let session = TrainingSession::new(NetworkConfig::default().build().unwrap(), 10);
    let w = session.network().weights_ih();
    assert_eq!((w.rows(), w.cols()), (48, 784));
    // A 12x8 slice, as a connectivity diagram would sample it.
    let sampled: Vec<f64> = (0..8).flat_map(|j| (0..12).map(move |i| (j, i)))
        .filter_map(|(j, i)| w.get(j, i))
        .collect();
    assert_eq!(sampled.len(), 96);
}
