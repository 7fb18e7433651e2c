use std::sync::{Arc, Mutex};

use seq_transforms::execution::{
    CompositeObserver, Operation, StdErrTransformObserver, TracingObserver, TransformEngine,
    TransformEvent, TransformObserver, TransformOptions,
};
use seq_transforms::processing;

#[derive(Default)]
struct RecordingObserver {
    ops: Mutex<Vec<Operation>>,
    failures: Mutex<Vec<(Operation, usize, String)>>,
}

impl TransformObserver for RecordingObserver {
    fn on_event(&self, event: &TransformEvent) {
        match event {
            TransformEvent::Finished { op, .. } => self.ops.lock().unwrap().push(*op),
            TransformEvent::Failed {
                op, index, message, ..
            } => self
                .failures
                .lock()
                .unwrap()
                .push((*op, *index, message.clone())),
            TransformEvent::Started { .. } => {}
        }
    }
}

fn observed_engine(obs: Arc<RecordingObserver>) -> TransformEngine {
    let observers: Vec<Arc<dyn TransformObserver>> = vec![obs, Arc::new(StdErrTransformObserver)];
    let fanout = CompositeObserver::new(observers);
    TransformEngine::new(TransformOptions {
        chunk_size: 3,
        label: Some("observability".to_string()),
    })
    .with_observer(Arc::new(fanout))
}

#[test]
fn engine_results_match_pure_functions() {
    let obs = Arc::new(RecordingObserver::default());
    let engine = observed_engine(obs.clone());
    let input = vec![5, 1, 5, 2, 8, 1, 9];

    assert_eq!(engine.map(&input, |n| n * 2), processing::map(&input, |n| n * 2));
    assert_eq!(
        engine.map_with_index(&input, |i, n| i as i32 + n),
        processing::map_with_index(&input, |i, n| i as i32 + n)
    );
    assert_eq!(
        engine.flat_map(&input, |n| vec![*n; 2]),
        processing::flat_map(&input, |n| vec![*n; 2])
    );
    assert_eq!(
        engine.filter(&input, |n| *n > 4),
        processing::filter(&input, |n| *n > 4)
    );
    assert_eq!(engine.uniq(&input), processing::uniq(&input));
    assert_eq!(
        engine.group_by(&input, |n| n % 2),
        processing::group_by(&input, |n| n % 2)
    );
    assert_eq!(
        engine.group_by_uniq(&input, |n| n % 3),
        processing::group_by_uniq(&input, |n| n % 3)
    );
    assert_eq!(engine.chunk(&input), processing::chunk(&input, 3));

    let mut visited = 0;
    engine.foreach(&input, |_| visited += 1);
    assert_eq!(visited, input.len());

    assert_eq!(
        *obs.ops.lock().unwrap(),
        vec![
            Operation::Map,
            Operation::MapWithIndex,
            Operation::FlatMap,
            Operation::Filter,
            Operation::Uniq,
            Operation::GroupBy,
            Operation::GroupByUniq,
            Operation::Chunk,
            Operation::Foreach,
        ]
    );
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn fallible_failure_is_observed_without_changing_the_error() {
    let obs = Arc::new(RecordingObserver::default());
    let engine = observed_engine(obs.clone());

    let mut visited = Vec::new();
    let err = engine
        .map_with_index_e(&[10, 20, 30, 40], |i, n| {
            visited.push(i);
            if i == 1 {
                Err(format!("rejected {n}"))
            } else {
                Ok(*n)
            }
        })
        .unwrap_err();
    assert_eq!(err, "rejected 20");
    assert_eq!(visited, vec![0, 1]);

    let failures = obs.failures.lock().unwrap().clone();
    assert_eq!(
        failures,
        vec![(Operation::MapWithIndexE, 1, "rejected 20".to_string())]
    );
    assert!(obs.ops.lock().unwrap().is_empty());
}

#[test]
fn metrics_snapshot_serializes_to_json() {
    let engine = TransformEngine::default();
    let _ = engine.map_e(&[1, 2, 3], |n| Ok::<_, String>(n + 1));

    let snap = engine.metrics().snapshot();
    assert_eq!(snap.runs, 1);
    assert_eq!(snap.failures, 0);
    assert_eq!(snap.elements_in, 3);
    assert_eq!(snap.elements_out, 3);
    assert!(snap.to_string().contains("runs=1"));

    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["elements_out"], 3);
}

#[test]
fn operation_names_are_snake_case() {
    assert_eq!(Operation::MapWithIndexE.to_string(), "map_with_index_e");
    assert_eq!(
        serde_json::to_string(&Operation::GroupByUniq).unwrap(),
        "\"group_by_uniq\""
    );
}

#[test]
fn tracing_observer_handles_every_event_kind() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .finish();

    let obs = Arc::new(RecordingObserver::default());
    let observers: Vec<Arc<dyn TransformObserver>> = vec![Arc::new(TracingObserver), obs.clone()];
    let fanout = CompositeObserver::new(observers);
    let engine = TransformEngine::new(TransformOptions {
        chunk_size: 2,
        label: Some("traced".to_string()),
    })
    .with_observer(Arc::new(fanout));

    tracing::subscriber::with_default(subscriber, || {
        assert_eq!(engine.chunk(&[1, 2, 3]), vec![vec![1, 2], vec![3]]);
        let err = engine
            .map_e(&["7", "oops"], |s| s.parse::<u8>())
            .unwrap_err();
        assert_eq!(err, "oops".parse::<u8>().unwrap_err());
    });

    assert_eq!(*obs.ops.lock().unwrap(), vec![Operation::Chunk]);
    let failures = obs.failures.lock().unwrap().clone();
    assert_eq!(failures.len(), 1);
    assert_eq!((failures[0].0, failures[0].1), (Operation::MapE, 1));
}
