//! End-to-end behavior of nested context loggers against real sinks.

use std::sync::Arc;

use ctxlog::{CaptureSink, ContextLogger, JsonLineSink, LogRecord, LogSink, Severity, context};
use serde_json::{Value, json};

#[test]
fn nested_loggers_merge_and_flatten() {
    let sink = Arc::new(CaptureSink::new());
    let root: Arc<dyn LogSink> = sink.clone();

    root.emit(&LogRecord::new(Severity::Info, "Message 1")).unwrap();

    let logger2 = ContextLogger::new(
        root.clone(),
        context! { "foo" => "original", "bar" => "original" },
    );
    logger2.info("Message 2").unwrap();

    let logger3 = ContextLogger::new(&logger2, context! { "foo" => "updated", "new" => 123 });
    logger3.info("Message 3").unwrap();

    // The wrapped wrapper still points at the root sink.
    assert!(Arc::ptr_eq(logger3.base(), &root));

    let records = sink.records();
    assert_eq!(records.len(), 3);

    assert_eq!(records[0].message, "Message 1");
    assert!(records[0].context.is_none());

    assert_eq!(records[1].message, "Message 2");
    let context2 = records[1].context.as_ref().unwrap();
    assert_eq!(context2.get("foo"), Some(&json!("original")));
    assert_eq!(context2.get("bar"), Some(&json!("original")));
    assert_eq!(context2.len(), 2);

    assert_eq!(records[2].message, "Message 3");
    let context3 = records[2].context.as_ref().unwrap();
    assert_eq!(context3.get("foo"), Some(&json!("updated")));
    assert_eq!(context3.get("bar"), Some(&json!("original")));
    assert_eq!(context3.get("new"), Some(&json!(123)));
    assert_eq!(context3.len(), 3);
}

#[test]
fn depth_three_chain_emits_once_at_root() {
    let sink = Arc::new(CaptureSink::new());

    let logger = ContextLogger::new(
        ContextLogger::new(
            ContextLogger::new(sink.clone(), context! { "a" => 1 }),
            context! { "b" => 2 },
        ),
        context! { "a" => 9, "c" => 3 },
    );
    logger.error("boom").unwrap();

    let records = sink.records();
    assert_eq!(records.len(), 1);

    let context = records[0].context.as_ref().unwrap();
    assert_eq!(context.get("a"), Some(&json!(9)));
    assert_eq!(context.get("b"), Some(&json!(2)));
    assert_eq!(context.get("c"), Some(&json!(3)));
}

#[test]
fn json_lines_render_merged_context() {
    let sink = Arc::new(JsonLineSink::new(Vec::new()));
    let logger = ContextLogger::new(sink.clone(), context! { "foo" => "original" })
        .child(context! { "foo" => "updated", "new" => 123 });

    logger.warn("Message 3").unwrap();

    drop(logger);
    let bytes = Arc::into_inner(sink).unwrap().into_inner();
    let line: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(line["severity"], json!("warn"));
    assert_eq!(line["message"], json!("Message 3"));
    assert_eq!(line["context"], json!({"foo": "updated", "new": 123}));
}

#[test]
fn loggers_share_one_sink_across_threads() {
    let sink = Arc::new(CaptureSink::new());
    let logger = ContextLogger::new(sink.clone(), context! { "service" => "billing" });

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let logger = logger.child(context! { "worker" => worker });
            std::thread::spawn(move || logger.info("tick").unwrap())
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let records = sink.records();
    assert_eq!(records.len(), 4);
    for record in &records {
        let context = record.context.as_ref().unwrap();
        assert_eq!(context.get("service"), Some(&json!("billing")));
        assert!(context.contains_key("worker"));
    }
}
