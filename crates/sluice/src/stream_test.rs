//! Tests for the stream driver

use super::*;
use sluice_config::ProcessorConfig;
use sluice_metrics::LocalStats;
use sluice_transform::default_registry;

fn processor(config: &ProcessorConfig, stats: &LocalStats) -> Box<dyn Processor> {
    default_registry().create(config, stats).unwrap()
}

#[tokio::test]
async fn test_encode_stream() {
    let stats = LocalStats::new();
    let encoder = processor(&ProcessorConfig::encode(), &stats);

    let mut out = Vec::new();
    let summary = run(encoder.as_ref(), &b"abc\n\nxyz\n\n"[..], &mut out)
        .await
        .unwrap();

    assert_eq!(out, b"YWJj\n\neHl6\n\n");
    assert_eq!(
        summary,
        StreamSummary {
            received: 2,
            forwarded: 2,
            acked: 0,
        }
    );
    assert_eq!(stats.get("sent"), Some(2));
}

#[tokio::test]
async fn test_empty_message_writes_nothing() {
    let stats = LocalStats::new();
    let encoder = processor(&ProcessorConfig::encode(), &stats);

    let mut out = Vec::new();
    let summary = run(encoder.as_ref(), &b"abc\n\n\n"[..], &mut out)
        .await
        .unwrap();

    assert_eq!(out, b"YWJj\n\n");
    assert_eq!(summary.acked, 1);
    assert_eq!(stats.get("skipped"), Some(1));
}

#[tokio::test]
async fn test_selected_parts_stream() {
    let stats = LocalStats::new();
    let config = ProcessorConfig::encode()
        .with_option("scheme", "hex")
        .with_option("parts", vec![1_i64]);
    let encoder = processor(&config, &stats);

    let mut out = Vec::new();
    run(encoder.as_ref(), &b"keep\nab\n"[..], &mut out)
        .await
        .unwrap();

    assert_eq!(out, b"keep\n6162\n\n");
}

#[tokio::test]
async fn test_decode_failure_passes_part_through() {
    let stats = LocalStats::new();
    let decoder = processor(&ProcessorConfig::decode(), &stats);

    let mut out = Vec::new();
    run(decoder.as_ref(), &b"YWJj\n%%%\n\n"[..], &mut out)
        .await
        .unwrap();

    assert_eq!(out, b"abc\n%%%\n\n");
    assert_eq!(stats.get("error"), Some(1));
}

#[tokio::test]
async fn test_empty_input() {
    let stats = LocalStats::new();
    let encoder = processor(&ProcessorConfig::encode(), &stats);

    let mut out = Vec::new();
    let summary = run(encoder.as_ref(), &b""[..], &mut out).await.unwrap();

    assert!(out.is_empty());
    assert_eq!(summary, StreamSummary::default());
    assert_eq!(stats.get("count"), Some(0));
}

#[tokio::test]
async fn test_disabled_processor_passes_messages_through() {
    let stats = LocalStats::new();
    let encoder = processor(&ProcessorConfig::encode().with_enabled(false), &stats);

    let mut out = Vec::new();
    let summary = run(encoder.as_ref(), &b"abc\nxyz\n\n\n"[..], &mut out)
        .await
        .unwrap();

    assert_eq!(out, b"abc\nxyz\n\n");
    assert_eq!(summary.forwarded, 1);
    assert_eq!(summary.acked, 1);
    assert_eq!(stats.get("count"), Some(0));
}
