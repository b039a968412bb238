use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use xdm_node::{NameNodeDelegate, NewNode, NodeBuilder, NodeRecord, XmlNode};

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct Output {
    implementation: &'static str,
    workload: String,
    timestamp: String,
    name: String,
    total_ops: u64,
    duration_ms: f64,
    ops_per_sec: f64,
    extra: Extra,
    source_file: Option<String>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct Extra {
    count: u64,
    record_bytes: usize,
}

/// Appends `count` children below one element, then round-trips every node through a record.
fn run(count: u64) -> (f64, usize) {
    let start = Instant::now();
    let mut builder = NodeBuilder::default();
    let mut doc = XmlNode::from(builder.document().expect("document"));
    let mut root = builder
        .append_child(&mut doc, None, NewNode::Element(NameNodeDelegate::local(1)))
        .expect("append root");

    let mut nodes: Vec<XmlNode> = Vec::with_capacity(count as usize);
    for i in 0..count {
        let new = if i % 2 == 0 {
            NewNode::Text(format!("text {i}").into_bytes())
        } else {
            NewNode::Comment(format!("comment {i}").into_bytes())
        };
        let node = builder
            .append_child(&mut root, nodes.last_mut(), new)
            .expect("append child");
        nodes.push(node);
    }

    let mut record_bytes = 0;
    for node in &nodes {
        let record = NodeRecord::from(node);
        record_bytes += serde_json::to_vec(&record).expect("serialize record").len();
        let back = XmlNode::try_from(record).expect("materialize record");
        assert_eq!(&back, node);
    }
    (start.elapsed().as_secs_f64() * 1000.0, record_bytes)
}

fn main() {
    let mut count: u64 = 1_000;
    let mut out_file: Option<PathBuf> = None;
    for arg in env::args().skip(1) {
        if let Some(val) = arg.strip_prefix("--count=") {
            count = val.parse().unwrap_or(count);
        } else if let Some(val) = arg.strip_prefix("--out=") {
            out_file = Some(PathBuf::from(val));
        }
    }

    let (duration_ms, record_bytes) = run(count);
    let workload = format!("append-roundtrip-{count}");
    let output = Output {
        implementation: "xdm-node",
        workload: workload.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        name: workload,
        total_ops: count * 2,
        duration_ms,
        ops_per_sec: if duration_ms > 0.0 {
            (count as f64 * 2.0) / duration_ms * 1000.0
        } else {
            f64::INFINITY
        },
        extra: Extra {
            count,
            record_bytes,
        },
        source_file: out_file.as_ref().map(|p| p.display().to_string()),
    };

    let json = serde_json::to_string_pretty(&output).expect("serialize");
    if let Some(path) = out_file {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("mkdirs");
        }
        fs::write(&path, &json).expect("write output");
    }
    println!("{json}");
}
