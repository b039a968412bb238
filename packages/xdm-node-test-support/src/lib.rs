//! Shared fixtures for xdm-node test suites.

use tracing_subscriber::EnvFilter;
use xdm_node::{ContainerNode, NameNodeDelegate, NewNode, NodeBuilder, XmlNode};

pub const ROOT_NAME: i32 = 10;
pub const CHILD_NAME: i32 = 11;
pub const ATTR_A_NAME: i32 = 12;
pub const ATTR_B_NAME: i32 = 13;
pub const PI_TARGET: i32 = 14;

/// Install a test-writer subscriber once per process. Honors `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("xdm_node=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

/// Builds this document and returns its nodes in document order:
///
/// ```text
/// document                      1
/// └── <root a="1" b="2">        1.3        (attributes 1.3.1.3, 1.3.1.5)
///     ├── "hello"               1.3.3
///     ├── <child>               1.3.5
///     │   └── <!--note-->       1.3.5.3
///     ├── <?target data?>       1.3.7
///     └── "bye"                 1.3.9
/// ```
pub fn sample_document() -> Vec<XmlNode> {
    let mut builder = NodeBuilder::default();
    let mut doc = XmlNode::from(builder.document().expect("document"));
    let mut root = builder
        .append_child(
            &mut doc,
            None,
            NewNode::Element(NameNodeDelegate::local(ROOT_NAME)),
        )
        .expect("append root");

    let XmlNode::Element(root_element) = &mut root else {
        unreachable!("root is an element");
    };
    let attr_a = builder
        .add_attribute(
            root_element,
            None,
            NameNodeDelegate::local(ATTR_A_NAME),
            "1",
        )
        .expect("add a");
    let attr_b = builder
        .add_attribute(
            root_element,
            Some(&attr_a),
            NameNodeDelegate::local(ATTR_B_NAME),
            "2",
        )
        .expect("add b");

    let mut hello = builder
        .append_child(&mut root, None, NewNode::Text(b"hello".to_vec()))
        .expect("append hello");
    let mut child = builder
        .append_child(
            &mut root,
            Some(&mut hello),
            NewNode::Element(NameNodeDelegate::local(CHILD_NAME)),
        )
        .expect("append child");
    let note = builder
        .append_child(&mut child, None, NewNode::Comment(b"note".to_vec()))
        .expect("append note");
    let mut pi = builder
        .append_child(
            &mut root,
            Some(&mut child),
            NewNode::ProcessingInstruction {
                target: NameNodeDelegate::local(PI_TARGET),
                content: b"data".to_vec(),
            },
        )
        .expect("append pi");
    let bye = builder
        .append_child(&mut root, Some(&mut pi), NewNode::Text(b"bye".to_vec()))
        .expect("append bye");

    // The builder only bumps the direct parent; fix up the ancestors.
    if let XmlNode::Element(e) = &mut root {
        e.containment().set_descendant_count(5);
    }
    if let XmlNode::Document(d) = &mut doc {
        d.containment().set_descendant_count(6);
    }

    vec![
        doc,
        root,
        attr_a.into(),
        attr_b.into(),
        hello,
        child,
        note,
        pi,
        bye,
    ]
}
