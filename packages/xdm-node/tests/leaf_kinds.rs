use xdm_node::{Error, Kind, NameKeys, NodeKey, NodeRecord, XmlNode};

fn leaf(kind: Kind) -> XmlNode {
    let mut record = NodeRecord::new(kind, NodeKey(5));
    record.parent_key = NodeKey(1);
    record.left_sibling_key = NodeKey(4);
    record.right_sibling_key = NodeKey(6);
    record.value = Some(b"payload".to_vec());
    if kind.has_name() {
        record.name = Some(NameKeys {
            uri_key: -1,
            prefix_key: -1,
            local_name_key: 7,
            path_node_key: NodeKey::NULL,
        });
    }
    XmlNode::try_from(record).expect("leaf record")
}

fn assert_misuse(result: xdm_node::Result<()>, kind: Kind, operation: &str) {
    match result {
        Err(Error::UnsupportedOperation { kind: k, operation: op }) => {
            assert_eq!(k, kind);
            assert_eq!(op, operation);
        }
        other => panic!("expected {operation} to fail on {kind}, got {other:?}"),
    }
}

#[test]
fn leaves_report_no_children() {
    xdm_node_test_support::init_tracing();
    for kind in Kind::ALL.into_iter().filter(|k| k.is_leaf()) {
        let node = leaf(kind);
        let s = node.as_struct_node();
        assert_eq!(node.kind(), kind);
        assert!(s.first_child_key().is_null(), "{kind}");
        assert!(s.last_child_key().is_null(), "{kind}");
        assert!(!s.has_first_child());
        assert_eq!(s.child_count(), 0);
        assert_eq!(s.descendant_count(), 0);
        assert_eq!(s.left_sibling_key(), NodeKey(4));
        assert_eq!(s.right_sibling_key(), NodeKey(6));
    }
}

#[test]
fn every_structural_mutator_fails_on_leaves() {
    xdm_node_test_support::init_tracing();
    for kind in Kind::ALL.into_iter().filter(|k| k.is_leaf()) {
        let mut node = leaf(kind);
        let s = node.as_struct_node_mut();
        assert_misuse(s.increment_child_count(), kind, "increment_child_count");
        assert_misuse(s.decrement_child_count(), kind, "decrement_child_count");
        assert_misuse(s.increment_descendant_count(), kind, "increment_descendant_count");
        assert_misuse(s.decrement_descendant_count(), kind, "decrement_descendant_count");
        assert_misuse(s.set_descendant_count(3), kind, "set_descendant_count");
        assert_misuse(s.set_first_child_key(NodeKey(9)), kind, "set_first_child_key");
        assert_misuse(s.set_last_child_key(NodeKey(9)), kind, "set_last_child_key");

        assert_eq!(s.descendant_count(), 0);
        assert!(node.containment().is_none());
    }
}

#[test]
fn containers_accept_structural_growth() {
    for kind in [Kind::Document, Kind::Element] {
        let mut record = NodeRecord::new(kind, NodeKey(0));
        if kind.has_name() {
            record.name = Some(NameKeys {
                uri_key: -1,
                prefix_key: -1,
                local_name_key: 1,
                path_node_key: NodeKey::NULL,
            });
        }
        let mut node = XmlNode::try_from(record).unwrap();
        let s = node.as_struct_node_mut();
        s.set_first_child_key(NodeKey(2)).unwrap();
        s.increment_child_count().unwrap();
        s.increment_descendant_count().unwrap();
        s.increment_descendant_count().unwrap();
        s.decrement_descendant_count().unwrap();
        assert_eq!(s.first_child_key(), NodeKey(2));
        assert_eq!(s.child_count(), 1);
        assert_eq!(s.descendant_count(), 1);

        node.containment()
            .expect("container")
            .set_last_child_key(NodeKey(3))
            .set_descendant_count(10);
        assert_eq!(node.as_struct_node().last_child_key(), NodeKey(3));
        assert_eq!(node.as_struct_node().descendant_count(), 10);
    }
}

#[test]
fn comment_scenario() {
    xdm_node_test_support::init_tracing();
    let mut record = NodeRecord::new(Kind::Comment, NodeKey(12));
    record.value = Some(b"hi".to_vec());
    let mut comment = XmlNode::try_from(record).unwrap();

    assert_eq!(comment.kind(), Kind::Comment);
    assert_eq!(comment.as_struct_node().first_child_key(), NodeKey::NULL);
    assert_eq!(comment.as_struct_node().descendant_count(), 0);
    assert_eq!(comment.as_value_node().unwrap().value(), "hi");

    let err = comment
        .as_struct_node_mut()
        .decrement_child_count()
        .unwrap_err();
    assert!(err.is_capability_misuse());
    assert_eq!(
        err.to_string(),
        "unsupported operation: decrement_child_count on comment node"
    );
}

#[test]
fn leaf_records_with_children_are_rejected() {
    let mut record = NodeRecord::new(Kind::Text, NodeKey(3));
    record.value = Some(Vec::new());
    record.first_child_key = NodeKey(4);
    assert!(matches!(
        XmlNode::try_from(record),
        Err(Error::InvalidRecord(_))
    ));
}
