use fluent_val::{
    Array, FluentError, Item, Node, Obj, PrettyConfig, Reader, Value, WrapConfig,
};
use pretty_assertions::assert_eq;

fn wrap(value: impl Into<Value>) -> Node {
    Node::wrap(&value.into()).unwrap()
}

fn config_input() -> Value {
    Value::from(
        Obj::new()
            .with("name", "gateway")
            .with(
                "listen",
                Obj::new().with("host", "0.0.0.0").with("port", 8080),
            )
            .with(
                "routes",
                Array::new()
                    .with(Obj::new().with("path", "/").with("to", "web"))
                    .with(Obj::new().with("path", "/api").with("to", "api")),
            ),
    )
}

#[test]
fn test_rendering_is_reproducible() {
    let a = Node::wrap(&config_input()).unwrap();
    let b = Node::wrap(&config_input()).unwrap();
    assert_eq!(a.to_string(), b.to_string());
    assert_eq!(
        a.to_string(),
        "Node(name=gateway, listen=Node(host=0.0.0.0, port=8080), routes=Node(list(len=2)))"
    );
}

#[test]
fn test_append_then_get() {
    let mut node = Node::new();
    assert_eq!(node.len(), 0);
    node.append("x");
    assert_eq!(node.len(), 1);
    assert_eq!(node.get(0).unwrap(), Some(Item::from("x")));
}

#[test]
fn test_index_failures() {
    let node = wrap(vec![1, 2]);
    for i in [-1, -10] {
        assert_eq!(node.get(i).unwrap_err(), FluentError::NegativeIndex(i));
    }
    for i in [2, 3, 100] {
        assert!(matches!(
            node.get(i).unwrap_err(),
            FluentError::IndexOutOfRange { len: 2, .. }
        ));
    }
    assert_eq!(Node::new().get(0).unwrap(), None);
    assert_eq!(
        node.get_at(&Value::from("0")).unwrap_err(),
        FluentError::InvalidIndexType {
            found: "str".to_string()
        }
    );
}

#[test]
fn test_merge_identity() {
    let mut node = Node::wrap(&config_input()).unwrap();
    node.append(1);
    let before = node.deep_clone();
    node.merge(Node::new());
    assert_eq!(node, before);
}

#[test]
fn test_merge_overwrite() {
    let mut left = wrap(Obj::new().with("a", "x"));
    left.merge(wrap(Obj::new().with("a", 1)));
    assert_eq!(left.to_string(), "Node(a=1)");
}

#[test]
fn test_merge_deep_combine() {
    let mut left = wrap(Obj::new().with("a", Obj::new().with("c", 1)));
    left.merge(wrap(Obj::new().with("a", Obj::new().with("b", 2))));
    assert!(left.check_path("a.b"));
    assert!(left.check_path("a.c"));
}

#[test]
fn test_merge_list_append() {
    let mut left = wrap(vec![1, 2]);
    left.merge(wrap(vec![3, 4]));
    let values: Vec<String> = left.elements().iter().map(|i| i.to_string()).collect();
    assert_eq!(values, vec!["1", "2", "3", "4"]);

    let mut twice = wrap(vec![1]);
    twice.merge(wrap(vec![1]));
    assert_eq!(twice.len(), 2);
}

#[test]
fn test_check_path() {
    assert!(wrap(Obj::new().with("a", Obj::new().with("b", 5))).check_path("a.b"));
    assert!(!wrap(Obj::new().with("a", 5)).check_path("a.b"));
    assert!(!wrap(Obj::new().with("x", 1)).check_path("a.b"));
}

#[test]
fn test_reader_order() {
    let mut node = wrap(Obj::new().with("b", 1).with("a", 2));
    node.append(9);
    node.append(8);

    let mut reader = node.into_reader();
    assert_eq!(reader.advance().unwrap(), Item::from(2));
    assert_eq!(reader.advance().unwrap(), Item::from(1));
    assert_eq!(reader.advance().unwrap(), Item::from(9));
    assert_eq!(reader.advance().unwrap(), Item::from(8));
    assert_eq!(reader.advance().unwrap_err(), FluentError::EndOfSequence);
    assert_eq!(reader.advance().unwrap_err(), FluentError::EndOfSequence);
}

#[test]
fn test_fresh_reader_restarts() {
    let shared = wrap(Obj::new().with("k", 1)).into_shared();
    assert_eq!(Reader::new(&shared).count(), 1);
    assert_eq!(Reader::new(&shared).count(), 1);
}

#[test]
fn test_strict_root() {
    let node = Node::wrap_with(&config_input(), &WrapConfig::new().strict()).unwrap();
    assert_eq!(
        node.attr("timeout").unwrap_err().to_string(),
        "no such item(timeout)"
    );
    let listen = node.get_key("listen").unwrap();
    assert_eq!(listen.as_node().unwrap().borrow().attr("timeout").unwrap(), None);
}

#[test]
fn test_pretty_layout() {
    let node = Node::wrap(&config_input()).unwrap();
    let expected = "\
name=gateway
listen=Node
  host=0.0.0.0
  port=8080
routes=Node
  [0]=Node
    path=/
    to=web
  [1]=Node
    path=/api
    to=api
";
    assert_eq!(node.pretty(&PrettyConfig::default()), expected);
}

#[test]
fn test_incremental_build() {
    let mut root = Node::new();
    root.set("env", "prod");
    root += wrap(Obj::new().with("limits", Obj::new().with("cpu", 2)));
    root += wrap(Obj::new().with("limits", Obj::new().with("mem", "1G")));
    root.append(wrap(vec![1, 2]));
    root.delete_key("env");

    assert_eq!(
        root.to_string(),
        "Node(limits=Node(cpu=2, mem=1G), list(len=1))"
    );
}
