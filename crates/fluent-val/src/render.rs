use crate::config::PrettyConfig;
use crate::item::Item;
use crate::node::Node;
use std::fmt;

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node(")?;
        let mut comma = "";
        for (name, item) in self.attributes() {
            write!(f, "{}{}={}", comma, name, item)?;
            comma = ", ";
        }
        if self.has_elements() {
            write!(f, "{}list(len={})", comma, self.len())?;
        }
        write!(f, ")")
    }
}

impl Node {
    pub fn to_fstr(&self) -> crate::FluentStr {
        self.to_string().into()
    }

    /// Multi-line rendering: one entry per line, attributes in declaration order,
    /// then elements as `[i]=value`. A nested node prints `Node` on its own entry
    /// line and its members one level deeper.
    ///
    /// ```rust
    /// use fluent_val::{Node, Obj, PrettyConfig, Value};
    ///
    /// let input = Value::from(Obj::new().with("a", 1).with("b", Obj::new().with("c", 2)));
    /// let node = Node::wrap(&input).unwrap();
    /// assert_eq!(node.pretty(&PrettyConfig::default()), "a=1\nb=Node\n  c=2\n");
    /// ```
    pub fn pretty(&self, config: &PrettyConfig) -> String {
        let mut out = String::new();
        print_members(&mut out, self, config, 0);
        out
    }
}

fn print_members(out: &mut String, node: &Node, config: &PrettyConfig, depth: usize) {
    let pad = config.pad(depth);
    for (name, item) in node.attributes() {
        print_entry(out, &pad, name, item, config, depth);
    }
    for (i, item) in node.elements().iter().enumerate() {
        print_entry(out, &pad, &format!("[{}]", i), item, config, depth);
    }
}

fn print_entry(
    out: &mut String,
    pad: &str,
    label: &str,
    item: &Item,
    config: &PrettyConfig,
    depth: usize,
) {
    out.push_str(pad);
    out.push_str(label);
    match item {
        Item::Term(value) => {
            out.push_str(&format!("={}\n", value));
        }
        Item::Node(nested) => {
            out.push_str("=Node\n");
            print_members(out, &nested.borrow(), config, depth + 1);
        }
    }
}
