#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

#[derive(Arbitrary, Debug)]
enum Node {
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    Array(Vec<Node>),
    Object(Vec<(String, Node)>),
}

impl Node {
    fn to_value(&self, depth: usize) -> Value {
        if depth > 32 {
            return Value::Null;
        }
        match self {
            Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(*b),
            Node::Int(i) => Value::from(*i),
            Node::Str(s) => Value::String(s.clone()),
            Node::Array(items) => {
                Value::Array(items.iter().map(|n| n.to_value(depth + 1)).collect())
            }
            Node::Object(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(k, n)| (k.clone(), n.to_value(depth + 1)))
                    .collect(),
            ),
        }
    }
}

fn has_single_element_array(v: &Value) -> bool {
    match v {
        Value::Array(a) => a.len() == 1 || a.iter().any(has_single_element_array),
        Value::Object(m) => m.values().any(has_single_element_array),
        _ => false,
    }
}

fuzz_target!(|node: Node| {
    let value = node.to_value(0);
    let pretty = serde_json::to_string_pretty(&value).unwrap();
    let out = jsonnorm::normalize_json_string(Some(&pretty)).unwrap();
    let parsed: Value = serde_json::from_str(&out).unwrap();
    if has_single_element_array(&parsed) {
        panic!("Single-element array survived!\nInput: {}\nOutput: {}", pretty, out);
    }
    if out.contains('\n') {
        panic!("Output is not minified: {}", out);
    }
});
