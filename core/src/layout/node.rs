//! Layout tree, parsed from the YAML configuration file.
//!
//! A layout node is a single-key mapping: the key is a split spec string, the
//! value an ordered sequence with one element per size entry. Each element is
//! either a command string (optionally carrying `*` / `!` markers) or a
//! nested single-key mapping of the same shape.
//!
//! ```yaml
//! "v:10:~:20":
//!   - "*task calendar"
//!   - "h:~:30":
//!       - task next
//!       - "!task burndown.daily"
//! ```

use serde_yaml::Value;

use crate::error::{Error, Result};
use crate::layout::spec::SplitSpec;

/// One child position of a layout node.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutChild {
    /// A command to run in this pane, markers intact.
    Leaf(String),
    /// A nested split; its pivot is this position's pane.
    Split(LayoutNode),
}

impl From<LayoutNode> for LayoutChild {
    fn from(node: LayoutNode) -> LayoutChild {
        LayoutChild::Split(node)
    }
}

/// A parsed layout node: a split spec plus one child per size entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub spec: SplitSpec,
    pub children: Vec<LayoutChild>,
}

impl LayoutNode {
    /// Parse a layout tree from YAML text.
    pub fn from_yaml(text: &str) -> Result<LayoutNode> {
        let value: Value = serde_yaml::from_str(text)
            .map_err(|e| Error::Config(format!("layout is not valid YAML: {}", e)))?;
        LayoutNode::from_value(&value)
    }

    /// Parse a layout node from a decoded YAML value.
    pub fn from_value(value: &Value) -> Result<LayoutNode> {
        let mapping = value
            .as_mapping()
            .ok_or_else(|| Error::Config("layout node must be a mapping".into()))?;
        if mapping.len() != 1 {
            return Err(Error::Config(format!(
                "layout node must have exactly one split-spec key, found {}",
                mapping.len()
            )));
        }
        let (key, val) = mapping
            .iter()
            .next()
            .ok_or_else(|| Error::Config("layout node is empty".into()))?;

        let raw_spec = key
            .as_str()
            .ok_or_else(|| Error::Config("split-spec key must be a string".into()))?;
        let spec = SplitSpec::parse(raw_spec)?;

        let seq = val.as_sequence().ok_or_else(|| {
            Error::Config(format!("children of '{}' must be a sequence", raw_spec))
        })?;
        if seq.len() != spec.len() {
            return Err(Error::Config(format!(
                "layout '{}' declares {} sizes but has {} children",
                raw_spec,
                spec.len(),
                seq.len()
            )));
        }

        let mut children = Vec::with_capacity(seq.len());
        for child in seq {
            match child {
                Value::String(cmd) => children.push(LayoutChild::Leaf(cmd.clone())),
                Value::Mapping(_) => {
                    children.push(LayoutChild::Split(LayoutNode::from_value(child)?))
                }
                other => {
                    return Err(Error::Config(format!(
                        "layout child must be a command string or nested mapping, found {:?}",
                        other
                    )))
                }
            }
        }

        Ok(LayoutNode { spec, children })
    }

    /// Number of leaf commands in the whole subtree.
    pub fn leaf_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| match c {
                LayoutChild::Leaf(_) => 1,
                LayoutChild::Split(n) => n.leaf_count(),
            })
            .sum()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::spec::Axis;

    #[test]
    fn parses_flat_layout() {
        let node = LayoutNode::from_yaml("\"v:10:~:20\": [\"*cmd1\", cmd2, cmd3]").unwrap();
        assert_eq!(node.spec.axis, Axis::Vertical);
        assert_eq!(node.children.len(), 3);
        assert_eq!(node.children[0], LayoutChild::Leaf("*cmd1".into()));
        assert_eq!(node.leaf_count(), 3);
    }

    #[test]
    fn parses_nested_layout() {
        let yaml = r#"
"v:10:~:20":
  - "*cmd1"
  - "h:~:30":
      - cmd2
      - "!cmd3"
  - cmd4
"#;
        let node = LayoutNode::from_yaml(yaml).unwrap();
        assert_eq!(node.children.len(), 3);
        match &node.children[1] {
            LayoutChild::Split(inner) => {
                assert_eq!(inner.spec.axis, Axis::Horizontal);
                assert_eq!(inner.children.len(), 2);
            }
            other => panic!("expected nested split, got {:?}", other),
        }
        assert_eq!(node.leaf_count(), 4);
    }

    #[test]
    fn arity_mismatch_is_config_error() {
        let err = LayoutNode::from_yaml("\"v:10:~:20\": [cmd1, cmd2]").unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("3 sizes but has 2 children"));
    }

    #[test]
    fn multi_key_mapping_rejected() {
        let yaml = "\"v:~:10\": [a, b]\n\"h:~:10\": [c, d]\n";
        assert!(LayoutNode::from_yaml(yaml).is_err());
    }

    #[test]
    fn non_mapping_root_rejected() {
        assert!(LayoutNode::from_yaml("- a\n- b\n").is_err());
        assert!(LayoutNode::from_yaml("just a string").is_err());
    }

    #[test]
    fn bad_split_spec_key_rejected() {
        assert!(LayoutNode::from_yaml("\"v:10:20\": [a, b]").is_err());
    }

    #[test]
    fn numeric_child_rejected() {
        assert!(LayoutNode::from_yaml("\"v:~:10\": [a, 7]").is_err());
    }
}
