//! # Token trie over subscription patterns.
//!
//! Patterns are tokenized on the configured separator and laid out as a
//! trie. Each node splits three ways, so resolution is a multi-branch walk
//! rather than a single descent:
//!
//! ```text
//! resolve("a/b"):                     trie after on("a/b"), on("a/+"), on("a/#"):
//!
//!   root ── "a" ──► node(a)                   root
//!                     │                         └─ literal "a"
//!         ┌───────────┼───────────┐                  ├─ literal "b"   [L1]
//!         ▼           ▼           ▼                  ├─ one (+)       [L2]
//!    literal "b"   one (+)     some (#)              └─ some (#)      [L3]
//!    consume "b"   consume "b" match rest
//!         │           │           │
//!       [L1]        [L2]        [L3]      ──► [L1, L2, L3]
//! ```
//!
//! ## Rules
//! - **Literal branch**: consumes exactly its token.
//! - **Single-wildcard branch**: consumes exactly one token, any value.
//! - **Multi-wildcard branch**: terminal; matches one or more remaining
//!   tokens and carries its listeners directly. It never has children, so
//!   a multi-wildcard token ends its pattern (trailing tokens are ignored).
//! - Listeners live on the node their pattern terminates at, in
//!   registration order. Discovery order is literal, then single-wildcard,
//!   then multi-wildcard, depth-first.
//! - Identity is reference-based: removal compares trait-object pointers,
//!   so the same handler registered twice is two distinct subscriptions.
//! - Nodes are created lazily on registration and are not pruned on
//!   removal.
//! - The empty string tokenizes to zero tokens and addresses the root.

use std::collections::HashMap;

use crate::config::Config;
use crate::listeners::{Listen, ListenerRef};

/// One trie node: three typed child slots plus the listeners registered
/// with a pattern terminating exactly here.
#[derive(Default)]
struct TrieNode {
    /// Literal token → child.
    literal: HashMap<String, TrieNode>,
    /// Single-level wildcard child (consumes any one token).
    one: Option<Box<TrieNode>>,
    /// Multi-level wildcard child (terminal, listeners only).
    some: Option<Box<TrieNode>>,
    /// Listeners whose pattern ends at this node, in registration order.
    listeners: Vec<ListenerRef>,
}

/// Subscription storage and topic resolution for one engine instance.
///
/// The wildcard symbols and separator are captured at construction and fixed
/// afterwards; a token is a wildcard only if it equals the configured symbol
/// exactly.
pub(crate) struct TopicTrie {
    root: TrieNode,
    separator: String,
    wildcard_one: String,
    wildcard_some: String,
}

/// Compares two listener handles by trait-object identity.
fn same_listener(a: &ListenerRef, b: &ListenerRef) -> bool {
    std::ptr::eq::<dyn Listen>(&**a as _, &**b as _)
}

impl TopicTrie {
    /// Creates an empty trie using the symbols from `cfg`.
    pub fn new(cfg: &Config) -> Self {
        Self {
            root: TrieNode::default(),
            separator: cfg.separator.clone(),
            wildcard_one: cfg.wildcard_one.clone(),
            wildcard_some: cfg.wildcard_some.clone(),
        }
    }

    /// Splits a topic or pattern into tokens.
    ///
    /// The empty string yields no tokens (it addresses the root node).
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        if text.is_empty() {
            Vec::new()
        } else {
            text.split(self.separator.as_str()).collect()
        }
    }

    /// Registers `listener` under `pattern`, creating nodes as needed.
    pub fn register(&mut self, pattern: &str, listener: ListenerRef) {
        let tokens = self.tokenize(pattern);
        let mut node = &mut self.root;

        for token in tokens {
            if token == self.wildcard_some {
                // Terminal branch: anything after it cannot be reached.
                node = &mut **node.some.get_or_insert_with(Box::default);
                break;
            } else if token == self.wildcard_one {
                node = &mut **node.one.get_or_insert_with(Box::default);
            } else {
                node = node.literal.entry(token.to_string()).or_default();
            }
        }
        node.listeners.push(listener);
    }

    /// Removes the first registration of `listener` under `pattern`.
    ///
    /// Walks the existing path without creating nodes; a missing path or an
    /// absent listener is a no-op. At most one entry is removed per call.
    pub fn unregister(&mut self, pattern: &str, listener: &ListenerRef) {
        let tokens = self.tokenize(pattern);
        let mut node = &mut self.root;

        for token in tokens {
            let terminal = token == self.wildcard_some;
            let next = if terminal {
                node.some.as_deref_mut()
            } else if token == self.wildcard_one {
                node.one.as_deref_mut()
            } else {
                node.literal.get_mut(token)
            };

            match next {
                Some(child) => node = child,
                None => return,
            }
            if terminal {
                break;
            }
        }

        if let Some(pos) = node
            .listeners
            .iter()
            .position(|candidate| same_listener(candidate, listener))
        {
            node.listeners.remove(pos);
        }
    }

    /// Resolves every listener registration matching `topic`.
    ///
    /// At each node with remaining tokens, three independent branches are
    /// explored: the literal child for the next token, the single-wildcard
    /// child (consuming the next token regardless of value), and the
    /// multi-wildcard child, which contributes its listeners immediately
    /// since it swallows the rest of the topic. A node reached with zero
    /// remaining tokens contributes its own listeners (exact match).
    pub fn resolve(&self, topic: &str) -> Vec<ListenerRef> {
        let tokens = self.tokenize(topic);
        let mut matched = Vec::new();
        Self::collect(&self.root, &tokens, &mut matched);
        matched
    }

    fn collect(node: &TrieNode, tokens: &[&str], matched: &mut Vec<ListenerRef>) {
        match tokens.split_first() {
            None => matched.extend(node.listeners.iter().cloned()),
            Some((token, rest)) => {
                if let Some(child) = node.literal.get(*token) {
                    Self::collect(child, rest, matched);
                }
                if let Some(child) = &node.one {
                    Self::collect(child, rest, matched);
                }
                if let Some(child) = &node.some {
                    // One or more tokens remain here, which is exactly what
                    // the multi-level wildcard requires.
                    matched.extend(child.listeners.iter().cloned());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::core::Emitter;
    use crate::listeners::Ack;
    use crate::messages::Message;

    struct Noop;

    #[async_trait]
    impl Listen for Noop {
        async fn on_message(&self, _message: &Message, ack: Ack, _emitter: &Emitter) {
            ack.done();
        }
    }

    fn noop() -> ListenerRef {
        Arc::new(Noop)
    }

    fn trie() -> TopicTrie {
        TopicTrie::new(&Config::default())
    }

    #[test]
    fn test_exact_match() {
        let mut t = trie();
        t.register("hello world", noop());
        assert_eq!(t.resolve("hello world").len(), 1);
        assert!(t.resolve("hello").is_empty());
        assert!(t.resolve("hello world/x").is_empty());
    }

    #[test]
    fn test_single_level_wildcard() {
        let mut t = trie();
        t.register("a/+", noop());
        assert_eq!(t.resolve("a/b").len(), 1, "a/+ must match a/b");
        assert!(t.resolve("a/b/c").is_empty(), "a/+ must not match a/b/c");
        assert!(t.resolve("a").is_empty(), "a/+ must not match a");
    }

    #[test]
    fn test_multi_level_wildcard() {
        let mut t = trie();
        t.register("a/#", noop());
        assert_eq!(t.resolve("a/b").len(), 1, "a/# must match a/b");
        assert_eq!(t.resolve("a/b/c").len(), 1, "a/# must match a/b/c");
        assert!(t.resolve("a").is_empty(), "a/# requires at least one more token");
        assert!(t.resolve("b/c").is_empty());
    }

    #[test]
    fn test_root_multi_level_wildcard() {
        let mut t = trie();
        t.register("#", noop());
        assert_eq!(t.resolve("a").len(), 1);
        assert_eq!(t.resolve("a/b/c").len(), 1);
        assert!(t.resolve("").is_empty(), "# requires at least one token");
    }

    #[test]
    fn test_empty_pattern_addresses_root() {
        let mut t = trie();
        t.register("", noop());
        assert_eq!(t.resolve("").len(), 1);
        assert!(t.resolve("a").is_empty());
    }

    #[test]
    fn test_overlapping_patterns_each_contribute_once() {
        let mut t = trie();
        let deep = noop();
        let one = noop();
        t.register("hello/#", deep.clone());
        t.register("hello/+", one.clone());

        let matched = t.resolve("hello/world");
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().any(|l| same_listener(l, &deep)));
        assert!(matched.iter().any(|l| same_listener(l, &one)));
    }

    #[test]
    fn test_mid_pattern_wildcard() {
        let mut t = trie();
        t.register("hello/+/world", noop());
        assert_eq!(t.resolve("hello/my/world").len(), 1);
        assert!(t.resolve("hello/my/planet").is_empty());
        assert!(t.resolve("hello/world").is_empty());
    }

    #[test]
    fn test_custom_symbols() {
        let cfg = Config {
            separator: "~".into(),
            wildcard_one: "?".into(),
            wildcard_some: "*".into(),
        };
        let mut t = TopicTrie::new(&cfg);
        t.register("hello~?", noop());
        t.register("deep~*", noop());

        assert_eq!(t.resolve("hello~world").len(), 1);
        assert!(t.resolve("hello~my~world").is_empty());
        assert_eq!(t.resolve("deep~a~b~c").len(), 1);
        // The default "+" is an ordinary token here, consumed by "?".
        assert_eq!(t.resolve("hello~+").len(), 1);
    }

    #[test]
    fn test_registration_order_preserved_within_node() {
        let mut t = trie();
        let first = noop();
        let second = noop();
        t.register("a/b", first.clone());
        t.register("a/b", second.clone());

        let matched = t.resolve("a/b");
        assert_eq!(matched.len(), 2);
        assert!(same_listener(&matched[0], &first));
        assert!(same_listener(&matched[1], &second));
    }

    #[test]
    fn test_unregister_removes_single_entry() {
        let mut t = trie();
        let listener = noop();
        t.register("a", listener.clone());
        t.register("a", listener.clone());

        t.unregister("a", &listener);
        assert_eq!(t.resolve("a").len(), 1, "only one entry removed per call");

        t.unregister("a", &listener);
        assert!(t.resolve("a").is_empty());
    }

    #[test]
    fn test_unregister_missing_is_noop() {
        let mut t = trie();
        let registered = noop();
        let stranger = noop();
        t.register("a/b", registered.clone());

        t.unregister("never/registered", &stranger);
        t.unregister("a/b", &stranger);
        assert_eq!(t.resolve("a/b").len(), 1);
    }

    #[test]
    fn test_unregister_wildcard_pattern() {
        let mut t = trie();
        let listener = noop();
        t.register("a/#", listener.clone());
        t.unregister("a/#", &listener);
        assert!(t.resolve("a/b/c").is_empty());
    }

    #[test]
    fn test_same_handler_on_two_patterns_is_two_subscriptions() {
        let mut t = trie();
        let listener = noop();
        t.register("a/+", listener.clone());
        t.register("a/b", listener.clone());

        assert_eq!(t.resolve("a/b").len(), 2);

        t.unregister("a/+", &listener);
        assert_eq!(t.resolve("a/b").len(), 1);
    }
}
