// WHY: Single-pass multi-pattern matching over the collapsed text
// Nodes live in an arena indexed by usize; failure links would otherwise
// form reference cycles

use std::collections::{HashMap, VecDeque};

use tracing::debug;

const ROOT: usize = 0;

/// One occurrence of a pattern in the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Index into the pattern list the automaton was built from.
    pub pattern_index: usize,
    /// Start byte offset in the scanned text.
    pub start: usize,
    /// End byte offset in the scanned text (exclusive).
    pub end: usize,
}

#[derive(Debug)]
struct Node {
    children: HashMap<char, usize>,
    fail: usize,
    /// Pattern indices terminating at this node, own entry first, then
    /// entries inherited from the failure chain.
    output: Vec<usize>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            fail: ROOT,
            output: Vec::new(),
        }
    }
}

/// Aho-Corasick automaton: a trie with failure back-links, matching every
/// pattern simultaneously in one pass over the text.
#[derive(Debug)]
pub struct AhoCorasick {
    nodes: Vec<Node>,
    patterns: Vec<String>,
}

impl AhoCorasick {
    /// Build the automaton from the given patterns. An empty pattern list
    /// produces a root-only automaton that matches nothing.
    pub fn new(patterns: Vec<String>) -> Self {
        let mut ac = Self {
            nodes: vec![Node::new()],
            patterns,
        };
        ac.build_trie();
        ac.build_fail_links();
        debug!(
            patterns = ac.patterns.len(),
            nodes = ac.nodes.len(),
            "built pattern automaton"
        );
        ac
    }

    /// Pattern string for a match's `pattern_index`.
    pub fn pattern(&self, index: usize) -> &str {
        &self.patterns[index]
    }

    fn build_trie(&mut self) {
        for i in 0..self.patterns.len() {
            let pattern = std::mem::take(&mut self.patterns[i]);
            let mut node = ROOT;
            for c in pattern.chars() {
                node = match self.nodes[node].children.get(&c) {
                    Some(&next) => next,
                    None => {
                        let next = self.nodes.len();
                        self.nodes.push(Node::new());
                        self.nodes[node].children.insert(c, next);
                        next
                    }
                };
            }
            self.nodes[node].output.push(i);
            self.patterns[i] = pattern;
        }
    }

    fn build_fail_links(&mut self) {
        let mut queue = VecDeque::new();

        // Depth-1 nodes fail to root
        let root_children: Vec<usize> = self.nodes[ROOT].children.values().copied().collect();
        for child in root_children {
            self.nodes[child].fail = ROOT;
            queue.push_back(child);
        }

        while let Some(current) = queue.pop_front() {
            let children: Vec<(char, usize)> = self.nodes[current]
                .children
                .iter()
                .map(|(&c, &n)| (c, n))
                .collect();

            for (c, child) in children {
                queue.push_back(child);

                // Walk the failure chain until a node has a transition on c
                let mut fail = self.nodes[current].fail;
                let fail_target = loop {
                    if let Some(&next) = self.nodes[fail].children.get(&c) {
                        break next;
                    }
                    if fail == ROOT {
                        break ROOT;
                    }
                    fail = self.nodes[fail].fail;
                };
                self.nodes[child].fail = fail_target;

                // Inherit outputs so suffix matches report at this position
                let inherited = self.nodes[fail_target].output.clone();
                self.nodes[child].output.extend(inherited);
            }
        }
    }

    /// Scan `text`, invoking the callback for every pattern occurrence in
    /// ascending end-offset order. The callback returns `false` to stop the
    /// scan early.
    pub fn scan<F>(&self, text: &str, mut callback: F)
    where
        F: FnMut(Match) -> bool,
    {
        let mut node = ROOT;

        for (i, c) in text.char_indices() {
            // Walk failure links until a transition on c exists
            while node != ROOT && !self.nodes[node].children.contains_key(&c) {
                node = self.nodes[node].fail;
            }
            node = match self.nodes[node].children.get(&c) {
                Some(&next) => next,
                None => ROOT,
            };

            if self.nodes[node].output.is_empty() {
                continue;
            }

            let end = i + c.len_utf8();
            for &pattern_index in &self.nodes[node].output {
                let m = Match {
                    pattern_index,
                    start: end - self.patterns[pattern_index].len(),
                    end,
                };
                if !callback(m) {
                    return;
                }
            }
        }
    }

    /// All occurrences of all patterns in `text`.
    pub fn find_all(&self, text: &str) -> Vec<Match> {
        let mut matches = Vec::new();
        self.scan(text, |m| {
            matches.push(m);
            true
        });
        matches
    }

    /// True if any pattern occurs in `text`. Stops at the first hit.
    pub fn has_match(&self, text: &str) -> bool {
        let mut found = false;
        self.scan(text, |_| {
            found = true;
            false
        });
        found
    }
}
