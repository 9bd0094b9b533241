use crate::{Error, Result};
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashMap, HashSet};
use std::hash::Hash;

/// A node of a [`HuffmanTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode<S> {
    /// A symbol with its frequency.
    Leaf { symbol: S, weight: u64 },
    /// The merge of two subtrees; `left` is reached with `0`, `right` with
    /// `1`, and `weight` is the sum of their weights.
    Internal {
        weight: u64,
        left: usize,
        right: usize,
    },
}

impl<S> HuffmanNode<S> {
    /// Returns the weight of the subtree rooted at this node.
    pub fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. } | HuffmanNode::Internal { weight, .. } => *weight,
        }
    }
}

/// A Huffman tree.
///
/// The tree is built bottom-up by repeatedly extracting the two nodes of
/// minimum weight from a priority queue and merging them into a new
/// internal node, whose left child is the node extracted first. Ties
/// between equal weights are broken by creation order: leaves are created
/// in input order, and internal nodes after all leaves, in the order in
/// which they are merged. The resulting codes are thus a deterministic
/// function of the input.
///
/// Nodes live in an arena and refer to their children by index; the tree is
/// immutable after construction.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::greedy::HuffmanTree;
///
/// let tree = HuffmanTree::new(&['a', 'b', 'c', 'd', 'e'], &[5, 9, 12, 13, 16]).unwrap();
/// let codes = tree.codes();
/// assert_eq!(codes[&'a'], "100");
/// assert_eq!(codes[&'e'], "11");
///
/// let bits = tree.encode(&['c', 'a', 'b']).unwrap();
/// assert_eq!(bits, "00100101");
/// assert_eq!(tree.decode(&bits).unwrap(), ['c', 'a', 'b']);
/// ```
#[derive(Debug, Clone)]
pub struct HuffmanTree<S> {
    nodes: Vec<HuffmanNode<S>>,
    root: usize,
    /// Code of each symbol.
    codes: HashMap<S, String>,
}

impl<S: Clone + Eq + Hash> HuffmanTree<S> {
    /// Builds the Huffman tree of an alphabet with the given frequencies.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] if `symbols` and `frequencies` have
    /// different lengths, [`Error::EmptyAlphabet`] if they are empty, and
    /// [`Error::DuplicateSymbol`] if a symbol appears twice.
    ///
    /// [`Error::Overflow`] if the weight of an internal node, and thus the
    /// sum of all frequencies, does not fit a `u64`.
    pub fn new(symbols: &[S], frequencies: &[u64]) -> Result<Self> {
        if symbols.len() != frequencies.len() {
            return Err(Error::LengthMismatch {
                left: symbols.len(),
                right: frequencies.len(),
            });
        }
        if symbols.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        let mut seen = HashSet::with_capacity(symbols.len());
        if let Some(index) = symbols.iter().position(|symbol| !seen.insert(symbol)) {
            return Err(Error::DuplicateSymbol { index });
        }

        let mut nodes = Vec::with_capacity(2 * symbols.len() - 1);
        // Min-queue of (weight, node index); node indices are creation order
        let mut queue = BinaryHeap::with_capacity(symbols.len());
        for (symbol, &weight) in symbols.iter().zip(frequencies) {
            queue.push(Reverse((weight, nodes.len())));
            nodes.push(HuffmanNode::Leaf {
                symbol: symbol.clone(),
                weight,
            });
        }

        let mut root = 0;
        while let Some(Reverse((w_left, left))) = queue.pop() {
            let Some(Reverse((w_right, right))) = queue.pop() else {
                // Only the root is left
                root = left;
                break;
            };
            let weight = w_left.checked_add(w_right).ok_or(Error::Overflow {
                operation: "huffman",
                input: w_right,
                max: u64::MAX - w_left,
            })?;
            queue.push(Reverse((weight, nodes.len())));
            nodes.push(HuffmanNode::Internal {
                weight,
                left,
                right,
            });
        }

        let codes = assign_codes(&nodes, root);
        log::debug!(
            "Built Huffman tree with {} symbols and {} nodes",
            symbols.len(),
            nodes.len()
        );

        Ok(Self { nodes, root, codes })
    }

    /// Returns the nodes of the tree; the root is the last one.
    pub fn nodes(&self) -> &[HuffmanNode<S>] {
        &self.nodes
    }

    /// Returns the root of the tree.
    pub fn root(&self) -> &HuffmanNode<S> {
        &self.nodes[self.root]
    }

    /// Returns the code of a symbol.
    pub fn code(&self, symbol: &S) -> Option<&str> {
        self.codes.get(symbol).map(String::as_str)
    }

    /// Returns the table of codes, ordered by symbol.
    pub fn codes(&self) -> BTreeMap<S, String>
    where
        S: Ord,
    {
        self.codes
            .iter()
            .map(|(symbol, code)| (symbol.clone(), code.clone()))
            .collect()
    }

    /// Encodes a sequence of symbols as a string of `0`s and `1`s.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownSymbol`] if a symbol is not in the alphabet.
    pub fn encode(&self, message: &[S]) -> Result<String> {
        let mut bits = String::new();
        for (position, symbol) in message.iter().enumerate() {
            let code = self
                .code(symbol)
                .ok_or(Error::UnknownSymbol { position })?;
            bits.push_str(code);
        }
        Ok(bits)
    }

    /// Decodes a string of `0`s and `1`s.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCode`] if the string contains other characters or
    /// ends in the middle of a code; the position is that of the offending
    /// character, or the length of the string.
    pub fn decode(&self, bits: &str) -> Result<Vec<S>> {
        let mut message = Vec::new();

        if let HuffmanNode::Leaf { symbol, .. } = self.root() {
            // Single-symbol alphabet: every bit is a full code
            for (position, bit) in bits.chars().enumerate() {
                if bit != '0' {
                    return Err(Error::InvalidCode { position });
                }
                message.push(symbol.clone());
            }
            return Ok(message);
        }

        let mut node = self.root;
        let mut len = 0;
        for (position, bit) in bits.chars().enumerate() {
            node = match (bit, &self.nodes[node]) {
                ('0', HuffmanNode::Internal { left, .. }) => *left,
                ('1', HuffmanNode::Internal { right, .. }) => *right,
                _ => return Err(Error::InvalidCode { position }),
            };
            if let HuffmanNode::Leaf { symbol, .. } = &self.nodes[node] {
                message.push(symbol.clone());
                node = self.root;
            }
            len = position + 1;
        }

        if node != self.root {
            return Err(Error::InvalidCode { position: len });
        }
        Ok(message)
    }
}

/// Walks the tree assigning `0` to left arcs and `1` to right arcs.
///
/// A tree made of a single leaf gives its symbol the code `0`.
fn assign_codes<S: Clone + Eq + Hash>(
    nodes: &[HuffmanNode<S>],
    root: usize,
) -> HashMap<S, String> {
    let mut codes = HashMap::with_capacity(nodes.len() / 2 + 1);
    let mut stack = vec![(root, String::new())];

    while let Some((node, code)) = stack.pop() {
        match &nodes[node] {
            HuffmanNode::Leaf { symbol, .. } => {
                let code = if code.is_empty() { "0".into() } else { code };
                codes.insert(symbol.clone(), code);
            }
            HuffmanNode::Internal { left, right, .. } => {
                stack.push((*right, code.clone() + "1"));
                stack.push((*left, code + "0"));
            }
        }
    }

    codes
}

/// Computes the Huffman code table of an alphabet with the given
/// frequencies.
///
/// See [`HuffmanTree`] for the construction and the tie-breaking rule.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::greedy::huffman;
///
/// let codes = huffman(&['a', 'b', 'c', 'd', 'e'], &[5, 9, 12, 13, 16]).unwrap();
/// let table: Vec<_> = codes.iter().map(|(s, c)| (*s, c.as_str())).collect();
/// assert_eq!(
///     table,
///     [('a', "100"), ('b', "101"), ('c', "00"), ('d', "01"), ('e', "11")]
/// );
/// ```
pub fn huffman<S: Clone + Ord + Hash>(
    symbols: &[S],
    frequencies: &[u64],
) -> Result<BTreeMap<S, String>> {
    Ok(HuffmanTree::new(symbols, frequencies)?.codes())
}
