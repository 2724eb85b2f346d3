//! Adaptive Huffman model backed by an index arena.

use bitstream::{BitReader, BitWriter};

/// Symbol value of the "not yet transmitted" escape leaf.
pub const NYT: u16 = 256;

/// Symbol value carried by internal (non-leaf) nodes.
pub const INTERNAL_NODE: u16 = 257;

/// Upper bound on the number of nodes: 256 symbol leaves, one NYT leaf and
/// one internal node per symbol.
pub const MAX_NODES: usize = 2 * 257 - 1;

type NodeId = usize;
type SlotId = usize;

#[derive(Debug, Clone, Copy)]
struct Node {
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
    /// Next node in the weight-ordered list (towards heavier nodes).
    next: Option<NodeId>,
    /// Previous node in the weight-ordered list (towards lighter nodes).
    prev: Option<NodeId>,
    /// Rank-head slot shared by every node of equal weight in a run.
    head: SlotId,
    weight: u32,
    symbol: u16,
}

impl Node {
    const fn leaf(symbol: u16, weight: u32, head: SlotId) -> Self {
        Self {
            left: None,
            right: None,
            parent: None,
            next: None,
            prev: None,
            head,
            weight,
            symbol,
        }
    }
}

/// One adaptive Huffman tree plus its weight-ranked node list.
///
/// Nodes live in a contiguous arena and refer to each other by index. The
/// update algorithm (`add_ref`, `increment`, `swap`, `swap_list`) follows the
/// legacy mutation order exactly, because tie-breaking between equal weights
/// decides the produced bit patterns.
#[derive(Debug, Clone)]
pub struct HuffmanModel {
    nodes: Vec<Node>,
    /// Rank-head slots; each points at the highest-ranked node of a run.
    slots: Vec<Option<NodeId>>,
    free_slots: Vec<SlotId>,
    tree: NodeId,
    lhead: NodeId,
    loc: [Option<NodeId>; 257],
}

impl Default for HuffmanModel {
    fn default() -> Self {
        Self::new()
    }
}

impl HuffmanModel {
    /// Creates an empty model holding only the NYT leaf.
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = Vec::with_capacity(MAX_NODES);
        nodes.push(Node::leaf(NYT, 0, 0));
        let mut loc = [None; 257];
        loc[usize::from(NYT)] = Some(0);
        Self {
            nodes,
            slots: vec![Some(0)],
            free_slots: Vec::new(),
            tree: 0,
            lhead: 0,
            loc,
        }
    }

    /// Returns the number of allocated nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if `symbol` already has a leaf in the tree.
    #[must_use]
    pub fn contains(&self, symbol: u8) -> bool {
        self.loc[usize::from(symbol)].is_some()
    }

    /// Returns the weight of the leaf for `symbol`, if it exists.
    #[must_use]
    pub fn weight(&self, symbol: u8) -> Option<u32> {
        self.loc[usize::from(symbol)].map(|id| self.nodes[id].weight)
    }

    /// Returns the weight of the root node (total references recorded).
    #[must_use]
    pub fn total_weight(&self) -> u32 {
        self.nodes[self.tree].weight
    }

    /// Records one occurrence of `symbol`, updating the tree.
    pub fn add_ref(&mut self, symbol: u8) {
        let Some(leaf) = self.loc[usize::from(symbol)] else {
            self.insert_symbol(symbol);
            return;
        };
        self.increment(Some(leaf));
    }

    /// Writes the code for `symbol`.
    ///
    /// A symbol that has never been referenced is sent as the NYT code followed
    /// by its 8-bit literal, most significant bit first.
    pub fn transmit(&self, symbol: u8, writer: &mut BitWriter<'_>) {
        match self.loc[usize::from(symbol)] {
            Some(leaf) => self.send(leaf, writer),
            None => {
                if let Some(nyt) = self.loc[usize::from(NYT)] {
                    self.send(nyt, writer);
                }
                writer.write_bits_msb(u32::from(symbol), 8);
            }
        }
    }

    /// Reads one symbol.
    ///
    /// Descends from the root, `0` going left and `1` going right. Reaching the
    /// NYT leaf reads an 8-bit literal. A missing child on a corrupt stream
    /// yields symbol 0.
    pub fn receive(&self, reader: &mut BitReader<'_>) -> u8 {
        let mut node = Some(self.tree);
        while let Some(id) = node {
            if self.nodes[id].symbol != INTERNAL_NODE {
                break;
            }
            node = if reader.get_bit() == 1 {
                self.nodes[id].right
            } else {
                self.nodes[id].left
            };
        }
        match node {
            None => 0,
            Some(id) if self.nodes[id].symbol == NYT => reader.read_bits_msb(8) as u8,
            Some(id) => self.nodes[id].symbol as u8,
        }
    }

    /// Checks the structural invariants of the weight-ordered list: links are
    /// symmetric, weights never decrease along `next`, and every node is
    /// reachable from the list head.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.nodes[self.lhead].prev.is_some() {
            return false;
        }
        let mut visited = 1usize;
        let mut current = self.lhead;
        while let Some(next) = self.nodes[current].next {
            if self.nodes[next].prev != Some(current)
                || self.nodes[next].weight < self.nodes[current].weight
            {
                return false;
            }
            visited += 1;
            if visited > self.nodes.len() {
                return false;
            }
            current = next;
        }
        visited == self.nodes.len()
    }

    fn insert_symbol(&mut self, symbol: u8) {
        let Some(nyt) = self.loc[usize::from(NYT)] else {
            return;
        };
        let lhead = self.lhead;

        let internal = self.nodes.len();
        let mut internal_node = Node::leaf(INTERNAL_NODE, 1, 0);
        internal_node.next = self.nodes[lhead].next;
        internal_node.head = match self.nodes[lhead].next {
            Some(first) => {
                self.nodes[first].prev = Some(internal);
                if self.nodes[first].weight == 1 {
                    self.nodes[first].head
                } else {
                    self.alloc_slot(internal)
                }
            }
            None => self.alloc_slot(internal),
        };
        self.nodes.push(internal_node);
        self.nodes[lhead].next = Some(internal);
        self.nodes[internal].prev = Some(lhead);

        let leaf = self.nodes.len();
        let mut leaf_node = Node::leaf(u16::from(symbol), 1, 0);
        leaf_node.next = self.nodes[lhead].next;
        leaf_node.head = match self.nodes[lhead].next {
            Some(first) => {
                self.nodes[first].prev = Some(leaf);
                if self.nodes[first].weight == 1 {
                    self.nodes[first].head
                } else {
                    self.alloc_slot(leaf)
                }
            }
            None => self.alloc_slot(leaf),
        };
        self.nodes.push(leaf_node);
        self.nodes[lhead].next = Some(leaf);
        self.nodes[leaf].prev = Some(lhead);

        match self.nodes[nyt].parent {
            Some(parent) => {
                if self.nodes[parent].left == Some(nyt) {
                    self.nodes[parent].left = Some(internal);
                } else {
                    self.nodes[parent].right = Some(internal);
                }
            }
            None => self.tree = internal,
        }

        self.nodes[internal].right = Some(leaf);
        self.nodes[internal].left = Some(nyt);
        self.nodes[internal].parent = self.nodes[nyt].parent;
        self.nodes[nyt].parent = Some(internal);
        self.nodes[leaf].parent = Some(internal);

        self.loc[usize::from(symbol)] = Some(leaf);

        self.increment(self.nodes[internal].parent);
    }

    fn increment(&mut self, node: Option<NodeId>) {
        let Some(node) = node else {
            return;
        };

        if let Some(next) = self.nodes[node].next {
            if self.nodes[next].weight == self.nodes[node].weight {
                if let Some(lnode) = self.slots[self.nodes[node].head] {
                    if Some(lnode) != self.nodes[node].parent {
                        self.swap(lnode, node);
                    }
                    self.swap_list(lnode, node);
                }
            }
        }

        let head = self.nodes[node].head;
        match self.nodes[node].prev {
            Some(prev) if self.nodes[prev].weight == self.nodes[node].weight => {
                self.slots[head] = Some(prev);
            }
            _ => {
                self.slots[head] = None;
                self.free_slots.push(head);
            }
        }

        self.nodes[node].weight += 1;

        match self.nodes[node].next {
            Some(next) if self.nodes[next].weight == self.nodes[node].weight => {
                self.nodes[node].head = self.nodes[next].head;
            }
            _ => {
                self.nodes[node].head = self.alloc_slot(node);
            }
        }

        if let Some(parent) = self.nodes[node].parent {
            self.increment(Some(parent));
            if self.nodes[node].prev == Some(parent) {
                self.swap_list(node, parent);
                let head = self.nodes[node].head;
                if self.slots[head] == Some(node) {
                    self.slots[head] = Some(parent);
                }
            }
        }
    }

    /// Exchanges the tree positions of two nodes (subtrees move with them).
    fn swap(&mut self, a: NodeId, b: NodeId) {
        let parent_a = self.nodes[a].parent;
        let parent_b = self.nodes[b].parent;

        match parent_a {
            Some(p) => {
                if self.nodes[p].left == Some(a) {
                    self.nodes[p].left = Some(b);
                } else {
                    self.nodes[p].right = Some(b);
                }
            }
            None => self.tree = b,
        }

        match parent_b {
            Some(p) => {
                if self.nodes[p].left == Some(b) {
                    self.nodes[p].left = Some(a);
                } else {
                    self.nodes[p].right = Some(a);
                }
            }
            None => self.tree = a,
        }

        self.nodes[a].parent = parent_b;
        self.nodes[b].parent = parent_a;
    }

    /// Exchanges the list positions of two nodes.
    fn swap_list(&mut self, a: NodeId, b: NodeId) {
        let next_a = self.nodes[a].next;
        self.nodes[a].next = self.nodes[b].next;
        self.nodes[b].next = next_a;

        let prev_a = self.nodes[a].prev;
        self.nodes[a].prev = self.nodes[b].prev;
        self.nodes[b].prev = prev_a;

        if self.nodes[a].next == Some(a) {
            self.nodes[a].next = Some(b);
        }
        if self.nodes[b].next == Some(b) {
            self.nodes[b].next = Some(a);
        }
        if let Some(n) = self.nodes[a].next {
            self.nodes[n].prev = Some(a);
        }
        if let Some(n) = self.nodes[b].next {
            self.nodes[n].prev = Some(b);
        }
        if let Some(p) = self.nodes[a].prev {
            self.nodes[p].next = Some(a);
        }
        if let Some(p) = self.nodes[b].prev {
            self.nodes[p].next = Some(b);
        }
    }

    /// Emits the path from the root down to `node`, one bit per edge.
    fn send(&self, node: NodeId, writer: &mut BitWriter<'_>) {
        if let Some(parent) = self.nodes[node].parent {
            self.send(parent, writer);
            writer.put_bit(u8::from(self.nodes[parent].right == Some(node)));
        }
    }

    fn alloc_slot(&mut self, occupant: NodeId) -> SlotId {
        let slot = if let Some(slot) = self.free_slots.pop() {
            slot
        } else {
            self.slots.push(None);
            self.slots.len() - 1
        };
        self.slots[slot] = Some(occupant);
        slot
    }
}
