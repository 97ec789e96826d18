//! Ratcliff/Obershelp sequence matching.
//!
//! The matcher finds the longest contiguous matching block, then recurses into
//! the pieces left and right of it. Matching blocks are turned into opcodes
//! that describe how to get from `a` to `b`.
//!
//! With autojunk enabled, elements of `b` that make up more than one percent of
//! a sequence of 200 or more elements are "popular": they are never used to
//! start a match, although a match may still be extended across them.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Minimum length of `b` before popular elements are ignored.
const AUTOJUNK_MIN_LEN: usize = 200;

/// Kind of an opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpTag {
    /// `a[i1..i2] == b[j1..j2]`.
    Equal,
    /// `a[i1..i2]` should be replaced by `b[j1..j2]`.
    Replace,
    /// `a[i1..i2]` should be deleted (`j1 == j2`).
    Delete,
    /// `b[j1..j2]` should be inserted at `a[i1..i1]`.
    Insert,
}

/// One run of an alignment between `a` and `b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Opcode {
    pub tag: OpTag,
    pub i1: usize,
    pub i2: usize,
    pub j1: usize,
    pub j2: usize,
}

impl Opcode {
    /// Length of the run in `a`.
    pub fn a_len(&self) -> usize {
        self.i2 - self.i1
    }
}

/// A block where `a[a..a + size] == b[b..b + size]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Match {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

/// Aligns two sequences.
#[derive(Debug)]
pub struct SequenceMatcher<'s, T> {
    a: &'s [T],
    b: &'s [T],
    b2j: HashMap<&'s T, Vec<usize>>,
}

impl<'s, T> SequenceMatcher<'s, T>
where
    T: Eq + Hash,
{
    /// Creates a matcher with autojunk enabled.
    pub fn new(a: &'s [T], b: &'s [T]) -> Self {
        Self::with_autojunk(a, b, true)
    }

    /// Creates a matcher, optionally disabling the popular-element heuristic.
    pub fn with_autojunk(a: &'s [T], b: &'s [T], autojunk: bool) -> Self {
        let mut b2j: HashMap<&'s T, Vec<usize>> = HashMap::new();
        for (j, elt) in b.iter().enumerate() {
            b2j.entry(elt).or_default().push(j);
        }

        let n = b.len();
        if autojunk && n >= AUTOJUNK_MIN_LEN {
            let ntest = n / 100 + 1;
            let popular: HashSet<&'s T> = b2j
                .iter()
                .filter(|(_, positions)| positions.len() > ntest)
                .map(|(elt, _)| *elt)
                .collect();
            for elt in popular {
                b2j.remove(elt);
            }
        }

        Self { a, b, b2j }
    }

    /// Finds the longest matching block in `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Among equally long blocks the one starting earliest in `a`, and then
    /// earliest in `b`, wins. A block of size 0 means nothing matches.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Match {
        let (a, b) = (self.a, self.b);
        let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0);

        // j2len[j] is the length of the match ending in a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next.insert(j, k);
                    if k > bestsize {
                        besti = i + 1 - k;
                        bestj = j + 1 - k;
                        bestsize = k;
                    }
                }
            }
            j2len = next;
        }

        // popular elements never start a match but may extend one
        while besti > alo && bestj > blo && a[besti - 1] == b[bestj - 1] {
            besti -= 1;
            bestj -= 1;
            bestsize += 1;
        }
        while besti + bestsize < ahi
            && bestj + bestsize < bhi
            && a[besti + bestsize] == b[bestj + bestsize]
        {
            bestsize += 1;
        }

        Match {
            a: besti,
            b: bestj,
            size: bestsize,
        }
    }

    /// Returns all matching blocks in order, ending with `(len a, len b, 0)`.
    ///
    /// Adjacent blocks are merged.
    pub fn matching_blocks(&self) -> Vec<Match> {
        let (la, lb) = (self.a.len(), self.b.len());
        let mut queue = vec![(0, la, 0, lb)];
        let mut blocks = Vec::new();
        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let found = self.find_longest_match(alo, ahi, blo, bhi);
            if found.size == 0 {
                continue;
            }
            if alo < found.a && blo < found.b {
                queue.push((alo, found.a, blo, found.b));
            }
            if found.a + found.size < ahi && found.b + found.size < bhi {
                queue.push((found.a + found.size, ahi, found.b + found.size, bhi));
            }
            blocks.push(found);
        }
        blocks.sort_unstable();

        let mut merged: Vec<Match> = Vec::with_capacity(blocks.len() + 1);
        for block in blocks {
            match merged.last_mut() {
                Some(prev) if prev.a + prev.size == block.a && prev.b + prev.size == block.b => {
                    prev.size += block.size;
                }
                _ => merged.push(block),
            }
        }
        merged.push(Match {
            a: la,
            b: lb,
            size: 0,
        });
        merged
    }

    /// Returns the opcodes that turn `a` into `b`.
    ///
    /// The runs are ordered, do not overlap and cover both sequences.
    pub fn opcodes(&self) -> Vec<Opcode> {
        let (mut i, mut j) = (0, 0);
        let mut opcodes = Vec::new();
        for block in self.matching_blocks() {
            let tag = match (i < block.a, j < block.b) {
                (true, true) => Some(OpTag::Replace),
                (true, false) => Some(OpTag::Delete),
                (false, true) => Some(OpTag::Insert),
                (false, false) => None,
            };
            if let Some(tag) = tag {
                opcodes.push(Opcode {
                    tag,
                    i1: i,
                    i2: block.a,
                    j1: j,
                    j2: block.b,
                });
            }
            i = block.a + block.size;
            j = block.b + block.size;
            if block.size > 0 {
                opcodes.push(Opcode {
                    tag: OpTag::Equal,
                    i1: block.a,
                    i2: i,
                    j1: block.b,
                    j2: j,
                });
            }
        }
        opcodes
    }
}

#[cfg(test)]
mod tests {
    use super::{Match, OpTag, Opcode, SequenceMatcher};

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    fn op(tag: OpTag, i1: usize, i2: usize, j1: usize, j2: usize) -> Opcode {
        Opcode {
            tag,
            i1,
            i2,
            j1,
            j2,
        }
    }

    #[test]
    fn longest_match_prefers_earliest_block() {
        let (a, b) = (chars(" abcd"), chars("abcd abcd"));
        let matcher = SequenceMatcher::new(&a, &b);
        assert_eq!(
            matcher.find_longest_match(0, 5, 0, 9),
            Match { a: 0, b: 4, size: 5 }
        );
    }

    #[test]
    fn opcodes_for_replace_delete_insert() {
        let (a, b) = (chars("qabxcd"), chars("abycdf"));
        let matcher = SequenceMatcher::new(&a, &b);
        assert_eq!(
            matcher.opcodes(),
            vec![
                op(OpTag::Delete, 0, 1, 0, 0),
                op(OpTag::Equal, 1, 3, 0, 2),
                op(OpTag::Replace, 3, 4, 2, 3),
                op(OpTag::Equal, 4, 6, 3, 5),
                op(OpTag::Insert, 6, 6, 5, 6),
            ]
        );
    }

    #[test]
    fn identical_sequences_are_one_equal_run() {
        let a = chars("same text");
        let matcher = SequenceMatcher::new(&a, &a);
        assert_eq!(matcher.opcodes(), vec![op(OpTag::Equal, 0, 9, 0, 9)]);
    }

    #[test]
    fn empty_sequences_have_no_opcodes() {
        let empty: Vec<char> = Vec::new();
        assert!(SequenceMatcher::new(&empty, &empty).opcodes().is_empty());

        let b = chars("new");
        assert_eq!(
            SequenceMatcher::new(&empty, &b).opcodes(),
            vec![op(OpTag::Insert, 0, 0, 0, 3)]
        );
    }

    #[test]
    fn disjoint_sequences_are_one_replace() {
        let (a, b) = (chars("abc"), chars("xyz"));
        assert_eq!(
            SequenceMatcher::new(&a, &b).opcodes(),
            vec![op(OpTag::Replace, 0, 3, 0, 3)]
        );
    }

    #[test]
    fn matching_blocks_end_with_sentinel() {
        let (a, b) = (chars("abxcd"), chars("abcd"));
        let blocks = SequenceMatcher::new(&a, &b).matching_blocks();
        assert_eq!(
            blocks,
            vec![
                Match { a: 0, b: 0, size: 2 },
                Match { a: 3, b: 2, size: 2 },
                Match { a: 5, b: 4, size: 0 },
            ]
        );
    }

    #[test]
    fn popular_elements_do_not_start_matches() {
        // every element of b occurs more than 1% of the time
        let a = chars("xab");
        let b: Vec<char> = "ab".repeat(150).chars().collect();
        let with_junk = SequenceMatcher::new(&a, &b);
        assert_eq!(with_junk.find_longest_match(0, 3, 0, 300).size, 0);

        let without_junk = SequenceMatcher::with_autojunk(&a, &b, false);
        assert_eq!(
            without_junk.find_longest_match(0, 3, 0, 300),
            Match { a: 1, b: 0, size: 2 }
        );
    }

    #[test]
    fn popular_elements_extend_a_match() {
        let a = chars("ab");
        let b: Vec<char> = "ab".repeat(150).chars().collect();
        let with_junk = SequenceMatcher::new(&a, &b);
        assert_eq!(
            with_junk.find_longest_match(0, 2, 0, 300),
            Match { a: 0, b: 0, size: 2 }
        );
    }

    #[test]
    fn opcodes_cover_both_sequences() {
        let (a, b) = (
            chars("The quick brown fox jumps"),
            chars("A quick red fox jumped"),
        );
        let opcodes = SequenceMatcher::new(&a, &b).opcodes();
        assert_eq!(opcodes.first().map(|op| (op.i1, op.j1)), Some((0, 0)));
        assert_eq!(
            opcodes.last().map(|op| (op.i2, op.j2)),
            Some((a.len(), b.len()))
        );
        for pair in opcodes.windows(2) {
            assert_eq!(pair[0].i2, pair[1].i1);
            assert_eq!(pair[0].j2, pair[1].j1);
        }
    }
}
