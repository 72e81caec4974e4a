/// A run of `size` equal elements starting at `s1[a]` and `s2[b]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct MatchingBlock {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

/// Longest block of equal elements inside `s1[alo..ahi]` and `s2[blo..bhi]`.
///
/// Ties are resolved in favour of the block starting earliest in `s1`, and then
/// earliest in `s2`. No match results in a block of size 0 at `(alo, blo)`.
fn find_longest_match<Elem1, Elem2>(
    s1: &[Elem1],
    s2: &[Elem2],
    (alo, ahi): (usize, usize),
    (blo, bhi): (usize, usize),
) -> MatchingBlock
where
    Elem1: PartialEq<Elem2>,
{
    let mut best = MatchingBlock {
        a: alo,
        b: blo,
        size: 0,
    };

    // j2len[j + 1] is the length of the match ending at s1[i - 1] and s2[j]
    let mut j2len = vec![0usize; bhi + 1];
    let mut new_j2len = vec![0usize; bhi + 1];

    for i in alo..ahi {
        for j in blo..bhi {
            let k = if s1[i] == s2[j] { j2len[j] + 1 } else { 0 };
            new_j2len[j + 1] = k;

            if k > best.size {
                best = MatchingBlock {
                    a: i + 1 - k,
                    b: j + 1 - k,
                    size: k,
                };
            }
        }
        std::mem::swap(&mut j2len, &mut new_j2len);
    }

    best
}

/// Non overlapping blocks of equal elements in the order they appear in both
/// sequences, found by recursively taking the longest match and searching the
/// pieces to its left and right. Adjacent blocks are merged.
pub(crate) fn matching_blocks<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> Vec<MatchingBlock>
where
    Elem1: PartialEq<Elem2>,
{
    let mut queue = vec![((0, s1.len()), (0, s2.len()))];
    let mut blocks = Vec::new();

    while let Some(((alo, ahi), (blo, bhi))) = queue.pop() {
        let block = find_longest_match(s1, s2, (alo, ahi), (blo, bhi));
        if block.size == 0 {
            continue;
        }

        blocks.push(block);
        if alo < block.a && blo < block.b {
            queue.push(((alo, block.a), (blo, block.b)));
        }
        if block.a + block.size < ahi && block.b + block.size < bhi {
            queue.push((
                (block.a + block.size, ahi),
                (block.b + block.size, bhi),
            ));
        }
    }
    blocks.sort_unstable();

    let mut merged: Vec<MatchingBlock> = Vec::with_capacity(blocks.len());
    for block in blocks {
        match merged.last_mut() {
            Some(last) if last.a + last.size == block.a && last.b + last.size == block.b => {
                last.size += block.size;
            }
            _ => merged.push(block),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn longest_match_prefers_leftmost() {
        let s1 = chars("abxab");
        let s2 = chars("ab");
        let block = find_longest_match(&s1, &s2, (0, s1.len()), (0, s2.len()));
        assert_eq!(MatchingBlock { a: 0, b: 0, size: 2 }, block);
    }

    #[test]
    fn longest_match_without_common_elements() {
        let block = find_longest_match(&[1, 2], &[3, 4], (0, 2), (0, 2));
        assert_eq!(0, block.size);
    }

    #[test]
    fn blocks_kitten() {
        let blocks = matching_blocks(&chars("sitting"), &chars("kitten"));
        assert_eq!(
            vec![
                MatchingBlock { a: 1, b: 1, size: 3 },
                MatchingBlock { a: 5, b: 5, size: 1 },
            ],
            blocks
        );
    }

    #[test]
    fn blocks_are_merged() {
        let s = [1, 2, 3, 4];
        assert_eq!(
            vec![MatchingBlock { a: 0, b: 0, size: 4 }],
            matching_blocks(&s, &s)
        );
        assert!(matching_blocks::<i32, i32>(&[], &s).is_empty());
    }

    #[test]
    fn blocks_numbers() {
        let blocks = matching_blocks(&[1, 2, 4, 3, 6, 7], &[1, 2, 3, 4, 5]);
        let total: usize = blocks.iter().map(|block| block.size).sum();
        assert_eq!(3, total);
        assert_eq!(MatchingBlock { a: 0, b: 0, size: 2 }, blocks[0]);
    }
}
