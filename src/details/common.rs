pub(crate) fn find_common_prefix<Iter1, Iter2, Elem1, Elem2>(s1: Iter1, s2: Iter2) -> usize
where
    Iter1: Iterator<Item = Elem1>,
    Iter2: Iterator<Item = Elem2>,
    Elem1: PartialEq<Elem2>,
{
    s1.zip(s2)
        .take_while(|(a_elem, b_elem)| a_elem == b_elem)
        .count()
}

pub(crate) fn find_common_suffix<Iter1, Iter2, Elem1, Elem2>(s1: Iter1, s2: Iter2) -> usize
where
    Iter1: DoubleEndedIterator<Item = Elem1>,
    Iter2: DoubleEndedIterator<Item = Elem2>,
    Elem1: PartialEq<Elem2>,
{
    s1.rev()
        .zip(s2.rev())
        .take_while(|(a_elem, b_elem)| a_elem == b_elem)
        .count()
}

/// Strip the common prefix and suffix of two slices.
pub(crate) fn remove_common_affix<'a, 'b, Elem1, Elem2>(
    s1: &'a [Elem1],
    s2: &'b [Elem2],
) -> (&'a [Elem1], &'b [Elem2])
where
    Elem1: PartialEq<Elem2>,
{
    let prefix_len = find_common_prefix(s1.iter(), s2.iter());
    let s1 = &s1[prefix_len..];
    let s2 = &s2[prefix_len..];

    let suffix_len = find_common_suffix(s1.iter(), s2.iter());
    (&s1[..s1.len() - suffix_len], &s2[..s2.len() - suffix_len])
}

/// Position of the first occurrence of `needle` inside `haystack`.
pub(crate) fn find_subsequence<Elem1, Elem2>(haystack: &[Elem1], needle: &[Elem2]) -> Option<usize>
where
    Elem2: PartialEq<Elem1>,
{
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|window| needle == window)
}

/// Number of contiguous subsequences of a sequence of length `len`.
pub(crate) fn triangular(len: usize) -> usize {
    len * (len + 1) / 2
}

/// Round to the nearest integer, with ties going to the even neighbour.
///
/// Negative values saturate to zero.
pub(crate) fn round_half_even(value: f64) -> usize {
    value.round_ties_even() as usize
}
