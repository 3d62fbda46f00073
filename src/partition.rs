use std::num::NonZeroUsize;

/// Split `items` into at most `n` contiguous batches of `ceil(len / n)`
/// elements, preserving order. The last batch holds the remainder; an empty
/// input yields no batches at all.
pub fn partition<T>(items: Vec<T>, n: NonZeroUsize) -> Vec<Vec<T>> {
    if items.is_empty() {
        return Vec::new();
    }
    let chunk_size = items.len().div_ceil(n.get());
    let mut batches = Vec::with_capacity(items.len().div_ceil(chunk_size));
    let mut rest = items.into_iter();
    loop {
        let batch: Vec<T> = rest.by_ref().take(chunk_size).collect();
        if batch.is_empty() {
            break;
        }
        batches.push(batch);
    }
    batches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: usize) -> NonZeroUsize {
        NonZeroUsize::new(v).unwrap()
    }

    #[test]
    fn concatenation_reconstructs_input() {
        for len in 0..50usize {
            for count in 1..20usize {
                let items: Vec<usize> = (0..len).collect();
                let batches = partition(items.clone(), n(count));
                let chunk_size = len.div_ceil(count);

                assert!(batches.len() <= count, "len={len} n={count}");
                assert!(batches.iter().all(|b| !b.is_empty() && b.len() <= chunk_size));
                let flat: Vec<usize> = batches.into_iter().flatten().collect();
                assert_eq!(flat, items, "len={len} n={count}");
            }
        }
    }

    #[test]
    fn remainder_lands_in_last_batch() {
        let batches = partition((1..=10).collect(), n(4));
        assert_eq!(batches, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9], vec![10]]);
    }

    #[test]
    fn fewer_items_than_batches() {
        let batches = partition(vec!["a", "b", "c"], n(16));
        assert_eq!(batches, vec![vec!["a"], vec!["b"], vec!["c"]]);
    }

    #[test]
    fn empty_input_has_no_batches() {
        assert!(partition(Vec::<u8>::new(), n(16)).is_empty());
    }
}
