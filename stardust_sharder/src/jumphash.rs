use std::num::NonZeroUsize;

/// Map `key` to one of `buckets` using Google's [jump hash].
///
/// Growing the bucket count from `N` to `N + 1` moves approximately `1/N` of
/// all keys, and every key that moves lands in the new bucket `N`. The result
/// depends only on the inputs, so independent processes agree on it.
///
/// [jump hash]: https://arxiv.org/ftp/arxiv/papers/1406/1406.2294.pdf
pub fn jump_hash(mut key: u64, buckets: NonZeroUsize) -> usize {
    let buckets = buckets.get() as i64;

    let mut b = -1;
    let mut j = 0;
    while j < buckets {
        b = j;
        key = key.wrapping_mul(2862933555777941757).wrapping_add(1);
        j = ((b.wrapping_add(1) as f64) * (((1u64 << 31) as f64) / (((key >> 33) + 1) as f64)))
            as i64
    }

    debug_assert!((0..buckets).contains(&b));
    b as usize
}
