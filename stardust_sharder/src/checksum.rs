use std::{hash::Hasher, num::NonZeroUsize};

use adler2::Adler32;
use md5::{Digest, Md5};
use siphasher::sip::SipHasher13;

use crate::jumphash::jump_hash;

/// Default separator placed between the parts of a series key before
/// hashing.
pub const SERIES_KEY_SEPARATOR: &str = "|";

/// A randomly generated static siphash key so that every process hashes the
/// same series to the same value.
///
/// Generated with: xxd -i -l 16 /dev/urandom
const SIPHASH_KEY: [u8; 16] = [
    0x6d, 0x83, 0x93, 0x52, 0xa3, 0x7c, 0xe6, 0x02, 0xac, 0x01, 0x11, 0x94, 0x79, 0x0c, 0x64, 0x42,
];

/// Checksum computed over the joined series key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Checksum {
    /// Adler-32, as used to produce the existing split files.
    #[default]
    Adler32,
    /// CRC-32 (IEEE).
    Crc32,
    /// SipHash 1-3 with a fixed key.
    SipHash13,
    /// MD5, read as a big-endian 128 bit integer. Used with the `::`
    /// separator by the document store loaders.
    Md5,
}

impl Checksum {
    /// Checksum the series key `parts` joined by `separator`.
    pub fn digest<S>(self, parts: &[S], separator: &str) -> u128
    where
        S: AsRef<str>,
    {
        match self {
            Self::Adler32 => {
                let mut state = Adler32::new();
                for_each_chunk(parts, separator, |chunk| state.write_slice(chunk));
                u128::from(state.checksum())
            }
            Self::Crc32 => {
                let mut state = crc32fast::Hasher::new();
                for_each_chunk(parts, separator, |chunk| state.update(chunk));
                u128::from(state.finalize())
            }
            Self::SipHash13 => {
                let mut state = SipHasher13::new_with_key(&SIPHASH_KEY);
                for_each_chunk(parts, separator, |chunk| state.write(chunk));
                u128::from(state.finish())
            }
            Self::Md5 => {
                let mut state = Md5::new();
                for_each_chunk(parts, separator, |chunk| state.update(chunk));
                u128::from_be_bytes(state.finalize().into())
            }
        }
    }
}

/// Reduction of a checksum to a shard index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Reduction {
    /// `checksum mod N`.
    #[default]
    Modulo,
    /// Consistent [`jump_hash`]: adding a shard moves about `1/N` of series.
    /// Only the low 64 bits of a 128 bit checksum are used.
    JumpHash,
}

/// Maps a series key to a shard.
///
/// The default, Adler-32 over the `|` joined key reduced modulo the shard
/// count, reproduces the assignment of the existing split files.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeriesHasher {
    pub checksum: Checksum,
    pub reduction: Reduction,
    separator: String,
}

impl Default for SeriesHasher {
    fn default() -> Self {
        Self::new(Checksum::default(), Reduction::default())
    }
}

impl SeriesHasher {
    pub fn new(checksum: Checksum, reduction: Reduction) -> Self {
        Self {
            checksum,
            reduction,
            separator: SERIES_KEY_SEPARATOR.to_string(),
        }
    }

    /// Join the parts of a series key with `separator` instead of
    /// [`SERIES_KEY_SEPARATOR`].
    pub fn with_separator(self, separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..self
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Shard of `series_key` out of `shard_count`.
    pub fn shard<S>(&self, series_key: &[S], shard_count: NonZeroUsize) -> usize
    where
        S: AsRef<str>,
    {
        let digest = self.checksum.digest(series_key, &self.separator);
        match self.reduction {
            Reduction::Modulo => (digest % shard_count.get() as u128) as usize,
            Reduction::JumpHash => jump_hash(digest as u64, shard_count),
        }
    }
}

fn for_each_chunk<S, F>(parts: &[S], separator: &str, mut f: F)
where
    S: AsRef<str>,
    F: FnMut(&[u8]),
{
    for (idx, part) in parts.iter().enumerate() {
        if idx > 0 {
            f(separator.as_bytes());
        }
        f(part.as_ref().as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashMap;

    fn n(v: usize) -> NonZeroUsize {
        NonZeroUsize::new(v).unwrap()
    }

    const PIPE: &str = SERIES_KEY_SEPARATOR;

    #[test]
    fn test_legacy_checksums() {
        assert_eq!(Checksum::Adler32.digest(&["r1", "eth0"], PIPE), 178717329);
        assert_eq!(
            Checksum::Adler32.digest(&["router-a", "xe-0/0/0"], PIPE),
            984548772
        );
        assert_eq!(Checksum::Crc32.digest(&["r1", "eth0"], PIPE), 3244478724);
        assert_eq!(
            Checksum::Crc32.digest(&["router-a", "xe-0/0/0"], PIPE),
            3793019780
        );

        let empty: [&str; 0] = [];
        assert_eq!(Checksum::Adler32.digest(&empty, PIPE), 1);
        assert_eq!(Checksum::Crc32.digest(&empty, PIPE), 0);
    }

    #[test]
    fn test_md5_checksum() {
        assert_eq!(
            Checksum::Md5.digest(&["r1", "eth0"], "::"),
            57637342267189733294016946247842061849
        );
        assert_eq!(
            Checksum::Md5.digest(&["router-a", "xe-0/0/0"], "::"),
            57758935405182280956871129584807698023
        );
        let empty: [&str; 0] = [];
        assert_eq!(
            Checksum::Md5.digest(&empty, "::"),
            0xd41d8cd98f00b204e9800998ecf8427e
        );
    }

    #[test]
    fn test_joined_key_equals_parts() {
        for checksum in [
            Checksum::Adler32,
            Checksum::Crc32,
            Checksum::SipHash13,
            Checksum::Md5,
        ] {
            assert_eq!(
                checksum.digest(&["r1", "eth0"], PIPE),
                checksum.digest(&["r1|eth0"], PIPE),
                "{checksum:?}"
            );
            assert_eq!(
                checksum.digest(&["r1", "eth0"], "::"),
                checksum.digest(&["r1::eth0"], PIPE),
                "{checksum:?}"
            );
        }
    }

    // These mappings must never change, see the jump hash fixture.
    #[test]
    fn test_key_shard_fixture() {
        let adler = SeriesHasher::default();
        assert_eq!(adler.shard(&["r1", "eth0"], n(4)), 1);
        assert_eq!(adler.shard(&["r1", "eth1"], n(4)), 2);
        assert_eq!(adler.shard(&["r2", "eth0"], n(4)), 2);
        assert_eq!(adler.shard(&["r1", "eth0"], n(7)), 0);
        assert_eq!(adler.shard(&["r2", "eth0"], n(7)), 6);

        let crc = SeriesHasher::new(Checksum::Crc32, Reduction::Modulo);
        assert_eq!(crc.shard(&["r1", "eth0"], n(4)), 0);
        assert_eq!(crc.shard(&["r1", "eth0"], n(7)), 4);

        let adler_jump = SeriesHasher::new(Checksum::Adler32, Reduction::JumpHash);
        assert_eq!(adler_jump.shard(&["r1", "eth1"], n(1_000)), 165);
        assert_eq!(adler_jump.shard(&["r2", "eth0"], n(1_000)), 308);

        // the full 128 bit digest is reduced, not a truncation of it
        let md5 = SeriesHasher::new(Checksum::Md5, Reduction::Modulo).with_separator("::");
        assert_eq!(md5.separator(), "::");
        assert_eq!(md5.shard(&["r1", "eth0"], n(4)), 1);
        assert_eq!(md5.shard(&["r1", "eth0"], n(7)), 4);
        assert_eq!(md5.shard(&["router-a", "xe-0/0/0"], n(4)), 3);
        assert_eq!(md5.shard(&["r2", "eth0"], n(7)), 5);
        assert_eq!(md5.shard(&["r1", "eth1"], n(7)), 0);
    }

    #[test]
    fn test_separator_changes_assignment() {
        let pipe = SeriesHasher::default();
        let colons = SeriesHasher::default().with_separator("::");
        assert_eq!(pipe.separator(), "|");
        assert_eq!(colons.separator(), "::");
        assert_eq!(pipe.shard(&["r1", "eth0"], n(7)), 0);
        assert_eq!(colons.shard(&["r1", "eth0"], n(7)), 6);
        assert_eq!(pipe.shard(&["r2", "eth0"], n(7)), 6);
        assert_eq!(colons.shard(&["r2", "eth0"], n(7)), 0);
    }

    #[test]
    fn test_separator_is_hashed() {
        // without the separator both keys would be "abc"
        let hasher = SeriesHasher::new(Checksum::SipHash13, Reduction::Modulo);
        assert_ne!(
            Checksum::SipHash13.digest(&["a", "bc"], PIPE),
            Checksum::SipHash13.digest(&["abc"], PIPE)
        );
        assert!(hasher.shard(&["a", "bc"], n(10_000)) < 10_000);
    }

    #[test]
    fn test_distribution() {
        let hasher = SeriesHasher::new(Checksum::SipHash13, Reduction::JumpHash);

        let mut mapping = HashMap::<_, usize>::new();
        for i in 0..1_000_000 {
            let device = format!("router-{i}");
            let shard = hasher.shard(&[device.as_str(), "xe-0/0/0"], n(100));
            *mapping.entry(shard).or_default() += 1;
        }

        assert_eq!(mapping.len(), 100);
        let (min, max) = mapping.values().fold((usize::MAX, 0), |acc, &v| {
            let (min, max) = acc;
            (min.min(v), max.max(v))
        });

        // Expect every bucket within a few standard deviations of the 10k mean.
        assert!(max - min < 1500, "min: {min}, max: {max}");
    }
}
