#[cfg(feature = "std-hash")]
pub mod default {
    pub use std::collections::hash_map::DefaultHasher;

    #[inline]
    pub fn new() -> DefaultHasher {
        DefaultHasher::new()
    }
}

#[cfg(not(feature = "std-hash"))]
pub mod default {
    // fast branch
    pub use ahash::AHasher as DefaultHasher;
    use std::hash::BuildHasher;

    // Fixed seeds so two hashers built in one process agree on a fingerprint.
    const SEEDS: [u64; 4] = [
        0x6d61_736f_6e72_7921,
        0x636f_6c75_6d6e_7321,
        0x7374_6163_6b65_6421,
        0x6c61_6e65_7321_2121,
    ];

    #[inline]
    pub fn new() -> DefaultHasher {
        ahash::RandomState::with_seeds(SEEDS[0], SEEDS[1], SEEDS[2], SEEDS[3]).build_hasher()
    }
}
