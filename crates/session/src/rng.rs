/// Deterministic PRNG for spawn placement.
///
/// Splitmix64 under the hood: fast, high-quality mixing, and reproducible
/// across platforms without floating-point ordering concerns. Seeding a
/// session fixes the entire obstacle layout, which is what makes replaying
/// a run with the same inputs byte-for-byte identical.
#[derive(Debug, Clone)]
pub struct SpawnRng {
    state: u64,
}

impl SpawnRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit output.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform f32 in [0, 1), built from the top 24 bits so every value is
    /// exactly representable.
    pub fn next_unit(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u32 << 24) as f32
    }
}
