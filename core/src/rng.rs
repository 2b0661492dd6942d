pub fn splitmix32(mut value: u32) -> u32 {
    value = value.wrapping_add(0x9E37_79B9);
    let mut z = value;
    z = (z ^ (z >> 16)).wrapping_mul(0x85EB_CA6B);
    z = (z ^ (z >> 13)).wrapping_mul(0xC2B2_AE35);
    z ^ (z >> 16)
}

pub fn rand_unit(seed: u32, salt: u32) -> f64 {
    let mixed = splitmix32(seed ^ salt);
    let top = mixed >> 8;
    top as f64 / ((1u32 << 24) as f64)
}

pub fn rand_range(seed: u32, salt: u32, min: f64, max: f64) -> f64 {
    min + (max - min) * rand_unit(seed, salt)
}

/// Stream of uniform samples in `[0, 1)` derived from a fixed seed.
///
/// Every draw advances an internal salt, so two generators built from the
/// same seed yield the same sequence.
#[derive(Clone, Debug)]
pub struct JitterRng {
    seed: u32,
    salt: u32,
}

impl JitterRng {
    pub fn new(seed: u32) -> Self {
        Self { seed, salt: 0 }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn next_unit(&mut self) -> f64 {
        let value = rand_unit(self.seed, self.salt.wrapping_mul(0x632B_E5AB));
        self.salt = self.salt.wrapping_add(1);
        value
    }

    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_unit()
    }

    /// Symmetric offset in `[-spread / 2, spread / 2)`.
    pub fn next_offset(&mut self, spread: f64) -> f64 {
        (self.next_unit() - 0.5) * spread
    }
}

