use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::NoiseField;

const B: usize = 0x100;
const BM: i64 = 0xff;
/// Lattice offset so small negative coordinates land on positive cells.
const N: f64 = 4096.0;

/// Seeded 2D gradient noise summed over octaves.
///
/// Layer `k` samples the base noise at `(x, y) * beta^k` and contributes
/// `value / alpha^k`. The permutation and gradient tables come from a
/// `StdRng` seeded with `seed`, so two generators built from the same
/// `(alpha, beta, octaves, seed)` are identical.
#[derive(Debug, Clone)]
pub struct PerlinNoise {
    alpha: f64,
    beta: f64,
    octaves: u32,
    seed: u64,
    perm: [usize; B + B + 2],
    grad: [[f64; 2]; B + B + 2],
}

impl PerlinNoise {
    /// `alpha`: amplitude divisor per octave (typically 2; noisier as it approaches 1).
    /// `beta`: frequency multiplier per octave (typically 2).
    pub fn new(alpha: f64, beta: f64, octaves: u32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut perm = [0usize; B + B + 2];
        let mut grad = [[0.0f64; 2]; B + B + 2];

        for i in 0..B {
            perm[i] = i;
            grad[i] = random_gradient(&mut rng);
        }

        for i in (1..B).rev() {
            let j = rng.random_range(0..B);
            perm.swap(i, j);
        }

        // Duplicate the tables so `perm[perm[x] + y]` never needs a wrap mask.
        for i in 0..B + 2 {
            perm[B + i] = perm[i];
            grad[B + i] = grad[i];
        }

        Self {
            alpha,
            beta,
            octaves,
            seed,
            perm,
            grad,
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Single-octave gradient noise. Zero on every integer lattice point.
    pub fn noise2(&self, x: f64, y: f64) -> f64 {
        let (bx0, bx1, rx0, rx1) = lattice(x);
        let (by0, by1, ry0, ry1) = lattice(y);

        let i = self.perm[bx0];
        let j = self.perm[bx1];

        let b00 = self.perm[i + by0];
        let b10 = self.perm[j + by0];
        let b01 = self.perm[i + by1];
        let b11 = self.perm[j + by1];

        let sx = s_curve(rx0);
        let sy = s_curve(ry0);

        let u = dot(self.grad[b00], rx0, ry0);
        let v = dot(self.grad[b10], rx1, ry0);
        let a = lerp(sx, u, v);

        let u = dot(self.grad[b01], rx0, ry1);
        let v = dot(self.grad[b11], rx1, ry1);
        let b = lerp(sx, u, v);

        lerp(sy, a, b)
    }
}

impl NoiseField for PerlinNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let mut sum = 0.0;
        let mut weight = 1.0;
        let (mut px, mut py) = (x, y);

        for _ in 0..self.octaves {
            sum += self.noise2(px, py) / weight;
            weight *= self.alpha;
            px *= self.beta;
            py *= self.beta;
        }
        sum
    }
}

/// Random unit vector with components drawn from a 1/256 grid.
fn random_gradient(rng: &mut StdRng) -> [f64; 2] {
    loop {
        let gx = rng.random_range(-256i32..256) as f64 / 256.0;
        let gy = rng.random_range(-256i32..256) as f64 / 256.0;
        let len = gx.hypot(gy);
        if len > 0.0 {
            return [gx / len, gy / len];
        }
    }
}

/// Lattice cell indices and fractional offsets for one axis.
#[inline]
fn lattice(v: f64) -> (usize, usize, f64, f64) {
    let t = v + N;
    let cell = t.floor();
    let b0 = ((cell as i64) & BM) as usize;
    let b1 = (b0 + 1) & BM as usize;
    let r0 = t - cell;
    (b0, b1, r0, r0 - 1.0)
}

#[inline]
fn s_curve(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

#[inline]
fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

#[inline]
fn dot(g: [f64; 2], rx: f64, ry: f64) -> f64 {
    rx * g[0] + ry * g[1]
}
