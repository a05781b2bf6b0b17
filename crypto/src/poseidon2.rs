//! Poseidon2 permutation over `F_r` (BN254 scalar field), fixed at the
//! canonical state width 4 (rate 3, capacity 1) — the same shape
//! Barretenberg's `poseidon2Hash` uses, so this module interoperates with it
//! bit-exactly rather than defining a parallel, incompatible construction.
//!
//! Every hash call-site in the rollup — Merkle compression, `Account`/`File`
//! record hashing, transaction-hash tagging, the mining PoW chain — goes
//! through this one permutation as a sponge with no domain separation tag;
//! domain independence is structural (fixed arity and tree position per call
//! site), not a tag baked into the capacity lane or absorbed length.
//!
//! The external (full-round) linear layer is the `circ(2, 3, 1, 1)` MDS
//! matrix; the internal (partial-round) layer is `diag(d) + J` applied after
//! an sbox on `state[0]` only. Round constants and the internal diagonal are
//! generated with the same Grain-LFSR-based procedure [`crate::poseidon`]
//! uses for the (distinct, non-split) Poseidon instance behind the EdDSA
//! challenge.

use ark_crypto_primitives::sponge::poseidon::find_poseidon_ark_and_mds;
use ark_ff::PrimeField;
use lazy_static::lazy_static;

use crate::field::Felt;

/// Sponge rate: field elements absorbed per permutation call.
pub const RATE: usize = 3;
/// State width: `RATE + 1` capacity element.
pub const WIDTH: usize = RATE + 1;

const FULL_ROUNDS: usize = 8;
const PARTIAL_ROUNDS: usize = 56;

struct RoundConstants {
    /// `FULL_ROUNDS + PARTIAL_ROUNDS` rows of `WIDTH` round constants each.
    ark: alloc::vec::Vec<[Felt; WIDTH]>,
    /// Diagonal used by the internal (partial-round) mixing layer.
    diag: [Felt; WIDTH],
}

fn build_constants() -> RoundConstants {
    let (ark, mds) = find_poseidon_ark_and_mds::<Felt>(
        Felt::MODULUS_BIT_SIZE as u64,
        RATE,
        FULL_ROUNDS as u64,
        PARTIAL_ROUNDS as u64,
        0,
    );
    let mut diag = [Felt::from(0u64); WIDTH];
    for (i, slot) in diag.iter_mut().enumerate() {
        *slot = mds[i][i];
    }
    let ark = ark
        .into_iter()
        .map(|row| {
            let mut out = [Felt::from(0u64); WIDTH];
            out.copy_from_slice(&row);
            out
        })
        .collect();
    RoundConstants { ark, diag }
}

lazy_static! {
    static ref CONSTANTS: RoundConstants = build_constants();
}

#[inline(always)]
fn sbox(x: Felt) -> Felt {
    let x2 = x * x;
    let x4 = x2 * x2;
    x4 * x
}

/// External (full-round) linear layer: the `circ(2, 3, 1, 1)` MDS matrix
/// over a width-4 state.
fn external_mix(state: &mut [Felt; WIDTH]) {
    let x0 = state[0];
    let x1 = state[1];
    let x2 = state[2];
    let x3 = state[3];

    let t01 = x0 + x1;
    let t23 = x2 + x3;
    let t0123 = t01 + t23;
    let t01123 = t0123 + x1;
    let t01233 = t0123 + x3;

    state[3] = t01233 + (x0 + x0);
    state[1] = t01123 + (x2 + x2);
    state[0] = t01123 + t01;
    state[2] = t01233 + t23;
}

/// Internal (partial-round) linear layer: `diag(d) + J`.
fn internal_mix(state: &mut [Felt; WIDTH], diag: &[Felt; WIDTH]) {
    let sum: Felt = state.iter().copied().fold(Felt::from(0u64), |a, b| a + b);
    for (value, d) in state.iter_mut().zip(diag.iter()) {
        *value = *value * *d + sum;
    }
}

/// Runs the Poseidon2 permutation over the fixed width-4 state in place.
pub fn permute(state: &mut [Felt; WIDTH]) {
    let rc = &*CONSTANTS;
    let half = FULL_ROUNDS / 2;

    // Poseidon2 front-loads one linear mix before the first round constant.
    external_mix(state);

    for round in 0..half {
        for (i, value) in state.iter_mut().enumerate() {
            *value = sbox(*value + rc.ark[round][i]);
        }
        external_mix(state);
    }
    for round in 0..PARTIAL_ROUNDS {
        state[0] = sbox(state[0] + rc.ark[half + round][0]);
        internal_mix(state, &rc.diag);
    }
    for round in 0..half {
        let row = half + PARTIAL_ROUNDS + round;
        for (i, value) in state.iter_mut().enumerate() {
            *value = sbox(*value + rc.ark[row][i]);
        }
        external_mix(state);
    }
}

/// Absorbs `inputs` into a fresh all-zero state, `RATE` elements per
/// permutation, zero-padding the final partial chunk, and squeezes
/// `state[0]`. Works for any arity, including zero and one — there is no
/// minimum input length, unlike a family of fixed-arity permutations.
pub fn hash(inputs: &[Felt]) -> Felt {
    let mut state = [Felt::from(0u64); WIDTH];
    if inputs.is_empty() {
        permute(&mut state);
        return state[0];
    }
    for chunk in inputs.chunks(RATE) {
        for (i, value) in chunk.iter().enumerate() {
            state[i] += *value;
        }
        permute(&mut state);
    }
    state[0]
}

/// 2-to-1 Merkle compression: `H2(left, right)`.
pub fn compress2(left: Felt, right: Felt) -> Felt {
    hash(&[left, right])
}
