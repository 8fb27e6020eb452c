#![cfg(feature = "simd")]

use pixfind::lowlevel::{verify_rows_with, RowKernel, ScalarRows, SimdRows};
use pixfind::OwnedRegion;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn noisy_image(width: usize, height: usize, rng: &mut StdRng) -> OwnedRegion {
    let data = (0..width * height)
        .flat_map(|_| [rng.random_range(0..2u8), 0, 0, 255])
        .collect();
    OwnedRegion::new(data, width, height).unwrap()
}

#[test]
fn simd_anchor_search_matches_scalar() {
    let mut rng = StdRng::seed_from_u64(77);
    for _ in 0..100 {
        let origin = noisy_image(rng.random_range(4..40), rng.random_range(1..6), &mut rng);
        let needle_px = rng.random_range(1..9).min(origin.width());
        let needle = noisy_image(needle_px, 1, &mut rng);
        let hay = origin.data();

        let mut from = 0;
        loop {
            let scalar = ScalarRows::find_anchor(hay, needle.data(), from);
            assert_eq!(scalar, SimdRows::find_anchor(hay, needle.data(), from));
            match scalar {
                Some(offset) => from = offset + 4,
                None => break,
            }
        }
    }
}

#[test]
fn simd_verification_matches_scalar() {
    let mut rng = StdRng::seed_from_u64(78);
    for _ in 0..100 {
        let origin = noisy_image(rng.random_range(8..24), rng.random_range(4..10), &mut rng);
        let target = noisy_image(rng.random_range(1..8), rng.random_range(1..4), &mut rng);
        for idx in 0..origin.width() * origin.height() {
            assert_eq!(
                verify_rows_with::<ScalarRows>(origin.view(), target.view(), idx),
                verify_rows_with::<SimdRows>(origin.view(), target.view(), idx)
            );
        }
    }
}
