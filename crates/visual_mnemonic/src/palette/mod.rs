//! Colormap selection and application.
//!
//! Palettes are an injected capability: anything implementing [`PaletteCatalog`] can
//! supply the ordered, named color tables. [`GradientCatalog`] is the bundled implementation.
//!
//! - [`select_palette`]: one RNG draw over the catalog's names.
//! - [`apply_palette`]: maps each pixel's `rank / N` through the chosen table.
use tracing::warn;

use crate::error::{Error, Result};
use crate::pixels::{PixelBuffer, Rgb};
use crate::rng::DeterministicRng;
use crate::walk::RankBuffer;

pub mod gradient;

pub use gradient::GradientCatalog;

/// Ordered catalog of named color tables, each defined over `[0, 1]`.
pub trait PaletteCatalog {
    /// Number of tables.
    fn len(&self) -> usize;

    /// Name of the table at `index`, in catalog order.
    fn name(&self, index: usize) -> Option<&str>;

    /// Color of table `name` at `t` as linear channel values in `[0, 1]`.
    /// Returns `None` if the catalog has no table with that name.
    fn evaluate(&self, name: &str, t: f64) -> Option<[f64; 3]>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, name: &str) -> bool {
        (0..self.len()).any(|i| self.name(i) == Some(name))
    }

    /// All names in catalog order.
    fn names(&self) -> Vec<&str> {
        (0..self.len()).filter_map(|i| self.name(i)).collect()
    }
}

/// Picks a table name with a single draw from `rng`.
pub fn select_palette<C>(catalog: &C, rng: &mut DeterministicRng) -> Result<String>
where
    C: PaletteCatalog + ?Sized,
{
    if catalog.is_empty() {
        return Err(Error::InvalidConfig("palette catalog is empty".into()));
    }
    let names = catalog.names();
    rng.choose(&names)
        .map(|name| (*name).to_owned())
        .ok_or_else(|| Error::Other("palette catalog listed no names".into()))
}

/// Colors every pixel by evaluating `name` at `rank / N`.
pub fn apply_palette<C>(catalog: &C, ranks: &RankBuffer, name: &str) -> Result<PixelBuffer>
where
    C: PaletteCatalog + ?Sized,
{
    if !catalog.contains(name) {
        warn!("Palette '{}' is not in the catalog.", name);
        return Err(Error::PaletteNotFound {
            name: name.to_owned(),
        });
    }

    let canvas = ranks.canvas();
    let mut data: Vec<Rgb> = Vec::with_capacity(canvas.len());
    for index in 0..canvas.len() {
        let t = ranks.normalized(index).clamp(0.0, 1.0);
        let color = catalog
            .evaluate(name, t)
            .ok_or_else(|| Error::PaletteNotFound {
                name: name.to_owned(),
            })?;
        data.push(to_rgb8(color));
    }

    PixelBuffer::from_vec(canvas, data)
        .ok_or_else(|| Error::Other("pixel count does not match canvas".into()))
}

/// Rounds `[0, 1]` channels to bytes, half to even.
#[inline]
pub fn to_rgb8(color: [f64; 3]) -> Rgb {
    color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round_ties_even() as u8)
}

#[cfg(test)]
mod tests {
    use glam::UVec2;

    use super::*;
    use crate::canvas::Canvas;
    use crate::field::IntensityBuffer;
    use crate::seed::DerivedSeed;
    use crate::walk::walk;

    /// Grey ramp catalog with a second, inverted ramp.
    struct Ramps;

    impl PaletteCatalog for Ramps {
        fn len(&self) -> usize {
            2
        }

        fn name(&self, index: usize) -> Option<&str> {
            ["up", "down"].get(index).copied()
        }

        fn evaluate(&self, name: &str, t: f64) -> Option<[f64; 3]> {
            match name {
                "up" => Some([t, t, t]),
                "down" => Some([1.0 - t, 1.0 - t, 1.0 - t]),
                _ => None,
            }
        }
    }

    struct Empty;

    impl PaletteCatalog for Empty {
        fn len(&self) -> usize {
            0
        }

        fn name(&self, _index: usize) -> Option<&str> {
            None
        }

        fn evaluate(&self, _name: &str, _t: f64) -> Option<[f64; 3]> {
            None
        }
    }

    fn ranks(width: u32, height: u32) -> RankBuffer {
        let canvas = Canvas::new(width, height).unwrap();
        let intensity = IntensityBuffer::from_fn(canvas, |p| (p.x * 16 + p.y) as u8);
        walk(&intensity, UVec2::ZERO).unwrap()
    }

    #[test]
    fn selection_is_one_draw_and_reproducible() {
        let seed = DerivedSeed::from_u128(99);
        let mut a = DeterministicRng::from_seed(&seed);
        let mut b = DeterministicRng::from_seed(&seed);
        let name_a = select_palette(&Ramps, &mut a).unwrap();
        let name_b = select_palette(&Ramps, &mut b).unwrap();
        assert_eq!(name_a, name_b);
        assert!(Ramps.contains(&name_a));
        assert_eq!(a.draws(), 1);
    }

    #[test]
    fn selection_matches_a_choice_over_catalog_names() {
        for n in 0..8u128 {
            let seed = DerivedSeed::from_u128(n);
            let mut a = DeterministicRng::from_seed(&seed);
            let mut b = DeterministicRng::from_seed(&seed);
            let selected = select_palette(&Ramps, &mut a).unwrap();
            let names = Ramps.names();
            assert_eq!(Some(&selected.as_str()), b.choose(&names));
        }
    }

    #[test]
    fn empty_catalog_is_a_configuration_error() {
        let mut rng = DeterministicRng::from_seed(&DerivedSeed::from_u128(1));
        assert!(matches!(
            select_palette(&Empty, &mut rng),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn unknown_name_is_reported() {
        let err = apply_palette(&Ramps, &ranks(2, 2), "sideways").unwrap_err();
        assert!(matches!(err, Error::PaletteNotFound { ref name } if name == "sideways"));
    }

    #[test]
    fn normalization_uses_pixel_count() {
        let r = ranks(2, 2);
        let px = apply_palette(&Ramps, &r, "up").unwrap();
        for i in 0..4 {
            let expected = ((r.get(i) as f64 / 4.0) * 255.0).round_ties_even() as u8;
            assert_eq!(px.get(i), [expected; 3]);
        }
        let last = r.as_slice().iter().position(|&v| v == 4).unwrap();
        assert_eq!(px.get(last), [255; 3]);
        let first = r.as_slice().iter().position(|&v| v == 1).unwrap();
        // 0.25 * 255 = 63.75
        assert_eq!(px.get(first), [64; 3]);
    }

    #[test]
    fn single_pixel_maps_to_table_end() {
        let px = apply_palette(&Ramps, &ranks(1, 1), "down").unwrap();
        assert_eq!(px.as_slice(), &[[0, 0, 0]]);
    }

    #[test]
    fn channel_rounding_clamps_and_ties_to_even() {
        assert_eq!(to_rgb8([-0.5, 2.0, 0.5]), [0, 255, 128]);
        assert_eq!(to_rgb8([0.0, 1.0, 0.25]), [0, 255, 64]);
    }
}
