//! [`PaletteCatalog`] backed by `colorgrad` gradients.
use std::collections::HashMap;

use colorgrad::{Color, CustomGradient, Gradient};

use crate::error::{Error, Result};
use crate::palette::PaletteCatalog;
use crate::pixels::Rgb;

/// Ordered registry of named gradients.
///
/// Order matters: palette selection draws an index, so two catalogs with the same names
/// in a different order select different palettes for the same seed.
pub struct GradientCatalog {
    entries: Vec<(String, Gradient)>,
    index: HashMap<String, usize>,
}

impl GradientCatalog {
    /// Creates a new, empty catalog.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The bundled tables: perceptual, sequential, then diverging and cyclic ones.
    pub fn builtin() -> Self {
        let presets: [(&str, fn() -> Gradient); 38] = [
            ("viridis", colorgrad::viridis),
            ("plasma", colorgrad::plasma),
            ("inferno", colorgrad::inferno),
            ("magma", colorgrad::magma),
            ("cividis", colorgrad::cividis),
            ("Greys", colorgrad::greys),
            ("Purples", colorgrad::purples),
            ("Blues", colorgrad::blues),
            ("Greens", colorgrad::greens),
            ("Oranges", colorgrad::oranges),
            ("Reds", colorgrad::reds),
            ("YlOrBr", colorgrad::yl_or_br),
            ("YlOrRd", colorgrad::yl_or_rd),
            ("OrRd", colorgrad::or_rd),
            ("PuRd", colorgrad::pu_rd),
            ("RdPu", colorgrad::rd_pu),
            ("BuPu", colorgrad::bu_pu),
            ("GnBu", colorgrad::gn_bu),
            ("PuBu", colorgrad::pu_bu),
            ("YlGnBu", colorgrad::yl_gn_bu),
            ("PuBuGn", colorgrad::pu_bu_gn),
            ("BuGn", colorgrad::bu_gn),
            ("YlGn", colorgrad::yl_gn),
            ("warm", colorgrad::warm),
            ("cool", colorgrad::cool),
            ("PiYG", colorgrad::pi_yg),
            ("PRGn", colorgrad::pr_gn),
            ("BrBG", colorgrad::br_bg),
            ("PuOr", colorgrad::pu_or),
            ("RdGy", colorgrad::rd_gy),
            ("RdBu", colorgrad::rd_bu),
            ("RdYlBu", colorgrad::rd_yl_bu),
            ("RdYlGn", colorgrad::rd_yl_gn),
            ("Spectral", colorgrad::spectral),
            ("cubehelix", colorgrad::cubehelix_default),
            ("sinebow", colorgrad::sinebow),
            ("rainbow", colorgrad::rainbow),
            ("turbo", colorgrad::turbo),
        ];

        let mut catalog = Self::new();
        for (name, make) in presets {
            catalog.register(name, make());
        }
        catalog
    }

    /// Adds a gradient, or replaces the one with the same name in place.
    pub fn register(&mut self, name: impl Into<String>, gradient: Gradient) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&i) => self.entries[i].1 = gradient,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, gradient));
            }
        }
    }

    /// Registers an evenly spaced gradient through the given RGB stops.
    pub fn register_stops(&mut self, name: impl Into<String>, stops: &[Rgb]) -> Result<()> {
        let name = name.into();
        if stops.len() < 2 {
            return Err(Error::InvalidConfig(format!(
                "palette '{name}' needs at least two stops"
            )));
        }
        let colors: Vec<Color> = stops
            .iter()
            .map(|&[r, g, b]| Color::from_rgba8(r, g, b, 255))
            .collect();
        let gradient = CustomGradient::new()
            .colors(&colors)
            .build()
            .map_err(|e| Error::InvalidConfig(format!("palette '{name}': {e}")))?;
        self.register(name, gradient);
        Ok(())
    }

    /// Removes a gradient. Later entries shift down by one.
    pub fn unregister(&mut self, name: &str) -> bool {
        let Some(i) = self.index.remove(name) else {
            return false;
        };
        self.entries.remove(i);
        for slot in self.index.values_mut() {
            if *slot > i {
                *slot -= 1;
            }
        }
        true
    }

    pub fn get(&self, name: &str) -> Option<&Gradient> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }
}

impl Default for GradientCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PaletteCatalog for GradientCatalog {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn name(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(name, _)| name.as_str())
    }

    fn evaluate(&self, name: &str, t: f64) -> Option<[f64; 3]> {
        let c = self.get(name)?.at(t.clamp(0.0, 1.0));
        Some([c.r, c.g, c.b])
    }

    fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::to_rgb8;

    #[test]
    fn builtin_names_are_unique_and_ordered() {
        let catalog = GradientCatalog::builtin();
        assert_eq!(catalog.len(), 38);
        assert_eq!(catalog.name(0), Some("viridis"));
        assert_eq!(catalog.name(37), Some("turbo"));
        let names = catalog.names();
        let unique: std::collections::HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn builtin_tables_are_defined_on_closed_interval() {
        let catalog = GradientCatalog::builtin();
        for name in catalog.names() {
            for t in [0.0, 0.5, 1.0] {
                let c = catalog.evaluate(name, t).unwrap();
                assert!(c.iter().all(|v| (-1e-9..=1.0 + 1e-9).contains(v)), "{name} @ {t}");
            }
        }
    }

    #[test]
    fn custom_stops_hit_endpoints() {
        let mut catalog = GradientCatalog::new();
        catalog
            .register_stops("duo", &[[0, 0, 0], [255, 255, 255]])
            .unwrap();
        assert_eq!(to_rgb8(catalog.evaluate("duo", 0.0).unwrap()), [0, 0, 0]);
        assert_eq!(
            to_rgb8(catalog.evaluate("duo", 1.0).unwrap()),
            [255, 255, 255]
        );
        assert!(catalog.evaluate("missing", 0.5).is_none());
    }

    #[test]
    fn single_stop_is_rejected() {
        let mut catalog = GradientCatalog::new();
        assert!(catalog.register_stops("mono", &[[1, 2, 3]]).is_err());
        assert!(catalog.is_empty());
    }

    #[test]
    fn register_replaces_in_place_and_unregister_shifts() {
        let mut catalog = GradientCatalog::new();
        catalog.register_stops("a", &[[0, 0, 0], [1, 1, 1]]).unwrap();
        catalog.register_stops("b", &[[0, 0, 0], [2, 2, 2]]).unwrap();
        catalog.register_stops("c", &[[0, 0, 0], [3, 3, 3]]).unwrap();
        catalog
            .register_stops("a", &[[0, 0, 0], [9, 9, 9]])
            .unwrap();
        assert_eq!(catalog.names(), vec!["a", "b", "c"]);
        assert_eq!(to_rgb8(catalog.evaluate("a", 1.0).unwrap()), [9, 9, 9]);

        assert!(catalog.unregister("b"));
        assert!(!catalog.unregister("b"));
        assert_eq!(catalog.names(), vec!["a", "c"]);
        assert_eq!(to_rgb8(catalog.evaluate("c", 1.0).unwrap()), [3, 3, 3]);
    }
}
