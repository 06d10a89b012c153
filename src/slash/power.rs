//! Successive slash powers of a base graph

use super::SlashComposer;
use crate::graph::Graph;
use crate::Result;

/// Iterator over `G⊘(1), G⊘(2), G⊘(3), ...`
///
/// Each power is built from the previous one with a single slash product,
/// so walking the first `n` powers costs as much as computing `G⊘(n)` once.
/// The iterator stops after the first error.
pub struct SlashPowers<'a> {
    composer: SlashComposer,
    base: &'a Graph,
    current: Option<Graph>,
    exponent: u32,
    failed: bool,
}

impl<'a> SlashPowers<'a> {
    /// Iterate over the powers of `base` with the default composer
    pub fn new(base: &'a Graph) -> Self {
        Self::with_composer(base, SlashComposer::default())
    }

    /// Iterate over the powers of `base` with a configured composer
    pub fn with_composer(base: &'a Graph, composer: SlashComposer) -> Self {
        SlashPowers {
            composer,
            base,
            current: None,
            exponent: 0,
            failed: false,
        }
    }

    /// Exponent of the most recently yielded power (0 before the first)
    pub fn exponent(&self) -> u32 {
        self.exponent
    }
}

impl Iterator for SlashPowers<'_> {
    type Item = Result<Graph>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let next = match &self.current {
            None => Ok(self.base.clone()),
            Some(previous) => self.composer.slash_into(previous, self.base),
        };

        match next {
            Ok(graph) => {
                self.exponent += 1;
                self.current = Some(graph.clone());
                Some(Ok(graph))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SlashConfig;
    use crate::graph::families;
    use crate::slash::slash_power;

    #[test]
    fn test_powers_match_slash_power() {
        let d = families::diamond();
        let powers: Vec<Graph> = SlashPowers::new(&d)
            .take(3)
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(powers.len(), 3);
        for (k, power) in powers.iter().enumerate() {
            assert_eq!(*power, slash_power(&d, k as u32 + 1).unwrap());
        }
    }

    #[test]
    fn test_exponent_tracks_yields() {
        let d = families::diamond();
        let mut powers = SlashPowers::new(&d);
        assert_eq!(powers.exponent(), 0);
        powers.next();
        powers.next();
        assert_eq!(powers.exponent(), 2);
    }

    #[test]
    fn test_stops_after_error() {
        let d = families::diamond();
        let composer = SlashComposer::new(SlashConfig::new().with_max_vertices(20)).unwrap();
        let mut powers = SlashPowers::with_composer(&d, composer);

        assert!(powers.next().unwrap().is_ok());
        assert!(powers.next().unwrap().is_ok());
        assert!(powers.next().unwrap().is_err());
        assert!(powers.next().is_none());
        assert_eq!(powers.exponent(), 2);
    }
}
