use itertools::Itertools;

use super::*;

/// Records every range it is asked for and answers with the minimum.
#[derive(Debug, Default)]
struct Recorder {
    calls: Vec<(u32, u32)>,
}

impl IntGenerator for Recorder {
    fn next_in(&mut self, min: u32, max: u32) -> u32 {
        self.calls.push((min, max));
        min
    }
}

/// Smallest circular distance between two hue residues modulo the palette size.
fn closest_residues(palette: &Palette) -> f64 {
    let count = palette.len() as f64;
    let residues = palette
        .iter()
        .map(|colour| colour.hue % count)
        .sorted_by(f64::total_cmp)
        .collect_vec();
    let wrap = match (residues.first(), residues.last()) {
        (Some(first), Some(last)) if residues.len() > 1 => count - last + first,
        _ => f64::INFINITY,
    };
    residues
        .iter()
        .tuple_windows()
        .map(|(lhs, rhs)| rhs - lhs)
        .fold(wrap, f64::min)
}

#[test]
fn five_default_colours() {
    let colours = palette(5).unwrap();
    assert_eq!(colours.len(), 5);
    assert!(closest_residues(&colours) >= 0.5);
    for colour in &colours {
        assert!((75..=95).contains(&colour.saturation));
        assert!((50..=55).contains(&colour.lightness));
        assert!((70..=100).contains(&colour.alpha));
    }
}

#[test]
fn residues_stay_apart_for_every_small_count() {
    for count in 1..=600 {
        let colours = palette(count).unwrap();
        assert_eq!(colours.len(), count);
        let gap = closest_residues(&colours);
        assert!(gap >= 5e-7, "{count} colours have residues {gap} apart");
    }
}

#[test]
fn near_equal_residues_collide() {
    let mut taken = BTreeSet::new();
    taken.insert(residue(2.0, 15));
    assert!(collides(&taken, residue(2.0 + 4e-7, 15), 15));
    assert!(collides(&taken, residue(17.0 - 3e-7, 15), 15));
    assert!(!collides(&taken, residue(2.000_01, 15), 15));

    // Neighbours across the wrap at `count` are still neighbours.
    taken.insert(residue(0.0, 15));
    assert!(collides(&taken, residue(15.0 - 1e-6, 15), 15));
}

#[test]
fn oversized_requests_fail_before_allocating() {
    let mut generator = Generator::seeded(Config::default(), 0).unwrap();
    assert_eq!(
        generator.generate(usize::MAX),
        Err(Error::TooMany(usize::MAX, MAX_COLOURS))
    );
    assert_eq!(
        palette(MAX_COLOURS + 1),
        Err(Error::TooMany(MAX_COLOURS + 1, MAX_COLOURS))
    );
    assert!(matches!(palette(usize::MAX), Err(Error::TooMany(..))));
}

#[test]
fn hues_step_without_collisions() {
    let colours = palette(4).unwrap();
    let hues = colours.iter().map(|colour| colour.hue).collect_vec();
    assert_eq!(hues, vec![222.5, 445.0, 667.5, 890.0]);
}

#[test]
fn cycled_steps_are_offset() {
    // 222.5 only ever lands on residues 0 and 2.5 modulo 5.
    let colours = palette(5).unwrap();
    let hues = colours.iter().map(|colour| colour.hue).collect_vec();
    assert_eq!(hues, vec![222.5, 445.0, 1157.0, 1379.5, 2091.5]);
}

#[test]
fn zero_colours_skip_the_generator() {
    let mut generator = Generator::new(Config::default(), Recorder::default()).unwrap();
    let colours = generator.generate(0).unwrap();
    assert!(colours.is_empty());
    assert!(generator.rng.calls.is_empty());
}

#[test]
fn channels_drawn_in_order() {
    let mut generator = Generator::new(Config::default(), Recorder::default()).unwrap();
    let colours = generator.generate(2).unwrap();
    assert_eq!(
        generator.rng.calls,
        vec![(75, 95), (50, 55), (70, 100), (75, 95), (50, 55), (70, 100)]
    );
    assert_eq!(colours.as_slice()[1].as_tuple(), (445.0, 75, 50, 70));
}

#[test]
fn deterministic() {
    assert_eq!(palette(12).unwrap(), palette(12).unwrap());

    let config = Config::default();
    let lhs = Generator::seeded(config, 7).unwrap().generate(9).unwrap();
    let rhs = Generator::seeded(config, 7).unwrap().generate(9).unwrap();
    assert_eq!(lhs, rhs);
}

#[test]
fn seed_changes_channels_not_hues() {
    let config = Config::default();
    let lhs = Generator::seeded(config, 1).unwrap().generate(16).unwrap();
    let rhs = Generator::seeded(config, 2).unwrap().generate(16).unwrap();
    assert_ne!(lhs, rhs);
    assert!(
        lhs.iter()
            .zip(rhs.iter())
            .all(|(lhs, rhs)| lhs.hue == rhs.hue)
    );
}

#[test]
fn fixed_bounds() {
    let config = Config {
        min_s: 60,
        max_s: 60,
        min_l: 40,
        max_l: 40,
        min_a: 100,
        max_a: 100,
        ..Default::default()
    };
    let colours = Generator::seeded(config, 3).unwrap().generate(3).unwrap();
    assert!(colours.iter().all(|colour| {
        (colour.saturation, colour.lightness, colour.alpha) == (60, 40, 100)
    }));
}

#[test]
fn inverted_bounds_rejected() {
    let config = Config {
        min_l: 60,
        max_l: 40,
        ..Default::default()
    };
    assert_eq!(
        Generator::seeded(config, 0).unwrap_err(),
        Error::InvertedBounds {
            channel: Channel::Lightness,
            min: 60,
            max: 40
        }
    );
}

#[test]
fn out_of_range_rejected() {
    let config = Config {
        max_a: 120,
        ..Default::default()
    };
    assert_eq!(
        config.validate(),
        Err(Error::OutOfRange {
            channel: Channel::Alpha,
            value: 120
        })
    );
}

#[test]
fn bad_steps_rejected() {
    for h_step in [0.0, -10.0, f64::INFINITY] {
        let config = Config {
            h_step,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(Error::Step(h_step)));
    }
    let config = Config {
        h_step: f64::NAN,
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(Error::Step(_))));
}

#[test]
fn exhausted_search_fails() {
    let mut generator = Generator::seeded(Config::default(), 0)
        .unwrap()
        .with_probe_limit(0);
    assert_eq!(generator.generate(4).unwrap().len(), 4);
    let err = generator.generate(5).unwrap_err();
    assert_eq!(err, Error::Exhausted(5, 222.5));
    assert_eq!(
        err.to_string(),
        "Unable to allocate 5 distinct hues with a step of 222.5"
    );
}

#[test]
fn css() {
    let colour = Hsla {
        hue: 222.5,
        saturation: 80,
        lightness: 52,
        alpha: 90,
    };
    assert_eq!(colour.to_string(), "hsla(222.5, 80%, 52%, 90%)");

    let colours = palette(3).unwrap();
    let css = colours.css();
    assert_eq!(css.len(), 3);
    assert!(css[1].starts_with("hsla(445, "));
}
