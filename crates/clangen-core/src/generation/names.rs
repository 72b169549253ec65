//! Name part generation

use rand::Rng;

/// Random name prefix
pub fn random_prefix(rng: &mut impl Rng) -> &'static str {
    PREFIXES[rng.gen_range(0..PREFIXES.len())]
}

/// Random warrior suffix that does not repeat the end of `prefix`
pub fn random_suffix(rng: &mut impl Rng, prefix: &str) -> &'static str {
    let lower = prefix.to_lowercase();
    loop {
        let suffix = SUFFIXES[rng.gen_range(0..SUFFIXES.len())];
        // "Stormstorm"-style repeats read badly
        if !lower.ends_with(suffix) {
            return suffix;
        }
    }
}

// Sample lists - the full game loads these from data files
static PREFIXES: &[&str] = &[
    // Plants
    "Bramble", "Fern", "Holly", "Thorn", "Willow", "Reed", "Moss", "Poppy",
    "Birch", "Rowan", "Briar", "Sorrel", "Dandelion", "Clover",
    // Weather and sky
    "Storm", "Rain", "Frost", "Cloud", "Mist", "Sun", "Moon", "Thunder",
    "Snow", "Hail",
    // Colours
    "Gray", "Sand", "Ginger", "Tawny", "Dark", "Pale", "Ash", "Russet",
    // Animals
    "Mouse", "Sparrow", "Hawk", "Badger", "Fox", "Robin", "Minnow",
    // Other
    "Fire", "Stone", "Flint", "Ember", "Spotted", "Leaf",
];

static SUFFIXES: &[&str] = &[
    "heart", "claw", "pelt", "tail", "fur", "whisker", "stripe", "fang",
    "leaf", "storm", "flower", "foot", "shade", "step", "song", "nose",
    "eye", "wing", "cloud", "fall", "frost", "ear", "stream", "blaze",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_suffix_never_repeats_prefix_end() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            assert_ne!(random_suffix(&mut rng, "Storm"), "storm");
            assert_ne!(random_suffix(&mut rng, "Leaf"), "leaf");
        }
    }

    #[test]
    fn test_name_variety() {
        let mut rng = rand::thread_rng();
        let prefixes: HashSet<_> = (0..100).map(|_| random_prefix(&mut rng)).collect();
        let suffixes: HashSet<_> = (0..100).map(|_| random_suffix(&mut rng, "Gray")).collect();

        assert!(prefixes.len() > 10);
        assert!(suffixes.len() > 10);
    }
}
