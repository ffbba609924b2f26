//! Bundled default word lists, one per part of speech.

pub const ADJECTIVES: &[&str] = &[
    "amber", "bold", "brave", "bright", "calm",
    "clever", "cool", "crisp", "daring", "eager",
    "fair", "fierce", "gentle", "glad", "golden",
    "grand", "happy", "hardy", "keen", "kind",
    "lively", "lucky", "merry", "mighty", "noble",
    "pale", "proud", "quick", "quiet", "rapid",
    "ready", "rosy", "sharp", "shy", "sleek",
    "slim", "smart", "soft", "steady", "stout",
    "strong", "sunny", "sure", "sweet", "swift",
    "tall", "warm", "wise",
];

pub const NOUNS: &[&str] = &[
    "badger", "bear", "beacon", "birch", "brook",
    "canyon", "cedar", "cloud", "comet", "coral",
    "crane", "delta", "falcon", "fern", "fjord",
    "forest", "glacier", "harbor", "heron", "island",
    "lagoon", "lantern", "maple", "meadow", "meteor",
    "otter", "panda", "pebble", "pine", "planet",
    "prairie", "raven", "reef", "ridge", "river",
    "summit", "thistle", "tiger", "valley", "willow",
    "canoe", "anchor", "compass", "garden", "harp",
    "kettle", "quill", "sparrow",
];

pub const VERBS: &[&str] = &[
    "bake", "bloom", "bounce", "build", "carve",
    "chase", "climb", "dance", "dash", "dive",
    "drift", "dream", "explore", "fetch", "float",
    "fly", "gather", "glide", "glow", "hike",
    "hum", "juggle", "jump", "knit", "laugh",
    "leap", "mend", "paint", "plant", "race",
    "roam", "sail", "sing", "skate", "sketch",
    "soar", "sprint", "swim", "swing", "travel",
    "twirl", "wander", "whistle", "write", "yodel",
    "zoom", "paddle", "ponder",
];

pub const ADVERBS: &[&str] = &[
    "boldly", "brightly", "briskly", "calmly", "cheerfully",
    "closely", "deftly", "eagerly", "easily", "evenly",
    "fairly", "firmly", "freely", "gently", "gladly",
    "gracefully", "happily", "honestly", "jointly", "kindly",
    "lightly", "loudly", "merrily", "neatly", "nimbly",
    "openly", "patiently", "politely", "promptly", "proudly",
    "quickly", "quietly", "rapidly", "readily", "safely",
    "simply", "smoothly", "softly", "steadily", "swiftly",
    "tenderly", "thankfully", "truly", "vastly", "warmly",
    "wildly", "wisely", "zestfully",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_clean(list: &[&str], label: &str) {
        let unique: HashSet<&&str> = list.iter().collect();
        assert_eq!(unique.len(), list.len(), "{} has duplicates", label);
        for word in list {
            assert!(!word.is_empty(), "{} has an empty word", label);
            assert!(!word.contains('-'), "{} word has a hyphen: {}", label, word);
            assert_eq!(*word, word.to_lowercase(), "{} word not lowercase: {}", label, word);
        }
    }

    #[test]
    fn bundled_lists_are_clean() {
        assert_clean(ADJECTIVES, "ADJECTIVES");
        assert_clean(NOUNS, "NOUNS");
        assert_clean(VERBS, "VERBS");
        assert_clean(ADVERBS, "ADVERBS");
    }

    #[test]
    fn word_list_sizes() {
        assert_eq!(ADJECTIVES.len(), 48);
        assert_eq!(NOUNS.len(), 48);
        assert_eq!(VERBS.len(), 48);
        assert_eq!(ADVERBS.len(), 48);
    }
}
