/// Word category store backing the pet name generator
///
/// Three fixed categories - names, adjectives, adverbs - each an ordered list
/// of lowercase words. Loaded once and never mutated afterwards; the
/// generator copies what it needs before filtering.

/// Animal names for the final slot of every pet name
const NAMES: &[&str] = &[
    // Classic release mascots
    "warthog", "hedgehog", "badger", "drake", "dapperling", "fawn",
    "gibbon", "heron", "ibex", "jackalope", "kudu", "lemur",
    // Savannah and plains
    "antelope", "buffalo", "cheetah", "gazelle", "giraffe", "impala",
    "jackal", "meerkat", "mongoose", "ostrich", "serval", "zebra",
    // Forest and mountain
    "bobcat", "elk", "ermine", "fox", "hare", "lynx",
    "marmot", "moose", "squirrel", "stoat", "vole", "wolverine",
    // Water and shore
    "albatross", "cormorant", "eel", "egret", "manatee", "narwhal",
    "otter", "pelican", "puffin", "seal", "urchin", "walrus",
    // Odd and endearing
    "aardvark", "axolotl", "capybara", "dingo", "echidna", "numbat",
    "okapi", "pangolin", "quokka", "quoll", "tapir", "wombat",
    // Small and quick
    "cicada", "dormouse", "finch", "gecko", "jerboa", "kestrel",
    "newt", "robin", "shrew", "skink", "toad", "wren",
    // Rare letters
    "iguana", "unicorn", "vicuna", "xerus", "yak", "koala",
];

/// Adjectives for the middle slot
const ADJECTIVES: &[&str] = &[
    // Release-codename staples
    "warty", "breezy", "dapper", "feisty", "gutsy", "hardy",
    "intrepid", "jaunty", "karmic", "lucid", "natty", "oneiric",
    "precise", "quantal", "raring", "saucy", "trusty", "utopic",
    "vivid", "wily", "xenial", "yawning", "zesty", "artful",
    "bionic", "cosmic", "disco", "eoan", "focal", "groovy",
    "hirsute", "impish", "jammy", "kinetic", "lunar", "mantic",
    "noble", "oracular", "plucky", "questing",
    // General-purpose
    "able", "agile", "amber", "bold", "brave", "bright",
    "calm", "candid", "clever", "daring", "deft", "dusty",
    "eager", "earnest", "elegant", "fierce", "frank", "gallant",
    "gentle", "golden", "happy", "humble", "iron", "jolly",
    "keen", "kind", "lively", "loyal", "merry", "mighty",
    "nimble", "odd", "ornate", "patient", "proud", "quick",
    "quiet", "regal", "robust", "rugged", "shiny", "sleek",
    "solid", "spry", "sturdy", "swift", "tidy", "tough",
    "upbeat", "urbane", "valiant", "velvet", "witty", "young",
    "zany", "zealous",
];

/// Adverbs for the leading slots of longer names
const ADVERBS: &[&str] = &[
    "amply", "barely", "boldly", "bravely", "briskly", "calmly",
    "capably", "dearly", "deftly", "dimly", "duly", "eagerly",
    "early", "easily", "evenly", "fairly", "fondly", "freely",
    "gamely", "gently", "gladly", "grandly", "happily", "humbly",
    "ideally", "idly", "jointly", "justly", "keenly", "kindly",
    "lately", "lightly", "loudly", "madly", "mainly", "merrily",
    "neatly", "nicely", "nimbly", "nobly", "oddly", "openly",
    "overly", "partly", "plainly", "proudly", "quickly", "quietly",
    "rapidly", "rarely", "readily", "richly", "sadly", "safely",
    "shyly", "simply", "slowly", "softly", "solely", "soundly",
    "stoutly", "subtly", "surely", "swiftly", "tamely", "tightly",
    "truly", "urgently", "utterly", "vaguely", "vastly", "warmly",
    "wholly", "widely", "wildly", "wisely", "wryly", "yearly",
    "zanily", "zealously",
];

/// Immutable store of the three word categories
///
/// Owned by the caller and shared read-only with the generator. Filtering
/// always happens on copies, so a store stays valid for any number of
/// concurrent generation calls.
#[derive(Debug, Clone)]
pub struct WordCategories {
    names: Vec<String>,
    adjectives: Vec<String>,
    adverbs: Vec<String>,
}

impl WordCategories {
    /// Create a store from custom word lists
    pub fn new<I, S>(names: I, adjectives: I, adverbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            adjectives: adjectives.into_iter().map(Into::into).collect(),
            adverbs: adverbs.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a store backed by the bundled word tables
    pub fn builtin() -> Self {
        Self::new(NAMES.iter().copied(), ADJECTIVES.iter().copied(), ADVERBS.iter().copied())
    }

    /// Animal name words
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Adjective words
    pub fn adjectives(&self) -> &[String] {
        &self.adjectives
    }

    /// Adverb words
    pub fn adverbs(&self) -> &[String] {
        &self.adverbs
    }
}
