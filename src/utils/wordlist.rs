//! Dictionary used to build human-readable slugs.
//!
//! All entries are lowercase ASCII letters only, so a joined slug is always
//! URL-safe and never contains the separator inside a word.

pub const ADJECTIVES: &[&str] = &[
    "amber", "ancient", "autumn", "bold", "brave", "bright", "brisk", "calm", "candid", "cheerful",
    "clever", "cosmic", "crimson", "curious", "daring", "dazzling", "eager", "electric", "elegant",
    "fancy", "fearless", "fluffy", "frosty", "gentle", "gifted", "glossy", "golden", "graceful",
    "happy", "hidden", "humble", "icy", "jolly", "keen", "lively", "lucky", "lunar", "magic",
    "mellow", "merry", "mighty", "misty", "modest", "nimble", "noble", "olive", "patient",
    "polite", "proud", "quick", "quiet", "rapid", "rustic", "shiny", "silent", "silver", "smart",
    "snowy", "solar", "sparkling", "steady", "sunny", "swift", "tidy", "tranquil", "vivid",
    "wandering", "warm", "wise", "witty", "zealous",
];

pub const NOUNS: &[&str] = &[
    "albatross", "badger", "beacon", "bison", "canyon", "cheetah", "comet", "condor", "coyote",
    "crane", "dolphin", "eagle", "falcon", "ferret", "fjord", "gazelle", "geyser", "glacier",
    "harbor", "hedgehog", "heron", "ibex", "iguana", "jackal", "jaguar", "kestrel", "koala",
    "lagoon", "lantern", "lemur", "lynx", "magpie", "marmot", "meadow", "meteor", "mongoose",
    "narwhal", "nebula", "ocelot", "orchid", "otter", "panda", "pelican", "penguin", "quasar",
    "quokka", "raccoon", "raven", "reindeer", "river", "salmon", "sparrow", "squirrel", "summit",
    "tapir", "thunder", "tiger", "toucan", "tundra", "urchin", "valley", "vicuna", "walrus",
    "wombat", "yak", "zebra",
];
