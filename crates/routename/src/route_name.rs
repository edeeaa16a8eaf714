//! Route names: a random adjective joined with the climber's name.

use rand::{Rng, seq::SliceRandom as _};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::str::FromStr;

pub const ADJECTIVES: &[&str] = &[
    "admiring", "adoring", "affectionate", "agitated", "amazing", "angry", "awesome", "beautiful",
    "blissful", "bold", "boring", "brave", "busy", "charming", "clever", "cocky", "cool",
    "compassionate", "competent", "condescending", "confident", "cranky", "crazy", "dazzling",
    "determined", "distracted", "dreamy", "eager", "ecstatic", "elastic", "elated", "elegant",
    "eloquent", "epic", "exciting", "fervent", "festive", "flamboyant", "focused", "friendly",
    "frosty", "funny", "gallant", "gifted", "goofy", "gracious", "great", "happy", "hardcore",
    "heuristic", "hopeful", "hungry", "infallible", "inspiring", "interesting", "intelligent",
    "jolly", "jovial", "keen", "kind", "laughing", "loving", "lucid", "magical", "mystifying",
    "modest", "musing", "naughty", "nervous", "nice", "nifty", "nostalgic", "objective",
    "optimistic", "peaceful", "pedantic", "pensive", "practical", "priceless", "quirky",
    "quizzical", "recursing", "relaxed", "reverent", "romantic", "sad", "serene", "sharp", "silly",
    "sleepy", "stoic", "strange", "stupefied", "suspicious", "sweet", "tender", "thirsty",
    "trusting", "unruffled", "upbeat", "vibrant", "vigilant", "vigorous", "wizardly", "wonderful",
    "xenodochial", "youthful", "zealous", "zen",
];

const SEPARATOR: char = '-';

/// Which part of the climber key ends up in the route name.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    derive_more::Display,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub enum NameStyle {
    /// The key verbatim, e.g. `honnold`.
    #[display("key")]
    Key,
    /// The second word of a full-name key, e.g. `Honnold` out of `Alex Honnold`.
    /// Keys without a second word are used whole.
    #[default]
    #[display("surname")]
    Surname,
}

impl FromStr for NameStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "key" => Ok(NameStyle::Key),
            "surname" => Ok(NameStyle::Surname),
            other => Err(format!("unknown name style `{other}`")),
        }
    }
}

impl NameStyle {
    pub fn name_part(self, climber_key: &str) -> &str {
        match self {
            NameStyle::Key => climber_key,
            NameStyle::Surname => climber_key.split_whitespace().nth(1).unwrap_or(climber_key),
        }
    }
}

/// Builds `<adjective>-<name part>`, drawing the adjective uniformly from `adjectives`.
pub fn generate_route_name<R: Rng + ?Sized>(
    climber_key: &str,
    adjectives: &[&str],
    style: NameStyle,
    rng: &mut R,
) -> String {
    let adjective = adjectives
        .choose(rng)
        .expect("adjective list must not be empty");
    format!("{adjective}{SEPARATOR}{}", style.name_part(climber_key))
}
