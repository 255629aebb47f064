use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Xsb,
    Classic,
}

impl Format {
    pub fn chars(self) -> CellChars {
        match self {
            Format::Xsb => CellChars::xsb(),
            Format::Classic => CellChars::classic(),
        }
    }
}

/// Characters used to encode cells in level text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellChars {
    pub empty: char,
    pub wall: char,
    pub box_: char,
    pub box_on_goal: char,
    pub goal: char,
    pub player: char,
    /// `None` means the format can't express it and `player` is used instead.
    pub player_on_goal: Option<char>,
    /// Additional characters parsed as empty.
    pub empty_aliases: &'static [char],
}

impl CellChars {
    /// Described [here](http://www.sokobano.de/wiki/index.php?title=Level_format)
    pub fn xsb() -> Self {
        CellChars {
            empty: ' ',
            wall: '#',
            box_: '$',
            box_on_goal: '*',
            goal: '.',
            player: '@',
            player_on_goal: Some('+'),
            empty_aliases: &['-', '_'],
        }
    }

    pub fn classic() -> Self {
        CellChars {
            empty: ' ',
            wall: '#',
            box_: 'O',
            box_on_goal: '0',
            goal: '.',
            player: 'x',
            player_on_goal: None,
            empty_aliases: &[],
        }
    }
}

impl Default for CellChars {
    fn default() -> Self {
        CellChars::xsb()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeuristicKind {
    Simple,
    MinCost,
}

impl Display for HeuristicKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            HeuristicKind::Simple => write!(f, "simple"),
            HeuristicKind::MinCost => write!(f, "min-cost"),
        }
    }
}

impl FromStr for HeuristicKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(HeuristicKind::Simple),
            "min-cost" => Ok(HeuristicKind::MinCost),
            _ => Err(format!("Unknown heuristic: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_names() {
        for &kind in &[HeuristicKind::Simple, HeuristicKind::MinCost] {
            assert_eq!(kind.to_string().parse::<HeuristicKind>(), Ok(kind));
        }
        assert!("manhattan".parse::<HeuristicKind>().is_err());
    }
}
