use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::config::Format;
use crate::parser;
use crate::state::PuzzleState;
use crate::LoadLevel;

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    let mut file = File::open(path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

impl LoadLevel for str {
    fn load_level(&self, format: Format) -> Result<PuzzleState, Box<dyn Error>> {
        debug!("Loading {} as {:?}", self, format);
        let text = read_file(self)?;
        Ok(parser::parse(&text, format)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file() {
        assert!("levels/custom/does-not-exist.txt"
            .load_level(Format::Xsb)
            .is_err());
    }

    #[test]
    fn load_xsb_and_classic() {
        let xsb = "levels/custom/02-corridor.txt".load_level(Format::Xsb).unwrap();
        let classic = "levels/custom/02-corridor-classic.txt"
            .load_level(Format::Classic)
            .unwrap();
        assert_eq!(xsb, classic);

        // wrong format
        assert!("levels/custom/02-corridor-classic.txt"
            .load_level(Format::Xsb)
            .is_err());
    }
}
