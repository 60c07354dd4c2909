use std::fs;
use std::num::ParseIntError;
use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::*;
use dialoguer::Input;
use rand::Rng;
use tracing::warn;

use crate::chart;
use crate::cli::Args;
use crate::dataset::{self, DatasetError};

pub const WORLD_PARTS: [&str; 8] = [
    "SUB-SAHARAN AFRICA",
    "NORTHERN AFRICA AND WESTERN ASIA",
    "CENTRAL AND SOUTHERN ASIA",
    "EASTERN AND SOUTH-EASTERN ASIA",
    "LATIN AMERICA AND THE CARIBBEAN",
    "AUSTRALIA/NEW ZEALAND",
    "OCEANIA (EXCLUDING AUSTRALIA AND NEW ZEALAND)",
    "EUROPE AND NORTHERN AMERICA",
];

pub const WORLD_LABEL: &str = "WORLD";

// Country indices in the source export; not every index in the range
// is guaranteed to have a record.
const RANDOM_INDEX_MIN: u32 = 25;
const RANDOM_INDEX_MAX: u32 = 256;

#[derive(Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Regions,
    RandomCountry,
    World,
    Exit,
    Other(i64),
}

/// Map one line of menu input to an action. Non-integer input is a parse
/// error the caller treats as fatal; unknown integers come back as `Other`
/// so the loop can complain and re-prompt.
pub fn parse_choice(raw: &str) -> Result<MenuChoice, ParseIntError> {
    Ok(match raw.trim().parse::<i64>()? {
        1 => MenuChoice::Regions,
        2 => MenuChoice::RandomCountry,
        3 => MenuChoice::World,
        -1 => MenuChoice::Exit,
        other => MenuChoice::Other(other),
    })
}

pub struct App {
    data_path: PathBuf,
    out_dir: PathBuf,
    regions: Vec<String>,
}

impl App {
    pub fn new(args: Args) -> App {
        App {
            data_path: PathBuf::from(args.data),
            out_dir: PathBuf::from(args.out_dir),
            regions: WORLD_PARTS.iter().map(|part| part.to_string()).collect(),
        }
    }

    pub fn run(&self) -> Result<()> {
        fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("could not create {}", self.out_dir.display()))?;

        println!();
        println!(
            "{}",
            "Let's find out some statistics about male/female ratio in different World's parts \
             over the past 70 years!"
                .bright_white()
                .bold()
        );

        loop {
            println!();
            println!("- to choose from the set of parts of the World, press 1,");
            println!("- to receive data from a random country, press 2,");
            println!("- to get the total World's number, press 3,");
            println!("- to exit, press -1");

            let raw: String = Input::new().with_prompt("Press here").interact_text()?;
            let choice = parse_choice(&raw)
                .with_context(|| format!("menu input {raw:?} is not an integer"))?;

            match choice {
                MenuChoice::Regions => {
                    if let Some(region) = self.pick_region()? {
                        self.show_label(&region)?;
                    }
                }
                MenuChoice::RandomCountry => {
                    let index = rand::thread_rng().gen_range(RANDOM_INDEX_MIN..=RANDOM_INDEX_MAX);
                    match dataset::country_by_index(&self.data_path, index) {
                        Ok(country) => self.show_label(&country)?,
                        Err(DatasetError::IndexNotFound(_)) => {
                            warn!(index, "random draw hit an index with no record");
                            println!("{}", format!("No country with index {index}.").red());
                        }
                        Err(err) => return Err(err.into()),
                    }
                }
                MenuChoice::World => self.show_label(WORLD_LABEL)?,
                MenuChoice::Exit => return Ok(()),
                MenuChoice::Other(_) => println!("{}", "Incorrect input.".red()),
            }
        }
    }

    /// Print the 1-based region menu and read a selection. Out-of-range
    /// numbers bounce back to the main menu; non-integer input is fatal,
    /// same as the main menu.
    fn pick_region(&self) -> Result<Option<String>> {
        println!();
        for (i, region) in self.regions.iter().enumerate() {
            println!("{} {}", (i + 1).to_string().bold(), region);
        }

        let raw: String = Input::new()
            .with_prompt("Select number accordingly")
            .interact_text()?;
        let pick: i64 = raw
            .trim()
            .parse()
            .with_context(|| format!("region input {raw:?} is not an integer"))?;

        if pick < 1 || pick as usize > self.regions.len() {
            println!("{}", "Incorrect input.".red());
            return Ok(None);
        }
        Ok(Some(self.regions[pick as usize - 1].clone()))
    }

    /// One query: look the label up, render its chart, report the artifact.
    /// A missing label is reported and the loop keeps going.
    fn show_label(&self, label: &str) -> Result<()> {
        let series = match dataset::series_for_label(&self.data_path, label) {
            Ok(series) => series,
            Err(DatasetError::LabelNotFound(_)) => {
                warn!(label, "no record for label");
                println!("{}", format!("No data found for {label}.").red());
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        let out_path = chart::render(&series, label, &self.out_dir)?;
        println!(
            "Chart written to {}",
            out_path.display().to_string().bright_white().bold()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers_map_to_actions() {
        assert_eq!(parse_choice("1").unwrap(), MenuChoice::Regions);
        assert_eq!(parse_choice("2").unwrap(), MenuChoice::RandomCountry);
        assert_eq!(parse_choice("3").unwrap(), MenuChoice::World);
        assert_eq!(parse_choice("-1").unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn unknown_numbers_are_reprompted_not_fatal() {
        assert_eq!(parse_choice("7").unwrap(), MenuChoice::Other(7));
        assert_eq!(parse_choice("0").unwrap(), MenuChoice::Other(0));
        assert_eq!(parse_choice(" -2 ").unwrap(), MenuChoice::Other(-2));
    }

    #[test]
    fn non_integer_input_is_a_parse_error() {
        assert!(parse_choice("x").is_err());
        assert!(parse_choice("1.5").is_err());
        assert!(parse_choice("").is_err());
    }

    #[test]
    fn region_menu_is_eight_fixed_parts() {
        assert_eq!(WORLD_PARTS.len(), 8);
        assert_eq!(WORLD_PARTS[0], "SUB-SAHARAN AFRICA");
        assert_eq!(WORLD_PARTS[7], "EUROPE AND NORTHERN AMERICA");
    }
}
