//! Menu choice parsing.

use std::str::FromStr;

use thiserror::Error;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Build,
    Add,
    Get,
    Clear,
    Exit,
    Stats,
}

impl Choice {
    /// All choices in the order they are listed.
    pub const ALL: [Choice; 6] = [
        Choice::Build,
        Choice::Add,
        Choice::Get,
        Choice::Clear,
        Choice::Exit,
        Choice::Stats,
    ];

    pub fn number(self) -> u32 {
        match self {
            Choice::Build => 1,
            Choice::Add => 2,
            Choice::Get => 3,
            Choice::Clear => 4,
            Choice::Exit => 5,
            Choice::Stats => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Choice::Build => "Build Cache",
            Choice::Add => "Add data to the Cache",
            Choice::Get => "Get data from the Cache",
            Choice::Clear => "Delete the entire Cache",
            Choice::Exit => "Exit",
            Choice::Stats => "Show statistics",
        }
    }
}

/// Why a line could not be turned into a [`Choice`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChoiceError {
    /// Input was not an integer
    #[error("Invalid choice! Please enter a valid number.")]
    NotANumber(String),

    /// Integer outside the menu
    #[error("Invalid choice!")]
    Unknown(i64),
}

impl FromStr for Choice {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let number: i64 = s
            .parse()
            .map_err(|_| ChoiceError::NotANumber(s.to_string()))?;
        Choice::ALL
            .into_iter()
            .find(|choice| i64::from(choice.number()) == number)
            .ok_or(ChoiceError::Unknown(number))
    }
}
