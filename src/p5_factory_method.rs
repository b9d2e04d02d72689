// Pattern 5: Factory Method - Creation Behind an Interface
// The caller decides the product at runtime by argument; the factory owns
// the mapping from name to concrete type. An unknown name is a typed error
// instead of a null product.

use std::str::FromStr;

use colored::Colorize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
enum CupError {
    #[error("no cup comes in the color {0:?}")]
    UnknownColor(String),
}

// ============================================================================
// Trait-object factory
// ============================================================================

trait Cup: std::fmt::Debug {
    fn color(&self) -> &str;
}

#[derive(Debug)]
struct RedCup;

impl Cup for RedCup {
    fn color(&self) -> &str {
        "red"
    }
}

#[derive(Debug)]
struct BlueCup;

impl Cup for BlueCup {
    fn color(&self) -> &str {
        "blue"
    }
}

// This is the factory method.
fn cup_for(color: &str) -> Result<Box<dyn Cup>, CupError> {
    match color {
        "red" => Ok(Box::new(RedCup)),
        "blue" => Ok(Box::new(BlueCup)),
        other => Err(CupError::UnknownColor(other.to_string())),
    }
}

// ============================================================================
// Enum-based variant (zero-cost)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CupKind {
    Red,
    Blue,
}

impl CupKind {
    fn color(self) -> &'static str {
        match self {
            CupKind::Red => "red",
            CupKind::Blue => "blue",
        }
    }
}

impl FromStr for CupKind {
    type Err = CupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(CupKind::Red),
            "blue" => Ok(CupKind::Blue),
            other => Err(CupError::UnknownColor(other.to_string())),
        }
    }
}

fn main() {
    println!("{}", "Pattern 5: Factory Method".bold());
    println!("=========================\n");

    println!("{}", "=== Trait-object factory ===".green());
    for color in ["red", "blue", "plaid"] {
        match cup_for(color) {
            Ok(cup) => println!("{}", cup.color()),
            Err(err) => println!("{} {}", "rejected:".red(), err),
        }
    }

    println!("\n{}", "=== Enum factory ===".green());
    for color in ["red", "blue"] {
        let kind: CupKind = color.parse().expect("known color");
        println!("{:?} cup is {}", kind, kind.color());
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_builds_the_requested_cup() {
        assert_eq!(cup_for("red").unwrap().color(), "red");
        assert_eq!(cup_for("blue").unwrap().color(), "blue");
    }

    #[test]
    fn factory_rejects_unknown_colors() {
        assert_eq!(
            cup_for("plaid").unwrap_err(),
            CupError::UnknownColor("plaid".to_string())
        );
    }

    #[test]
    fn enum_factory_parses_and_matches() {
        assert_eq!("red".parse::<CupKind>().unwrap(), CupKind::Red);
        assert_eq!("blue".parse::<CupKind>().unwrap(), CupKind::Blue);
        assert_eq!(CupKind::Red.color(), "red");
        assert!("green".parse::<CupKind>().is_err());
    }
}
