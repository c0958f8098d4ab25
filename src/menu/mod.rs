//! Interactive Menu
//!
//! Text driver for the cache: reads choices from any `BufRead`, writes
//! prompts and results to any `Write`. All input validation lives here;
//! the cache only sees well-formed calls.

mod choice;
mod render;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::cache::{Key, LruCache, PutOutcome, TracingObserver};
use crate::config::Config;

pub use choice::{Choice, ChoiceError};
pub use render::{render_state, render_stats};

/// Whether the menu loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

// == Menu ==
/// Interactive menu bound to an input and an output stream.
pub struct Menu<R, W> {
    input: R,
    output: W,
    cache: LruCache,
    config: Config,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Creates a menu over a fresh cache sized from `config`.
    pub fn new(input: R, output: W, config: Config) -> Self {
        let mut cache = LruCache::with_capacity(config.initial_capacity);
        cache.set_observer(Box::new(TracingObserver));
        Self {
            input,
            output,
            cache,
            config,
        }
    }

    pub fn cache(&self) -> &LruCache {
        &self.cache
    }

    /// Consumes the menu, returning its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    // == Main Loop ==
    /// Runs until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        self.banner()?;

        loop {
            self.print_choices()?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                writeln!(self.output, "Exiting...")?;
                return Ok(());
            };

            let flow = match line.parse::<Choice>() {
                Ok(choice) => {
                    debug!(?choice, "menu choice");
                    self.dispatch(choice)?
                }
                Err(err) => {
                    debug!(input = %line, "rejected menu choice");
                    writeln!(self.output, "{}\n", err)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                writeln!(self.output, "Exiting...")?;
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: Choice) -> Result<Flow> {
        match choice {
            Choice::Build => self.build(),
            Choice::Add => self.add(),
            Choice::Get => self.get(),
            Choice::Clear => self.clear(),
            Choice::Stats => self.stats(),
            Choice::Exit => Ok(Flow::Quit),
        }
    }

    // == Commands ==
    fn build(&mut self) -> Result<Flow> {
        let capacity = loop {
            let Some(line) = self.prompt("Enter the capacity of the cache: ")? else {
                return Ok(Flow::Quit);
            };
            match line.parse::<i64>() {
                Ok(n) if n > 0 => break n,
                _ => writeln!(
                    self.output,
                    "Invalid capacity! Please enter a positive integer."
                )?,
            }
        };

        writeln!(
            self.output,
            "Building an LRU cache with capacity for {} entries...",
            capacity
        )?;
        if let Err(err) = self.cache.build(capacity) {
            writeln!(self.output, "Could not build cache: {}", err)?;
            return Ok(Flow::Continue);
        }
        self.show_state()?;
        Ok(Flow::Continue)
    }

    fn add(&mut self) -> Result<Flow> {
        let Some(key) = self.prompt_key()? else {
            return Ok(Flow::Quit);
        };
        let Some(value) = self.prompt("Enter the data: ")? else {
            return Ok(Flow::Quit);
        };

        writeln!(self.output, "Adding value '{}' to key {}", value, key)?;
        match self.cache.put(key, value) {
            PutOutcome::Inserted => {}
            PutOutcome::Updated { previous } => writeln!(
                self.output,
                "Key {} already had value '{}'. Replaced it.",
                key, previous
            )?,
            PutOutcome::Evicted { evicted } => writeln!(
                self.output,
                "Cache is full. Evicted key {} ('{}') to make room.",
                evicted.key, evicted.value
            )?,
            PutOutcome::Rejected => writeln!(
                self.output,
                "Cache has no capacity. Nothing was stored; build the cache first."
            )?,
        }
        self.show_state()?;
        Ok(Flow::Continue)
    }

    fn get(&mut self) -> Result<Flow> {
        let Some(key) = self.prompt_key()? else {
            return Ok(Flow::Quit);
        };

        match self.cache.get(key) {
            Ok(value) => {
                writeln!(self.output, "Value '{}' read.", value)?;
                self.show_state()?;
            }
            Err(err) => writeln!(self.output, "Could not read from cache: {}", err)?,
        }
        Ok(Flow::Continue)
    }

    fn clear(&mut self) -> Result<Flow> {
        writeln!(self.output, "Deleting the entire cache...")?;
        self.cache.clear();
        self.show_state()?;
        Ok(Flow::Continue)
    }

    fn stats(&mut self) -> Result<Flow> {
        let rendered = render_stats(&self.cache.stats(), self.config.state_format)?;
        writeln!(self.output, "{}\n", rendered)?;
        Ok(Flow::Continue)
    }

    // == I/O Helpers ==
    fn banner(&mut self) -> Result<()> {
        writeln!(self.output, "====================================")?;
        writeln!(self.output, "    Cache Eviction Policy - LRU")?;
        writeln!(self.output, "====================================")?;
        Ok(())
    }

    fn print_choices(&mut self) -> Result<()> {
        for choice in Choice::ALL {
            writeln!(self.output, "{}-> {}", choice.number(), choice.label())?;
        }
        Ok(())
    }

    fn show_state(&mut self) -> Result<()> {
        if self.config.show_state {
            let rendered = render_state(&self.cache, self.config.state_format)?;
            writeln!(self.output, "{}\n", rendered)?;
        }
        Ok(())
    }

    /// Prompts until an integer key is entered. None at end of input.
    fn prompt_key(&mut self) -> Result<Option<Key>> {
        loop {
            let Some(line) = self.prompt("Enter the key: ")? else {
                return Ok(None);
            };
            match line.parse::<Key>() {
                Ok(key) => return Ok(Some(key)),
                Err(_) => writeln!(self.output, "Invalid key! Please enter an integer.")?,
            }
        }
    }

    /// Writes `text` and reads one trimmed line. None at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush().context("failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, config: Config) -> (String, LruCache) {
        let mut menu = Menu::new(Cursor::new(input.to_string()), Vec::new(), config);
        menu.run().unwrap();
        let Menu { output, cache, .. } = menu;
        (String::from_utf8(output).unwrap(), cache)
    }

    #[test]
    fn test_exits_on_end_of_input() {
        let (output, cache) = run("", Config::default());
        assert!(output.contains("1-> Build Cache"));
        assert!(output.trim_end().ends_with("Exiting..."));
        assert_eq!(cache.capacity(), 0);
    }

    #[test]
    fn test_build_reprompts_until_positive() {
        let (output, cache) = run("1\n0\n-4\nx\n3\n5\n", Config::default());
        assert_eq!(
            output
                .matches("Invalid capacity! Please enter a positive integer.")
                .count(),
            3
        );
        assert_eq!(cache.capacity(), 3);
    }

    #[test]
    fn test_initial_capacity_comes_from_config() {
        let config = Config {
            initial_capacity: 2,
            ..Config::default()
        };
        let (output, cache) = run("2\n1\nhello world\n5\n", config);
        assert!(output.contains("Memory (most to least recent): [1 => hello world]"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_huge_initial_capacity_from_config() {
        let config = Config::from_lookup(|name| {
            (name == "LRU_INITIAL_CAPACITY").then(|| usize::MAX.to_string())
        });
        let (output, cache) = run("2\n1\na\n5\n", config);
        assert!(output.contains("Memory (most to least recent): [1 => a]"));
        assert_eq!(cache.capacity(), usize::MAX);
    }

    #[test]
    fn test_add_without_build_is_rejected() {
        let (output, cache) = run("2\n1\na\n5\n", Config::default());
        assert!(output.contains("Cache has no capacity."));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_hidden_state() {
        let config = Config {
            show_state: false,
            ..Config::default()
        };
        let (output, _) = run("1\n2\n2\n1\na\n5\n", config);
        assert!(!output.contains("Memory"));
    }
}
