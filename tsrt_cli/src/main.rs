// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
mod demo;
mod helper;
mod theme;

use clap::{Parser as ClapParser, Subcommand};
use cliclack::{input, intro, log as prompt_log, set_theme};
use helper::{print_inspection, read_literal};
use tsrt_vm::{
    Console, DefaultHostHooks, Options, add, is_loosely_equal, is_strictly_equal,
};
use theme::DefaultTheme;

/// A dynamically-typed value runtime
#[derive(Debug, ClapParser)] // requires `derive` feature
#[command(name = "tsrt")]
#[command(about = "Dynamically-typed value runtime for transpiled TypeScript", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Runs the built-in sample program
    Demo {
        /// Print values with their internal representation
        #[arg(short, long)]
        verbose: bool,
    },

    /// Shows typeof and the coercions of each literal
    Inspect {
        /// Literals such as `null`, `"12"`, `[1, 'a']`
        #[arg(required = true)]
        literals: Vec<String>,
    },

    /// Applies the `+` operator to two literals
    Add { left: String, right: String },

    /// Compares two literals with `==` and `===`
    Eq { left: String, right: String },

    /// Inspects literals interactively
    Repl {},
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Cli::parse();

    match args.command {
        Command::Demo { verbose } => {
            let mut console = Console::new(
                Options {
                    print_internals: verbose,
                    ..Default::default()
                },
                &DefaultHostHooks,
            );
            demo::run(&mut console)?;
        }
        Command::Inspect { literals } => {
            for literal in literals {
                print_inspection(&read_literal(&literal)?);
            }
        }
        Command::Add { left, right } => {
            let result = add(&read_literal(&left)?, &read_literal(&right)?);
            println!("{}", result.string_repr());
        }
        Command::Eq { left, right } => {
            let (left, right) = (read_literal(&left)?, read_literal(&right)?);
            println!("==  {}", is_loosely_equal(&left, &right));
            println!("=== {}", is_strictly_equal(&left, &right));
        }
        Command::Repl {} => {
            set_theme(DefaultTheme);
            println!("\n\n");
            let mut placeholder = "Enter a literal".to_string();

            loop {
                intro("tsrt Repl (type exit or ctrl+c to exit)")?;
                let input: String = input("").placeholder(&placeholder).interact()?;

                if input.trim() == "exit" {
                    std::process::exit(0);
                }
                match read_literal(&input) {
                    Ok(value) => {
                        print_inspection(&value);
                        placeholder = input;
                    }
                    Err(error) => {
                        log::debug!("rejected repl input {input:?}");
                        prompt_log::error(error)?;
                    }
                }
            }
        }
    }
    Ok(())
}
