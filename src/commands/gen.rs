//! Identifier generation commands.

use anyhow::Result;

use crate::ident;

#[derive(Debug, Clone)]
pub enum GenSubcommand {
    /// Time-based UUID (version 1).
    Uuid1,
    /// Random UUID (version 4).
    Uuid4,
}

pub fn execute_gen(command: GenSubcommand) -> Result<()> {
    match command {
        GenSubcommand::Uuid1 => println!("UUID1: {}", ident::time_based()),
        GenSubcommand::Uuid4 => println!("UUID4: {}", ident::random()),
    }
    Ok(())
}
