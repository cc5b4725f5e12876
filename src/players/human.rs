use crate::game::Detective;
use crate::game::Event;
use crate::mansion::Room;
use colored::*;
use dialoguer::Input;

/// Player at the terminal.
#[derive(Debug, Default)]
pub struct Human;

impl Detective for Human {
    fn navigate(&mut self, room: &Room) -> anyhow::Result<String> {
        let input = Input::<String>::new()
            .with_prompt(format!("{} [l]eft [r]ight [e]nd", room.name().bold()))
            .report(false)
            .interact_text()?;
        Ok(input)
    }
    fn accuse(&mut self, suspects: &[&str]) -> anyhow::Result<String> {
        println!();
        println!("{}", "Suspects".underline());
        for suspect in suspects {
            println!("  {}", suspect);
        }
        let input = Input::<String>::new()
            .with_prompt("Who do you accuse? (full name)")
            .allow_empty(true)
            .report(false)
            .interact_text()?;
        Ok(input.trim().to_string())
    }
    fn notify(&mut self, event: &Event) {
        match event {
            Event::Opening { title } => {
                println!("{}", format!("=== {} ===", title).bold());
                println!("Explore the mansion, collect clues and accuse the culprit.");
            }
            Event::Entered { room, clue, fresh } => {
                println!();
                println!("You entered {}", room.bold());
                match clue {
                    Some(clue) if *fresh => println!("Clue found: {}", clue.green()),
                    Some(clue) => println!("Clue found: {} {}", clue.green(), "(already noted)".dimmed()),
                    None => println!("{}", "No clue in this room.".dimmed()),
                }
            }
            Event::Blocked(side) => println!("{}", format!("No path to the {}.", side).yellow()),
            Event::Invalid(input) => println!("{}", format!("Invalid choice {:?}. Try again.", input).red()),
            Event::Closed { room } => println!("Exploration ended in {}.", room),
            Event::Collected(clues) => {
                println!();
                println!("{}", "=== Clues collected (alphabetical) ===".bold());
                match clues.is_empty() {
                    true => println!("No clue was collected."),
                    false => clues.iter().for_each(|clue| println!("- {}", clue)),
                }
            }
            Event::Judged(verdict) => {
                println!();
                println!("Result of the investigation into {}", verdict.accused().bold());
                println!("Clues pointing at {}: {}", verdict.accused(), verdict.matches());
                for clue in verdict.support() {
                    println!("  - {}", clue);
                }
                println!("Decision: accusation {}", verdict);
            }
            Event::Rejected(e) => println!("{}", e.to_string().red()),
            Event::Farewell => {
                println!();
                println!("Thanks for playing!");
            }
        }
    }
}
