use colored::Colorize;

const RULES: &str = "\
One shared screen deals the roles. Out of all players, one is secretly the
fake artist; everyone else is an artist.

  1. Pass the screen around. Each player presses enter to see their role,
     reads it, and presses enter again to wipe it before handing over.
  2. Artists see the secret word. The fake artist sees only that they are
     the fake.
  3. Once everyone has looked, the category is shown to the whole table.
  4. Take turns drawing a single line each on one shared sheet of paper.
     Go around the table twice.
  5. Vote on who the fake artist is. Then the fake artist reveals
     themselves and guesses the word.

The fake artist wins if they are not caught, or if they guess the word.

Word files are JSON objects mapping a category to its words:

  { \"food\": [\"Pizza\", \"Croissant\", \"Spaghetti\"] }

Use `fake-artist add <FILE>` to extend one, and `--consume` to retire each
word after it has been played.";

pub fn run() -> Result<(), String> {
    println!("  {}", "How to play Fake Artist".bold().underline());
    println!();
    println!("{RULES}");
    Ok(())
}
