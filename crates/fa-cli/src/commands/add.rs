use std::io::{self, BufRead, Write};
use std::path::Path;

use fa_core::{CoreError, WordEntry, WordPool};
use tracing::debug;

pub fn run(file: &Path) -> Result<(), String> {
    let mut pool = match WordPool::load(file) {
        Ok(pool) => pool,
        Err(CoreError::NotFound(_)) => {
            println!("  {} does not exist yet, starting a new word file", file.display());
            WordPool::new()
        }
        Err(e) => return Err(e.to_string()),
    };

    let added = collect_words(&mut io::stdin().lock(), &mut io::stdout(), &mut pool)?;

    pool.save(file)
        .map_err(|e| format!("cannot write {}: {e}", file.display()))?;
    println!(
        "  Added {} word{} to {}",
        added,
        if added == 1 { "" } else { "s" },
        file.display()
    );

    Ok(())
}

/// Prompt for words until the user declines to add another.
///
/// Returns how many new words went into the pool. Nothing is saved here, so
/// an error leaves the file on disk untouched.
fn collect_words<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    pool: &mut WordPool,
) -> Result<usize, String> {
    let names = pool.category_names();
    let listed = if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    };
    writeln!(out, "Categories in word file: {listed}").map_err(write_err)?;

    let mut added = 0;
    loop {
        let word = ask(input, out, "Enter word to add: ")?;
        let category = ask(input, out, "Enter category of word to add: ")?;
        if word.is_empty() || category.is_empty() {
            return Err("word and category cannot be empty".into());
        }

        if pool.insert(WordEntry::new(category.as_str(), word.as_str())) {
            added += 1;
            debug!(%category, "word added");
        } else {
            writeln!(out, "  \"{word}\" is already in {category}").map_err(write_err)?;
        }

        let answer = ask(input, out, "Do you want to add another word? (Y/n) ")?;
        if answer.contains(['n', 'N']) {
            break;
        }
        if !answer.is_empty() && !answer.contains(['y', 'Y']) {
            return Err(format!("invalid input given: \"{answer}\""));
        }
    }

    Ok(added)
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String, String> {
    write!(out, "{prompt}").map_err(write_err)?;
    out.flush().map_err(write_err)?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| format!("cannot read input: {e}"))?;
    if read == 0 {
        return Err("input ended before the word list was finished".into());
    }
    Ok(line.trim().to_string())
}

fn write_err(e: io::Error) -> String {
    format!("cannot write output: {e}")
}
