use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(file: &Path) -> Result<(), String> {
    let pool = super::load_pool(file)?;

    if pool.is_empty() {
        println!("  No categories found.");
        return Ok(());
    }

    // Word lists stay hidden: whoever runs this may be playing.
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Category", "Words"]);
    for (category, words) in pool.iter() {
        table.add_row(vec![category.to_string(), words.len().to_string()]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} categor{}, {} word{}",
        pool.category_count(),
        if pool.category_count() == 1 { "y" } else { "ies" },
        pool.word_count(),
        if pool.word_count() == 1 { "" } else { "s" },
    );

    Ok(())
}
