//! Loot table with a miss chance.
//!
//! Four drops share 600 of a 1000-wide draw range, so 40% of rolls drop
//! nothing. The same table is then drained without replacement.

use fukuro::{Ceiling, Entry, WeightedBag};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let drops = vec![
        Entry::new("common", 300, "rusty sword"),
        Entry::new("uncommon", 200, "iron shield"),
        Entry::new("rare", 90, "silver ring"),
        Entry::new("legendary", 10, "dragon scale"),
    ];

    let mut table = WeightedBag::seeded(Ceiling::Fixed(1000), drops.clone(), 7)?;
    println!(
        "total={} ceiling={} cumulative={:?}",
        table.total_weight(),
        table.effective_ceiling(),
        table.cumulative()
    );

    let rolls = 10_000;
    let mut misses = 0;
    for _ in 0..rolls {
        if table.select()?.is_none() {
            misses += 1;
        }
    }
    println!("miss rate over {rolls} rolls: {:.3}", misses as f64 / rolls as f64);

    let mut chest = WeightedBag::seeded(Ceiling::Total, drops, 7)?;
    print!("chest order:");
    while !chest.is_empty() {
        if let Some(entry) = chest.take()? {
            print!(" {}", entry.payload());
        }
    }
    println!();

    Ok(())
}
