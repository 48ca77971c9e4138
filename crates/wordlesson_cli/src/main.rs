//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `wordlesson_core` linkage from a plain executable.
//! - Print a deterministic distribution for `wordlesson_cli N D`.

use wordlesson_core::{ChipEngine, GroupId, Scheduler};

fn main() {
    println!("wordlesson_core ping={}", wordlesson_core::ping());
    println!("wordlesson_core version={}", wordlesson_core::core_version());

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        return;
    }
    if let Err(message) = run(&args) {
        eprintln!("error: {message}");
        std::process::exit(2);
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let [words, days] = args else {
        return Err("usage: wordlesson_cli <word_count> <day_count>".to_string());
    };
    let word_count: usize = words
        .parse()
        .map_err(|_| format!("word_count must be a number, got `{words}`"))?;
    let day_count: u32 = days
        .parse()
        .map_err(|_| format!("day_count must be a number, got `{days}`"))?;

    let scheduler = Scheduler::default();
    let counts = scheduler
        .distribute(word_count, day_count)
        .map_err(|err| err.to_string())?;
    println!("distribute({word_count}, {day_count})={counts:?}");

    // Demo pool of synthetic words, one per letter pair.
    let mut engine = ChipEngine::new();
    let raw: Vec<String> = (0..word_count).map(demo_word).collect();
    engine.stage(GroupId::Vocabulary, &raw.join(" "));
    engine.commit(GroupId::Vocabulary);

    let pool = engine.pool_words();
    let schedule = scheduler
        .build(&pool, day_count)
        .map_err(|err| err.to_string())?;
    for plan in &schedule.days {
        let text_of = |id: &wordlesson_core::WordId| {
            engine
                .word(*id)
                .map(|record| record.word.text.clone())
                .unwrap_or_default()
        };
        let new: Vec<String> = plan.new_word_ids.iter().map(text_of).collect();
        println!(
            "day {}: new=[{}] review={}",
            plan.day,
            new.join(", "),
            plan.review_word_ids.len()
        );
    }
    Ok(())
}

fn demo_word(index: usize) -> String {
    let first = (b'a' + (index / 26 % 26) as u8) as char;
    let second = (b'a' + (index % 26) as u8) as char;
    format!("w{first}{second}{}", index / 676)
}
