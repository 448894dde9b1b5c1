//! Synthetic transcript generator for stress testing chatstat.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [messages] [output]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 heavy_chat.txt

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use rand::Rng;
use rand::seq::SliceRandom;

const EMOJIS: &[&str] = &[
    "😀", "😂", "🤣", "😍", "🥰", "🤔", "🙄", "😱", "🔥", "👍", "❤️", "💔", "🎉", "🍕", "🇰🇿",
    "👨‍👩‍👧‍👦",
];

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Carol Danvers",
    "Иван",
    "村上",
    "محمد",
    "🔥FireUser🔥",
    "+1 555 0100",
];

const WORDS: &[&str] = &[
    "pizza", "meeting", "tomorrow", "weekend", "coffee", "project", "deadline", "movie", "train",
    "birthday", "the", "and", "is", "you", "yaar", "haan", "okay", "really", "maybe", "party",
];

const NOTICES: &[&str] = &[
    "\u{200E}image omitted",
    "\u{200E}sticker omitted",
    "Messages and calls are end-to-end encrypted. No one outside of this chat can read them.",
    "This message was deleted.",
    "Bob added Carol Danvers",
    "Иван left",
];

const LINKS: &[&str] = &[
    "https://example.com/menu",
    "http://test.org/a?b=c",
    "www.rust-lang.org",
];

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map_or("heavy_chat.txt", String::as_str);

    println!("🧪 Transcript Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {count}");
    println!("   Output:   {output}");
    println!();

    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);
    let mut rng = rand::thread_rng();
    let start = Instant::now();
    let mut bytes_written: usize = 0;

    for line in preamble() {
        bytes_written += line.len();
        writer.write_all(line.as_bytes())?;
    }

    for i in 0..count {
        let sender = SENDERS.choose(&mut rng).copied().unwrap_or("Alice");
        let body = generate_body(&mut rng, i);
        let line = format!("{} {sender}: {body}\n", header_stamp(&mut rng, i));

        bytes_written += line.len();
        writer.write_all(line.as_bytes())?;

        // a few lines the classifier has to treat as continuation text
        if i % 1000 == 500 {
            let garbage = generate_garbage_line(&mut rng);
            bytes_written += garbage.len();
            writer.write_all(garbage.as_bytes())?;
        }

        if (i + 1) % 10_000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                bytes_written as f64 / 1_000_000.0,
                (i + 1) as f64 / elapsed
            );
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    println!("\n\n✅ Done!");
    println!("   Size:  {:.2} MB", bytes_written as f64 / 1_000_000.0);
    println!("   Time:  {:.2}s", elapsed.as_secs_f64());
    println!("   Speed: {:.0} msg/s", count as f64 / elapsed.as_secs_f64());

    Ok(())
}

fn preamble() -> [&'static str; 2] {
    ["Chat export\n", "\n"]
}

/// `[DD/MM/YY, H:MM:SS AM]` or `[DD/MM/YY, HH:MM:SS]`, alternating clock styles.
fn header_stamp(rng: &mut impl Rng, index: usize) -> String {
    let day = rng.gen_range(1..=28);
    let month = rng.gen_range(1..=12);
    let year = rng.gen_range(19..=25);
    let minute = rng.gen_range(0..60);
    let second = rng.gen_range(0..60);
    let hour24: u32 = rng.gen_range(0..24);

    match index % 3 {
        0 => format!("[{day:02}/{month:02}/{year:02}, {hour24:02}:{minute:02}:{second:02}]"),
        variant => {
            let (hour12, meridiem) = match hour24 {
                0 => (12, "AM"),
                1..=11 => (hour24, "AM"),
                12 => (12, "PM"),
                _ => (hour24 - 12, "PM"),
            };
            // newer exports put a narrow no-break space before the meridiem
            let gap = if variant == 1 { " " } else { "\u{202F}" };
            format!("[{day:02}/{month:02}/{year:02}, {hour12}:{minute:02}:{second:02}{gap}{meridiem}]")
        }
    }
}

fn generate_body(rng: &mut impl Rng, index: usize) -> String {
    match index % 12 {
        0..=4 => sentence(rng, 3..12),
        5 => format!("{} {}", sentence(rng, 2..6), LINKS.choose(rng).copied().unwrap_or("")),
        6 => {
            let emojis: String = (0..rng.gen_range(1..8))
                .filter_map(|_| EMOJIS.choose(rng).copied())
                .collect();
            format!("{} {emojis}", sentence(rng, 1..4))
        }
        7 => format!("{}\n{}\n\n{}", sentence(rng, 2..8), sentence(rng, 2..8), sentence(rng, 1..3)),
        8 => NOTICES.choose(rng).copied().unwrap_or("").to_string(),
        9 => format!("Кириллица и English вместе #{index}"),
        10 => sentence(rng, 40..120),
        _ => "\u{200E}".to_string(),
    }
}

fn sentence(rng: &mut impl Rng, len: std::ops::Range<usize>) -> String {
    let n = rng.gen_range(len);
    (0..n)
        .filter_map(|_| WORDS.choose(rng).copied())
        .collect::<Vec<_>>()
        .join(" ")
}

fn generate_garbage_line(rng: &mut impl Rng) -> String {
    match rng.gen_range(0..4) {
        0 => "This line has no timestamp or sender format\n".to_string(),
        1 => "[Invalid date format here] - : message\n".to_string(),
        2 => "[2024-01-01, 10:00:00] ISO dates are not headers\n".to_string(),
        _ => "\n".to_string(),
    }
}
