//! POSIX character classes built from interval containment sets.
//!
//! Builds the classic character classes through `insert_range`/`merge`,
//! prints each one with its regex-style rendering, element count and raw
//! boundaries, and demonstrates complement and the ASCII/non-ASCII split.
//!
//! Run with:
//! ```bash
//! cargo run --example charclass -- [--inverted]
//! ```

use clap::Parser;
use ics_rs::ascii::AsciiSet;
use ics_rs::error::Error;
use ics_rs::rune::RuneSet;

#[derive(Debug, Parser)]
#[command(author, version, about = "POSIX character classes as containment sets")]
struct Cli {
    /// Also print the complement of each class
    #[arg(long)]
    inverted: bool,
}

fn any_of(chars: &str) -> Result<AsciiSet, Error> {
    let mut a = AsciiSet::new();
    for &c in chars.as_bytes() {
        a.insert(c)?;
    }
    Ok(a)
}

fn range(first: u8, last: u8) -> Result<AsciiSet, Error> {
    let mut a = AsciiSet::new();
    a.insert_range(first, last)?;
    Ok(a)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let cli = Cli::parse();

    let digits = range(b'0', b'9')?;
    let lower = range(b'a', b'z')?;
    let upper = range(b'A', b'Z')?;
    let alphabetic = AsciiSet::merge([&lower, &upper]);
    let alphanumeric = AsciiSet::merge([&lower, &upper, &digits]);
    let word = AsciiSet::merge([&alphanumeric, &any_of("_")?]);

    let classes: Vec<(&str, AsciiSet)> = vec![
        ("alnum", alphanumeric),
        ("alpha", alphabetic),
        ("ascii", range(0x00, 0x7f)?),
        ("blank", any_of("\t ")?),
        ("cntrl", AsciiSet::merge([&range(0x00, 0x1f)?, &any_of("\x7f")?])),
        ("digit", digits),
        ("graph", range(0x21, 0x7e)?),
        ("lower", lower),
        ("print", range(b' ', b'~')?),
        (
            "punct",
            AsciiSet::merge([
                &range(0x21, 0x2f)?,
                &range(0x3a, 0x40)?,
                &range(0x5b, 0x60)?,
                &range(0x7b, 0x7e)?,
            ]),
        ),
        ("space", any_of("\t\n\x0b\x0c\r ")?),
        ("upper", range(b'A', b'Z')?),
        ("word", word),
        (
            "xdigit",
            AsciiSet::merge([&range(b'0', b'9')?, &range(b'A', b'F')?, &range(b'a', b'f')?]),
        ),
    ];

    println!(
        "{:<8} {:<20} {:>5}  {}",
        "name", "regex", "count", "boundaries"
    );
    println!("{}", "-".repeat(60));
    for (name, class) in &classes {
        println!(
            "{:<8} [{:<18} {:>5}  {:02x?}",
            name,
            format!("{}]", class),
            class.count_elements(),
            class.boundaries()
        );
        if cli.inverted {
            let inv = class.inverted();
            println!(
                "{:<8} [{:<18} {:>5}  {:02x?}",
                format!("^{}", name),
                format!("{}]", inv),
                inv.count_elements(),
                inv.boundaries()
            );
        }
    }

    // A rune set straddling the ASCII boundary, split into its ASCII and
    // non-ASCII halves.
    let mut greek_or_word = RuneSet::new();
    for (lo, hi) in classes.iter().find(|(n, _)| *n == "word").unwrap().1.ranges() {
        greek_or_word.insert_range(lo as u32, hi as u32)?;
    }
    greek_or_word.insert_range(0x391, 0x3c9)?;

    println!();
    println!("rune set:  [{}]", greek_or_word);
    let (ascii_half, rest) = greek_or_word.split();
    println!("  ascii:   [{}]", ascii_half);
    println!("  rest:    [{}]", rest);

    Ok(())
}
