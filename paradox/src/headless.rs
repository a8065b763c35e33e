//! Headless mode for the story presentation.
//!
//! A line-oriented interface for running the presentation without a
//! terminal UI, suitable for scripted walkthroughs and automated checks.

use std::io::{self, BufRead};

use paradox_core::{
    DataPanel, IntroPlayer, NarrativeRecord, Pager, NARRATIVE_CATALOG, PARADOX_DATA,
};

/// Run the presentation in headless mode.
///
/// Commands, one per line: `enter`, `next`/`n`, `prev`/`p`, `show`,
/// `skip`, `replay`, `status`, `catalog`, `help`, `quit`.
pub fn run_headless() -> io::Result<()> {
    let mut pager = Pager::new();
    let mut intro = IntroPlayer::new();
    let mut intro_visible = true;

    println!("=== 3i ATLAS PARADOX (headless) ===");
    print_intro(&intro);
    print_commands();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error reading input: {e}");
                break;
            }
        };

        let command = line.trim();
        if command.is_empty() {
            continue;
        }

        match command {
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "enter" => {
                if intro_visible {
                    intro_visible = false;
                    print_page(&pager);
                } else {
                    println!("[STATUS] already inside the experience");
                }
            }
            "replay" => {
                intro.reset();
                intro_visible = true;
                print_intro(&intro);
            }
            "skip" => {
                if intro_visible {
                    intro.skip();
                    print_intro(&intro);
                } else {
                    println!("[STATUS] no intro playing; use 'replay'");
                }
            }
            "next" | "n" => {
                if intro_visible {
                    println!("[STATUS] still in the intro; use 'enter' first");
                } else if pager.advance() {
                    print_page(&pager);
                } else {
                    println!("[STATUS] already at the last page");
                }
            }
            "prev" | "p" => {
                if intro_visible {
                    println!("[STATUS] still in the intro; use 'enter' first");
                } else if pager.retreat() {
                    print_page(&pager);
                } else {
                    println!("[STATUS] already at the first page");
                }
            }
            "show" => {
                if intro_visible {
                    print_intro(&intro);
                } else {
                    print_page(&pager);
                }
            }
            "status" => {
                println!("[STATUS]");
                println!("  Page: {}/{}", pager.page(), pager.total());
                println!("  Slug: {}", pager.current().slug);
                println!("  Intro visible: {intro_visible}");
                println!("  Intro cursor: {}", intro.cursor());
            }
            "catalog" => match serde_json::to_string_pretty(&*NARRATIVE_CATALOG) {
                Ok(json) => println!("{json}"),
                Err(e) => println!("[ERROR] catalog dump failed: {e}"),
            },
            "help" | "h" => print_commands(),
            other => println!("[ERROR] unknown command: {other}"),
        }
    }

    Ok(())
}

fn print_commands() {
    println!();
    println!("Commands:");
    println!("  enter    - Dismiss the intro and open the first page");
    println!("  next/n   - Turn to the next page");
    println!("  prev/p   - Turn to the previous page");
    println!("  show     - Reprint the current page (or intro)");
    println!("  skip     - Skip to the next intro clip");
    println!("  replay   - Restart the intro sequence");
    println!("  status   - Show cursor state");
    println!("  catalog  - Dump the story content as JSON");
    println!("  quit     - Exit");
    println!();
}

fn print_intro(intro: &IntroPlayer) {
    let record = intro.current();
    println!();
    println!(
        "[INTRO {}/{}] {}",
        intro.cursor() + 1,
        paradox_core::INTRO_SEQUENCE.len(),
        record.label
    );
    println!("  \u{201c}{}\u{201d}", record.quote);
    println!("  ({})", record.src);
}

fn print_page(pager: &Pager) {
    let record = pager.current();
    println!();
    println!(
        "--- PG {:02}/{:02} · {} ---",
        pager.page(),
        pager.total(),
        record.slug
    );
    println!("{}", record.title);
    println!("{}", record.subtitle);
    println!();
    println!("\u{201c}{}\u{201d}", record.narrative);
    print_data_panel(record);
}

fn print_data_panel(record: &NarrativeRecord) {
    match DataPanel::for_record(record) {
        DataPanel::Chart => {
            let caption = record
                .sensor
                .as_ref()
                .and_then(|s| s.display_label())
                .unwrap_or("Figure");
            println!();
            println!("[FIGURE] {caption}");
            for point in PARADOX_DATA {
                println!(
                    "  {:<16} observed {:.1}  predicted {:.1}  band {:.1}-{:.1}",
                    point.time, point.observed, point.predicted, point.lower, point.upper
                );
            }
        }
        DataPanel::Sensor(sensor) => {
            println!();
            println!(
                "[SENSOR] {}: {}",
                sensor.kind,
                sensor.display_value().unwrap_or("—")
            );
        }
        DataPanel::Empty => {}
    }
}
