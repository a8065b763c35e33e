//! Walk the story logic without a TUI

use paradox_core::{DataPanel, IntroPlayer, Pager, INTRO_SEQUENCE};

fn main() {
    println!("=== Story walkthrough ===\n");

    walk_intro();
    walk_pages();

    println!("\n=== Walkthrough complete! ===");
}

fn walk_intro() {
    println!("1. Cycling the intro sequence...");

    let mut player = IntroPlayer::new();
    for round in 0..4 {
        let record = player.current();
        println!("   clip {} - {} ({})", player.cursor() + 1, record.label, record.src);
        player.playback_finished();
        let expected = (round + 1) % INTRO_SEQUENCE.len();
        let status = if player.cursor() == expected { "OK" } else { "FAIL" };
        println!("      {status} - cursor cycled to {}", player.cursor());
    }
}

fn walk_pages() {
    println!("\n2. Turning through every page...");

    let mut pager = Pager::new();
    loop {
        let record = pager.current();
        let panel = match DataPanel::for_record(record) {
            DataPanel::Chart => "chart".to_string(),
            DataPanel::Sensor(sensor) => format!("sensor: {}", sensor.kind),
            DataPanel::Empty => "empty".to_string(),
        };
        println!(
            "   PG {:02}/{:02}  {:<22} [{}]",
            pager.page(),
            pager.total(),
            record.slug,
            panel
        );
        if !pager.advance() {
            break;
        }
    }

    let clamped = !pager.advance();
    let status = if clamped && pager.page() == pager.total() { "OK" } else { "FAIL" };
    println!("   {status} - advance clamps at the last page");
}
