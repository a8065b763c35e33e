//! 3I/ATLAS Paradox interactive story TUI.
//!
//! A page-by-page terminal presentation of the 3I/ATLAS investigation,
//! gated behind a looping intro sequence.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a line-oriented interface suitable for
//! scripted walkthroughs:
//!
//! ```bash
//! printf 'enter\nnext\nquit\n' | cargo run -p paradox -- --headless
//! ```

mod app;
mod events;
mod headless;
mod ui;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use paradox_core::HeroArt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::Duration;

use app::App;
use events::{handle_event, EventResult};
use ui::render::render;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--headless") {
        return headless::run_headless().map_err(|e| e.into());
    }

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    // Hero artwork: load failure silently falls back, never aborts startup.
    let hero_art = HeroArt::load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, App::new(hero_art));

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    loop {
        // Render
        terminal.draw(|f| render(f, &app))?;

        // Poll for events with timeout for animations
        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;
            match handle_event(&mut app, ev) {
                EventResult::Quit => return Ok(()),
                EventResult::NeedsRedraw | EventResult::Continue => {}
            }
        } else {
            // Tick animations and simulated intro playback
            app.tick();
        }
    }
}

fn print_help() {
    println!("3I/ATLAS Paradox - interactive story presentation");
    println!();
    println!("USAGE:");
    println!("  paradox [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help       Show this help message");
    println!("  --headless       Run in headless mode (text-only, no TUI)");
    println!();
    println!("KEYS (TUI mode):");
    println!("  Enter            Enter the experience (from the intro)");
    println!("  s                Skip the current intro clip");
    println!("  l/→/Space        Next page");
    println!("  h/←              Previous page");
    println!("  i                Replay the intro sequence");
    println!("  ?                Help overlay");
    println!("  q                Quit");
    println!();
    println!("EXAMPLES:");
    println!("  paradox                                  # Interactive TUI mode");
    println!("  printf 'enter\\nnext\\nquit\\n' | paradox --headless");
}
