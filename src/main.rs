use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use jumper::constants::FRAME_INTERVAL_MS;
use jumper::game_logic::{primary_action, tick, InputOutcome};
use jumper::game_state::GameSession;
use jumper::{build_info, ui};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "jumper {} ({} {})",
                    env!("CARGO_PKG_VERSION"),
                    build_info::BUILD_COMMIT,
                    build_info::BUILD_DATE
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Jumper - a one-button endless runner for the terminal\n");
                println!("Usage: jumper\n");
                println!("Keys:");
                println!("  Space/Up/Enter  Jump (and start / restart)");
                println!("  Q or Esc        Quit");
                println!("\nOptions:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'jumper --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut session = GameSession::new();
    let mut rng = rand::thread_rng();
    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);
    let mut last_tick = Instant::now();

    loop {
        // Input
        let budget = frame_interval.saturating_sub(last_tick.elapsed());
        if event::poll(budget)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(());
                        }
                        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => {
                            if primary_action(&mut session) == InputOutcome::Restart {
                                // Full restart: fresh session, fresh score
                                session = GameSession::new();
                            }
                        }
                        _ => {}
                    }
                }
            }
        }

        // Advance and draw once per frame
        if last_tick.elapsed() >= frame_interval {
            let dt = last_tick.elapsed().as_secs_f64();
            last_tick = Instant::now();
            tick(&mut session, dt, &mut rng);

            terminal.draw(|frame| {
                let area = frame.size();
                ui::render(frame, area, &session);
            })?;
        }
    }
}
