//! Cosmos Boulders entry point
//!
//! Headless driver: runs a session with a scripted pilot and logs the HUD.
//! Usage: `cosmos-boulders [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use cosmos_boulders::{Hud, Session, SessionAction, Settings};

    env_logger::init();
    log::info!("Cosmos Boulders (headless) starting...");

    let path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(path.as_deref());

    let mut session = Session::new(settings.seed);
    for _ in 0..settings.coins {
        session = session.apply(SessionAction::CoinInserted);
    }

    let mut last_hud = Hud::from_game(session.snapshot());
    for frame in 0..settings.frames {
        session = session.apply(SessionAction::Frame(pilot::controls_for(frame)));

        let hud = Hud::from_game(session.snapshot());
        let report_due = settings.report_every > 0 && frame % settings.report_every == 0;
        if report_due || hud.banner != last_hud.banner {
            log::info!("[frame {frame}] {hud}");
        }
        last_hud = hud;
    }

    println!("{last_hud}");

    if settings.dump_snapshot {
        match serde_json::to_string_pretty(session.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("Failed to serialize snapshot: {err}"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Rendering and input live in the host page; nothing to run here
}

/// Scripted control pattern for the headless driver
#[cfg(not(target_arch = "wasm32"))]
mod pilot {
    use cosmos_boulders::sim::ControlLines;

    /// Frames per full script cycle
    const CYCLE: u32 = 600;

    pub fn controls_for(frame: u32) -> ControlLines {
        let t = frame % CYCLE;
        ControlLines {
            // Tap start at the top of each cycle; the release begins a game
            start: t < 5,
            // Sweep back and forth
            left: (t / 90) % 3 == 1,
            right: (t / 90) % 3 == 2,
            thrust: (t / 45) % 4 == 3,
            // Short taps so every one is a fresh press
            fire: t >= 20 && t % 12 < 2,
        }
    }

}
