//! Renders a symbol to the terminal as two-character-wide ASCII blocks,
//! with the conventional 4-module quiet zone border. Demo-only: the crate's
//! public API never renders, since that's explicitly a caller's job.

use qrgen::{encode, EcLevel};

fn main() {
    let text = std::env::args().nth(1).unwrap_or_else(|| "HELLO WORLD".to_string());
    let symbol = encode(None, EcLevel::Medium, &text).expect("message fits some version");
    let matrix = symbol.matrix();
    let size = matrix.size();
    const QUIET_ZONE: i32 = 4;

    for y in -QUIET_ZONE..size + QUIET_ZONE {
        let mut line = String::with_capacity((size + QUIET_ZONE * 2) as usize * 2);
        for x in -QUIET_ZONE..size + QUIET_ZONE {
            let dark = (0..size).contains(&x) && (0..size).contains(&y) && matrix.is_dark(x, y);
            line.push_str(if dark { "██" } else { "  " });
        }
        println!("{line}");
    }
    eprintln!(
        "version {}, ec level {:?}, mask {}",
        symbol.version().value(),
        symbol.ec_level(),
        symbol.mask().value()
    );
}
