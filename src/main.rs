//! timelog-reorder main entrypoint.

use timelog_reorder::run;
use timelog_reorder::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
