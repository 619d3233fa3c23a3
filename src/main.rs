//! rmarker main entrypoint.

use rmarker::run;
use rmarker::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
