//! stafftime main entrypoint.

use stafftime::run;
use stafftime::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
