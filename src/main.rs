//! testnudge main entrypoint.

use testnudge::run;
use testnudge::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
