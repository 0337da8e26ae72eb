//! ctxtree main entrypoint.

use ctxtree::run;
use ctxtree::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
