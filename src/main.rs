//! rTimeline main entrypoint.

use rtimeline::run;
use rtimeline::ui::messages::{error, hint};

fn main() {
    println!();
    if let Err(e) = run() {
        error(&e);
        if e.is_store_corruption() {
            hint("Nothing was changed. Save the damaged file with `rtimeline backup --file <FILE>`,");
            hint("then start over with `rtimeline reset --backup <FILE>` or fix the file by hand.");
        }
        std::process::exit(1);
    }
}
