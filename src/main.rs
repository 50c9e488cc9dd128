mod args;
mod bench;
mod config;
mod entry;
mod error;
mod http;
mod metrics;
mod sinks;
mod system;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
