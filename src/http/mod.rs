mod client;
mod completion;


pub use client::build_client;
pub use completion::{WorkItem, completions_url, execute_completion};
