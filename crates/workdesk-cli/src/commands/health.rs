//! Backend health probe.

use super::{api_client, block_on, print_json};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let client = api_client()?;
    let health = block_on(client.health())??;
    print_json(&health)
}
