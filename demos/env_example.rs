// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generates a `.env.example` template covering several preset schemas.
//!
//! To run this example:
//! ```bash
//! cargo run --example env_example
//! cat .env.example
//! ```

use envschema::prelude::*;
use envschema::service::{presets, write_env_example};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let postgresql = ConfigLoader::new(presets::postgresql());
    let redis = ConfigLoader::new(presets::redis());
    let web = ConfigLoader::new(presets::web());

    write_env_example(".env.example", &[&postgresql, &redis, &web])?;

    println!("Wrote .env.example with the following sections:\n");
    for loader in [&postgresql, &redis, &web] {
        print!("{}", loader.env_example());
        println!();
    }

    Ok(())
}
