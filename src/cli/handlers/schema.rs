use anyhow::Result;

use crate::graphql;

/// Print the SDL. Independent of config, so a bad upstream URL can't break it.
pub fn handle_schema() -> Result<()> {
    print!("{}", graphql::sdl());
    Ok(())
}
