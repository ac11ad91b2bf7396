use crate::graphql::build_schema;
use crate::store::Library;
use anyhow::Result;

use super::CommandContext;

pub fn handle_schema(_ctx: CommandContext) -> Result<()> {
    let schema = build_schema(Library::new());
    println!("{}", schema.sdl());
    Ok(())
}
