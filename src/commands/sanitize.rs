//! `notegather sanitize` - rewrite wiki references for output

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::command::CommandContext;
use notegather_core::error::Result;
use notegather_core::sanitize::ReferenceSanitizer;

pub fn execute(ctx: &CommandContext, text: &str, mappings: &[(String, String)]) -> Result<()> {
    let mut sanitizer = ReferenceSanitizer::new();
    for (title, id) in mappings {
        sanitizer.register(title.as_str(), id.as_str());
    }
    let rewritten = sanitizer.rewrite(text);

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = json!({
                "text": rewritten,
                "mappings": sanitizer.len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => println!("{}", rewritten),
    }

    Ok(())
}
