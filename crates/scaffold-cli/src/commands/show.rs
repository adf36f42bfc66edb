use anyhow::Result;

use crate::LayoutSource;

/// Print the selected layout as pretty JSON.
///
/// The output is plain JSON on stdout so it can be redirected into a file and
/// edited into a custom `--layout`.
pub fn run(source: &LayoutSource) -> Result<()> {
    let selected = super::resolve_layout(source)?;
    println!("{}", selected.layout.to_json_pretty()?);
    Ok(())
}
