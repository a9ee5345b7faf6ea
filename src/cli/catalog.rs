use anyhow::{bail, Result};

use crate::catalog::{self, TechnologyCategory, CATALOG};

/// Human-readable listing of the technology catalog.
pub fn render(catalog: &[TechnologyCategory], verbose: bool) -> String {
    let mut out = String::new();
    for category in catalog {
        out.push_str(&format!("{} ({})\n", category.display_name, category.key));
        out.push_str(&format!("  {}\n", category.description));
        if verbose {
            for facet in category.facets {
                out.push_str(&format!("    - {}\n", facet));
            }
        }
    }
    out
}

/// Print the whole catalog, or every facet of the category named by `key`.
pub fn run(key: Option<&str>, verbose: bool) -> Result<()> {
    let out = match key {
        Some(key) => match catalog::find(key) {
            Some(category) => render(std::slice::from_ref(category), true),
            None => bail!("Unknown technology category: {}", key),
        },
        None => render(CATALOG, verbose),
    };
    print!("{}", out);
    Ok(())
}
