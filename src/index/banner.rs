//! "Do not edit" banners for generated pages

use std::path::Path;

use super::source::{Candidate, Location};

/// Line every generated banner carries
pub const WARNING_LINE: &str = "WARNING: DO NOT EDIT THIS FILE";

const WIDTH: usize = 110;

/// Where the user should go to change a generated page
#[derive(Debug, Clone, Copy)]
pub enum Provenance<'a> {
    /// Copied from a file, given relative to the project directory
    SourceFile(&'a Path),
    /// Taken from `indexPageContent` in `config_file`
    Config {
        config_file: &'a str,
        ig_data_name: &'a str,
    },
}

/// Prefix `content` with the banner for `candidate`
pub fn wrap(candidate: Candidate, provenance: Provenance<'_>, content: &[u8]) -> Vec<u8> {
    let banner = render(&candidate.file_name(), provenance);
    let mut out = Vec::with_capacity(banner.len() + content.len());
    out.extend_from_slice(banner.as_bytes());
    out.extend_from_slice(content);
    out
}

/// Whether `bytes` start with a banner written by [`wrap`]
pub fn is_generated(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(2048)];
    let head = String::from_utf8_lossy(head);
    head.starts_with("<!-- index.") && head.contains(WARNING_LINE)
}

fn render(file_name: &str, provenance: Provenance<'_>) -> String {
    let rule = "*".repeat(WIDTH + 4);
    let mut lines = vec![
        format!("<!-- {} {{% comment %}}", file_name),
        rule.clone(),
        format!("* {:^w$} *", WARNING_LINE, w = WIDTH),
        boxed(""),
        boxed(&format!(
            "This file is generated by {}. Any edits you make to this file will be overwritten.",
            env!("CARGO_PKG_NAME")
        )),
        boxed(""),
    ];

    match provenance {
        Provenance::SourceFile(path) => {
            lines.push(boxed(
                "To change the contents of this file, edit the original source file at:",
            ));
            lines.push(boxed(&path.display().to_string()));
        }
        Provenance::Config {
            config_file,
            ig_data_name,
        } => {
            let folder = |location: Location| {
                Path::new(ig_data_name)
                    .join(location.relative_dir())
                    .display()
                    .to_string()
            };
            lines.push(boxed(&format!(
                "To change the contents of this file, edit the \"indexPageContent\" attribute in the tank {} file",
                config_file
            )));
            lines.push(boxed(&format!(
                "or provide your own index file in the {} or {} folder.",
                folder(Location::PageContent),
                folder(Location::Pages)
            )));
        }
    }

    lines.push(rule);
    lines.push("{% endcomment %} -->".to_string());

    let mut banner = lines.join("\n");
    banner.push('\n');
    banner
}

/// Pad `text` into a box row. Longer text is kept whole and overruns the
/// right edge, so paths stay copyable.
fn boxed(text: &str) -> String {
    format!("* {:<w$} *", text, w = WIDTH)
}
