//! Pattern definitions for the five reference forms

use crate::error::Result;
use crate::settings::TrustedDomains;
use crate::types::ReferenceForm;
use regex::Regex;

const KEY_PHRASES: &str = "depends on|blocked by";
const ITEM_TYPES: &str = "issues|pull";
const OWNER: &str = "[-_0-9A-Za-z]+";
const REPO: &str = "[-._a-z0-9]+";
const NUMBER: &str = "[0-9]+";

/// One compiled reference form
pub(super) struct Pattern {
    pub(super) form: ReferenceForm,
    pub(super) regex: Regex,
}

/// Compile all forms, in the order their matches are reported
///
/// Every pattern exposes `number`; all but [`ReferenceForm::Number`] also
/// expose `owner` and `repo`.
pub(super) fn build_patterns(domains: &TrustedDomains) -> Result<Vec<Pattern>> {
    let hosts = domains
        .as_slice()
        .iter()
        .map(|d| regex::escape(d.as_str()))
        .collect::<Vec<_>>()
        .join("|");

    let qualified = format!("(?P<owner>{OWNER})/(?P<repo>{REPO})");
    let path = format!("{qualified}/(?:{ITEM_TYPES})/(?P<number>{NUMBER})");
    let url = format!("https?://(?:{hosts})/{path}");

    let sources = [
        (ReferenceForm::Number, format!("#(?P<number>{NUMBER})")),
        (
            ReferenceForm::Shorthand,
            format!("{qualified}#(?P<number>{NUMBER})"),
        ),
        (ReferenceForm::PartialPath, path),
        (ReferenceForm::FullUrl, url.clone()),
        (ReferenceForm::Markdown, format!(r"\[.*\]\({url}\)")),
    ];

    sources
        .into_iter()
        .map(|(form, tail)| {
            let regex = Regex::new(&format!("(?i)(?:{KEY_PHRASES}):? {tail}"))?;
            Ok(Pattern { form, regex })
        })
        .collect()
}
