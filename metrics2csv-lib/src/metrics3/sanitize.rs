use regex::Regex;
use std::sync::LazyLock;

static NAMESPACE_DECL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"xmlns="[^"]*""#).expect("invalid regex"));

/// Entity fragments that show up in known-malformed reports and would otherwise stop the parser.
const MALFORMED_ENTITY_FRAGMENTS: [&str; 2] = [r"\&lt", "&gt"];

/// Rewrites raw report text so it parses cleanly and can never leak a `;` into the CSV output.
///
/// The steps run in a fixed order, each over the whole text:
/// 1. drop every default namespace declaration (`xmlns="..."`)
/// 2. drop every `;`, wherever it appears
/// 3. drop the known malformed entity fragments
///
/// Semicolons are removed before the entity fragments, so an input `&gt;` ends up fully removed.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    let mut text = NAMESPACE_DECL_REGEX.replace_all(raw, "").replace(';', "");

    for fragment in MALFORMED_ENTITY_FRAGMENTS {
        text = text.replace(fragment, "");
    }

    text
}
