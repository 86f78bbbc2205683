use wordhord_core::term::Term;

/// Plain-terminal rendition of a full entry. Proper styling belongs to a
/// real presentation layer; this only strips tags.
pub fn entry(term: &Term) -> String {
    let mut out = format!("{} (#{})\n", term.title, term.nid);
    if let Some(mod_e) = &term.mod_e {
        out.push_str(&format!("modern: {mod_e}\n"));
    }
    out.push_str(strip_tags(&term.defn_html).trim());
    if let Some(conj) = &term.conj_html {
        out.push('\n');
        out.push_str(strip_tags(conj).trim());
    }
    out
}

/// One search result line: rank, score, id, headword.
pub fn result_line(rank: usize, term: &Term) -> String {
    format!(
        "{:>3}. [{:>6.3}] {:>6}  {}",
        rank, term.score, term.nid, term.title
    )
}

fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::{entry, strip_tags};
    use wordhord_core::term::Term;

    #[test]
    fn strips_tags_but_keeps_text() {
        assert_eq!(
            strip_tags("<div><B>helpan</B> to help.</div>"),
            "helpan to help."
        );
    }

    #[test]
    fn entry_includes_title_id_and_gloss() {
        let term = Term {
            title: "helpan".to_string(),
            defn_html: "<div>to help</div>".to_string(),
            conj_html: None,
            mod_e: Some("to help".to_string()),
            nid: 7,
            score: 0.0,
        };
        let text = entry(&term);
        assert!(text.contains("helpan (#7)"));
        assert!(text.contains("modern: to help"));
        assert!(text.contains("to help"));
    }
}
