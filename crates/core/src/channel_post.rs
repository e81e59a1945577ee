//! Classification of Telegram channel posts into news drafts.
//!
//! Editors mark a channel post for the site by including the publish
//! hashtag anywhere in its text. The first non-empty line becomes the
//! news title (capped), the remaining lines the description. Everything
//! here is pure string processing; downloading and persisting happen in
//! `portal-ingest`.

/// Hashtag that marks a channel post for mirroring.
pub const PUBLISH_TAG: &str = "#на_сайт";

/// Maximum title length in characters.
pub const TITLE_MAX: usize = 100;

/// Title used when a post contains nothing but the hashtag.
const UNTITLED: &str = "Без заголовка";

/// Title and description extracted from a channel post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsDraft {
    pub title: String,
    pub description: String,
}

/// Join a message's `text` and `caption` the way the channel sends them:
/// photo posts carry their text in the caption.
pub fn combined_text(text: Option<&str>, caption: Option<&str>) -> String {
    let mut parts = Vec::new();
    if let Some(text) = text {
        parts.push(text);
    }
    if let Some(caption) = caption {
        parts.push(caption);
    }
    parts.join("\n").trim().to_string()
}

/// Extract a news draft from raw post text, or `None` when the post does
/// not carry the publish hashtag.
pub fn extract_draft(raw: &str) -> Option<NewsDraft> {
    if !raw.to_lowercase().contains(PUBLISH_TAG) {
        return None;
    }

    let cleaned = strip_tag(raw);

    let mut lines = cleaned
        .split(['\n', '\r', '\u{2028}', '\u{2029}'])
        .map(str::trim)
        .filter(|line| !line.is_empty());

    let title = match lines.next() {
        Some(first) => first.chars().take(TITLE_MAX).collect(),
        None => UNTITLED.to_string(),
    };
    let description = lines.collect::<Vec<_>>().join("\n");

    Some(NewsDraft { title, description })
}

/// Remove every case-insensitive occurrence of the publish hashtag.
fn strip_tag(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    loop {
        let lower = rest.to_lowercase();
        match lower.find(PUBLISH_TAG) {
            // Lowercasing preserves byte offsets for the alphabets the
            // channel uses; bail out to a plain copy if it ever does not.
            Some(idx)
                if rest.is_char_boundary(idx)
                    && rest.is_char_boundary(idx + PUBLISH_TAG.len()) =>
            {
                out.push_str(&rest[..idx]);
                rest = &rest[idx + PUBLISH_TAG.len()..];
            }
            _ => {
                out.push_str(rest);
                break;
            }
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_without_tag_is_ignored() {
        assert_eq!(extract_draft("Просто сообщение в канале"), None);
    }

    #[test]
    fn first_line_becomes_title_rest_becomes_description() {
        let draft =
            extract_draft("#на_сайт\nНовый центр открыт\n\nПодробности по ссылке.\nЗвоните!")
                .unwrap();
        assert_eq!(draft.title, "Новый центр открыт");
        assert_eq!(draft.description, "Подробности по ссылке.\nЗвоните!");
    }

    #[test]
    fn tag_is_matched_and_stripped_case_insensitively() {
        let draft = extract_draft("Заголовок #НА_САЙТ\nтекст").unwrap();
        assert_eq!(draft.title, "Заголовок");
        assert_eq!(draft.description, "текст");
    }

    #[test]
    fn title_is_capped() {
        let long = "а".repeat(150);
        let draft = extract_draft(&format!("#на_сайт\n{long}")).unwrap();
        assert_eq!(draft.title.chars().count(), TITLE_MAX);
    }

    #[test]
    fn tag_only_post_gets_fallback_title() {
        let draft = extract_draft("#на_сайт").unwrap();
        assert_eq!(draft.title, "Без заголовка");
        assert_eq!(draft.description, "");
    }

    #[test]
    fn caption_joins_text() {
        assert_eq!(combined_text(Some("a"), Some("b")), "a\nb");
        assert_eq!(combined_text(None, Some("b")), "b");
        assert_eq!(combined_text(None, None), "");
    }
}
