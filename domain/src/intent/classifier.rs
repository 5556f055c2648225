//! Keyword classifier for free-text commands.
//!
//! Rules are checked in a fixed order and the first match wins. Keyword
//! presence is case-insensitive; every split happens at the first occurrence
//! of its delimiter so later occurrences stay inside the captured field.
//!
//! | order | keyword(s)        | action   | captured fields            |
//! |-------|-------------------|----------|----------------------------|
//! | 1     | `send` and `to`   | message  | `message`, `username`      |
//! | 2     | `post` or `create`| post     | `caption`, `image_prompt`  |
//! | 3     | `like`            | like     | `post_url`                 |
//! | 4     | `comment` + `on`  | comment  | `comment_text`, `post_url` |
//! | 5     | `follow`          | follow   | `username`                 |
//! | 6     | `unfollow`        | unfollow | `username`                 |
//!
//! `follow` is a substring of `unfollow`, so rule 5 only fires when the
//! input does not contain `unfollow`.

use super::entities::Intent;

/// Turn one operator sentence into an [`Intent`].
///
/// Returns `None` when no rule matches, and also when a rule matches its
/// keyword but a field it needs comes out empty (e.g. `"comment nice"` with
/// no `on`). A matched-but-malformed command never falls through to a later
/// rule.
pub fn classify(text: &str) -> Option<Intent> {
    let lowered = text.to_ascii_lowercase();
    let has = |keyword: &str| lowered.contains(keyword);

    if has("send") && has("to") {
        return classify_message(text, &lowered);
    }

    if has("post") || has("create") {
        let sentence = non_empty(text)?;
        return Some(Intent::post(sentence, sentence));
    }

    if has("like") {
        let (_, rest) = split_once_ignore_case(text, &lowered, "like")?;
        return Some(Intent::like(non_empty(rest)?));
    }

    if has("comment") {
        return classify_comment(text, &lowered);
    }

    if has("follow") {
        if has("unfollow") {
            let (_, rest) = split_once_ignore_case(text, &lowered, "unfollow")?;
            return Some(Intent::unfollow(non_empty(rest)?));
        }
        let (_, rest) = split_once_ignore_case(text, &lowered, "follow")?;
        return Some(Intent::follow(non_empty(rest)?));
    }

    None
}

fn classify_message(text: &str, lowered: &str) -> Option<Intent> {
    let (left, right) = split_once_ignore_case(text, lowered, "to")?;
    let message = remove_first_ignore_case(left, "send");
    let message = non_empty(&message)?;
    let username = non_empty(right)?;
    Some(Intent::message(username, message))
}

fn classify_comment(text: &str, lowered: &str) -> Option<Intent> {
    let (_, rest) = split_once_ignore_case(text, lowered, "comment")?;
    let rest_lowered = rest.to_ascii_lowercase();
    let (comment_text, post_url) = split_once_ignore_case(rest, &rest_lowered, "on")?;
    Some(Intent::comment(non_empty(comment_text)?, non_empty(post_url)?))
}

/// Split `text` around the first case-insensitive occurrence of `keyword`.
///
/// `lowered` must be `text.to_ascii_lowercase()`; ASCII lowercasing keeps
/// byte offsets identical, so positions found in `lowered` index `text`.
fn split_once_ignore_case<'a>(
    text: &'a str,
    lowered: &str,
    keyword: &str,
) -> Option<(&'a str, &'a str)> {
    let at = lowered.find(keyword)?;
    Some((&text[..at], &text[at + keyword.len()..]))
}

fn remove_first_ignore_case(text: &str, keyword: &str) -> String {
    let lowered = text.to_ascii_lowercase();
    match split_once_ignore_case(text, &lowered, keyword) {
        Some((before, after)) => format!("{}{}", before, after),
        None => text.to_string(),
    }
}

fn non_empty(field: &str) -> Option<&str> {
    let trimmed = field.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::action::Action;
    use crate::intent::entities::params;

    fn param<'a>(intent: &'a Intent, key: &str) -> &'a str {
        intent.param(key).unwrap()
    }

    // ==================== message ====================

    #[test]
    fn test_message_command() {
        let intent = classify("send hello there to alice").unwrap();
        assert_eq!(intent.action, Action::Message);
        assert_eq!(param(&intent, params::USERNAME), "alice");
        assert_eq!(param(&intent, params::MESSAGE), "hello there");
    }

    #[test]
    fn test_message_keyword_is_case_insensitive() {
        let intent = classify("Send Good Morning TO carol").unwrap();
        assert_eq!(intent.action, Action::Message);
        assert_eq!(param(&intent, params::MESSAGE), "Good Morning");
        assert_eq!(param(&intent, params::USERNAME), "carol");
    }

    #[test]
    fn test_message_splits_on_first_to_only() {
        let intent = classify("send hi to dave to eve").unwrap();
        assert_eq!(param(&intent, params::MESSAGE), "hi");
        assert_eq!(param(&intent, params::USERNAME), "dave to eve");
    }

    #[test]
    fn test_message_without_recipient_is_rejected() {
        assert!(classify("send hello to   ").is_none());
    }

    #[test]
    fn test_send_without_to_is_not_a_message() {
        assert!(classify("send hello").is_none());
    }

    // ==================== post ====================

    #[test]
    fn test_post_uses_full_sentence_for_both_fields() {
        let intent = classify("  create a post about autumn leaves ").unwrap();
        assert_eq!(intent.action, Action::Post);
        assert_eq!(
            param(&intent, params::CAPTION),
            "create a post about autumn leaves"
        );
        assert_eq!(
            param(&intent, params::IMAGE_PROMPT),
            param(&intent, params::CAPTION)
        );
    }

    #[test]
    fn test_post_takes_priority_over_like() {
        let intent = classify("post something people like").unwrap();
        assert_eq!(intent.action, Action::Post);
    }

    // ==================== like ====================

    #[test]
    fn test_like_command() {
        let intent = classify("like https://example.com/p/123").unwrap();
        assert_eq!(intent.action, Action::Like);
        assert_eq!(param(&intent, params::POST_URL), "https://example.com/p/123");
    }

    #[test]
    fn test_like_without_url_is_rejected() {
        assert!(classify("like").is_none());
    }

    // ==================== comment ====================

    #[test]
    fn test_comment_command() {
        let intent = classify("comment nice shot on https://example.com/p/123").unwrap();
        assert_eq!(intent.action, Action::Comment);
        assert_eq!(param(&intent, params::COMMENT_TEXT), "nice shot");
        assert_eq!(param(&intent, params::POST_URL), "https://example.com/p/123");
    }

    #[test]
    fn test_comment_without_on_is_rejected() {
        assert!(classify("comment nice shot").is_none());
    }

    // ==================== follow / unfollow ====================

    #[test]
    fn test_follow_command() {
        let intent = classify("follow bob").unwrap();
        assert_eq!(intent.action, Action::Follow);
        assert_eq!(param(&intent, params::USERNAME), "bob");
    }

    #[test]
    fn test_unfollow_is_not_misread_as_follow() {
        let intent = classify("unfollow bob").unwrap();
        assert_eq!(intent.action, Action::Unfollow);
        assert_eq!(param(&intent, params::USERNAME), "bob");
    }

    #[test]
    fn test_unfollow_uppercase() {
        let intent = classify("UNFOLLOW Bob").unwrap();
        assert_eq!(intent.action, Action::Unfollow);
        assert_eq!(param(&intent, params::USERNAME), "Bob");
    }

    // ==================== no match ====================

    #[test]
    fn test_unrecognized_command() {
        assert!(classify("what's the weather").is_none());
        assert!(classify("").is_none());
    }

    #[test]
    fn test_non_ascii_input_does_not_panic() {
        let intent = classify("like ☀️ https://example.com/p/ü").unwrap();
        assert_eq!(param(&intent, params::POST_URL), "☀️ https://example.com/p/ü");
    }
}
