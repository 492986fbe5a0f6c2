use elastic::query::{POST_TAG, PRE_TAG};

use super::Snippet;

/// Extracts match spans from a highlight fragment. Offsets are character
/// positions in the fragment with the markers removed; the running
/// `prev_end` carries the correction across repeated matches. A start
/// marker without a matching end marker terminates the scan.
pub fn match_offsets(fragment: &str) -> Vec<Snippet> {
    let mut snippets = Vec::new();
    let mut rest = fragment;
    let mut prev_end = 0usize;

    loop {
        let Some(pre) = rest.find(PRE_TAG) else { break };
        let after = &rest[pre + PRE_TAG.len()..];
        let Some(post) = after.find(POST_TAG) else { break };

        let start = prev_end + rest[..pre].chars().count();
        let end = start + after[..post].chars().count();
        snippets.push(Snippet { start, end });

        prev_end = end;
        rest = &after[post + POST_TAG.len()..];
    }

    snippets
}
