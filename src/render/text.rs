// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lanedex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanedex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    let len = text_len(text);
    if len <= max_len {
        return text.to_owned();
    }

    if max_len == 1 {
        return "…".to_owned();
    }

    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Greedy word wrap on whitespace. Words longer than `width` are hard-split.
///
/// A `width` of zero disables wrapping. Always yields at least one (possibly empty) line.
pub(crate) fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_owned()];
    }

    let mut lines = Vec::<String>::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let mut word = word;
        loop {
            let word_len = text_len(word);
            let needed = if current_len == 0 { word_len } else { current_len + 1 + word_len };
            if needed <= width {
                if current_len > 0 {
                    current.push(' ');
                }
                current.push_str(word);
                current_len = needed;
                break;
            }

            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
                continue;
            }

            // Word alone exceeds the width.
            let split_at = word.char_indices().nth(width).map_or(word.len(), |(idx, _)| idx);
            lines.push(word[..split_at].to_owned());
            word = &word[split_at..];
            if word.is_empty() {
                break;
            }
        }
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}
