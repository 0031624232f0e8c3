// src/render/wrap.rs
//! Fixed-width word wrapping, counted in chars.
//!
//! Whitespace runs collapse to one space; words longer than the width are
//! hard-broken. Blank input yields no lines.

use crate::config::consts::RANGE_SEPARATORS;

pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut cur = s!();
    let mut cur_len = 0usize;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        // Fits on the current line (with a joining space)?
        let needed = if cur_len == 0 { word.len() } else { cur_len + 1 + word.len() };
        if needed <= width {
            if cur_len > 0 {
                cur.push(' ');
            }
            cur.extend(word.iter());
            cur_len = needed;
            continue;
        }

        if cur_len > 0 {
            lines.push(std::mem::take(&mut cur));
            cur_len = 0;
        }

        while word.len() > width {
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        cur_len = word.len();
        cur = word.into_iter().collect();
    }

    if cur_len > 0 {
        lines.push(cur);
    }
    lines
}

/// Split a validity window at the first range separator, keeping the
/// separator word on the second half: "a bis b" → ["a", "bis b"].
pub fn split_range(timestamp: &str) -> Vec<&str> {
    let hit = RANGE_SEPARATORS
        .iter()
        .filter_map(|sep| timestamp.find(sep).map(|at| (at, sep)))
        .min_by_key(|(at, _)| *at);

    match hit {
        Some((at, _)) => vec![timestamp[..at].trim_end(), timestamp[at..].trim_start()],
        None => vec![timestamp],
    }
}

/// Wrap a timestamp cell: range halves go on their own lines, then each half wraps.
pub fn wrap_timestamp(timestamp: &str, width: usize) -> Vec<String> {
    split_range(timestamp)
        .into_iter()
        .flat_map(|part| wrap(part, width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap("Replacement bus service between Ostkreuz and Erkner", 20),
            vec!["Replacement bus", "service between", "Ostkreuz and Erkner"]
        );
    }

    #[test]
    fn exact_width_stays_on_one_line() {
        assert_eq!(wrap("abcde fghij", 11), vec!["abcde fghij"]);
        assert_eq!(wrap("abcde fghij", 10), vec!["abcde", "fghij"]);
    }

    #[test]
    fn long_words_are_broken() {
        assert_eq!(
            wrap("Bauarbeitenankündigung", 10),
            vec!["Bauarbeite", "nankündigu", "ng"]
        );
        assert_eq!(wrap("ab Bauarbeiten", 5), vec!["ab", "Bauar", "beite", "n"]);
    }

    #[test]
    fn blank_gives_nothing() {
        assert!(wrap("", 20).is_empty());
        assert!(wrap("  \n\t ", 20).is_empty());
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(wrap("S1,\n   S2", 20), vec!["S1, S2"]);
    }

    #[test]
    fn range_split_keeps_separator_word() {
        assert_eq!(split_range("Mo 06:00 bis Di 09:00"), vec!["Mo 06:00", "bis Di 09:00"]);
        assert_eq!(split_range("06:00 to 09:00"), vec!["06:00", "to 09:00"]);
        assert_eq!(split_range("all day"), vec!["all day"]);
    }

    #[test]
    fn timestamp_halves_wrap_independently() {
        assert_eq!(
            wrap_timestamp("Fri, 14 Nov 22:00 to Mon, 17 Nov 1:30", 20),
            vec!["Fri, 14 Nov 22:00", "to Mon, 17 Nov 1:30"]
        );
    }
}
