//! Packing rendered lines into size-bounded blocks.

/// Pack `lines` into blocks of at most `limit` characters.
///
/// Lines are expected to carry their own terminator; blocks are plain
/// concatenations, so joining all blocks yields the input text unchanged.
/// A line is never split across blocks unless it alone is longer than
/// `limit`, in which case it is cut at character boundaries into blocks of
/// its own.
pub fn pack_lines<I, S>(lines: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let limit = limit.max(1);
    let mut blocks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in lines {
        let line = line.as_ref();
        let len = line.chars().count();

        if len > limit {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            blocks.extend(split_chars(line, limit).map(str::to_string));
            continue;
        }

        if current_len + len > limit {
            blocks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        current.push_str(line);
        current_len += len;
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

fn split_chars(line: &str, limit: usize) -> impl Iterator<Item = &str> {
    let mut rest = line;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let cut = rest
            .char_indices()
            .nth(limit)
            .map_or(rest.len(), |(i, _)| i);
        let (head, tail) = rest.split_at(cut);
        rest = tail;
        Some(head)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn char_len(s: &str) -> usize {
        s.chars().count()
    }

    #[test]
    fn test_everything_fits_in_one_block() {
        let lines = ["header\n", "1. a\n", "2. b\n"];
        let blocks = pack_lines(lines, 100);
        assert_eq!(blocks, vec!["header\n1. a\n2. b\n".to_string()]);
    }

    #[test]
    fn test_lines_are_never_split() {
        let lines: Vec<String> = std::iter::once("Flight records (40):\n".to_string())
            .chain((1..=40).map(|i| format!("{i}. EVA {i} | TPE → NRT | B777 | 300 pax | 3h\n")))
            .collect();
        let full: String = lines.concat();

        let blocks = pack_lines(&lines, 120);

        assert!(blocks.len() > 1);
        assert!(blocks.iter().all(|b| char_len(b) <= 120));
        assert_eq!(blocks.concat(), full);
        // every block starts at a line boundary
        for block in &blocks {
            assert!(lines.iter().any(|l| block.starts_with(l.as_str())));
            assert!(block.ends_with('\n'));
        }
        assert!(blocks[0].starts_with("Flight records (40):\n"));
    }

    #[test]
    fn test_block_is_closed_exactly_at_limit() {
        let blocks = pack_lines(["aaaa\n", "bbbb\n", "cc\n"], 10);
        assert_eq!(blocks, vec!["aaaa\nbbbb\n".to_string(), "cc\n".to_string()]);
    }

    #[test]
    fn test_limit_counts_characters_not_bytes() {
        // "→" is three bytes but one character
        let blocks = pack_lines(["→→→\n", "→→→\n"], 8);
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_oversized_line_gets_its_own_blocks() {
        let long = format!("{}\n", "x".repeat(25));
        let lines = vec!["head\n".to_string(), long.clone(), "tail\n".to_string()];

        let blocks = pack_lines(&lines, 10);

        assert!(blocks.iter().all(|b| char_len(b) <= 10));
        assert_eq!(blocks.concat(), lines.concat());
        assert_eq!(blocks[0], "head\n");
        assert_eq!(blocks.last().map(String::as_str), Some("tail\n"));
    }

    #[test]
    fn test_empty_input() {
        assert!(pack_lines(Vec::<String>::new(), 10).is_empty());
    }
}
